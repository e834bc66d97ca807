//! Human-readable rendering of structural issues and a recovery hint.

use crate::schema::{IssueKind, SchemaIssue};

/// Fallback hint when the first issue has no specific advice
pub const GENERIC_SUGGESTION: &str =
    "Please check the game manifest schema documentation for the correct format";

/// Render each issue as `"<path>: <message>"`.
pub fn format_issues(issues: &[SchemaIssue]) -> Vec<String> {
    issues.iter().map(ToString::to_string).collect()
}

/// Derive one recovery hint from the first issue.
pub fn recovery_suggestion(issues: &[SchemaIssue]) -> String {
    let Some(first) = issues.first() else {
        return GENERIC_SUGGESTION.to_string();
    };
    match &first.kind {
        IssueKind::InvalidType { expected, received } => {
            format!("Expected {} but got {} at {}", expected, received, first.path)
        }
        IssueKind::TooSmall { minimum, .. } => {
            format!("Value at {} is too small. Minimum: {}", first.path, minimum)
        }
        IssueKind::TooBig { maximum, .. } => {
            format!("Value at {} is too large. Maximum: {}", first.path, maximum)
        }
        _ => GENERIC_SUGGESTION.to_string(),
    }
}
