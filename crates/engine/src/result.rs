//! The outcome of validating one manifest, as returned to callers.

use serde::{Deserialize, Serialize};

use gamegate_domain::GameManifest;

/// Which stage rejected a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// The document does not have the manifest shape
    Structural,
    /// The manifest is well-formed but internally inconsistent
    BusinessRule,
    /// The pipeline itself failed
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub success: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// The sanitized manifest; present only when `success` is true
    pub sanitized_content: Option<GameManifest>,
    /// Recovery hint for structural failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ValidationErrorKind>,
}

impl ValidationResult {
    pub fn accepted(manifest: GameManifest, warnings: Vec<String>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            sanitized_content: Some(manifest),
            suggestion: None,
            error_kind: None,
        }
    }

    pub fn structural(errors: Vec<String>, suggestion: String) -> Self {
        Self::rejected(errors, Some(suggestion), ValidationErrorKind::Structural)
    }

    pub fn business_rule(errors: Vec<String>) -> Self {
        Self::rejected(errors, None, ValidationErrorKind::BusinessRule)
    }

    /// A failure of the pipeline itself, reported with a single message
    pub fn unexpected(detail: &str) -> Self {
        Self::rejected(
            vec![format!("Unexpected validation error: {}", detail)],
            None,
            ValidationErrorKind::Unknown,
        )
    }

    /// An input that never reached the pipeline because it could not be read
    pub fn unreadable(detail: &str) -> Self {
        Self::rejected(
            vec![format!("Could not read input: {}", detail)],
            None,
            ValidationErrorKind::Unknown,
        )
    }

    fn rejected(
        errors: Vec<String>,
        suggestion: Option<String>,
        kind: ValidationErrorKind,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings: Vec::new(),
            sanitized_content: None,
            suggestion,
            error_kind: Some(kind),
        }
    }
}
