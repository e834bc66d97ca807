//! Structural validation of raw manifest documents.
//!
//! `decode_manifest` walks an untyped JSON value and either produces a typed
//! [`GameManifest`] or the full list of structural issues found.

mod decoder;
mod issue;
mod manifest;

pub use issue::{json_type_name, IssueKind, IssuePath, Measure, PathSegment, SchemaIssue};

use serde_json::Value;

use decoder::Decoder;
use gamegate_domain::GameManifest;

/// Decode `input` into a typed manifest.
///
/// # Errors
///
/// Returns every structural issue found, in document order, capped at
/// `max_issues`. The list is never empty on error.
pub fn decode_manifest(input: &Value, max_issues: usize) -> Result<GameManifest, Vec<SchemaIssue>> {
    let mut decoder = Decoder::new(max_issues);
    let manifest = decoder.manifest(input);
    decoder.finish(manifest)
}
