//! End-to-end tests over the full validation pipeline.
//!
//! These drive `ContentValidator` with complete documents the way a
//! deployment pipeline would: JSON values, raw text, and serializable values.
//!
//! # Running
//!
//! ```bash
//! cargo test -p gamegate-engine --lib e2e_tests
//! ```

mod pipeline_tests;

use serde_json::Value;

use crate::{ContentValidator, ValidationResult};

/// Validate with default settings and return the result.
pub fn validate(doc: &Value) -> ValidationResult {
    ContentValidator::default().validate(doc)
}

/// Assert that some error message contains `needle`.
pub fn assert_error_contains(result: &ValidationResult, needle: &str) {
    assert!(
        result.errors.iter().any(|e| e.contains(needle)),
        "expected an error containing {needle:?}, got {:?}",
        result.errors
    );
}
