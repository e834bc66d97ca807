//! GameGate Engine library.
//!
//! Validates machine-generated game manifests before they enter a
//! deployment pipeline.
//!
//! ## Structure
//!
//! - `schema/` - Structural decoding of raw JSON into the typed manifest
//! - `rules` - Cross-field business rules and warnings
//! - `sanitizer` - Removal of executable markup from free text
//! - `formatter` - Issue messages and recovery suggestions
//! - `stats` - Running validation statistics
//! - `validator` - The `ContentValidator` entry point

pub mod formatter;
pub mod result;
pub mod rules;
pub mod sanitizer;
pub mod schema;
pub mod settings;
pub mod stats;
pub mod validator;

/// Test fixtures module for integration testing.
#[cfg(test)]
pub mod test_fixtures;

/// E2E tests over the full validation pipeline.
#[cfg(test)]
mod e2e_tests;

pub use result::{ValidationErrorKind, ValidationResult};
pub use settings::{SettingsError, ValidatorSettings};
pub use stats::{ErrorFrequency, ValidationStats};
pub use validator::ContentValidator;
