//! Unified error types for the domain layer
//!
//! Value objects in this crate are valid by construction; every fallible
//! constructor returns a [`DomainError`] describing the rejected input.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identifier outside the permitted token alphabet
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format:
    /// - Unknown enum variant names
    /// - Malformed version strings
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for Language {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "fi" => Ok(Self::Finnish),
    ///             _ => Err(DomainError::parse(format!("Unknown language: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
