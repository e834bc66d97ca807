//! Semantic version of a manifest (`major.minor.patch`)
//!
//! Only the plain three-component form is accepted. Pre-release and build
//! suffixes, signs and whitespace are rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A parsed `major.minor.patch` version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemanticVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

fn parse_component(part: &str, input: &str) -> Result<u64, DomainError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::parse(format!(
            "Invalid semantic version '{}': expected major.minor.patch",
            input
        )));
    }
    part.parse::<u64>().map_err(|_| {
        DomainError::parse(format!(
            "Invalid semantic version '{}': component out of range",
            input
        ))
    })
}

impl FromStr for SemanticVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(DomainError::parse(format!(
                "Invalid semantic version '{}': expected major.minor.patch",
                s
            )));
        }
        Ok(Self {
            major: parse_component(parts[0], s)?,
            minor: parse_component(parts[1], s)?,
            patch: parse_component(parts[2], s)?,
        })
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl TryFrom<String> for SemanticVersion {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SemanticVersion> for String {
    fn from(v: SemanticVersion) -> String {
        v.to_string()
    }
}
