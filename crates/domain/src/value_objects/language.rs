//! Content language of a manifest.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::WireEnum;
use crate::error::DomainError;

/// Language the manifest text is written in (ISO 639-1 code on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "fi")]
    Finnish,
    #[serde(rename = "sv")]
    Swedish,
    #[serde(rename = "en")]
    English,
}

impl WireEnum for Language {
    fn all() -> &'static [Self] {
        &[Language::Finnish, Language::Swedish, Language::English]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Language::Finnish => "fi",
            Language::Swedish => "sv",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| DomainError::parse(format!("Unknown language: {}", s)))
    }
}
