use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::WireEnum;
use crate::error::DomainError;

/// Intended difficulty of a training unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl WireEnum for DifficultyLevel {
    fn all() -> &'static [Self] {
        &[Self::Beginner, Self::Intermediate, Self::Advanced]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DifficultyLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s)
            .ok_or_else(|| DomainError::parse(format!("Unknown difficulty level: {}", s)))
    }
}
