use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::WireEnum;
use crate::error::DomainError;

/// Setting a dialogue scene is adapted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CulturalContext {
    Urban,
    Rural,
    Coastal,
    Northern,
}

impl WireEnum for CulturalContext {
    fn all() -> &'static [Self] {
        &[Self::Urban, Self::Rural, Self::Coastal, Self::Northern]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Urban => "urban",
            Self::Rural => "rural",
            Self::Coastal => "coastal",
            Self::Northern => "northern",
        }
    }
}

impl fmt::Display for CulturalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CulturalContext {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s)
            .ok_or_else(|| DomainError::parse(format!("Unknown cultural context: {}", s)))
    }
}
