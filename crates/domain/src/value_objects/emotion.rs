use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::WireEnum;
use crate::error::DomainError;

/// Emotion a speaker expresses on a single dialogue turn.
///
/// Drives the avatar expression in the rendering surface; the validator only
/// checks that the value belongs to this vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Neutral,
    Happy,
    Sad,
    Angry,
    Surprised,
    Concerned,
    Confused,
}

impl WireEnum for Emotion {
    fn all() -> &'static [Self] {
        &[
            Emotion::Neutral,
            Emotion::Happy,
            Emotion::Sad,
            Emotion::Angry,
            Emotion::Surprised,
            Emotion::Concerned,
            Emotion::Confused,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Emotion::Neutral => "neutral",
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Surprised => "surprised",
            Emotion::Concerned => "concerned",
            Emotion::Confused => "confused",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| DomainError::parse(format!("Unknown emotion: {}", s)))
    }
}
