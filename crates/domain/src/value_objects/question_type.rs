use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::WireEnum;
use crate::error::DomainError;

/// How a quiz question is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Exactly one option is picked
    MultipleChoice,
    /// Two options, true and false
    TrueFalse,
    /// Any number of options may be picked
    MultiSelect,
}

impl WireEnum for QuestionType {
    fn all() -> &'static [Self] {
        &[
            QuestionType::MultipleChoice,
            QuestionType::TrueFalse,
            QuestionType::MultiSelect,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::TrueFalse => "true_false",
            QuestionType::MultiSelect => "multi_select",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s)
            .ok_or_else(|| DomainError::parse(format!("Unknown question type: {}", s)))
    }
}
