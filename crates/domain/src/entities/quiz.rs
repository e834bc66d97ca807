//! Quiz scenes - scored question sets

use serde::{Deserialize, Serialize};

use crate::ids::{OptionId, QuestionId, SceneId};
use crate::value_objects::QuestionType;

/// Bounds on a quiz scene's duration, in seconds
pub const QUIZ_DURATION_RANGE: (u32, u32) = (60, 3600);

/// One answer option of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub option_id: OptionId,
    pub text: String,
    pub is_correct: bool,
    /// Shown after the option is picked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// A single quiz question with its options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question_id: QuestionId,
    pub question_type: QuestionType,
    pub question_text: String,
    pub options: Vec<QuizOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Learning objective this question assesses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_objective_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    /// Seconds the player has to answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
}

impl QuizQuestion {
    /// Returns true if at least one option is marked correct
    pub fn has_correct_option(&self) -> bool {
        self.options.iter().any(|o| o.is_correct)
    }
}

/// A scored set of questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScene {
    pub scene_id: SceneId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<QuizQuestion>,
    /// Percentage of points required to pass (0-100)
    pub passing_score: u32,
    pub scene_duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immediate_feedback: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_retry: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: &str, correct: bool) -> QuizOption {
        QuizOption {
            option_id: OptionId::new(id).unwrap(),
            text: format!("Option {id}"),
            is_correct: correct,
            feedback: None,
        }
    }

    fn question(options: Vec<QuizOption>) -> QuizQuestion {
        QuizQuestion {
            question_id: QuestionId::new("q1").unwrap(),
            question_type: QuestionType::MultipleChoice,
            question_text: "Which office handles housing benefits?".to_string(),
            options,
            explanation: None,
            learning_objective_ref: None,
            points: None,
            time_limit: None,
        }
    }

    #[test]
    fn test_has_correct_option() {
        let answerable = question(vec![option("a", false), option("b", true)]);
        assert!(answerable.has_correct_option());

        let unanswerable = question(vec![option("a", false), option("b", false)]);
        assert!(!unanswerable.has_correct_option());
    }
}
