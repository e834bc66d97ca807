//! GameGate Domain - the typed game manifest model.
//!
//! A game manifest is the document an upstream content generator emits for
//! one interactive training unit: metadata plus an ordered list of dialogue
//! and quiz scenes. This crate holds the typed form of that document. It
//! performs no I/O and does no logging; the structural decoder and business
//! rules live in `gamegate-engine`.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    Character, CulturalAdaptation, DialogueScene, DialogueTurn, GameManifest, QuizOption,
    QuizQuestion, QuizScene, Scene,
};
pub use error::DomainError;
pub use ids::{is_valid_token, CharacterId, GameId, OptionId, QuestionId, SceneId, MAX_TOKEN_LENGTH};
pub use value_objects::{
    CulturalContext, DifficultyLevel, Emotion, Language, QuestionType, SemanticVersion, WireEnum,
};
