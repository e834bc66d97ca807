//! Entities - the nodes of a game manifest document

mod character;
mod dialogue;
mod manifest;
mod quiz;
mod scene;

pub use character::{
    Character, MAX_AVATAR_DESCRIPTION_LENGTH, MAX_CHARACTER_NAME_LENGTH, MAX_PERSONALITY_TRAITS,
};
pub use dialogue::{DialogueScene, DialogueTurn, DIALOGUE_DURATION_RANGE, MAX_DIALOGUE_TEXT_LENGTH};
pub use manifest::{
    CulturalAdaptation, GameManifest, LEARNING_OBJECTIVE_COUNT_RANGE, SCENE_COUNT_RANGE,
    TOTAL_DURATION_RANGE,
};
pub use quiz::{QuizOption, QuizQuestion, QuizScene, QUIZ_DURATION_RANGE};
pub use scene::{Scene, SCENE_TYPES};
