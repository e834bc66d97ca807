//! Dialogue scenes - scripted conversations between characters

use serde::{Deserialize, Serialize};

use super::Character;
use crate::ids::{CharacterId, SceneId};
use crate::value_objects::{CulturalContext, Emotion};

/// Bounds on a dialogue scene's duration, in seconds
pub const DIALOGUE_DURATION_RANGE: (u32, u32) = (30, 1800);

/// Maximum length of a single dialogue line
pub const MAX_DIALOGUE_TEXT_LENGTH: usize = 5000;

/// A single line of dialogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueTurn {
    /// Label shown above the line
    pub speaker: String,
    /// The character delivering the line; should match a character of the same scene
    pub character_id: CharacterId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
    /// Offset from the start of the scene, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<f64>,
}

/// A scripted conversation between one or more characters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueScene {
    pub scene_id: SceneId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub characters: Vec<Character>,
    pub dialogue: Vec<DialogueTurn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_objectives: Option<Vec<String>>,
    pub scene_duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_context: Option<CulturalContext>,
}

impl DialogueScene {
    /// Look up a character declared in this scene
    pub fn character(&self, id: &CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| &c.character_id == id)
    }

    /// Turns whose `character_id` does not name a character of this scene,
    /// paired with their zero-based position.
    pub fn unknown_speakers(&self) -> Vec<(usize, &DialogueTurn)> {
        self.dialogue
            .iter()
            .enumerate()
            .filter(|(_, turn)| self.character(&turn.character_id).is_none())
            .collect()
    }
}
