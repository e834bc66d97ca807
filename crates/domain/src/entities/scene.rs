//! Scene - one unit of content within a manifest
//!
//! A scene is either a dialogue sequence or a quiz. On the wire the variant
//! is selected by the `scene_type` discriminator (`"dialogue"` or `"quiz"`).

use serde::{Deserialize, Serialize};

use super::{DialogueScene, QuizScene};
use crate::ids::SceneId;

/// Discriminator values accepted for `scene_type`
pub const SCENE_TYPES: &[&str] = &["dialogue", "quiz"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scene_type", rename_all = "snake_case")]
pub enum Scene {
    Dialogue(DialogueScene),
    Quiz(QuizScene),
}

impl Scene {
    pub fn id(&self) -> &SceneId {
        match self {
            Scene::Dialogue(s) => &s.scene_id,
            Scene::Quiz(s) => &s.scene_id,
        }
    }

    /// Scene duration in seconds
    pub fn duration(&self) -> u32 {
        match self {
            Scene::Dialogue(s) => s.scene_duration,
            Scene::Quiz(s) => s.scene_duration,
        }
    }

    pub fn as_quiz(&self) -> Option<&QuizScene> {
        match self {
            Scene::Quiz(s) => Some(s),
            Scene::Dialogue(_) => None,
        }
    }

    pub fn as_dialogue(&self) -> Option<&DialogueScene> {
        match self {
            Scene::Dialogue(s) => Some(s),
            Scene::Quiz(_) => None,
        }
    }
}
