//! GameManifest - root of a machine-generated training unit
//!
//! A manifest bundles metadata (title, audience, objectives, language) with an
//! ordered list of scenes. The declared `total_duration` is expected to match
//! the sum of scene durations; the engine enforces this with a tolerance band.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{QuizQuestion, Scene};
use crate::ids::GameId;
use crate::value_objects::{DifficultyLevel, Language, SemanticVersion};

/// Bounds on the manifest's total duration, in seconds
pub const TOTAL_DURATION_RANGE: (u32, u32) = (300, 7200);

/// Bounds on the number of scenes in a manifest
pub const SCENE_COUNT_RANGE: (usize, usize) = (1, 100);

/// Bounds on the number of manifest-level learning objectives
pub const LEARNING_OBJECTIVE_COUNT_RANGE: (usize, usize) = (1, 20);

/// Localisation metadata for a specific municipality or region
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CulturalAdaptation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Local replacements for generic terms (e.g., "benefit office" -> "Kela")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminology: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameManifest {
    pub game_id: GameId,
    pub version: SemanticVersion,
    pub title: String,
    pub description: String,
    pub target_audience: String,
    pub learning_objectives: Vec<String>,
    pub scenes: Vec<Scene>,
    /// Declared duration of the whole unit, in seconds
    pub total_duration: u32,
    pub difficulty_level: DifficultyLevel,
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_adaptation: Option<CulturalAdaptation>,
}

impl GameManifest {
    /// Sum of all scene durations, in seconds
    pub fn scene_duration_sum(&self) -> u64 {
        self.scenes.iter().map(|s| u64::from(s.duration())).sum()
    }

    /// Absolute difference between the declared total and the scene sum
    pub fn duration_drift(&self) -> u64 {
        u64::from(self.total_duration).abs_diff(self.scene_duration_sum())
    }

    /// Every quiz question in scene order
    pub fn quiz_questions(&self) -> impl Iterator<Item = &QuizQuestion> {
        self.scenes
            .iter()
            .filter_map(Scene::as_quiz)
            .flat_map(|quiz| quiz.questions.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "game_id": "housing-101",
            "version": "1.0.0",
            "title": "Applying for housing support",
            "description": "Walk through an appointment at the social office.",
            "target_audience": "New residents",
            "learning_objectives": ["Know which documents to bring"],
            "total_duration": 420,
            "difficulty_level": "beginner",
            "language": "fi",
            "scenes": [
                {
                    "scene_type": "dialogue",
                    "scene_id": "intro",
                    "title": "At the front desk",
                    "characters": [
                        {"character_id": "clerk", "name": "Aino", "role": "Clerk"}
                    ],
                    "dialogue": [
                        {"speaker": "Aino", "character_id": "clerk", "text": "Hyvää päivää!"}
                    ],
                    "scene_duration": 300
                },
                {
                    "scene_type": "quiz",
                    "scene_id": "check",
                    "title": "Quick check",
                    "questions": [{
                        "question_id": "q1",
                        "question_type": "true_false",
                        "question_text": "You need an ID card to apply.",
                        "options": [
                            {"option_id": "t", "text": "True", "is_correct": true},
                            {"option_id": "f", "text": "False", "is_correct": false}
                        ]
                    }],
                    "passing_score": 100,
                    "scene_duration": 120
                }
            ]
        })
    }

    #[test]
    fn test_deserializes_tagged_scenes() {
        let manifest: GameManifest = serde_json::from_value(sample()).unwrap();
        assert_eq!(manifest.scenes.len(), 2);
        assert!(manifest.scenes[0].as_dialogue().is_some());
        assert!(manifest.scenes[1].as_quiz().is_some());
        assert_eq!(manifest.scenes[1].id().as_str(), "check");
        assert_eq!(manifest.quiz_questions().count(), 1);
    }

    #[test]
    fn test_duration_helpers() {
        let mut manifest: GameManifest = serde_json::from_value(sample()).unwrap();
        assert_eq!(manifest.scene_duration_sum(), 420);
        assert_eq!(manifest.duration_drift(), 0);

        manifest.total_duration = 300;
        assert_eq!(manifest.duration_drift(), 120);
    }

    #[test]
    fn test_serializes_scene_type_tag() {
        let manifest: GameManifest = serde_json::from_value(sample()).unwrap();
        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value["scenes"][0]["scene_type"], "dialogue");
        assert_eq!(value["scenes"][1]["scene_type"], "quiz");
        assert!(value.get("cultural_adaptation").is_none());
    }
}
