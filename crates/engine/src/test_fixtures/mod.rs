//! Test fixtures loader for JSON manifest files and manifest builders.
//!
//! Fixtures live in the crate's `test_data/` directory. The builders start
//! from the housing support fixture and adjust the parts a test cares about,
//! so every other field stays valid.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{dialogue_scene, manifest_with_scenes};
//!
//! let doc = manifest_with_scenes(vec![dialogue_scene("intro", 300)], 300);
//! ```

use std::path::PathBuf;

use serde_json::{json, Value};

/// Load a JSON fixture from the test_data/ directory.
///
/// # Panics
///
/// Panics if the fixture file cannot be read or parsed.
pub fn load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> T {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path);
    let content = std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

/// A complete manifest that passes every check: one 300s dialogue scene
/// (`intro`) and one 120s quiz scene (`check`), 420s in total.
pub fn valid_manifest() -> Value {
    load_fixture("manifests/housing_support.json")
}

/// A dialogue scene with two characters and two turns.
pub fn dialogue_scene(scene_id: &str, duration: u32) -> Value {
    let mut scene = valid_manifest()["scenes"][0].clone();
    scene["scene_id"] = json!(scene_id);
    scene["scene_duration"] = json!(duration);
    scene
}

/// A quiz scene holding a single question `q1`.
pub fn quiz_scene(scene_id: &str, duration: u32) -> Value {
    let mut scene = valid_manifest()["scenes"][1].clone();
    scene["scene_id"] = json!(scene_id);
    scene["scene_duration"] = json!(duration);
    scene
}

/// A multiple choice question with options `a` (correct), `b` and `c`.
pub fn quiz_question(question_id: &str) -> Value {
    let mut question = valid_manifest()["scenes"][1]["questions"][0].clone();
    question["question_id"] = json!(question_id);
    question
}

/// The valid manifest with its scenes and declared total replaced.
pub fn manifest_with_scenes(scenes: Vec<Value>, total_duration: u32) -> Value {
    let mut doc = valid_manifest();
    doc["scenes"] = Value::Array(scenes);
    doc["total_duration"] = json!(total_duration);
    doc
}
