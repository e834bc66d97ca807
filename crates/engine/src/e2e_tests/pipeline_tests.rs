//! Scenario tests: one document in, one result out.

use std::time::{Duration, Instant};

use serde_json::{json, Value};

use super::{assert_error_contains, validate};
use crate::formatter::GENERIC_SUGGESTION;
use crate::test_fixtures::{
    dialogue_scene, load_fixture, manifest_with_scenes, quiz_question, quiz_scene, valid_manifest,
};
use crate::{ContentValidator, ValidationErrorKind, ValidatorSettings};

#[test]
fn test_valid_manifest_round_trips_through_sanitizer() {
    let doc = valid_manifest();
    let result = validate(&doc);

    assert!(result.success, "{:?}", result.errors);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
    assert_eq!(result.suggestion, None);

    let sanitized = serde_json::to_value(result.sanitized_content.unwrap()).unwrap();
    assert_eq!(sanitized, doc);
}

#[test]
fn test_duplicate_intro_scene() {
    let doc = manifest_with_scenes(
        vec![dialogue_scene("intro", 150), dialogue_scene("intro", 150)],
        300,
    );
    let result = validate(&doc);

    assert!(!result.success);
    assert_eq!(result.errors, vec!["Duplicate scene ID: intro"]);
    assert_eq!(result.error_kind, Some(ValidationErrorKind::BusinessRule));
    assert_eq!(result.suggestion, None);
    assert!(result.sanitized_content.is_none());
}

#[test]
fn test_all_options_false() {
    let mut quiz = quiz_scene("check", 300);
    for option in quiz["questions"][0]["options"].as_array_mut().unwrap() {
        option["is_correct"] = json!(false);
    }
    let result = validate(&manifest_with_scenes(vec![quiz], 300));

    assert!(!result.success);
    assert_error_contains(&result, "has no correct answer");
}

#[test]
fn test_total_below_single_scene() {
    let result = validate(&manifest_with_scenes(vec![dialogue_scene("intro", 300)], 120));

    assert!(!result.success);
    assert_error_contains(&result, "Total duration mismatch");
    assert_eq!(
        result.errors,
        vec![
            "total_duration: Number must be greater than or equal to 300",
            "Total duration mismatch: declared 120s, scenes sum to 300s",
        ]
    );
    assert_eq!(
        result.suggestion.as_deref(),
        Some("Value at total_duration is too small. Minimum: 300")
    );
}

#[test]
fn test_total_mismatch_within_range() {
    let result = validate(&manifest_with_scenes(vec![dialogue_scene("intro", 300)], 1000));
    assert_eq!(
        result.errors,
        vec!["Total duration mismatch: declared 1000s, scenes sum to 300s"]
    );
    assert_eq!(result.error_kind, Some(ValidationErrorKind::BusinessRule));
}

#[test]
fn test_several_rule_violations_reported_together() {
    let mut quiz = quiz_scene("intro", 120);
    quiz["questions"][0]["options"][0]["is_correct"] = json!(false);
    let result = validate(&manifest_with_scenes(
        vec![dialogue_scene("intro", 300), quiz],
        2000,
    ));

    assert_eq!(
        result.errors,
        vec![
            "Question q1 has no correct answer",
            "Duplicate scene ID: intro",
            "Total duration mismatch: declared 2000s, scenes sum to 420s",
        ]
    );
}

#[test]
fn test_warnings_accompany_success() {
    let mut quiz = quiz_scene("long-quiz", 330);
    let questions: Vec<Value> = (1..=25).map(|i| quiz_question(&format!("q{i}"))).collect();
    quiz["questions"] = json!(questions);
    let result = validate(&manifest_with_scenes(
        vec![dialogue_scene("warmup", 40), quiz],
        370,
    ));

    assert!(result.success, "{:?}", result.errors);
    assert_eq!(
        result.warnings,
        vec![
            "Scene warmup is very short (40s)",
            "Quiz scene long-quiz has 25 questions; consider splitting it",
        ]
    );
}

#[test]
fn test_markup_is_stripped_from_every_text_field() {
    let mut doc = valid_manifest();
    doc["title"] = json!("Housing <script>fetch('//evil')</script>support");
    doc["scenes"][0]["dialogue"][0]["text"] = json!("Click <a href=\"javascript:steal()\">here</a>");
    doc["scenes"][0]["characters"][0]["avatar_description"] =
        json!("<img src=x onerror=alert(1)> smiling");
    doc["scenes"][1]["questions"][0]["options"][1]["feedback"] =
        json!("<iframe src=\"//ads\"></iframe>Not quite.");
    doc["cultural_adaptation"]["terminology"]["benefit office"] = json!("  Kela  ");

    let result = validate(&doc);
    assert!(result.success, "{:?}", result.errors);
    let clean = serde_json::to_value(result.sanitized_content.unwrap()).unwrap();

    assert_eq!(clean["title"], "Housing support");
    assert_eq!(
        clean["scenes"][0]["dialogue"][0]["text"],
        "Click <a href=\"steal()\">here</a>"
    );
    assert_eq!(
        clean["scenes"][0]["characters"][0]["avatar_description"],
        "<img src=x alert(1)> smiling"
    );
    assert_eq!(
        clean["scenes"][1]["questions"][0]["options"][1]["feedback"],
        "Not quite."
    );
    assert_eq!(clean["cultural_adaptation"]["terminology"]["benefit office"], "Kela");
    // Identifiers and enums are never rewritten.
    assert_eq!(clean["scenes"][0]["scene_id"], "intro");
    assert_eq!(clean["language"], "fi");
}

#[test]
fn test_fields_emptied_by_sanitizer_are_rejected() {
    let mut doc = valid_manifest();
    doc["title"] = json!("<script>alert(1)</script>");
    doc["scenes"][0]["dialogue"][0]["text"] = json!("  <iframe src=\"//ads\"></iframe> ");

    let validator = ContentValidator::default();
    let result = validator.validate(&doc);

    assert!(!result.success);
    assert!(result.sanitized_content.is_none());
    assert_eq!(result.error_kind, Some(ValidationErrorKind::Structural));
    assert_eq!(
        result.errors,
        vec![
            "title: String must contain at least 1 character(s)",
            "scenes.0.dialogue.0.text: String must contain at least 1 character(s)",
        ]
    );
    assert_eq!(
        result.suggestion.as_deref(),
        Some("Value at title is too small. Minimum: 1")
    );
    assert_eq!(validator.stats().failed_validations, 1);
}

#[test]
fn test_accepted_content_validates_again() {
    let mut doc = valid_manifest();
    doc["title"] = json!("Housing <script>x</script>support");
    let first = validate(&doc);
    assert!(first.success, "{:?}", first.errors);

    let again = validate(&serde_json::to_value(first.sanitized_content.unwrap()).unwrap());
    assert!(again.success, "{:?}", again.errors);
}

#[test]
fn test_unicode_survives_pipeline() {
    let mut doc = valid_manifest();
    let text = "Hyvää päivää! Välkommen! مرحبا 👋🏽 e\u{301} \u{200F}rtl\u{200E}";
    doc["scenes"][0]["dialogue"][1]["text"] = json!(text);

    let result = validate(&doc);
    let clean = serde_json::to_value(result.sanitized_content.unwrap()).unwrap();
    assert_eq!(clean["scenes"][0]["dialogue"][1]["text"], text);
}

#[test]
fn test_structural_error_paths_and_suggestion() {
    let mut doc = valid_manifest();
    doc["scenes"][1]["questions"][0]["question_text"] = json!("Too short");
    doc["scenes"][0]["characters"][1]["character_id"] = json!("bad id");

    let result = validate(&doc);
    assert_eq!(result.error_kind, Some(ValidationErrorKind::Structural));
    assert_eq!(
        result.errors,
        vec![
            "scenes.0.characters.1.character_id: Invalid identifier: only letters, numbers, hyphens and underscores are allowed",
            "scenes.1.questions.0.question_text: String must contain at least 10 character(s)",
        ]
    );
    assert_eq!(result.suggestion.as_deref(), Some(GENERIC_SUGGESTION));
}

#[test]
fn test_fuzz_inputs_fail_cleanly() {
    let validator = ContentValidator::default();
    let inputs = [
        json!(null),
        json!(""),
        json!("{}"),
        json!(123),
        json!([]),
        json!([valid_manifest()]),
        json!("2024-01-01T00:00:00Z"),
        json!({}),
        json!(f64::NAN),
    ];
    for input in &inputs {
        let result = validator.validate(input);
        assert!(!result.success, "{input} should fail");
        assert!(!result.errors.is_empty());
        assert!(result.suggestion.is_some());
    }
    for text in ["", "   ", "NaN", "Infinity", "-Infinity", "{\"total_duration\": NaN}", "undefined"] {
        let result = validator.validate_str(text);
        assert!(!result.success, "{text:?} should fail");
        assert!(!result.errors.is_empty());
    }
    let failed = inputs.len() as u64 + 7;
    assert_eq!(validator.stats().failed_validations, failed);
}

#[test]
fn test_non_finite_floats_in_serializable_input() {
    #[derive(serde::Serialize)]
    struct Partial {
        game_id: &'static str,
        total_duration: f64,
    }

    let result = ContentValidator::default().validate_serializable(&Partial {
        game_id: "x",
        total_duration: f64::INFINITY,
    });
    assert!(!result.success);
    assert_error_contains(&result, "total_duration: Expected number, received null");
}

#[test]
fn test_deeply_nested_text_is_rejected() {
    let text = "[".repeat(10_000);
    let result = ContentValidator::default().validate_str(&text);
    assert!(!result.success);
    assert_error_contains(&result, "Malformed input");
}

#[test]
fn test_issue_cap_limits_output() {
    let settings = ValidatorSettings {
        max_reported_issues: 3,
        ..Default::default()
    };
    let validator = ContentValidator::new(settings).unwrap();
    let result = validator.validate(&json!({"scenes": [1, 2, 3, 4, 5]}));
    assert_eq!(result.errors.len(), 3);
}

#[test]
fn test_stats_across_runs() {
    let validator = ContentValidator::default();
    let duplicate = manifest_with_scenes(
        vec![dialogue_scene("intro", 150), dialogue_scene("intro", 150)],
        300,
    );

    for _ in 0..3 {
        assert!(validator.validate(&valid_manifest()).success);
    }
    validator.validate(&duplicate);
    validator.validate(&duplicate);
    validator.validate(&json!(null));

    let stats = validator.stats();
    assert_eq!(stats.total_validations, 6);
    assert_eq!(stats.successful_validations, 3);
    assert_eq!(stats.failed_validations, 3);
    assert!((stats.success_rate - 50.0).abs() < 1e-9);
    assert_eq!(stats.top_errors[0].message, "Duplicate scene ID: intro");
    assert_eq!(stats.top_errors[0].count, 2);

    validator.reset_stats();
    assert_eq!(validator.stats().total_validations, 0);
}

#[test]
fn test_fixture_deserializes_directly() {
    let manifest: gamegate_domain::GameManifest = load_fixture("manifests/housing_support.json");
    assert_eq!(manifest.scene_duration_sum(), 420);
}

/// Roughly 10 MB of dialogue text spread over the maximum number of scenes.
fn large_manifest() -> Value {
    let paragraph = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(40);
    let mut scenes = Vec::with_capacity(100);
    for i in 0..100 {
        let mut scene = dialogue_scene(&format!("scene-{i}"), 60);
        let turn = scene["dialogue"][0].clone();
        let turns: Vec<Value> = (0..45)
            .map(|_| {
                let mut t = turn.clone();
                t["text"] = json!(paragraph);
                t
            })
            .collect();
        scene["dialogue"] = json!(turns);
        scenes.push(scene);
    }
    manifest_with_scenes(scenes, 6000)
}

#[test]
fn test_large_document_is_linear() {
    let doc = large_manifest();
    let started = Instant::now();
    let result = validate(&doc);
    let elapsed = started.elapsed();

    assert!(result.success, "{:?}", result.errors);
    assert!(elapsed < Duration::from_secs(10), "took {elapsed:?}");
}
