//! Business rules over a structurally valid manifest.
//!
//! These checks relate fields to each other and cannot be expressed as
//! per-field shape constraints. Errors reject the manifest; warnings are
//! returned alongside an accepted manifest.

use std::collections::HashSet;
use std::fmt::Display;

use serde_json::Value;

use gamegate_domain::{DialogueScene, GameManifest, QuizQuestion, QuizScene, Scene};

use crate::settings::ValidatorSettings;

/// Outcome of the business rule pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl RuleReport {
    /// True when no rule was violated. Warnings do not count.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Run every business rule against `manifest`.
pub fn evaluate(manifest: &GameManifest, settings: &ValidatorSettings) -> RuleReport {
    let mut report = RuleReport::default();

    check_answerability(manifest, &mut report);
    check_scene_ids(manifest, &mut report);
    check_total_duration(manifest, settings, &mut report);
    if settings.enforce_character_references {
        for dialogue in manifest.scenes.iter().filter_map(Scene::as_dialogue) {
            check_character_references(dialogue, &mut report);
        }
    }
    for quiz in manifest.scenes.iter().filter_map(Scene::as_quiz) {
        check_quiz_ids(quiz, &mut report);
    }
    collect_warnings(manifest, settings, &mut report);

    tracing::debug!(
        game_id = %manifest.game_id,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Business rules evaluated"
    );
    report
}

fn check_answerability(manifest: &GameManifest, report: &mut RuleReport) {
    for question in manifest.quiz_questions() {
        if !question.has_correct_option() {
            report.errors.push(format!(
                "Question {} has no correct answer",
                question.question_id
            ));
        }
    }
}

fn check_scene_ids(manifest: &GameManifest, report: &mut RuleReport) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for scene in &manifest.scenes {
        let id = scene.id();
        if !seen.insert(id) && reported.insert(id) {
            report.errors.push(format!("Duplicate scene ID: {}", id));
        }
    }
}

fn check_total_duration(
    manifest: &GameManifest,
    settings: &ValidatorSettings,
    report: &mut RuleReport,
) {
    if manifest.duration_drift() > u64::from(settings.duration_tolerance_secs) {
        report.errors.push(duration_mismatch(
            manifest.total_duration,
            manifest.scene_duration_sum(),
        ));
    }
}

fn duration_mismatch(declared: impl Display, sum: impl Display) -> String {
    format!(
        "Total duration mismatch: declared {}s, scenes sum to {}s",
        declared, sum
    )
}

/// Duration consistency over an undecoded document.
///
/// Applies when structural decoding failed but `total_duration` and every
/// `scene_duration` are still numbers, so a declared total outside its own
/// range is reported together with the mismatch it causes.
pub fn raw_duration_mismatch(input: &Value, tolerance_secs: u32) -> Option<String> {
    let declared = input.get("total_duration")?.as_f64()?;
    let sum = input
        .get("scenes")?
        .as_array()?
        .iter()
        .map(|scene| scene.get("scene_duration").and_then(Value::as_f64))
        .sum::<Option<f64>>()?;
    if !sum.is_finite() {
        return None;
    }
    ((declared - sum).abs() > f64::from(tolerance_secs)).then(|| duration_mismatch(declared, sum))
}

fn check_character_references(scene: &DialogueScene, report: &mut RuleReport) {
    for (index, turn) in scene.unknown_speakers() {
        report.errors.push(format!(
            "Dialogue turn {} in scene {} references unknown character {}",
            index + 1,
            scene.scene_id,
            turn.character_id
        ));
    }
}

fn check_quiz_ids(quiz: &QuizScene, report: &mut RuleReport) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for question in &quiz.questions {
        let id = &question.question_id;
        if !seen.insert(id) && reported.insert(id) {
            report.errors.push(format!(
                "Duplicate question ID in scene {}: {}",
                quiz.scene_id, id
            ));
        }
        check_option_ids(question, report);
    }
}

fn check_option_ids(question: &QuizQuestion, report: &mut RuleReport) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for option in &question.options {
        let id = &option.option_id;
        if !seen.insert(id) && reported.insert(id) {
            report.errors.push(format!(
                "Duplicate option ID in question {}: {}",
                question.question_id, id
            ));
        }
    }
}

fn collect_warnings(manifest: &GameManifest, settings: &ValidatorSettings, report: &mut RuleReport) {
    for scene in &manifest.scenes {
        if scene.duration() < settings.short_scene_warning_secs {
            report.warnings.push(format!(
                "Scene {} is very short ({}s)",
                scene.id(),
                scene.duration()
            ));
        }
        if let Some(quiz) = scene.as_quiz() {
            if quiz.questions.len() > settings.max_quiz_questions_warning {
                report.warnings.push(format!(
                    "Quiz scene {} has {} questions; consider splitting it",
                    quiz.scene_id,
                    quiz.questions.len()
                ));
            }
        }
    }
}
