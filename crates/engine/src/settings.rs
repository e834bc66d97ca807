//! Validator settings
//!
//! Tolerances and thresholds used by the business rules, plus limits on how
//! much diagnostic output a single validation produces. Every field has a
//! serde default so partial JSON/TOML configs deserialize cleanly.
//!
//! `from_env()` reads `GAMEGATE_*` variables. Unparsable values fall back to
//! the default with a warning instead of failing startup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("{field} must be greater than 0")]
    Zero { field: &'static str },
}

fn default_duration_tolerance_secs() -> u32 {
    60
}
fn default_short_scene_warning_secs() -> u32 {
    60
}
fn default_max_quiz_questions_warning() -> usize {
    20
}
fn default_top_errors_limit() -> usize {
    5
}
fn default_max_reported_issues() -> usize {
    100
}
fn default_enforce_character_references() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorSettings {
    /// Allowed drift between `total_duration` and the sum of scene durations
    #[serde(default = "default_duration_tolerance_secs")]
    pub duration_tolerance_secs: u32,

    /// Scenes shorter than this produce a warning
    #[serde(default = "default_short_scene_warning_secs")]
    pub short_scene_warning_secs: u32,

    /// Quiz scenes with more questions than this produce a warning
    #[serde(default = "default_max_quiz_questions_warning")]
    pub max_quiz_questions_warning: usize,

    /// Number of entries in `ValidationStats::top_errors`
    #[serde(default = "default_top_errors_limit")]
    pub top_errors_limit: usize,

    /// Cap on structural issues reported for one document
    #[serde(default = "default_max_reported_issues")]
    pub max_reported_issues: usize,

    /// Require dialogue turns to reference a character declared in their scene
    #[serde(default = "default_enforce_character_references")]
    pub enforce_character_references: bool,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            duration_tolerance_secs: default_duration_tolerance_secs(),
            short_scene_warning_secs: default_short_scene_warning_secs(),
            max_quiz_questions_warning: default_max_quiz_questions_warning(),
            top_errors_limit: default_top_errors_limit(),
            max_reported_issues: default_max_reported_issues(),
            enforce_character_references: default_enforce_character_references(),
        }
    }
}

impl ValidatorSettings {
    /// Load settings from `GAMEGATE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            duration_tolerance_secs: read_var(
                &lookup,
                "GAMEGATE_DURATION_TOLERANCE_SECS",
                defaults.duration_tolerance_secs,
            ),
            short_scene_warning_secs: read_var(
                &lookup,
                "GAMEGATE_SHORT_SCENE_WARNING_SECS",
                defaults.short_scene_warning_secs,
            ),
            max_quiz_questions_warning: read_var(
                &lookup,
                "GAMEGATE_MAX_QUIZ_QUESTIONS_WARNING",
                defaults.max_quiz_questions_warning,
            ),
            top_errors_limit: read_var(
                &lookup,
                "GAMEGATE_TOP_ERRORS_LIMIT",
                defaults.top_errors_limit,
            ),
            max_reported_issues: read_var(
                &lookup,
                "GAMEGATE_MAX_REPORTED_ISSUES",
                defaults.max_reported_issues,
            ),
            enforce_character_references: read_flag(
                &lookup,
                "GAMEGATE_ENFORCE_CHARACTER_REFERENCES",
                defaults.enforce_character_references,
            ),
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.top_errors_limit == 0 {
            return Err(SettingsError::Zero {
                field: "top_errors_limit",
            });
        }
        if self.max_reported_issues == 0 {
            return Err(SettingsError::Zero {
                field: "max_reported_issues",
            });
        }
        Ok(())
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                key,
                value = %raw,
                default = %default,
                "Invalid setting value, using default"
            );
            default
        }
    }
}

fn read_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!(key, value = %raw, default, "Invalid flag value, using default");
            default
        }
    }
}
