//! Content validator - the public entry point.
//!
//! Runs structural decoding, then business rules, then sanitization
//! followed by a structural re-check of the sanitized manifest, and records
//! every outcome in the validator's statistics. Nothing escapes this
//! boundary as a panic or an `Err`: all outcomes are returned as a
//! [`ValidationResult`].

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use gamegate_domain::GameManifest;

use crate::formatter::{format_issues, recovery_suggestion};
use crate::result::ValidationResult;
use crate::rules;
use crate::sanitizer::Sanitize;
use crate::schema::{decode_manifest, IssueKind, SchemaIssue};
use crate::settings::{SettingsError, ValidatorSettings};
use crate::stats::{StatsTracker, ValidationStats};

#[derive(Debug)]
pub struct ContentValidator {
    settings: ValidatorSettings,
    stats: StatsTracker,
}

impl ContentValidator {
    pub fn new(settings: ValidatorSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            stats: StatsTracker::new(settings.top_errors_limit),
            settings,
        })
    }

    /// Validate an untyped JSON document.
    pub fn validate(&self, input: &Value) -> ValidationResult {
        self.guarded(|| self.run_pipeline(input))
    }

    /// Validate raw JSON text. Text that does not parse is a structural failure.
    pub fn validate_str(&self, text: &str) -> ValidationResult {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => self.validate(&value),
            Err(e) => self.guarded(|| malformed(e.to_string())),
        }
    }

    /// Validate any serializable value by first converting it to JSON.
    pub fn validate_serializable<T: Serialize + ?Sized>(&self, value: &T) -> ValidationResult {
        match serde_json::to_value(value) {
            Ok(value) => self.validate(&value),
            Err(e) => self.guarded(|| malformed(e.to_string())),
        }
    }

    /// Run [`validate`](Self::validate) on the blocking thread pool.
    pub async fn validate_async(self: Arc<Self>, input: Value) -> ValidationResult {
        let validator = Arc::clone(&self);
        let joined = tokio::task::spawn_blocking(move || validator.validate(&input)).await;
        self.joined(joined)
    }

    /// Run [`validate_str`](Self::validate_str) on the blocking thread pool.
    pub async fn validate_str_async(self: Arc<Self>, text: String) -> ValidationResult {
        let validator = Arc::clone(&self);
        let joined = tokio::task::spawn_blocking(move || validator.validate_str(&text)).await;
        self.joined(joined)
    }

    pub fn stats(&self) -> ValidationStats {
        self.stats.snapshot()
    }

    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    fn joined(&self, joined: Result<ValidationResult, tokio::task::JoinError>) -> ValidationResult {
        match joined {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, "Validation task failed");
                let result = ValidationResult::unexpected(&e.to_string());
                self.stats.record(&result);
                result
            }
        }
    }

    /// Run `stage`, turning a panic into an unexpected-error result, and
    /// record the outcome.
    fn guarded(&self, stage: impl FnOnce() -> ValidationResult) -> ValidationResult {
        let result = match catch_unwind(AssertUnwindSafe(stage)) {
            Ok(result) => result,
            Err(payload) => {
                let detail = panic_message(payload.as_ref());
                tracing::error!(detail = %detail, "Validation pipeline panicked");
                ValidationResult::unexpected(&detail)
            }
        };
        self.stats.record(&result);
        result
    }

    fn run_pipeline(&self, input: &Value) -> ValidationResult {
        tracing::debug!("Decoding manifest structure");
        let manifest = match decode_manifest(input, self.settings.max_reported_issues) {
            Ok(manifest) => manifest,
            Err(issues) => {
                tracing::warn!(errors = issues.len(), "Manifest rejected: structural issues");
                let mut errors = format_issues(&issues);
                errors.extend(rules::raw_duration_mismatch(
                    input,
                    self.settings.duration_tolerance_secs,
                ));
                return ValidationResult::structural(errors, recovery_suggestion(&issues));
            }
        };

        tracing::debug!(game_id = %manifest.game_id, "Evaluating business rules");
        let report = rules::evaluate(&manifest, &self.settings);
        if !report.is_clean() {
            tracing::warn!(
                game_id = %manifest.game_id,
                errors = report.errors.len(),
                "Manifest rejected: business rule violations"
            );
            return ValidationResult::business_rule(report.errors);
        }

        tracing::debug!(game_id = %manifest.game_id, "Sanitizing content");
        let sanitized = manifest.sanitized();
        if let Some(rejected) = self.recheck(&sanitized) {
            return rejected;
        }
        tracing::info!(
            game_id = %sanitized.game_id,
            warnings = report.warnings.len(),
            "Manifest accepted"
        );
        ValidationResult::accepted(sanitized, report.warnings)
    }
}

impl ContentValidator {
    /// Stripping markup can empty a required field or shorten it below its
    /// minimum, so the sanitized manifest must decode again on its own.
    fn recheck(&self, sanitized: &GameManifest) -> Option<ValidationResult> {
        let reencoded = match serde_json::to_value(sanitized) {
            Ok(value) => value,
            Err(e) => return Some(ValidationResult::unexpected(&e.to_string())),
        };
        let issues = decode_manifest(&reencoded, self.settings.max_reported_issues).err()?;
        tracing::warn!(
            game_id = %sanitized.game_id,
            errors = issues.len(),
            "Manifest rejected: sanitized content is no longer well-formed"
        );
        Some(ValidationResult::structural(
            format_issues(&issues),
            recovery_suggestion(&issues),
        ))
    }
}

impl Default for ContentValidator {
    fn default() -> Self {
        let settings = ValidatorSettings::default();
        Self {
            stats: StatsTracker::new(settings.top_errors_limit),
            settings,
        }
    }
}

fn malformed(reason: String) -> ValidationResult {
    tracing::warn!(reason = %reason, "Manifest rejected: malformed input");
    let issues = [SchemaIssue::at_root(IssueKind::Malformed { reason })];
    ValidationResult::structural(format_issues(&issues), recovery_suggestion(&issues))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
