//! Running statistics over validation outcomes.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::result::ValidationResult;

/// How often one error message was returned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorFrequency {
    pub message: String,
    pub count: u64,
}

/// Point-in-time copy of the tracker's counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStats {
    pub total_validations: u64,
    pub successful_validations: u64,
    pub failed_validations: u64,
    /// Percentage of successful validations, 0 when nothing was validated
    pub success_rate: f64,
    pub top_errors: Vec<ErrorFrequency>,
}

#[derive(Debug, Default)]
struct Counters {
    total: u64,
    successes: u64,
    failures: u64,
    error_counts: HashMap<String, u64>,
}

#[derive(Debug)]
pub struct StatsTracker {
    counters: Mutex<Counters>,
    top_errors_limit: usize,
}

impl StatsTracker {
    pub fn new(top_errors_limit: usize) -> Self {
        Self {
            counters: Mutex::new(Counters::default()),
            top_errors_limit,
        }
    }

    // Every update leaves the counters consistent, so a poisoned lock is reused.
    fn lock(&self) -> MutexGuard<'_, Counters> {
        self.counters.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record(&self, result: &ValidationResult) {
        let mut counters = self.lock();
        counters.total += 1;
        if result.success {
            counters.successes += 1;
        } else {
            counters.failures += 1;
            for error in &result.errors {
                *counters.error_counts.entry(error.clone()).or_insert(0) += 1;
            }
        }
    }

    pub fn snapshot(&self) -> ValidationStats {
        let counters = self.lock();
        let success_rate = if counters.total == 0 {
            0.0
        } else {
            counters.successes as f64 / counters.total as f64 * 100.0
        };

        let mut top_errors: Vec<ErrorFrequency> = counters
            .error_counts
            .iter()
            .map(|(message, count)| ErrorFrequency {
                message: message.clone(),
                count: *count,
            })
            .collect();
        top_errors.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.message.cmp(&b.message)));
        top_errors.truncate(self.top_errors_limit);

        ValidationStats {
            total_validations: counters.total,
            successful_validations: counters.successes,
            failed_validations: counters.failures,
            success_rate,
            top_errors,
        }
    }

    pub fn reset(&self) {
        *self.lock() = Counters::default();
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new(5)
    }
}
