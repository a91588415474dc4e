//! Validation report types.

use serde::Serialize;

/// Result of validating one card.
///
/// `errors` is ordered by rule evaluation: description, reply, repost,
/// content presence, content length. An empty list means the card is
/// valid. `should_fail` is set only when strict mode was requested and at
/// least one error was collected; callers use it to decide the exit
/// status of the run.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Human-readable validation errors, in rule order.
    pub errors: Vec<String>,
    /// Whether the invocation as a whole should be marked failed.
    pub should_fail: bool,
}

impl ValidationReport {
    /// Whether the card passed every rule.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of validation errors found.
    #[must_use]
    pub fn errors_count(&self) -> usize {
        self.errors.len()
    }
}
