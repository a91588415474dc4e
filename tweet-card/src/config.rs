//! Configuration types for card validation.

/// The platform's weighted-character budget for a single tweet.
pub const MAX_WEIGHTED_LENGTH: usize = 280;

/// Core validation config — applies regardless of how the card arrived.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ValidationConfig {
    /// Strict mode: any validation error also marks the whole invocation
    /// as failed (default: off — errors are reported as data only).
    pub strict: bool,
    /// Weighted-character budget for the tweet body
    /// (default: [`MAX_WEIGHTED_LENGTH`]).
    pub max_weighted_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict: false,
            max_weighted_length: MAX_WEIGHTED_LENGTH,
        }
    }
}
