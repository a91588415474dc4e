//! Fault types for card validation.
//!
//! Validation *errors* (bad or missing card fields) are ordinary data,
//! collected into the report. A [`ValidationFault`] is different: the
//! record was malformed in a way that prevented a rule from running at
//! all, and the invocation must be reported as failed rather than as
//! "invalid content".

use thiserror::Error;

/// An unrecovered fault raised while validating a card.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValidationFault {
    /// The `content` key was present but its value was not text, so the
    /// length check could not run.
    #[error("Card `content` must be a string, found {found}")]
    NonTextContent {
        /// JSON type name of the value actually found.
        found: &'static str,
    },
}
