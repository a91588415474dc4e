//! # tweet-card
//!
//! Validation engine for issue-driven tweet cards.
//!
//! A "card" is the structured description of a social-media post, parsed
//! out of an issue or project-card body by a CI automation. This crate is
//! the input-agnostic core of that automation: it checks one
//! [`CardContent`] record against the content rules (description present,
//! reply/retweet URLs well-formed, body present and within the weighted
//! length budget) and returns the collected error messages. How the record
//! is produced and how the result is surfaced to the CI host are boundary
//! concerns and live elsewhere.
//!
//! ## Quick Start
//!
//! ```rust
//! use tweet_card::{CardContent, ValidationConfig, validate};
//!
//! let card: CardContent = serde_json::from_str(
//!     r#"{"description": "Release post", "content": "v1.0 is out!"}"#,
//! ).unwrap();
//!
//! let mut config = ValidationConfig::default();
//! config.strict = true;
//!
//! let report = validate(&card, &config).unwrap();
//! println!("Errors: {}", report.errors_count());
//! println!("OK: {}", report.ok());
//! ```

mod config;
mod error;
mod measure;
pub mod output;
mod record;
mod report;
mod url;

pub use config::{MAX_WEIGHTED_LENGTH, ValidationConfig};
pub use error::ValidationFault;
pub use measure::{TextMeasurer, TweetTextMeasurer, strip_image_markup};
pub use record::{CardContent, Field};
pub use report::ValidationReport;
pub use url::is_valid_tweet_url;

const NO_DESCRIPTION: &str =
    "No content description provided. Please add a content description section to your issue.";
const BAD_REPLY: &str =
    "The reply section needs to have content and only link a Tweet URL to reply to.";
const BAD_REPOST: &str = "Retweets need to have a Tweet URL to retweet in the retweet section.";
const NO_CONTENT: &str = "Tweets need to have a content section.";

/// Validate a card with the built-in weighted-length measurer.
///
/// This is the primary public API. See [`validate_with`] for the rule
/// order and failure semantics.
///
/// # Errors
///
/// Returns [`ValidationFault::NonTextContent`] if the `content` key is
/// present but its value is not a JSON string.
pub fn validate(
    card: &CardContent,
    config: &ValidationConfig,
) -> Result<ValidationReport, ValidationFault> {
    validate_with(card, config, &TweetTextMeasurer)
}

/// Validate a card, measuring tweet length with the supplied measurer.
///
/// All rules are evaluated in a fixed order — never short-circuited — so
/// every applicable error is collected in one pass:
///
/// 1. `description` must be present and non-empty.
/// 2. If `replyTo` is present, it must be a tweet URL.
/// 3. If `repost` is present, it must be a tweet URL.
/// 4. Unless `repost` is present, `content` must be present and non-empty.
/// 5. If `content` is present, its weighted length (after stripping image
///    markup) must not exceed `config.max_weighted_length`.
///
/// Wrong-typed values in rules 1–4 degrade to validation errors: a numeric
/// `replyTo` is simply not a valid URL. Rule 5 is the exception — a
/// present, non-string `content` is a fault, because the markup-stripping
/// step has no text to operate on.
///
/// # Errors
///
/// Returns [`ValidationFault::NonTextContent`] if the `content` key is
/// present but its value is not a JSON string.
pub fn validate_with(
    card: &CardContent,
    config: &ValidationConfig,
    measurer: &dyn TextMeasurer,
) -> Result<ValidationReport, ValidationFault> {
    let mut errors = Vec::new();

    if !card.description.is_truthy() {
        errors.push(NO_DESCRIPTION.to_owned());
    }

    if card.reply_to.is_present() && !is_tweet_url_field(&card.reply_to) {
        errors.push(BAD_REPLY.to_owned());
    }

    if card.repost.is_present() && !is_tweet_url_field(&card.repost) {
        errors.push(BAD_REPOST.to_owned());
    }

    // A retweet carries no body of its own, so repost exempts the card
    // from the content requirement.
    if !card.repost.is_present() && !card.content.is_truthy() {
        errors.push(NO_CONTENT.to_owned());
    }

    if card.content.is_present() {
        let text = card
            .content
            .as_str()
            .ok_or_else(|| ValidationFault::NonTextContent {
                found: card.content.type_name(),
            })?;
        let pure_tweet = strip_image_markup(text);
        let weighted = measurer.weighted_length(&pure_tweet);
        if weighted > config.max_weighted_length {
            errors.push(format!(
                "Tweet content too long by {} weighted characters.",
                weighted - config.max_weighted_length
            ));
        }
    }

    let should_fail = config.strict && !errors.is_empty();
    Ok(ValidationReport {
        errors,
        should_fail,
    })
}

/// Rule 2/3 value check: present, truthy, text, and shaped like a tweet
/// URL. A truthy non-string value fails here rather than faulting.
fn is_tweet_url_field(field: &Field) -> bool {
    field.is_truthy() && field.as_str().is_some_and(is_valid_tweet_url)
}
