//! Weighted text measurement and image-markup stripping.
//!
//! Tweet length is not a plain character count: the platform assigns a
//! weight to each code point and bills the tweet against a fixed weighted
//! budget. The measurement is kept behind a trait so callers can swap in a
//! fully platform-compatible implementation (or a trivial one in tests)
//! without touching the validation rules.

use std::sync::LazyLock;

use regex::Regex;

/// Measures the weighted length of tweet text.
pub trait TextMeasurer {
    /// The weighted length of `text` under platform counting rules.
    fn weighted_length(&self, text: &str) -> usize;
}

/// Code-point ranges that weigh 1 unit; everything else weighs 2.
///
/// These are the ranges from the platform's published counting
/// configuration (version 3): Latin and general scripts up to U+10FF,
/// plus the general-punctuation spaces, dashes, quotes, and primes. CJK
/// and emoji fall outside and count double.
const SINGLE_WEIGHT_RANGES: [(u32, u32); 4] = [
    (0x0000, 0x10FF),
    (0x2000, 0x200D),
    (0x2010, 0x201F),
    (0x2032, 0x2037),
];

/// Default measurer implementing the platform's per-code-point weighting.
///
/// URL shortening and emoji normalization are not modeled; for card
/// content that matters only within a couple of units of the limit, inject
/// a platform-exact [`TextMeasurer`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct TweetTextMeasurer;

impl TextMeasurer for TweetTextMeasurer {
    fn weighted_length(&self, text: &str) -> usize {
        text.chars()
            .map(|c| {
                let cp = u32::from(c);
                if SINGLE_WEIGHT_RANGES
                    .iter()
                    .any(|&(lo, hi)| (lo..=hi).contains(&cp))
                {
                    1
                } else {
                    2
                }
            })
            .sum()
    }
}

/// Markdown image reference: `![alt text](url)`. Alt text may be empty;
/// the URL part must be non-empty.
static IMAGE_MARKUP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"!\[[^\]]*\]\([^)]+\)") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid image markup regex: {err}"),
    });

/// Remove every embedded image reference from tweet text.
///
/// Images are attached as media when the tweet is posted and contribute
/// nothing to its length, so both the alt text and the URL are discarded
/// before measurement.
#[must_use]
pub fn strip_image_markup(text: &str) -> String {
    IMAGE_MARKUP_PATTERN.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_weighs_one_per_char() {
        let measurer = TweetTextMeasurer;
        assert_eq!(measurer.weighted_length("hello"), 5);
        assert_eq!(measurer.weighted_length(&"a".repeat(280)), 280);
    }

    #[test]
    fn test_cjk_weighs_two_per_char() {
        let measurer = TweetTextMeasurer;
        assert_eq!(measurer.weighted_length("\u{65e5}\u{672c}\u{8a9e}"), 6);
    }

    #[test]
    fn test_general_punctuation_weighs_one() {
        let measurer = TweetTextMeasurer;
        // en dash U+2013 and right double quote U+201D are in the light ranges
        assert_eq!(measurer.weighted_length("\u{2013}\u{201d}"), 2);
    }

    #[test]
    fn test_emoji_weighs_two() {
        let measurer = TweetTextMeasurer;
        assert_eq!(measurer.weighted_length("\u{1f600}"), 2);
    }

    #[test]
    fn test_empty_text_weighs_zero() {
        assert_eq!(TweetTextMeasurer.weighted_length(""), 0);
    }

    #[test]
    fn test_strip_single_image() {
        assert_eq!(
            strip_image_markup("before ![a cat](http://example.com/cat.png) after"),
            "before  after"
        );
    }

    #[test]
    fn test_strip_image_with_empty_alt() {
        assert_eq!(strip_image_markup("![](http://example.com/i.png)x"), "x");
    }

    #[test]
    fn test_strip_multiple_images() {
        let text = "![a](http://e.com/1.png)mid![b](http://e.com/2.png)";
        assert_eq!(strip_image_markup(text), "mid");
    }

    #[test]
    fn test_keeps_plain_links_and_brackets() {
        assert_eq!(
            strip_image_markup("[link](http://example.com) and ![]() stays"),
            "[link](http://example.com) and ![]() stays"
        );
    }
}
