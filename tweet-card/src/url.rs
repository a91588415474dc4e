//! Tweet URL shape check.

use std::sync::LazyLock;

use regex::Regex;

/// Full-string pattern for a canonical tweet URL:
/// `http(s)://(www.)twitter.com/<user>/status/<digits>` with an optional
/// trailing slash. Anything else (extra path, query string, bare
/// `/status/<id>` without a user segment) does not match.
static TWEET_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^https?://(?:www\.)?twitter\.com/[^/]+/status/[0-9]+/?$") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid tweet URL regex: {err}"),
    }
});

/// Whether `url` is a well-formed link to a single tweet.
#[must_use]
pub fn is_valid_tweet_url(url: &str) -> bool {
    TWEET_URL_PATTERN.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_canonical_status_url() {
        assert!(is_valid_tweet_url("https://twitter.com/user/status/12345"));
        assert!(is_valid_tweet_url("http://twitter.com/user/status/1"));
        assert!(is_valid_tweet_url("https://www.twitter.com/user/status/12345"));
    }

    #[test]
    fn test_tolerates_trailing_slash() {
        assert!(is_valid_tweet_url("https://twitter.com/user/status/12345/"));
    }

    #[test]
    fn test_rejects_missing_user_segment() {
        assert!(!is_valid_tweet_url("https://twitter.com/status/12345"));
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(!is_valid_tweet_url("https://twitter.com/user/status/abc"));
        assert!(!is_valid_tweet_url("https://twitter.com/user/status/"));
    }

    #[test]
    fn test_rejects_other_hosts_and_schemes() {
        assert!(!is_valid_tweet_url("https://example.com/user/status/12345"));
        assert!(!is_valid_tweet_url("ftp://twitter.com/user/status/12345"));
        assert!(!is_valid_tweet_url("https://xtwitter.com/user/status/12345"));
    }

    #[test]
    fn test_rejects_substring_matches() {
        assert!(!is_valid_tweet_url(
            "see https://twitter.com/user/status/12345"
        ));
        assert!(!is_valid_tweet_url(
            "https://twitter.com/user/status/12345?s=20"
        ));
        assert!(!is_valid_tweet_url(
            "https://twitter.com/user/status/12345/photo/1"
        ));
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(!is_valid_tweet_url(""));
    }
}
