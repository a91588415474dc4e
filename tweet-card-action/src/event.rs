//! Event-payload precondition gate.
//!
//! The action runs on issue and project-card events, but not every card
//! on a project board is backed by an issue (plain notes are not). The
//! gate inspects the webhook payload before any validation happens; when
//! it says "not applicable" the run exits quietly without producing
//! output or failure.

use std::env;
use std::fs;
use std::sync::LazyLock;

use anyhow::Context;
use regex::Regex;
use serde_json::Value;

/// Trailing path of a project-card `content_url` that references an issue
/// or pull request, e.g. `.../issues/42` or `.../pull-requests/7`.
static ISSUE_CONTENT_URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"/(?:issue|pull-request)s/[0-9]+$") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid content URL regex: {err}"),
    });

/// Whether the event payload has an associated issue to validate.
///
/// True when the payload carries an `issue` object, or when it carries a
/// project card whose `content_url` points at an issue or pull request.
#[must_use]
pub fn has_card_issue(payload: &Value) -> bool {
    if payload.get("issue").is_some_and(|issue| !issue.is_null()) {
        return true;
    }
    payload
        .pointer("/project_card/content_url")
        .and_then(Value::as_str)
        .is_some_and(|url| ISSUE_CONTENT_URL_PATTERN.is_match(url))
}

/// Load the webhook event payload from the file named by
/// `GITHUB_EVENT_PATH`.
///
/// An unset variable yields an empty payload (the gate then reports "no
/// issue"); a set-but-unreadable or unparsable file is a fault.
///
/// # Errors
///
/// Returns an error if the payload file cannot be read or is not valid
/// JSON.
pub fn load_payload() -> anyhow::Result<Value> {
    let Ok(path) = env::var("GITHUB_EVENT_PATH") else {
        return Ok(Value::Object(serde_json::Map::new()));
    };
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read event payload at {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("Event payload at {path} is not JSON"))
}
