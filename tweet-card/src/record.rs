//! Card content record and field-presence tracking.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// An optional record field that distinguishes "key absent" from
/// "key present but empty/invalid".
///
/// Card content arrives as loosely-typed JSON produced by an issue parser,
/// and several rules trigger on the mere presence of a key. A plain
/// `Option<String>` would collapse `{"replyTo": ""}` and `{}` into the
/// same state, so presence is kept explicit.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Field {
    /// The key did not appear in the record.
    #[default]
    Absent,
    /// The key appeared, with whatever JSON value it carried (possibly
    /// `null`, an empty string, or a non-string).
    Present(Value),
}

impl Field {
    /// Whether the key appeared in the record at all.
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Whether the key appeared with a truthy value.
    ///
    /// Truthiness follows the conventions of the issue-parser payloads:
    /// `null`, `false`, numeric zero, NaN, and the empty string are falsy;
    /// every other value (including arrays and objects) is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        let Self::Present(value) = self else {
            return false;
        };
        match value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(is_nonzero_finite_or_infinite),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// The field's text, if the key appeared with a JSON string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Present(Value::String(s)) => Some(s),
            Self::Present(_) | Self::Absent => None,
        }
    }

    /// The JSON type name of the carried value, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Present(Value::Null) => "null",
            Self::Present(Value::Bool(_)) => "boolean",
            Self::Present(Value::Number(_)) => "number",
            Self::Present(Value::String(_)) => "string",
            Self::Present(Value::Array(_)) => "array",
            Self::Present(Value::Object(_)) => "object",
        }
    }
}

// Classify instead of comparing against 0.0 so NaN and negative zero are
// handled without a float equality.
fn is_nonzero_finite_or_infinite(f: f64) -> bool {
    use std::num::FpCategory;
    matches!(
        f.classify(),
        FpCategory::Normal | FpCategory::Subnormal | FpCategory::Infinite
    )
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Any value that deserializes at all counts as Present; Absent only
        // arises through `#[serde(default)]` when the key is missing.
        Value::deserialize(deserializer).map(Self::Present)
    }
}

/// The structured description of one tweet to be validated.
///
/// Produced by parsing an issue or project-card body; unknown keys (polls,
/// media lists, scheduling hints) are ignored here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardContent {
    /// Free-form description of the card, required on every card.
    #[serde(default)]
    pub description: Field,
    /// The tweet body. Required unless the card is a retweet.
    #[serde(default)]
    pub content: Field,
    /// URL of the tweet being replied to.
    #[serde(default, rename = "replyTo")]
    pub reply_to: Field,
    /// URL of the tweet being retweeted.
    #[serde(default)]
    pub repost: Field,
}
