//! Core domain types for the news classification service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Classification outcome for a piece of news content.
///
/// The wire representation is the upper-case string the service emits
/// ("REAL" / "FAKE"). Any other value is rejected at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Real,
    Fake,
}

impl Label {
    /// Check whether this label marks the content as genuine.
    pub fn is_real(&self) -> bool {
        matches!(self, Label::Real)
    }

    /// Wire/display form of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Real => "REAL",
            Label::Fake => "FAKE",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single completed prediction, as returned by the service.
///
/// Records are immutable once produced: the service stamps `created_at` and
/// `model_version`, and the client never rewrites them. `probability` is the
/// confidence associated with `label`, already in `[0, 1]`; it is passed
/// through unvalidated, so an out-of-range value is an upstream data-quality
/// problem, not something handled here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Server-assigned identifier. Older service versions omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_id: Option<String>,

    pub label: Label,

    /// Confidence for `label`, in `[0, 1]`. Scaled to a percentage only at
    /// presentation time.
    pub probability: f64,

    /// Headline as submitted. May be absent or blank; the "Untitled"
    /// fallback is applied at display time, never stored.
    #[serde(default)]
    pub title: Option<String>,

    /// Body text that was classified. History responses echo it back;
    /// predict responses may omit it.
    #[serde(default)]
    pub content: Option<String>,

    pub model_version: String,

    /// Timestamp stamped by the service, not the client.
    pub created_at: DateTime<Utc>,

    /// Most influential tokens for the classification, most significant
    /// first. The service sends `null` when explanations are unavailable.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub top_tokens: Vec<String>,
}

/// The service serializes "no tokens" as `null` rather than `[]`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tokens: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(tokens.unwrap_or_default())
}
