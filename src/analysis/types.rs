//! Shared types for the email analysis pipeline.

use serde::{Deserialize, Serialize};

// ── Message record ──────────────────────────────────────────────────

/// One email message as supplied by the retrieval collaborator.
///
/// The pipeline never mutates a record; every analysis is derived from
/// `body` alone and the record travels into the result untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Unique ID (provider-native).
    pub id: String,
    /// Subject line, possibly empty.
    #[serde(default)]
    pub subject: String,
    /// Sender identifier (usually an address, sometimes a display form).
    #[serde(default)]
    pub sender: String,
    /// Provider-formatted date string. Opaque to the pipeline.
    #[serde(default)]
    pub date: String,
    /// Plain-text body.
    #[serde(default)]
    pub body: String,
}

// ── Sentiment ───────────────────────────────────────────────────────

/// Document-level sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Wire/display form, matching the classifier convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment verdict for a whole message.
///
/// `confidence` is the arithmetic mean of the per-chunk model scores,
/// reported as-is (not rescaled per label).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentVerdict {
    /// Aggregated label.
    pub label: SentimentLabel,
    /// Mean per-chunk score in [0, 1].
    pub confidence: f32,
}

impl SentimentVerdict {
    /// The defined default for degenerate input or total model failure.
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            confidence: 0.5,
        }
    }

    /// Map a mean chunk score to a verdict using fixed thresholds.
    ///
    /// Strictly above `positive` reads positive, strictly below `negative`
    /// reads negative, everything else is neutral. The mean itself is kept
    /// as the confidence.
    pub fn from_mean(mean: f32, positive: f32, negative: f32) -> Self {
        let label = if mean > positive {
            SentimentLabel::Positive
        } else if mean < negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        Self {
            label,
            confidence: mean,
        }
    }
}

// ── Key points ──────────────────────────────────────────────────────

/// A sentence selected verbatim from the cleaned text.
///
/// Extractive: the text is exactly one segmented sentence of the source,
/// never paraphrased. `index` is the sentence's position in the segmented
/// document; result sequences are ordered by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPoint {
    /// Zero-based sentence position in the segmented document.
    pub index: usize,
    /// The sentence text.
    pub text: String,
}

// ── Process result ──────────────────────────────────────────────────

/// Terminal record of one message's analysis.
///
/// Immutable once assembled. Everything here derives from the paired
/// record's body; there is no cross-message state anywhere in the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Abstractive summary (or one of the documented fallbacks).
    pub summary: String,
    /// Aggregated sentiment verdict.
    pub sentiment: SentimentVerdict,
    /// Selected key sentences in document order (not score order).
    pub key_points: Vec<KeyPoint>,
    /// The original message, carried through for display and filtering.
    pub original: MessageRecord,
}
