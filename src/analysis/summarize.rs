//! Abstractive summarization with chunked aggregation.
//!
//! Long bodies are split into sentence-aligned chunks, each chunk is
//! summarized independently, and the per-chunk summaries are concatenated
//! in document order. Every failure point has a local fallback, so the
//! operation is total: it returns a string for any input and never
//! surfaces a model error.

use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::SummaryConfig;
use crate::lang;
use crate::models::SummaryModel;

use super::chunk::{self, TextChunk};

/// Sentinel returned for empty input.
pub const EMPTY_SUMMARY: &str = "No content to summarize.";

/// Marker appended when output is cut to a budget.
const ELLIPSIS: &str = "...";

/// Characters of raw text standing in for a summary when not even
/// sentence segmentation produced anything.
const RAW_PREFIX_CHARS: usize = 200;

/// Chunked abstractive summarizer over a shared model adapter.
pub struct Summarizer {
    model: Arc<dyn SummaryModel>,
    config: SummaryConfig,
}

impl Summarizer {
    pub fn new(model: Arc<dyn SummaryModel>, config: SummaryConfig) -> Self {
        Self { model, config }
    }

    /// Summarize normalized text.
    ///
    /// Empty input yields the fixed sentinel. Texts below the word pivot
    /// are returned unchanged rather than summarized. Everything longer
    /// goes through the chunk loop; the concatenated result is truncated
    /// to the target word budget.
    pub async fn summarize(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return EMPTY_SUMMARY.to_string();
        }
        let word_count = text.split_whitespace().count();
        if word_count < self.config.min_summarize_words {
            return text.to_string();
        }

        let chunks = chunk::chunk(text, self.config.chunk_words);
        let mut parts: Vec<String> = Vec::new();
        for c in &chunks {
            if c.word_count <= self.config.min_summarize_words {
                debug!(chunk = c.index, words = c.word_count, "chunk below pivot, skipped");
                continue;
            }
            if let Some(part) = self.summarize_chunk(c).await {
                parts.push(part);
            }
        }

        if parts.is_empty() {
            return fallback_summary(text);
        }
        enforce_word_budget(parts.join(" "), self.config.target_max_length)
    }

    /// One model call with length bounds derived from the chunk size;
    /// falls back to the chunk's first sentence on failure.
    async fn summarize_chunk(&self, c: &TextChunk) -> Option<String> {
        // Bounds come from the uncapped word count; the input cap below
        // only protects the model call itself.
        let max_len = self
            .config
            .target_max_length
            .min(self.config.target_min_length.max(c.word_count / 3));
        let min_len = self.config.target_min_length.min(max_len.saturating_sub(10));
        let input = cap_words(&c.text, self.config.model_input_cap_words);

        match self.model.summarize_chunk(&input, max_len, min_len).await {
            Ok(summary) if summary.is_empty() => {
                debug!(chunk = c.index, "model returned empty summary, skipped");
                None
            }
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!(
                    chunk = c.index,
                    model = self.model.name(),
                    error = %e,
                    "summarization failed, falling back to first sentence"
                );
                lang::sentences(&c.text).into_iter().next()
            }
        }
    }
}

/// Last resort when no chunk contributed: the first three sentences, or
/// a raw prefix when segmentation finds nothing to work with.
fn fallback_summary(text: &str) -> String {
    let sentences = lang::sentences(text);
    if sentences.is_empty() {
        let prefix: String = text.chars().take(RAW_PREFIX_CHARS).collect();
        return format!("{prefix}{ELLIPSIS}");
    }
    sentences.into_iter().take(3).collect::<Vec<_>>().join(" ")
}

/// Truncate to `max_words` words, marking the cut.
fn enforce_word_budget(summary: String, max_words: usize) -> String {
    let words: Vec<&str> = summary.split_whitespace().collect();
    if words.len() <= max_words {
        return summary;
    }
    let mut truncated = words[..max_words].join(" ");
    truncated.push_str(ELLIPSIS);
    truncated
}

fn cap_words(text: &str, cap: usize) -> Cow<'_, str> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= cap {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(words[..cap].join(" "))
    }
}
