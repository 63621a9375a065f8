//! The per-message pipeline: normalization feeding summarization,
//! sentiment, and key-point extraction, assembled into one result.

use std::sync::Arc;

use tracing::info;

use crate::config::AnalyzerConfig;
use crate::lang::{EnglishLexicon, Lexicon};
use crate::models::{SentimentModel, SummaryModel};

use super::key_points::KeyPointExtractor;
use super::normalize;
use super::sentiment::SentimentAnalyzer;
use super::summarize::Summarizer;
use super::types::{MessageRecord, ProcessResult};

/// Per-message analysis pipeline.
///
/// Stateless across messages: every result is derived from one record's
/// body plus model behavior, so batch order never changes an outcome.
pub struct EmailAnalyzer {
    summarizer: Summarizer,
    sentiment: SentimentAnalyzer,
    key_points: KeyPointExtractor,
    num_points: usize,
}

impl EmailAnalyzer {
    pub fn new(
        summary_model: Arc<dyn SummaryModel>,
        sentiment_model: Arc<dyn SentimentModel>,
        config: AnalyzerConfig,
    ) -> Self {
        Self::with_lexicon(
            summary_model,
            sentiment_model,
            Arc::new(EnglishLexicon::new()),
            config,
        )
    }

    /// Same pipeline with a caller-provided lexicon.
    pub fn with_lexicon(
        summary_model: Arc<dyn SummaryModel>,
        sentiment_model: Arc<dyn SentimentModel>,
        lexicon: Arc<dyn Lexicon>,
        config: AnalyzerConfig,
    ) -> Self {
        Self {
            summarizer: Summarizer::new(summary_model, config.summary),
            sentiment: SentimentAnalyzer::new(sentiment_model, config.sentiment),
            key_points: KeyPointExtractor::new(lexicon),
            num_points: config.key_points.num_points,
        }
    }

    /// Analyze one message.
    ///
    /// The body is normalized once; the same cleaned text feeds all three
    /// analyses. Model trouble degrades the affected field through its
    /// documented fallback and never fails the message.
    pub async fn process(&self, record: MessageRecord) -> ProcessResult {
        info!(id = %record.id, "analyzing message");
        let cleaned = normalize::clean(&record.body);

        let summary = self.summarizer.summarize(&cleaned).await;
        let sentiment = self.sentiment.analyze(&cleaned).await;
        let key_points = self.key_points.extract(&cleaned, self.num_points);

        info!(
            id = %record.id,
            sentiment = %sentiment.label,
            key_points = key_points.len(),
            "message analyzed"
        );
        ProcessResult {
            summary,
            sentiment,
            key_points,
            original: record,
        }
    }

    /// Analyze a batch sequentially, yielding one result per record in
    /// input order.
    pub async fn process_batch(&self, records: Vec<MessageRecord>) -> Vec<ProcessResult> {
        info!(count = records.len(), "processing batch");
        let mut results = Vec::with_capacity(records.len());
        for record in records {
            results.push(self.process(record).await);
        }
        results
    }
}
