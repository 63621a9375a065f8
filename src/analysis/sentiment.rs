//! Chunked sentiment classification.
//!
//! The classifier scores fixed word windows independently and averages
//! the per-chunk positive scores into one document verdict. Chunks that
//! fail to classify are skipped rather than failing the document; a
//! document where every chunk failed gets the neutral verdict.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::SentimentConfig;
use crate::models::SentimentModel;

use super::chunk;
use super::types::SentimentVerdict;

/// Document-level sentiment over a shared model adapter.
pub struct SentimentAnalyzer {
    model: Arc<dyn SentimentModel>,
    config: SentimentConfig,
}

impl SentimentAnalyzer {
    pub fn new(model: Arc<dyn SentimentModel>, config: SentimentConfig) -> Self {
        Self { model, config }
    }

    /// Classify normalized text.
    ///
    /// Windows here are fixed-size: sentiment does not care about
    /// sentence boundaries the way summarization does. Each window is
    /// truncated to the model's character cap before the call.
    pub async fn analyze(&self, text: &str) -> SentimentVerdict {
        if text.trim().is_empty() {
            return SentimentVerdict::neutral();
        }

        let mut scores: Vec<f32> = Vec::new();
        for c in chunk::chunk_fixed(text, self.config.chunk_words) {
            let input: String = c.text.chars().take(self.config.model_input_cap_chars).collect();
            match self.model.classify_chunk(&input).await {
                Ok(score) => scores.push(score),
                Err(e) => {
                    warn!(
                        chunk = c.index,
                        model = self.model.name(),
                        error = %e,
                        "sentiment classification failed, chunk skipped"
                    );
                }
            }
        }

        if scores.is_empty() {
            debug!("no chunk produced a score, reporting neutral");
            return SentimentVerdict::neutral();
        }
        let mean = scores.iter().sum::<f32>() / scores.len() as f32;
        SentimentVerdict::from_mean(
            mean,
            self.config.positive_threshold,
            self.config.negative_threshold,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::SentimentLabel;
    use crate::error::ModelError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockSentimentModel {
        scores: Mutex<Vec<Result<f32, ()>>>,
        inputs: Mutex<Vec<String>>,
    }

    impl MockSentimentModel {
        fn scoring(scores: &[Result<f32, ()>]) -> Arc<Self> {
            Arc::new(Self {
                scores: Mutex::new(scores.iter().rev().cloned().collect()),
                inputs: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl SentimentModel for MockSentimentModel {
        fn name(&self) -> &str {
            "mock-sentiment"
        }

        async fn classify_chunk(&self, text: &str) -> Result<f32, ModelError> {
            self.inputs.lock().unwrap().push(text.to_string());
            match self.scores.lock().unwrap().pop() {
                Some(Ok(score)) => Ok(score),
                _ => Err(ModelError::RequestFailed {
                    model: "mock-sentiment".to_string(),
                    reason: "model down".to_string(),
                }),
            }
        }
    }

    fn analyzer(model: Arc<MockSentimentModel>) -> SentimentAnalyzer {
        SentimentAnalyzer::new(model, SentimentConfig::default())
    }

    fn numbered_words(n: usize) -> String {
        (1..=n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    #[tokio::test]
    async fn empty_input_is_neutral_without_model_call() {
        let model = MockSentimentModel::scoring(&[Ok(0.9)]);
        let got = analyzer(Arc::clone(&model)).analyze("").await;
        assert_eq!(got.label, SentimentLabel::Neutral);
        assert_eq!(got.confidence, 0.5);
        assert!(model.inputs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn high_mean_reads_positive_with_mean_confidence() {
        let model = MockSentimentModel::scoring(&[Ok(0.9)]);
        let got = analyzer(model).analyze("Great work everyone").await;
        assert_eq!(got.label, SentimentLabel::Positive);
        assert_eq!(got.confidence, 0.9);
    }

    #[tokio::test]
    async fn mean_averages_across_chunks() {
        // 1100 words: three fixed windows, scores 0.5, 0.2, 0.5.
        let model = MockSentimentModel::scoring(&[Ok(0.5), Ok(0.2), Ok(0.5)]);
        let got = analyzer(Arc::clone(&model)).analyze(&numbered_words(1100)).await;
        assert_eq!(model.inputs.lock().unwrap().len(), 3);
        // Mean 0.4 is not strictly below the negative threshold.
        assert_eq!(got.label, SentimentLabel::Neutral);
        assert!((got.confidence - 0.4).abs() < 1e-6);
    }

    #[tokio::test]
    async fn low_mean_reads_negative() {
        let model = MockSentimentModel::scoring(&[Ok(0.5), Ok(0.05), Ok(0.5)]);
        let got = analyzer(model).analyze(&numbered_words(1100)).await;
        assert_eq!(got.label, SentimentLabel::Negative);
        assert!((got.confidence - 0.35).abs() < 1e-6);
    }

    #[tokio::test]
    async fn failed_chunks_are_skipped_not_counted() {
        // Middle chunk fails; mean is over the two survivors.
        let model = MockSentimentModel::scoring(&[Ok(0.8), Err(()), Ok(0.6)]);
        let got = analyzer(model).analyze(&numbered_words(1100)).await;
        assert_eq!(got.label, SentimentLabel::Positive);
        assert!((got.confidence - 0.7).abs() < 1e-6);
    }

    #[tokio::test]
    async fn all_chunks_failing_reads_neutral() {
        let model = MockSentimentModel::scoring(&[Err(()), Err(()), Err(())]);
        let got = analyzer(model).analyze(&numbered_words(1100)).await;
        assert_eq!(got.label, SentimentLabel::Neutral);
        assert_eq!(got.confidence, 0.5);
    }

    #[tokio::test]
    async fn model_input_is_capped_to_the_character_limit() {
        let model = MockSentimentModel::scoring(&[Ok(0.5)]);
        // 80 ten-character words blow well past 512 characters in one window.
        let text = vec!["abcdefghij"; 80].join(" ");
        analyzer(Arc::clone(&model)).analyze(&text).await;
        let inputs = model.inputs.lock().unwrap();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].chars().count(), 512);
    }

    #[tokio::test]
    async fn fixed_windows_ignore_sentence_boundaries() {
        let config = SentimentConfig {
            chunk_words: 10,
            ..SentimentConfig::default()
        };
        let model = MockSentimentModel::scoring(&[Ok(0.5), Ok(0.5)]);
        let analyzer =
            SentimentAnalyzer::new(Arc::clone(&model) as Arc<dyn SentimentModel>, config);
        // A period inside the window must not shrink it.
        analyzer.analyze("a b c d e f g h. i j k l").await;
        let inputs = model.inputs.lock().unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].split_whitespace().count(), 10);
        assert_eq!(inputs[1], "k l");
    }
}
