//! Inference model adapters.
//!
//! The pipeline sees two black-box capabilities behind object-safe async
//! traits:
//! - **Summarization**: one chunk in, one abstractive summary out
//! - **Sentiment**: one chunk in, one dominant-label confidence score out
//!
//! The bundled implementation reaches hosted models through the Hugging
//! Face Inference API (`hf` module); tests substitute in-memory mocks.
//! Adapters are constructed once at startup and shared by `Arc`; they
//! hold no per-message state.

pub mod hf;
pub(crate) mod retry;

pub use hf::{HfClient, HfSentimentModel, HfSummaryModel};

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{ConfigError, ModelError};

/// Default summarization model (the BART CNN checkpoint).
pub const DEFAULT_SUMMARY_MODEL: &str = "facebook/bart-large-cnn";
/// Default sentiment model (binary RoBERTa tuned for English).
pub const DEFAULT_SENTIMENT_MODEL: &str = "siebert/sentiment-roberta-large-english";

/// Abstractive summarization over one chunk of text.
#[async_trait]
pub trait SummaryModel: Send + Sync {
    /// Model identifier for logging.
    fn name(&self) -> &str;

    /// Summarize `text` within the requested output length bounds.
    /// Best-effort: any failure is handled by the caller's fallback.
    async fn summarize_chunk(
        &self,
        text: &str,
        max_length: usize,
        min_length: usize,
    ) -> Result<String, ModelError>;
}

/// Sentiment classification over one chunk of text.
#[async_trait]
pub trait SentimentModel: Send + Sync {
    /// Model identifier for logging.
    fn name(&self) -> &str;

    /// Score `text`, returning the model's confidence in its dominant
    /// label as a value in [0, 1], monotonic toward positive sentiment.
    /// Best-effort: failed chunks are skipped by the caller.
    async fn classify_chunk(&self, text: &str) -> Result<f32, ModelError>;
}

/// Configuration for the bundled Hugging Face adapters.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub api_token: secrecy::SecretString,
    pub summary_model: String,
    pub sentiment_model: String,
}

impl ModelConfig {
    /// Adapter configuration from the process environment. `HF_API_TOKEN`
    /// is required; the model ids fall back to the bundled defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = get("HF_API_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("HF_API_TOKEN".to_string()))?;
        Ok(Self {
            api_token: secrecy::SecretString::from(token),
            summary_model: get("MAILSENSE_SUMMARY_MODEL")
                .unwrap_or_else(|| DEFAULT_SUMMARY_MODEL.to_string()),
            sentiment_model: get("MAILSENSE_SENTIMENT_MODEL")
                .unwrap_or_else(|| DEFAULT_SENTIMENT_MODEL.to_string()),
        })
    }
}

/// Create both model adapters from configuration.
pub fn create_models(
    config: &ModelConfig,
) -> Result<(Arc<dyn SummaryModel>, Arc<dyn SentimentModel>), ModelError> {
    let client = HfClient::new(config.api_token.clone())?;
    tracing::info!(
        summary = %config.summary_model,
        sentiment = %config.sentiment_model,
        "Using Hugging Face inference models"
    );
    Ok((
        Arc::new(HfSummaryModel::new(client.clone(), &config.summary_model)),
        Arc::new(HfSentimentModel::new(client, &config.sentiment_model)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_a_config_error() {
        let err = ModelConfig::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "HF_API_TOKEN"));

        // A set-but-blank token counts as missing.
        let err = ModelConfig::from_lookup(|key| {
            (key == "HF_API_TOKEN").then(|| "  ".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(_)));
    }

    #[test]
    fn model_ids_default_and_override_per_variable() {
        let config = ModelConfig::from_lookup(|key| {
            (key == "HF_API_TOKEN").then(|| "hf-test-token".to_string())
        })
        .unwrap();
        assert_eq!(config.summary_model, DEFAULT_SUMMARY_MODEL);
        assert_eq!(config.sentiment_model, DEFAULT_SENTIMENT_MODEL);

        let config = ModelConfig::from_lookup(|key| match key {
            "HF_API_TOKEN" => Some("hf-test-token".to_string()),
            "MAILSENSE_SUMMARY_MODEL" => Some("org/other-summarizer".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.summary_model, "org/other-summarizer");
        assert_eq!(config.sentiment_model, DEFAULT_SENTIMENT_MODEL);
    }

    #[test]
    fn create_models_reports_configured_names() {
        let config = ModelConfig {
            api_token: secrecy::SecretString::from("hf-test-token"),
            summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
            sentiment_model: DEFAULT_SENTIMENT_MODEL.to_string(),
        };
        let (summary, sentiment) = create_models(&config).unwrap();
        assert_eq!(summary.name(), "facebook/bart-large-cnn");
        assert_eq!(sentiment.name(), "siebert/sentiment-roberta-large-english");
    }
}
