//! Hugging Face Inference API adapters.
//!
//! One shared HTTP client, two thin adapters over it. Responses from the
//! hosted API vary in nesting (`[{...}]` vs `[[{...}]]` depending on task
//! and deployment), so parsing is tolerant and lives in pure functions.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};

use super::retry::with_retries;
use super::{SentimentModel, SummaryModel};
use crate::error::ModelError;

/// Default public inference endpoint.
const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Per-request timeout. Cold-start waits are handled by the retry layer,
/// not by stretching this.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Shared HTTP client for the inference endpoint.
#[derive(Debug, Clone)]
pub struct HfClient {
    http: reqwest::Client,
    base_url: String,
    token: SecretString,
}

impl HfClient {
    pub fn new(token: SecretString) -> Result<Self, ModelError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            token,
        })
    }

    /// Point the client at a different endpoint (self-hosted deployment,
    /// test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// POST one inference request, mapping the endpoint's status
    /// conventions onto [`ModelError`].
    async fn infer(&self, model: &str, body: &Value) -> Result<Value, ModelError> {
        let url = format!("{}/models/{}", self.base_url, model);
        let response = self
            .http
            .post(&url)
            .bearer_auth(self.token.expose_secret())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ModelError::AuthFailed {
                model: model.to_string(),
            });
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs);
            return Err(ModelError::RateLimited {
                model: model.to_string(),
                retry_after,
            });
        }
        if status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            // The hosted API answers 503 with an estimated wait while a
            // model container spins up.
            let body: Value = response.json().await.unwrap_or(Value::Null);
            return Err(ModelError::Loading {
                model: model.to_string(),
                estimated: parse_estimated_wait(&body),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(ModelError::RequestFailed {
                model: model.to_string(),
                reason,
            });
        }

        Ok(response.json().await?)
    }
}

// ── Summarization ───────────────────────────────────────────────────

/// Summarization through a hosted seq2seq checkpoint.
pub struct HfSummaryModel {
    client: HfClient,
    model: String,
}

impl HfSummaryModel {
    pub fn new(client: HfClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl SummaryModel for HfSummaryModel {
    fn name(&self) -> &str {
        &self.model
    }

    async fn summarize_chunk(
        &self,
        text: &str,
        max_length: usize,
        min_length: usize,
    ) -> Result<String, ModelError> {
        let body = json!({
            "inputs": text,
            "parameters": {
                "max_length": max_length,
                "min_length": min_length,
                "do_sample": false,
                "truncation": true,
            },
        });
        let value = with_retries(&self.model, || self.client.infer(&self.model, &body)).await?;
        parse_summary(&self.model, &value)
    }
}

// ── Sentiment ───────────────────────────────────────────────────────

/// Sentiment classification through a hosted classifier checkpoint.
pub struct HfSentimentModel {
    client: HfClient,
    model: String,
}

impl HfSentimentModel {
    pub fn new(client: HfClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl SentimentModel for HfSentimentModel {
    fn name(&self) -> &str {
        &self.model
    }

    async fn classify_chunk(&self, text: &str) -> Result<f32, ModelError> {
        let body = json!({ "inputs": text });
        let value = with_retries(&self.model, || self.client.infer(&self.model, &body)).await?;
        parse_sentiment(&self.model, &value)
    }
}

// ── Response parsing ────────────────────────────────────────────────

/// Extract the summary text from `[{"summary_text": ...}]`, flat or
/// nested one level.
fn parse_summary(model: &str, value: &Value) -> Result<String, ModelError> {
    first_object(value)
        .and_then(|v| v.get("summary_text"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ModelError::InvalidResponse {
            model: model.to_string(),
            reason: "missing summary_text".to_string(),
        })
}

/// Extract the dominant-label score from `[{"label","score"}]` or
/// `[[{"label","score"}, ...]]`; the highest-scoring candidate wins.
fn parse_sentiment(model: &str, value: &Value) -> Result<f32, ModelError> {
    let candidates: &[Value] = match value {
        Value::Array(items) => match items.first() {
            Some(Value::Array(inner)) => inner.as_slice(),
            Some(_) => items.as_slice(),
            None => &[],
        },
        _ => &[],
    };
    candidates
        .iter()
        .filter_map(|c| c.get("score").and_then(Value::as_f64))
        .fold(None, |best: Option<f64>, s| {
            Some(best.map_or(s, |b| b.max(s)))
        })
        .map(|score| (score as f32).clamp(0.0, 1.0))
        .ok_or_else(|| ModelError::InvalidResponse {
            model: model.to_string(),
            reason: "no scored candidates".to_string(),
        })
}

/// Estimated wait from a 503 loading body. The endpoint controls this
/// number, so anything `Duration` cannot represent is dropped rather
/// than trusted.
fn parse_estimated_wait(body: &Value) -> Option<Duration> {
    body.get("estimated_time")
        .and_then(Value::as_f64)
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
}

/// First JSON object of a possibly nested response array.
fn first_object(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.first().and_then(first_object),
        Value::Object(_) => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_summary_response() {
        let value = json!([{"summary_text": "A short summary."}]);
        assert_eq!(parse_summary("m", &value).unwrap(), "A short summary.");
    }

    #[test]
    fn parses_nested_summary_response() {
        let value = json!([[{"summary_text": "Nested form."}]]);
        assert_eq!(parse_summary("m", &value).unwrap(), "Nested form.");
    }

    #[test]
    fn summary_without_text_is_invalid() {
        let err = parse_summary("m", &json!([{"generated_text": "x"}])).unwrap_err();
        assert!(matches!(err, ModelError::InvalidResponse { .. }));
        assert!(parse_summary("m", &json!([])).is_err());
        assert!(parse_summary("m", &json!("plain")).is_err());
    }

    #[test]
    fn parses_flat_sentiment_response() {
        let value = json!([{"label": "POSITIVE", "score": 0.93}]);
        let score = parse_sentiment("m", &value).unwrap();
        assert!((score - 0.93).abs() < 1e-6);
    }

    #[test]
    fn nested_sentiment_takes_highest_candidate() {
        let value = json!([[
            {"label": "NEGATIVE", "score": 0.12},
            {"label": "POSITIVE", "score": 0.88},
        ]]);
        let score = parse_sentiment("m", &value).unwrap();
        assert!((score - 0.88).abs() < 1e-6);
    }

    #[test]
    fn sentiment_scores_are_clamped_to_unit_range() {
        let value = json!([{"label": "POSITIVE", "score": 1.2}]);
        assert_eq!(parse_sentiment("m", &value).unwrap(), 1.0);
    }

    #[test]
    fn sentiment_without_candidates_is_invalid() {
        assert!(parse_sentiment("m", &json!([])).is_err());
        assert!(parse_sentiment("m", &json!({"error": "bad input"})).is_err());
    }

    #[test]
    fn loading_wait_parses_plausible_estimates() {
        let body = json!({"error": "Model m is currently loading", "estimated_time": 20.5});
        assert_eq!(
            parse_estimated_wait(&body),
            Some(Duration::from_millis(20_500))
        );
    }

    #[test]
    fn loading_wait_drops_unrepresentable_estimates() {
        // Values a Duration cannot hold must come back as None, never
        // abort the request path.
        let huge = json!({"error": "Model is loading", "estimated_time": 1e20});
        assert_eq!(parse_estimated_wait(&huge), None);
        let negative = json!({"estimated_time": -3.0});
        assert_eq!(parse_estimated_wait(&negative), None);
        let wrong_type = json!({"estimated_time": "soon"});
        assert_eq!(parse_estimated_wait(&wrong_type), None);
        assert_eq!(parse_estimated_wait(&Value::Null), None);
    }

    #[test]
    fn base_url_override_applies() {
        let client = HfClient::new(SecretString::from("tok"))
            .unwrap()
            .with_base_url("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
