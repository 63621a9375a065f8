//! Error types for mailsense.
//!
//! The analysis operations themselves never return errors; they substitute
//! documented defaults (see `analysis`). Typed errors exist only at the
//! boundaries: model adapter calls, the message source, and configuration.

use std::time::Duration;

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Inference model adapter errors.
///
/// Every variant is best-effort from the pipeline's point of view: a failed
/// chunk falls back locally and the error never crosses the analysis
/// boundary.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Model {model} request failed: {reason}")]
    RequestFailed { model: String, reason: String },

    #[error("Model {model} rate limited, retry after {retry_after:?}")]
    RateLimited {
        model: String,
        retry_after: Option<Duration>,
    },

    #[error("Model {model} is still loading, estimated wait {estimated:?}")]
    Loading {
        model: String,
        estimated: Option<Duration>,
    },

    #[error("Invalid response from model {model}: {reason}")]
    InvalidResponse { model: String, reason: String },

    #[error("Authentication failed for model {model}")]
    AuthFailed { model: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    /// Whether a retry could plausibly succeed without operator action.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited { .. } | Self::Loading { .. } => true,
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

/// Message source errors.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse record on line {line}: {reason}")]
    Parse { line: usize, reason: String },
}
