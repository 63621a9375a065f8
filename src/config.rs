//! Configuration types.

use crate::error::ConfigError;

/// Full analyzer configuration.
///
/// `Default` carries the tuned constants; [`AnalyzerConfig::from_env`]
/// applies `MAILSENSE_*` overrides on top.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    pub summary: SummaryConfig,
    pub sentiment: SentimentConfig,
    pub key_points: KeyPointConfig,
}

impl AnalyzerConfig {
    /// Defaults with any `MAILSENSE_*` overrides from the process
    /// environment. A variable that is set but does not parse is a hard
    /// error, not a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let s = &mut config.summary;
        override_var(&get, "MAILSENSE_SUMMARY_CHUNK_WORDS", &mut s.chunk_words)?;
        override_var(&get, "MAILSENSE_SUMMARY_INPUT_CAP_WORDS", &mut s.model_input_cap_words)?;
        override_var(&get, "MAILSENSE_SUMMARY_MAX_LENGTH", &mut s.target_max_length)?;
        override_var(&get, "MAILSENSE_SUMMARY_MIN_LENGTH", &mut s.target_min_length)?;
        override_var(&get, "MAILSENSE_MIN_SUMMARIZE_WORDS", &mut s.min_summarize_words)?;
        let s = &mut config.sentiment;
        override_var(&get, "MAILSENSE_SENTIMENT_CHUNK_WORDS", &mut s.chunk_words)?;
        override_var(&get, "MAILSENSE_SENTIMENT_INPUT_CAP_CHARS", &mut s.model_input_cap_chars)?;
        override_var(&get, "MAILSENSE_POSITIVE_THRESHOLD", &mut s.positive_threshold)?;
        override_var(&get, "MAILSENSE_NEGATIVE_THRESHOLD", &mut s.negative_threshold)?;
        override_var(&get, "MAILSENSE_NUM_POINTS", &mut config.key_points.num_points)?;
        Ok(config)
    }
}

/// Replace `slot` with the parsed value of `key`, when set.
fn override_var<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    slot: &mut T,
) -> Result<(), ConfigError> {
    let Some(raw) = get(key) else {
        return Ok(());
    };
    *slot = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("cannot parse {raw:?}"),
    })?;
    Ok(())
}

/// Summarization pipeline settings.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Word budget per sentence-aligned chunk.
    pub chunk_words: usize,
    /// Hard cap on words handed to the model in one call.
    pub model_input_cap_words: usize,
    /// Upper bound for requested summary length; also the word budget the
    /// final concatenation is truncated to.
    pub target_max_length: usize,
    /// Lower bound for requested summary length.
    pub target_min_length: usize,
    /// Word-count pivot: texts shorter than this are returned unchanged,
    /// and a chunk must exceed it to be sent to the model.
    pub min_summarize_words: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            chunk_words: 500,
            model_input_cap_words: 1000,
            target_max_length: 130,
            target_min_length: 30,
            min_summarize_words: 50,
        }
    }
}

/// Sentiment pipeline settings.
#[derive(Debug, Clone)]
pub struct SentimentConfig {
    /// Word budget per fixed chunk.
    pub chunk_words: usize,
    /// Hard cap on characters handed to the classifier in one call.
    pub model_input_cap_chars: usize,
    /// Mean chunk score strictly above this reads positive.
    pub positive_threshold: f32,
    /// Mean chunk score strictly below this reads negative.
    pub negative_threshold: f32,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            chunk_words: 500,
            model_input_cap_chars: 512,
            positive_threshold: 0.6,
            negative_threshold: 0.4,
        }
    }
}

/// Key-point extraction settings.
#[derive(Debug, Clone)]
pub struct KeyPointConfig {
    /// How many sentences to select per message.
    pub num_points: usize,
}

impl Default for KeyPointConfig {
    fn default() -> Self {
        Self { num_points: 5 }
    }
}
