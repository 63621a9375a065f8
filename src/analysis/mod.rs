//! Message analysis: normalization, chunking, summarization, sentiment
//! classification, and key-point extraction, composed per message by
//! [`EmailAnalyzer`].

pub mod analyzer;
pub mod chunk;
pub mod key_points;
pub mod normalize;
pub mod sentiment;
pub mod summarize;
pub mod types;

pub use analyzer::EmailAnalyzer;
pub use types::{KeyPoint, MessageRecord, ProcessResult, SentimentLabel, SentimentVerdict};
