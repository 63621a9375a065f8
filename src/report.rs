//! Batch-level aggregation over analysis results.

use std::collections::HashMap;

use serde::Serialize;

use crate::analysis::{ProcessResult, SentimentLabel};

/// How many senders the ranking keeps.
const TOP_SENDERS: usize = 10;

/// Message count for one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenderCount {
    pub sender: String,
    pub count: usize,
}

/// Aggregate view of one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Messages analyzed.
    pub total: usize,
    /// Messages whose verdict read positive.
    pub positive: usize,
    /// Messages whose verdict read negative.
    pub negative: usize,
    /// Messages whose verdict read neutral.
    pub neutral: usize,
    /// Most frequent senders, descending, ties broken by name.
    pub top_senders: Vec<SenderCount>,
}

impl BatchReport {
    /// Aggregate a finished batch. Records without a sender count toward
    /// the totals but stay out of the sender ranking.
    pub fn from_results(results: &[ProcessResult]) -> Self {
        let mut positive = 0;
        let mut negative = 0;
        let mut neutral = 0;
        let mut by_sender: HashMap<&str, usize> = HashMap::new();

        for result in results {
            match result.sentiment.label {
                SentimentLabel::Positive => positive += 1,
                SentimentLabel::Negative => negative += 1,
                SentimentLabel::Neutral => neutral += 1,
            }
            if !result.original.sender.is_empty() {
                *by_sender.entry(result.original.sender.as_str()).or_insert(0) += 1;
            }
        }

        let mut top_senders: Vec<SenderCount> = by_sender
            .into_iter()
            .map(|(sender, count)| SenderCount {
                sender: sender.to_string(),
                count,
            })
            .collect();
        top_senders.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.sender.cmp(&b.sender)));
        top_senders.truncate(TOP_SENDERS);

        Self {
            total: results.len(),
            positive,
            negative,
            neutral,
            top_senders,
        }
    }
}
