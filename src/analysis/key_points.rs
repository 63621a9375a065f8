//! Extractive key-point selection.
//!
//! Sentences are scored by weighted content-word counts plus position
//! and length bonuses; the top scorers are returned re-sorted into
//! document order. Purely lexical, no model calls involved.

use std::sync::Arc;

use crate::lang::{self, Lexicon, PosTag};

use super::types::KeyPoint;

/// Weight for a non-stopword noun or verb token.
const CONTENT_WEIGHT: i32 = 2;
/// Weight for a non-stopword adjective or adverb token.
const MODIFIER_WEIGHT: i32 = 1;
/// Bonus for the opening sentence.
const FIRST_BONUS: i32 = 3;
/// Bonus for the closing sentence (when it is not also the opener).
const LAST_BONUS: i32 = 2;
/// Bonus for sentences inside the readable length band.
const LENGTH_BONUS: i32 = 2;
/// Length band bounds in tokens, both exclusive.
const LENGTH_BAND_MIN: usize = 5;
const LENGTH_BAND_MAX: usize = 25;

struct Scored {
    index: usize,
    score: i32,
    text: String,
}

/// Scores and selects key sentences using a pluggable lexicon.
pub struct KeyPointExtractor {
    lexicon: Arc<dyn Lexicon>,
}

impl KeyPointExtractor {
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Extract up to `num_points` key sentences, in document order.
    ///
    /// Duplicated sentences are scored and selected per occurrence. When
    /// the text has no more sentences than requested, everything comes
    /// back. Never errors: unusable input yields an empty vector.
    pub fn extract(&self, text: &str, num_points: usize) -> Vec<KeyPoint> {
        let sentences = lang::sentences(text);
        if sentences.is_empty() || num_points == 0 {
            return Vec::new();
        }

        let total = sentences.len();
        let mut scored: Vec<Scored> = sentences
            .into_iter()
            .enumerate()
            .map(|(index, text)| Scored {
                score: self.score(&text, index, total),
                index,
                text,
            })
            .collect();

        // Stable sort: equal scores keep the earlier occurrence ahead.
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(num_points);
        scored.sort_by_key(|s| s.index);

        scored
            .into_iter()
            .map(|s| KeyPoint {
                index: s.index,
                text: s.text,
            })
            .collect()
    }

    fn score(&self, sentence: &str, index: usize, total: usize) -> i32 {
        let tokens = self.lexicon.tokenize(sentence);
        let mut score = 0;
        for token in &tokens {
            if self.lexicon.is_stopword(token) {
                continue;
            }
            score += match self.lexicon.tag(token) {
                PosTag::Noun | PosTag::Verb => CONTENT_WEIGHT,
                PosTag::Adjective | PosTag::Adverb => MODIFIER_WEIGHT,
                PosTag::Other => 0,
            };
        }
        if index == 0 {
            score += FIRST_BONUS;
        } else if index + 1 == total {
            score += LAST_BONUS;
        }
        if tokens.len() > LENGTH_BAND_MIN && tokens.len() < LENGTH_BAND_MAX {
            score += LENGTH_BONUS;
        }
        score
    }
}
