//! Linguistic building blocks: sentence segmentation and the lexical
//! capabilities (tokenize / tag / stopword membership) the key-point
//! extractor depends on.
//!
//! The scorer only needs coarse word classes, so the bundled English
//! implementation is a heuristic lexicon, not a statistical tagger. It
//! lives behind [`Lexicon`] so a heavier tagger can be swapped in without
//! touching the scoring code.

mod english;

pub use english::EnglishLexicon;

use std::sync::LazyLock;

use regex::Regex;

/// End of a sentence: a run of terminating punctuation followed by
/// whitespace. The trailing remainder of a text is treated as a final
/// sentence even without a terminator.
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+\s+").unwrap());

/// Split text into sentences.
///
/// Terminating punctuation stays attached to its sentence. Segments with
/// no alphanumeric content (stray punctuation, separators) are dropped.
/// Empty input yields an empty vector.
pub fn sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in SENTENCE_END.find_iter(text) {
        push_segment(&mut out, &text[last..m.end()]);
        last = m.end();
    }
    push_segment(&mut out, &text[last..]);
    out
}

fn push_segment(out: &mut Vec<String>, raw: &str) {
    let s = raw.trim();
    if s.chars().any(char::is_alphanumeric) {
        out.push(s.to_string());
    }
}

// ── Lexical capabilities ────────────────────────────────────────────

/// Coarse part-of-speech categories. Only the distinctions the key-point
/// scorer rewards are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Other,
}

/// Lexical capabilities required by the key-point extractor.
///
/// Implementations must be stateless per call: tagging one sentence may
/// not affect tagging the next.
pub trait Lexicon: Send + Sync {
    /// Split a sentence into lowercase word tokens.
    fn tokenize(&self, sentence: &str) -> Vec<String>;

    /// Coarse category for one lowercase token.
    fn tag(&self, token: &str) -> PosTag;

    /// Whether a lowercase token is a stopword.
    fn is_stopword(&self, token: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminators() {
        let text = "First sentence here. Second one follows! Third asks a question? Done";
        let got = sentences(text);
        assert_eq!(
            got,
            vec![
                "First sentence here.",
                "Second one follows!",
                "Third asks a question?",
                "Done",
            ]
        );
    }

    #[test]
    fn keeps_unterminated_remainder() {
        assert_eq!(sentences("no terminator at all"), vec!["no terminator at all"]);
    }

    #[test]
    fn empty_and_punctuation_only_yield_nothing() {
        assert!(sentences("").is_empty());
        assert!(sentences("... !!! ???").is_empty());
    }

    #[test]
    fn collapses_punctuation_runs() {
        let got = sentences("Wait... really?! Yes.");
        assert_eq!(got, vec!["Wait...", "really?!", "Yes."]);
    }

    #[test]
    fn final_terminator_without_trailing_space() {
        let got = sentences("One sentence. Another sentence.");
        assert_eq!(got, vec!["One sentence.", "Another sentence."]);
    }
}
