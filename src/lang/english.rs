//! Default English lexicon: stopword list plus a heuristic coarse tagger.
//!
//! The key-point scorer rewards nouns and verbs identically, so
//! gerund/participle ambiguity ("meeting", "attached") never changes a
//! score; what the tagger must get right is separating content words from
//! function words and catching the common adjective/adverb shapes.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::{Lexicon, PosTag};

/// A word token: lowercase alphanumeric runs, keeping internal apostrophes.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z0-9]+(?:'[a-z0-9]+)*").unwrap());

/// Common English stopwords, including the contracted forms that show up
/// in informal email text.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "can't", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had", "has",
    "have", "haven't", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his",
    "how", "i", "if", "in", "into", "is", "isn't", "it", "its", "itself", "just", "me", "more",
    "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or",
    "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should",
    "shouldn't", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "wasn't", "we", "were", "weren't", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "won't", "would",
    "wouldn't", "you", "your", "yours", "yourself", "yourselves",
];

/// Closed-class words: articles, pronouns, prepositions, conjunctions,
/// determiners. None of them belongs to a scored category.
const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "if", "than", "that", "this",
    "these", "those", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
    "them", "my", "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours",
    "theirs", "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves",
    "in", "on", "at", "by", "for", "from", "to", "of", "with", "without", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "under",
    "over", "up", "down", "out", "off", "as", "per", "via", "not", "no", "any", "some",
    "each", "every", "either", "neither", "both", "all", "few", "many", "much", "most",
    "more", "less", "own", "same", "such", "what", "which", "who", "whom", "whose", "when",
    "where", "why", "how", "because", "while", "until", "unless",
];

/// High-frequency verbs, mostly irregular forms no suffix rule would catch.
const COMMON_VERBS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "done", "doing", "will", "would", "shall", "should", "can", "could",
    "may", "might", "must", "go", "goes", "went", "gone", "going", "get", "gets", "got",
    "make", "makes", "made", "take", "takes", "took", "taken", "come", "comes", "came", "see",
    "sees", "saw", "seen", "know", "knows", "knew", "known", "think", "thinks", "thought",
    "want", "wants", "need", "needs", "give", "gives", "gave", "given", "find", "finds",
    "found", "tell", "tells", "told", "say", "says", "said", "ask", "asks", "let", "lets",
    "put", "puts", "keep", "keeps", "kept", "send", "sends", "sent", "meet", "meets", "met",
    "pay", "pays", "paid", "run", "runs", "ran", "bring", "brings", "brought", "begin",
    "begins", "began", "begun", "show", "shows", "hear", "hears", "heard", "leave", "leaves",
    "left", "feel", "feels", "felt", "seem", "seems", "try", "tries", "tried",
];

/// Adverbs without the -ly shape.
const BARE_ADVERBS: &[&str] = &[
    "very", "too", "quite", "rather", "almost", "always", "never", "often", "sometimes",
    "usually", "soon", "already", "still", "again", "away", "back", "here", "there", "now",
    "then", "today", "tomorrow", "yesterday", "together", "instead", "maybe", "perhaps",
    "however", "also", "well",
];

/// Heuristic English lexicon. Construct once and share; all lookups are
/// read-only.
pub struct EnglishLexicon {
    stopwords: HashSet<&'static str>,
    function_words: HashSet<&'static str>,
    verbs: HashSet<&'static str>,
    adverbs: HashSet<&'static str>,
}

impl EnglishLexicon {
    pub fn new() -> Self {
        Self {
            stopwords: STOP_WORDS.iter().copied().collect(),
            function_words: FUNCTION_WORDS.iter().copied().collect(),
            verbs: COMMON_VERBS.iter().copied().collect(),
            adverbs: BARE_ADVERBS.iter().copied().collect(),
        }
    }
}

impl Default for EnglishLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon for EnglishLexicon {
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        let lower = sentence.to_lowercase();
        WORD.find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn tag(&self, token: &str) -> PosTag {
        if token.is_empty() || token.starts_with(|c: char| c.is_ascii_digit()) {
            return PosTag::Other;
        }
        if self.function_words.contains(token) {
            return PosTag::Other;
        }
        if self.verbs.contains(token) {
            return PosTag::Verb;
        }
        if self.adverbs.contains(token) {
            return PosTag::Adverb;
        }
        if token.len() > 4 && token.ends_with("ly") {
            return PosTag::Adverb;
        }
        if has_adjective_suffix(token) {
            return PosTag::Adjective;
        }
        if has_verb_suffix(token) {
            return PosTag::Verb;
        }
        // Open-class default.
        PosTag::Noun
    }

    fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }
}

fn has_adjective_suffix(token: &str) -> bool {
    const SUFFIXES: &[&str] = &[
        "ous", "ful", "ive", "able", "ible", "less", "ish", "al", "ic", "ary",
    ];
    token.len() > 4 && SUFFIXES.iter().any(|s| token.ends_with(s))
}

fn has_verb_suffix(token: &str) -> bool {
    (token.len() > 5 && token.ends_with("ing"))
        || (token.len() > 4 && token.ends_with("ed"))
        || (token.len() > 4
            && (token.ends_with("ize") || token.ends_with("ise") || token.ends_with("ify")))
}
