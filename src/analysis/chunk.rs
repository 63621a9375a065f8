//! Word-window chunking for fixed-input-length models.
//!
//! Two modes over one walk: sentence-aligned windows for summarization
//! (a chunk that would cut mid-sentence is trimmed back to its last
//! period, and the next chunk starts at the relocated boundary) and plain
//! fixed windows for sentiment. Neither mode drops a word; chunking only
//! places boundaries.

/// A contiguous word-bounded slice of a message body.
///
/// Ephemeral: created and consumed within one analysis call. Document
/// order is preserved through `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    /// Zero-based position in document order.
    pub index: usize,
    /// Chunk text, words joined by single spaces.
    pub text: String,
    /// Number of words in `text`.
    pub word_count: usize,
}

/// Sentence-aligned chunking (summarization path).
///
/// Windows hold at most `max_words` words. Every window except a trailing
/// partial one is trimmed to end at the last period-terminated word inside
/// it, when one exists; the words after that boundary open the next chunk.
/// A window with no period is kept whole. Total, stateless, and always
/// terminating: each chunk consumes at least one word.
pub fn chunk(text: &str, max_words: usize) -> Vec<TextChunk> {
    walk(text, max_words, true)
}

/// Plain fixed windows, no boundary relocation (sentiment path).
pub fn chunk_fixed(text: &str, max_words: usize) -> Vec<TextChunk> {
    walk(text, max_words, false)
}

fn walk(text: &str, max_words: usize, align_sentences: bool) -> Vec<TextChunk> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let max_words = max_words.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < words.len() {
        let end = (start + max_words).min(words.len());
        let mut take = end - start;
        // A trailing partial window is never trimmed.
        if align_sentences && end < words.len() {
            if let Some(rel) = words[start..end].iter().rposition(|w| ends_sentence(w)) {
                take = rel + 1;
            }
        }
        let slice = &words[start..start + take];
        chunks.push(TextChunk {
            index: chunks.len(),
            text: slice.join(" "),
            word_count: take,
        });
        start += take;
    }
    chunks
}

/// A word closes a sentence iff it ends with a period. Mid-word periods
/// ("3.14", "v2.0") do not count.
fn ends_sentence(word: &str) -> bool {
    word.ends_with('.')
}
