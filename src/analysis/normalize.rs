//! Body text normalization.
//!
//! Raw email bodies arrive with signature blocks, sign-offs, and automated
//! footers that add noise to every downstream analysis. Normalization is
//! line-based: lines short enough to be boilerplate are dropped, then the
//! survivors are rejoined with collapsed whitespace.

/// Lines with this many words or fewer are dropped.
const MIN_LINE_WORDS: usize = 3;

/// Normalize raw body text for analysis.
///
/// Splits on newlines, drops every line whose word count is ≤ 3, then
/// joins the survivors with single spaces, collapsing all remaining
/// whitespace runs. Empty and whitespace-only input yield an empty
/// string; this function never fails.
pub fn clean(text: &str) -> String {
    let words: Vec<&str> = text
        .lines()
        .filter(|line| line.split_whitespace().count() > MIN_LINE_WORDS)
        .flat_map(str::split_whitespace)
        .collect();
    words.join(" ")
}
