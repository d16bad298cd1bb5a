//! Sentence segmentation.
//!
//! Splits text into sentences on terminal punctuation.
//!
//! ## The Rule
//!
//! A sentence ends at `.`, `!` or `?` when the mark is followed by whitespace.
//! The punctuation stays with the sentence it ends; the whitespace run is
//! dropped.
//!
//! ```text
//! "Rain fell.  Roads closed! Why?"
//!            ^^            ^
//!            split         split
//!
//! -> ["Rain fell.", "Roads closed!", "Why?"]
//! ```
//!
//! ## What It Doesn't Do
//!
//! No abbreviation handling. "Dr. Smith" is two sentences. The same segmenter
//! runs again on chunk text (sentence counts, splitting oversized chunks), and
//! sentences rejoined with single spaces must split back exactly as before.
//!
//! Text with no terminal punctuation is one sentence.

use std::sync::LazyLock;

use regex::Regex;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence pattern is valid"));

/// Split text into trimmed, non-empty sentences.
///
/// ## Example
///
/// ```rust
/// use seams::split_sentences;
///
/// let sentences = split_sentences("First one. Second one!  Third?");
/// assert_eq!(sentences, vec!["First one.", "Second one!", "Third?"]);
///
/// assert!(split_sentences("   ").is_empty());
/// assert_eq!(split_sentences("no punctuation here"), vec!["no punctuation here"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END.find_iter(text) {
        // Terminal marks are single-byte ASCII.
        let end = m.start() + 1;
        push_trimmed(&mut sentences, &text[start..end]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, piece: &'a str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

/// Count whitespace-separated words.
///
/// ```rust
/// assert_eq!(seams::count_words("  one two\nthree  "), 3);
/// ```
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
