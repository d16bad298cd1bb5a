//! Chunk records: the chunker's output and its downstream enrichment.
//!
//! ## Record Shape
//!
//! Serialized chunks keep the field names existing pipelines read:
//!
//! ```json
//! {
//!   "chunk_id": 1,
//!   "text": "Heavy rain hit the capital. Roads were closed.",
//!   "word_count": 8,
//!   "sentence_count": 2
//! }
//! ```
//!
//! Downstream stages add `previous_text`, `list_entity` and `summarize`
//! alongside these fields via [`AnnotatedChunk`].

use serde::{Deserialize, Serialize};

use crate::sentence::{count_words, split_sentences};

/// A contiguous run of sentences treated as one unit downstream.
///
/// ```rust
/// use seams::Chunk;
///
/// let chunk = Chunk::new(1, "Rain fell. Roads closed.");
/// assert_eq!(chunk.word_count, 4);
/// assert_eq!(chunk.sentence_count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// 1-based position in the document.
    pub chunk_id: usize,
    /// Sentences joined by single spaces.
    pub text: String,
    /// Whitespace-separated word count of `text`.
    pub word_count: usize,
    /// Sentence count of `text`, by re-segmentation.
    pub sentence_count: usize,
}

impl Chunk {
    /// Build a chunk, deriving the counts from `text`.
    pub fn new(chunk_id: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            chunk_id,
            word_count: count_words(&text),
            sentence_count: split_sentences(&text).len(),
            text,
        }
    }

    /// The chunk's sentences.
    pub fn sentences(&self) -> Vec<&str> {
        split_sentences(&self.text)
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ id: {}, words: {}, sentences: {} }}",
            self.chunk_id, self.word_count, self.sentence_count
        )
    }
}

/// Number final segments from 1 and wrap them as chunks.
pub fn assemble(segments: Vec<String>) -> Vec<Chunk> {
    segments
        .into_iter()
        .enumerate()
        .map(|(i, text)| Chunk::new(i + 1, text))
        .collect()
}

/// A named entity found in chunk text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// The entity's surface text.
    pub text: String,
    /// Its label, e.g. "person" or "organization".
    pub label: String,
}

impl Entity {
    /// Create an entity.
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// A chunk plus the fields attached by entity extraction and summarization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedChunk {
    /// The chunker's record.
    #[serde(flatten)]
    pub chunk: Chunk,
    /// Text of the preceding chunk; empty for the first.
    pub previous_text: String,
    /// Entities extracted from `chunk.text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_entity: Option<Vec<Entity>>,
    /// Generated summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summarize: Option<String>,
}

impl AnnotatedChunk {
    /// Wrap a chunk with its predecessor's text.
    pub fn new(chunk: Chunk, previous_text: impl Into<String>) -> Self {
        Self {
            chunk,
            previous_text: previous_text.into(),
            list_entity: None,
            summarize: None,
        }
    }

    /// The predecessor's text, or `None` for the first chunk.
    pub fn previous(&self) -> Option<&str> {
        if self.previous_text.is_empty() {
            None
        } else {
            Some(&self.previous_text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_counts() {
        let chunk = Chunk::new(3, "One two three. Four five! Six?");
        assert_eq!(chunk.chunk_id, 3);
        assert_eq!(chunk.word_count, 6);
        assert_eq!(chunk.sentence_count, 3);
        assert_eq!(chunk.sentences(), vec!["One two three.", "Four five!", "Six?"]);
    }

    #[test]
    fn test_assemble_is_one_based() {
        let chunks = assemble(vec!["A.".into(), "B. C.".into()]);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chunk_id, 1);
        assert_eq!(chunks[1].chunk_id, 2);
        assert_eq!(chunks[1].sentence_count, 2);
    }

    #[test]
    fn test_assemble_empty() {
        assert!(assemble(Vec::new()).is_empty());
    }

    #[test]
    fn test_previous_of_first_chunk() {
        let first = AnnotatedChunk::new(Chunk::new(1, "A."), "");
        assert_eq!(first.previous(), None);
        let second = AnnotatedChunk::new(Chunk::new(2, "B."), "A.");
        assert_eq!(second.previous(), Some("A."));
    }

    #[test]
    fn test_display() {
        let chunk = Chunk::new(1, "Hello there.");
        assert_eq!(chunk.to_string(), "Chunk { id: 1, words: 2, sentences: 1 }");
    }
}
