//! Semantic chunking: the full pipeline.
//!
//! ```text
//! text
//!  │ split_sentences                  [S0, S1, ..., Sn-1]
//!  │ Embedder::embed (one batch)      [E0, E1, ..., En-1]
//!  │ SimilarityTrace                  raw cos(Ei, Ei+1), then smoothed
//!  │ BoundaryDetector                 [0, b1, ..., n]
//!  │ normalize                        merge < min, split > max
//!  ▼ assemble                         [Chunk 1, Chunk 2, ...]
//! ```
//!
//! Every stage consumes the previous one in full; nothing streams. The only
//! call that can block or fail is the embedding request, and its error is
//! returned unchanged.
//!
//! ## Degenerate Input
//!
//! - No sentences: no chunks.
//! - One sentence: one chunk, and the embedder is not called.
//!
//! ## Threshold Selection
//!
//! | Threshold | Effect |
//! |-----------|--------|
//! | 0.3 | Only sharp topic changes |
//! | 0.5 | Balanced; used by the news preset |
//! | 0.75 | Sensitive; relies on the size pass to merge fragments |

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::boundary::{Boundaries, BoundaryDetector, TransitionCues};
use crate::budget::{WordBudget, WordBudgetError};
use crate::chunk::{assemble, Chunk};
use crate::embed::Embedder;
use crate::normalize::normalize;
use crate::sentence::split_sentences;
use crate::similarity::SimilarityTrace;
use crate::{Error, Result};

/// Tunable parameters of a [`SemanticChunker`].
///
/// Deserializable with missing fields taking their defaults:
///
/// ```rust
/// use seams::ChunkerConfig;
///
/// let config: ChunkerConfig =
///     serde_json::from_str(r#"{ "similarity_threshold": 0.5 }"#).unwrap();
/// assert_eq!(config.similarity_threshold, 0.5);
/// assert_eq!(config.window_size, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerConfig {
    /// Smoothed similarity below this may start a new chunk.
    pub similarity_threshold: f32,
    /// Segments with fewer words are merged into their successor.
    pub min_chunk_words: usize,
    /// Segments with more words are split on sentence boundaries.
    pub max_chunk_words: usize,
    /// Moving-average window over the similarity trace.
    pub window_size: usize,
    /// Transition phrases that may start a new chunk.
    pub cues: TransitionCues,
}

impl ChunkerConfig {
    /// Settings for long news transcripts: threshold 0.5, 200 to 500 words.
    pub fn news() -> Self {
        Self {
            similarity_threshold: 0.5,
            min_chunk_words: 200,
            max_chunk_words: 500,
            ..Self::default()
        }
    }

    /// The word bounds as a validated [`WordBudget`].
    ///
    /// # Errors
    ///
    /// Returns an error if `min_chunk_words > max_chunk_words`.
    pub fn budget(&self) -> std::result::Result<WordBudget, WordBudgetError> {
        WordBudget::new(self.min_chunk_words, self.max_chunk_words)
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        let budget = WordBudget::default();
        Self {
            similarity_threshold: 0.75,
            min_chunk_words: budget.min(),
            max_chunk_words: budget.max(),
            window_size: 3,
            cues: TransitionCues::default(),
        }
    }
}

/// Intermediate result of stages 1 to 4, before size normalization.
#[derive(Debug, Clone)]
pub struct Segmentation<'a> {
    /// Sentences of the input, in order.
    pub sentences: Vec<&'a str>,
    /// Adjacent-sentence similarity; empty for fewer than two sentences.
    pub trace: SimilarityTrace,
    /// Topic boundaries, sentinel included.
    pub boundaries: Boundaries,
}

impl Segmentation<'_> {
    /// Segment texts: each boundary range's sentences joined by single spaces.
    pub fn segments(&self) -> Vec<String> {
        self.boundaries
            .ranges()
            .map(|range| self.sentences[range].join(" "))
            .collect()
    }
}

/// Splits documents into topic-coherent, size-bounded chunks.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use seams::{ChunkerConfig, RandomEmbedder, SemanticChunker};
///
/// // Seeded random vectors stand in for a real model here.
/// let embedder = Arc::new(RandomEmbedder::seeded(32, 42));
/// let chunker = SemanticChunker::with_config(embedder, ChunkerConfig::news()).unwrap();
///
/// let chunks = chunker.chunk("Rain hit the city. Roads closed. Schools shut.").unwrap();
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].chunk_id, 1);
/// assert_eq!(chunks[0].sentence_count, 3);
/// ```
pub struct SemanticChunker {
    embedder: Arc<dyn Embedder>,
    config: ChunkerConfig,
    budget: WordBudget,
}

impl SemanticChunker {
    /// Create a chunker with the default configuration.
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        let config = ChunkerConfig::default();
        Self {
            embedder,
            budget: WordBudget::default(),
            config,
        }
    }

    /// Create a chunker with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured word bounds are inverted.
    pub fn with_config(embedder: Arc<dyn Embedder>, config: ChunkerConfig) -> Result<Self> {
        let budget = config.budget()?;
        Ok(Self {
            embedder,
            config,
            budget,
        })
    }

    /// Set the similarity threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.config.similarity_threshold = threshold;
        self
    }

    /// Set the smoothing window.
    #[must_use]
    pub fn with_window(mut self, window: usize) -> Self {
        self.config.window_size = window;
        self
    }

    /// Set the word bounds.
    #[must_use]
    pub fn with_budget(mut self, budget: WordBudget) -> Self {
        self.config.min_chunk_words = budget.min();
        self.config.max_chunk_words = budget.max();
        self.budget = budget;
        self
    }

    /// Set the transition cues.
    #[must_use]
    pub fn with_cues(mut self, cues: TransitionCues) -> Self {
        self.config.cues = cues;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Whether the embedder is the random-vector fallback.
    pub fn is_degraded(&self) -> bool {
        self.embedder.is_degraded()
    }

    /// Run segmentation, embedding, similarity and boundary detection.
    ///
    /// # Errors
    ///
    /// Propagates embedder failures, and rejects an embedder that returns the
    /// wrong number of vectors.
    pub fn segment<'a>(&self, text: &'a str) -> Result<Segmentation<'a>> {
        let sentences = split_sentences(text);
        let detector = BoundaryDetector::new(self.config.similarity_threshold)
            .with_cues(self.config.cues.clone());

        if sentences.len() < 2 {
            let boundaries = detector.detect(&sentences, &[]);
            return Ok(Segmentation {
                sentences,
                trace: SimilarityTrace::default(),
                boundaries,
            });
        }

        let embeddings = self.embedder.embed(&sentences)?;
        if embeddings.len() != sentences.len() {
            return Err(Error::EmbeddingCount {
                expected: sentences.len(),
                actual: embeddings.len(),
            });
        }

        let trace = SimilarityTrace::from_embeddings(&embeddings, self.config.window_size);
        let boundaries = detector.detect(&sentences, &trace.smoothed);

        let stats = trace.stats();
        tracing::debug!(
            sentences = sentences.len(),
            dimension = embeddings.first().map_or(0, Vec::len),
            mean_similarity = stats.map(|s| s.mean),
            min_similarity = stats.map(|s| s.min),
            max_similarity = stats.map(|s| s.max),
            segments = boundaries.segment_count(),
            boundaries = ?boundaries.as_slice(),
            degraded = self.embedder.is_degraded(),
            "detected topic boundaries"
        );

        Ok(Segmentation {
            sentences,
            trace,
            boundaries,
        })
    }

    /// Split `text` into chunks.
    ///
    /// Empty or whitespace-only input yields no chunks.
    ///
    /// # Errors
    ///
    /// Same as [`segment`](Self::segment).
    pub fn chunk(&self, text: &str) -> Result<Vec<Chunk>> {
        let segmentation = self.segment(text)?;
        let segments = normalize(segmentation.segments(), self.budget);
        Ok(assemble(segments))
    }
}

impl std::fmt::Debug for SemanticChunker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticChunker")
            .field("config", &self.config)
            .field("degraded", &self.embedder.is_degraded())
            .finish_non_exhaustive()
    }
}
