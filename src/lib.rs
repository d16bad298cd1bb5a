//! # seams
//!
//! Semantic chunking for long, unstructured documents.
//!
//! ## The Problem
//!
//! A two-hour news transcript goes to an entity extractor and a summarizer,
//! one piece at a time. Each piece should cover one story, and each should fit
//! the model's budget. Those goals pull against each other:
//!
//! - Split on topic alone and a dense bulletin yields two-sentence fragments
//! - Split on size alone and stories get cut mid-way, or glued to the next one
//!
//! `seams` finds topic boundaries first, then bends them toward a word budget.
//!
//! ## Pipeline
//!
//! ```text
//! 1. Sentence segmentation   "A. B! C?" -> ["A.", "B!", "C?"]
//! 2. Embedding               one batched call to an Embedder
//! 3. Similarity              cos(E_i, E_i+1), smoothed by moving average
//! 4. Boundary detection      similarity dips + transition phrases
//! 5. Size normalization      merge segments < min, split segments > max
//! 6. Assembly                Chunk { chunk_id, text, word_count, sentence_count }
//! ```
//!
//! Stages are plain functions over owned or borrowed sequences, and each is
//! exported for direct use. Only stage 2 touches a model.
//!
//! ## Boundary Detection
//!
//! ```text
//! Sentences:   S0   S1   S2   S3 | S4   S5   S6   S7
//! Smoothed:      0.9  0.8  0.7  0.3  0.8  0.9  0.9
//!                                 ↑
//!                         below threshold, far enough
//!                         from the last boundary
//! ```
//!
//! A sentence containing a transition phrase ("meanwhile", "in other news")
//! also starts a new chunk, even when its embedding stays close to its
//! neighbours.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use seams::{ChunkerConfig, Embedder, SemanticChunker};
//!
//! // Any model works; this toy one maps each sentence to [len, 1].
//! struct Toy;
//! impl Embedder for Toy {
//!     fn embed(&self, sentences: &[&str]) -> seams::Result<Vec<Vec<f32>>> {
//!         Ok(sentences.iter().map(|s| vec![s.len() as f32, 1.0]).collect())
//!     }
//! }
//!
//! let chunker = SemanticChunker::with_config(Arc::new(Toy), ChunkerConfig::news())?;
//! let chunks = chunker.chunk("Storms hit the coast. Ferries stopped. In other news, rates fell.")?;
//!
//! for chunk in &chunks {
//!     println!("[{}] {} words: {}", chunk.chunk_id, chunk.word_count, chunk.text);
//! }
//! # Ok::<(), seams::Error>(())
//! ```
//!
//! ## Embedding Models (requires `fastembed` feature)
//!
//! ```rust,ignore
//! use seams::{FastEmbedder, SemanticChunker};
//!
//! // Falls back to random vectors, with a warning, if the model can't load.
//! let chunker = SemanticChunker::new(FastEmbedder::load_or_degrade());
//! let chunks = chunker.chunk(long_document)?;
//! ```
//!
//! ## Downstream
//!
//! [`annotate`] links each chunk to its predecessor and runs an
//! [`EntityExtractor`] and a [`Summarizer`] over it. Chunks serialize with
//! serde to the `chunk_id` / `text` / `word_count` / `sentence_count` record
//! shape, plus `previous_text`, `list_entity` and `summarize` once annotated.

mod boundary;
mod budget;
mod chunk;
mod chunker;
mod embed;
mod error;
mod normalize;
mod pipeline;
mod sentence;
mod similarity;

pub use boundary::{
    Boundaries, BoundaryDetector, TransitionCues, LOW_SIMILARITY_SPAN, TRANSITION_CUE_SPAN,
};
pub use budget::{WordBudget, WordBudgetError};
pub use chunk::{assemble, AnnotatedChunk, Chunk, Entity};
pub use chunker::{ChunkerConfig, SemanticChunker, Segmentation};
pub use embed::{load_or_degrade, Embedder, RandomEmbedder, DEFAULT_DIMENSION};
pub use error::{Error, Result};
pub use normalize::{merge_small, normalize, split_large};
pub use pipeline::{
    annotate, link_previous, EntityExtractor, PerSentence, Summarizer, DEFAULT_SUMMARY_RATIO,
};
pub use sentence::{count_words, split_sentences};
pub use similarity::{
    adjacent_similarities, cosine_similarity, smooth, SimilarityTrace, TraceStats,
};

#[cfg(feature = "fastembed")]
pub use embed::FastEmbedder;
