//! Error types for seams.

use crate::budget::WordBudgetError;

/// Errors that can occur during chunking or downstream annotation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid word budget.
    #[error(transparent)]
    Budget(#[from] WordBudgetError),

    /// Embedding backend failed while serving a request.
    #[error("embedding error: {0}")]
    Embedding(String),

    /// Embedder returned a different number of vectors than sentences.
    #[error("embedder returned {actual} vectors for {expected} sentences")]
    EmbeddingCount {
        /// Number of sentences submitted.
        expected: usize,
        /// Number of vectors returned.
        actual: usize,
    },

    /// Entity extraction failed.
    #[error("entity extraction error: {0}")]
    Extraction(String),

    /// Summarization failed.
    #[error("summarization error: {0}")]
    Summarization(String),
}

/// Result type for seams operations.
pub type Result<T> = std::result::Result<T, Error>;
