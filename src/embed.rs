//! Sentence embedding backends.
//!
//! The chunker never talks to a model directly. It holds an [`Embedder`],
//! constructed once by the caller and shared by reference, so tests can use
//! deterministic stub vectors and several chunker configurations can share
//! one loaded model.
//!
//! ## Degraded Mode
//!
//! If the real model cannot be loaded, [`load_or_degrade`] logs a warning and
//! substitutes a [`RandomEmbedder`]. Chunking still completes, but similarity
//! between random vectors carries no meaning, so boundaries come out
//! near-random. [`Embedder::is_degraded`] makes this mode observable.

use std::fmt::Display;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Result;

/// Dimension of the fallback vectors, matching common small sentence models.
pub const DEFAULT_DIMENSION: usize = 384;

/// Maps sentences to fixed-length vectors.
///
/// Implementations must return exactly one vector per input sentence, in
/// input order, all of the same length. The chunker makes a single batched
/// call per document.
pub trait Embedder: Send + Sync {
    /// Embed a batch of sentences.
    fn embed(&self, sentences: &[&str]) -> Result<Vec<Vec<f32>>>;

    /// Whether this embedder is a stand-in for an unavailable model.
    fn is_degraded(&self) -> bool {
        false
    }
}

impl<E: Embedder + ?Sized> Embedder for Arc<E> {
    fn embed(&self, sentences: &[&str]) -> Result<Vec<Vec<f32>>> {
        (**self).embed(sentences)
    }

    fn is_degraded(&self) -> bool {
        (**self).is_degraded()
    }
}

/// Uniform random vectors in `[0, 1)`.
///
/// Used as the degraded-mode fallback. A seeded instance produces the same
/// vectors on every call, which keeps degraded runs reproducible in tests.
#[derive(Debug, Clone)]
pub struct RandomEmbedder {
    dim: usize,
    seed: Option<u64>,
}

impl RandomEmbedder {
    /// Fresh entropy on every call.
    pub fn new(dim: usize) -> Self {
        Self { dim, seed: None }
    }

    /// Same sequence of vectors on every call.
    pub fn seeded(dim: usize, seed: u64) -> Self {
        Self {
            dim,
            seed: Some(seed),
        }
    }

    /// Vector length.
    pub fn dimension(&self) -> usize {
        self.dim
    }
}

impl Default for RandomEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl Embedder for RandomEmbedder {
    fn embed(&self, sentences: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(sentences
            .iter()
            .map(|_| (0..self.dim).map(|_| rng.gen::<f32>()).collect())
            .collect())
    }

    fn is_degraded(&self) -> bool {
        true
    }
}

/// Load an embedder, falling back to random vectors if loading fails.
///
/// The failure is logged at `warn` level and never returned to the caller.
///
/// ```rust
/// use seams::{load_or_degrade, Embedder, RandomEmbedder};
///
/// let embedder = load_or_degrade(
///     || Err::<RandomEmbedder, _>("model files not found"),
///     16,
/// );
/// assert!(embedder.is_degraded());
/// ```
pub fn load_or_degrade<E, F, L>(load: F, dim: usize) -> Arc<dyn Embedder>
where
    E: Embedder + 'static,
    F: FnOnce() -> std::result::Result<E, L>,
    L: Display,
{
    match load() {
        Ok(embedder) => Arc::new(embedder),
        Err(err) => {
            tracing::warn!(
                error = %err,
                dimension = dim,
                "embedding model unavailable, falling back to random vectors; boundaries will be near-random"
            );
            Arc::new(RandomEmbedder::new(dim))
        }
    }
}

#[cfg(feature = "fastembed")]
pub use self::fast::FastEmbedder;

#[cfg(feature = "fastembed")]
mod fast {
    use std::sync::Arc;

    use super::{load_or_degrade, Embedder, DEFAULT_DIMENSION};
    use crate::{Error, Result};

    /// Local ONNX sentence embeddings via fastembed.
    ///
    /// ```rust,ignore
    /// use seams::{FastEmbedder, SemanticChunker};
    ///
    /// // Downloads BGE-small-en (384 dims) on first use; random vectors if that fails.
    /// let embedder = FastEmbedder::load_or_degrade();
    /// let chunker = SemanticChunker::new(embedder);
    /// ```
    pub struct FastEmbedder {
        model: fastembed::TextEmbedding,
    }

    impl FastEmbedder {
        /// Load a model with explicit options.
        ///
        /// # Errors
        ///
        /// Returns an error if the model fails to download or initialize.
        pub fn try_new(options: fastembed::InitOptions) -> Result<Self> {
            let model = fastembed::TextEmbedding::try_new(options)
                .map_err(|e| Error::Embedding(e.to_string()))?;
            Ok(Self { model })
        }

        /// Load fastembed's default model.
        pub fn try_default() -> Result<Self> {
            Self::try_new(Default::default())
        }

        /// Load the default model, or degrade to random vectors.
        pub fn load_or_degrade() -> Arc<dyn Embedder> {
            load_or_degrade(Self::try_default, DEFAULT_DIMENSION)
        }
    }

    impl Embedder for FastEmbedder {
        fn embed(&self, sentences: &[&str]) -> Result<Vec<Vec<f32>>> {
            self.model
                .embed(sentences.to_vec(), None)
                .map_err(|e| Error::Embedding(e.to_string()))
        }
    }

    impl std::fmt::Debug for FastEmbedder {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("FastEmbedder").finish_non_exhaustive()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl Embedder for Fixed {
        fn embed(&self, sentences: &[&str]) -> Result<Vec<Vec<f32>>> {
            Ok(sentences.iter().map(|_| vec![1.0, 0.0]).collect())
        }
    }

    #[test]
    fn test_random_shape() {
        let embedder = RandomEmbedder::new(8);
        let vectors = embedder.embed(&["a", "b", "c"]).unwrap();
        assert_eq!(vectors.len(), 3);
        assert!(vectors.iter().all(|v| v.len() == 8));
        assert!(vectors.iter().flatten().all(|x| (0.0..1.0).contains(x)));
        assert!(embedder.is_degraded());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let embedder = RandomEmbedder::seeded(16, 7);
        let first = embedder.embed(&["x", "y"]).unwrap();
        let second = embedder.embed(&["x", "y"]).unwrap();
        assert_eq!(first, second);

        let other = RandomEmbedder::seeded(16, 8).embed(&["x", "y"]).unwrap();
        assert_ne!(first, other);
    }

    #[test]
    fn test_empty_batch() {
        assert!(RandomEmbedder::default().embed(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_load_success_is_not_degraded() {
        let embedder = load_or_degrade(|| Ok::<_, String>(Fixed), 4);
        assert!(!embedder.is_degraded());
        assert_eq!(embedder.embed(&["a"]).unwrap(), vec![vec![1.0, 0.0]]);
    }

    #[test]
    fn test_load_failure_degrades() {
        let embedder = load_or_degrade(|| Err::<Fixed, _>("no weights"), 4);
        assert!(embedder.is_degraded());
        let vectors = embedder.embed(&["a", "b"]).unwrap();
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].len(), 4);
    }

    #[test]
    fn test_arc_forwards() {
        let shared: Arc<dyn Embedder> = Arc::new(RandomEmbedder::seeded(2, 1));
        assert!(shared.is_degraded());
        assert_eq!(shared.embed(&["a"]).unwrap().len(), 1);
    }
}
