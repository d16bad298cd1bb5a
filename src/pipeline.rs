//! Downstream enrichment: previous-chunk linkage, entities, summaries.
//!
//! The chunker's output feeds two external models, one chunk at a time:
//!
//! ```text
//! Chunk k ──┬─ EntityExtractor ─────────► list_entity
//!           │
//!           └─ Summarizer(text,            ► summarize
//!                         text of chunk k-1,
//!                         list_entity,
//!                         target ratio)
//! ```
//!
//! Chunk `k - 1`'s text gives the summarizer context without asking it to
//! summarize that text again. The first chunk has no predecessor.
//!
//! Both collaborators are traits so a test can stub them and a caller can
//! back them with any model or service.

use crate::chunk::{AnnotatedChunk, Chunk, Entity};
use crate::Result;

/// Summary length as a fraction of chunk length.
pub const DEFAULT_SUMMARY_RATIO: f32 = 0.2;

/// Finds labelled spans in text.
pub trait EntityExtractor: Send + Sync {
    /// Extract entities whose label is one of `labels`.
    fn extract(&self, text: &str, labels: &[&str]) -> Result<Vec<Entity>>;
}

/// Produces a summary of one chunk.
pub trait Summarizer: Send + Sync {
    /// Summarize `current`, using `previous` only as context.
    ///
    /// `target_ratio` bounds the summary relative to `current`'s length.
    fn summarize(
        &self,
        current: &str,
        previous: Option<&str>,
        entities: &[Entity],
        target_ratio: f32,
    ) -> Result<String>;
}

/// Runs an extractor on each `.`-separated piece of the text.
///
/// Span-labelling models often degrade on long inputs; this keeps each call
/// to roughly one sentence. Results are concatenated in text order.
#[derive(Debug, Clone)]
pub struct PerSentence<E> {
    inner: E,
}

impl<E> PerSentence<E> {
    /// Wrap an extractor.
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    /// The wrapped extractor.
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: EntityExtractor> EntityExtractor for PerSentence<E> {
    fn extract(&self, text: &str, labels: &[&str]) -> Result<Vec<Entity>> {
        let mut entities = Vec::new();
        for piece in text.split('.').filter(|p| !p.trim().is_empty()) {
            entities.extend(self.inner.extract(piece, labels)?);
        }
        Ok(entities)
    }
}

/// Attach each chunk's predecessor text.
///
/// ```rust
/// use seams::{link_previous, Chunk};
///
/// let linked = link_previous(vec![Chunk::new(1, "A."), Chunk::new(2, "B.")]);
/// assert_eq!(linked[0].previous_text, "");
/// assert_eq!(linked[1].previous_text, "A.");
/// ```
pub fn link_previous(chunks: Vec<Chunk>) -> Vec<AnnotatedChunk> {
    let mut previous = String::new();
    chunks
        .into_iter()
        .map(|chunk| {
            let previous_text = std::mem::replace(&mut previous, chunk.text.clone());
            AnnotatedChunk::new(chunk, previous_text)
        })
        .collect()
}

/// Link, extract entities and summarize every chunk, in order.
///
/// # Errors
///
/// Stops at the first extractor or summarizer failure.
pub fn annotate(
    chunks: Vec<Chunk>,
    extractor: &dyn EntityExtractor,
    summarizer: &dyn Summarizer,
    labels: &[&str],
    target_ratio: f32,
) -> Result<Vec<AnnotatedChunk>> {
    let mut annotated = link_previous(chunks);

    for item in &mut annotated {
        let entities = extractor.extract(&item.chunk.text, labels)?;
        let summary = summarizer.summarize(&item.chunk.text, item.previous(), &entities, target_ratio)?;
        tracing::debug!(
            chunk_id = item.chunk.chunk_id,
            entities = entities.len(),
            summary_words = crate::count_words(&summary),
            "annotated chunk"
        );
        item.list_entity = Some(entities);
        item.summarize = Some(summary);
    }

    Ok(annotated)
}
