//! News Transcript Chunking
//!
//! Chunk a short bulletin, link chunks, and print the JSON records a
//! downstream summarizer would consume.
//!
//! ```bash
//! RUST_LOG=seams=debug cargo run --example news_chunking
//! ```

use std::sync::Arc;

use seams::{link_previous, ChunkerConfig, Embedder, SemanticChunker, WordBudget};
use tracing_subscriber::EnvFilter;

/// Topic-keyword vectors, enough to show boundaries without a model download.
struct KeywordEmbedder;

impl Embedder for KeywordEmbedder {
    fn embed(&self, sentences: &[&str]) -> seams::Result<Vec<Vec<f32>>> {
        const TOPICS: [&[&str]; 3] = [
            &["rain", "flood", "river", "evacuat"],
            &["council", "budget", "fare", "bus"],
            &["gold", "price", "market", "rally"],
        ];
        Ok(sentences
            .iter()
            .map(|s| {
                let lower = s.to_lowercase();
                TOPICS
                    .iter()
                    .map(|words| words.iter().filter(|w| lower.contains(*w)).count() as f32)
                    .chain(std::iter::once(0.05))
                    .collect()
            })
            .collect())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bulletin = "Heavy rain flooded the lower districts overnight. \
        The river rose two metres by dawn. \
        Rescue teams evacuated families from the riverbank. \
        Flood barriers held in the old quarter. \
        The city council approved the transport budget this morning. \
        Bus fares stay frozen until spring. \
        The budget also funds two new bus lines. \
        Council members voted eleven to four. \
        In other news, gold prices climbed for a third day. \
        The market rally lifted mining shares. \
        Analysts expect prices to hold through the week.";

    let chunker = SemanticChunker::with_config(Arc::new(KeywordEmbedder), ChunkerConfig::news())?
        .with_budget(WordBudget::new(10, 40)?);

    let segmentation = chunker.segment(bulletin)?;
    println!("Sentences: {}", segmentation.sentences.len());
    println!("Boundaries: {:?}\n", segmentation.boundaries.as_slice());

    let chunks = chunker.chunk(bulletin)?;
    for chunk in &chunks {
        println!("{chunk}");
    }

    // Entity extraction and summarization would fill the remaining fields.
    let linked = link_previous(chunks);
    println!("\n{}", serde_json::to_string_pretty(&linked)?);

    Ok(())
}
