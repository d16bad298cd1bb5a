//! Adjacent-sentence similarity and smoothing.
//!
//! ## Raw Signal
//!
//! For sentences `S0..Sn` with embeddings `E0..En`, the raw trace holds
//! `cos(E_i, E_{i+1})`, one value per adjacent pair:
//!
//! ```text
//! Sentences:    S0    S1    S2    S3
//! Similarities:    0.9   0.2   0.8
//!                        ↑
//!                   dip (maybe noise, maybe a topic shift)
//! ```
//!
//! ## Smoothing
//!
//! A single off-topic sentence produces a sharp one-value dip. A centered
//! moving average flattens those while real transitions, which depress
//! several neighbouring values, survive.
//!
//! The window shrinks at the edges instead of padding:
//!
//! ```text
//! window = 3, raw = [a, b, c, d]
//!
//! smoothed[0] = mean(a, b)
//! smoothed[1] = mean(a, b, c)
//! smoothed[2] = mean(b, c, d)
//! smoothed[3] = mean(c, d)
//! ```
//!
//! A trace shorter than the window is returned unchanged.

/// Cosine similarity between two vectors.
///
/// Returns 0.0 when either vector has zero norm. Values are not clamped.
///
/// ```rust
/// use seams::cosine_similarity;
///
/// assert!((cosine_similarity(&[1.0, 0.0], &[2.0, 0.0]) - 1.0).abs() < 1e-6);
/// assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 3.0]).abs() < 1e-6);
/// ```
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a > 0.0 && norm_b > 0.0 {
        dot / (norm_a * norm_b)
    } else {
        0.0
    }
}

/// Cosine similarity of each adjacent pair of embeddings.
///
/// The result has `embeddings.len() - 1` entries (empty for fewer than two).
pub fn adjacent_similarities(embeddings: &[Vec<f32>]) -> Vec<f32> {
    embeddings
        .windows(2)
        .map(|pair| cosine_similarity(&pair[0], &pair[1]))
        .collect()
}

/// Centered moving average with edge-truncated windows.
///
/// Each output value averages the inputs in
/// `[i - window/2, i + window/2]`, clipped to the sequence.
///
/// ```rust
/// use seams::smooth;
///
/// let smoothed = smooth(&[1.0, 0.0, 1.0, 0.0], 3);
/// assert_eq!(smoothed.len(), 4);
/// assert!((smoothed[0] - 0.5).abs() < 1e-6);
///
/// // Shorter than the window: unchanged.
/// assert_eq!(smooth(&[0.3, 0.9], 3), vec![0.3, 0.9]);
/// ```
pub fn smooth(values: &[f32], window: usize) -> Vec<f32> {
    if values.is_empty() || values.len() < window {
        return values.to_vec();
    }

    let half = window / 2;
    let last = values.len() - 1;

    (0..values.len())
        .map(|i| {
            let span = &values[i.saturating_sub(half)..=(i + half).min(last)];
            span.iter().sum::<f32>() / span.len() as f32
        })
        .collect()
}

/// Raw and smoothed similarity for one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityTrace {
    /// Cosine similarity of each adjacent sentence pair.
    pub raw: Vec<f32>,
    /// `raw` after moving-average smoothing. Same length as `raw`.
    pub smoothed: Vec<f32>,
}

impl SimilarityTrace {
    /// Compute the trace for a sequence of sentence embeddings.
    pub fn from_embeddings(embeddings: &[Vec<f32>], window: usize) -> Self {
        let raw = adjacent_similarities(embeddings);
        let smoothed = smooth(&raw, window);
        Self { raw, smoothed }
    }

    /// Number of adjacent pairs.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the trace is empty (fewer than two sentences).
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Mean, min and max of the smoothed trace, if any.
    pub fn stats(&self) -> Option<TraceStats> {
        if self.smoothed.is_empty() {
            return None;
        }
        let sum: f32 = self.smoothed.iter().sum();
        let min = self.smoothed.iter().copied().fold(f32::INFINITY, f32::min);
        let max = self
            .smoothed
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max);
        Some(TraceStats {
            mean: sum / self.smoothed.len() as f32,
            min,
            max,
        })
    }
}

/// Summary statistics of a smoothed trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceStats {
    /// Arithmetic mean.
    pub mean: f32,
    /// Smallest value.
    pub min: f32,
    /// Largest value.
    pub max: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_cosine_identical_and_opposite() {
        assert!(approx(cosine_similarity(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 1.0));
        assert!(approx(cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]), -1.0));
    }

    #[test]
    fn test_cosine_zero_vector() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_adjacent_length() {
        let embeddings = vec![vec![1.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]];
        let sims = adjacent_similarities(&embeddings);
        assert_eq!(sims.len(), 2);
        assert!(approx(sims[0], 1.0));
        assert!(approx(sims[1], 0.0));
    }

    #[test]
    fn test_adjacent_degenerate() {
        assert!(adjacent_similarities(&[]).is_empty());
        assert!(adjacent_similarities(&[vec![1.0]]).is_empty());
    }

    #[test]
    fn test_smooth_edges_are_asymmetric() {
        let smoothed = smooth(&[0.0, 3.0, 6.0, 9.0, 12.0], 3);
        let expected = [1.5, 3.0, 6.0, 9.0, 10.5];
        for (got, want) in smoothed.iter().zip(expected) {
            assert!(approx(*got, want), "{smoothed:?}");
        }
    }

    #[test]
    fn test_smooth_wider_window() {
        let smoothed = smooth(&[1.0, 1.0, 1.0, 0.0, 1.0, 1.0], 5);
        assert!(approx(smoothed[0], 1.0));
        assert!(approx(smoothed[3], 0.8));
        assert!(approx(smoothed[5], 2.0 / 3.0));
    }

    #[test]
    fn test_smooth_short_input_unchanged() {
        assert_eq!(smooth(&[0.1, 0.2], 3), vec![0.1, 0.2]);
        assert!(smooth(&[], 3).is_empty());
    }

    #[test]
    fn test_smooth_window_one_is_identity() {
        let values = [0.4, 0.1, 0.9];
        assert_eq!(smooth(&values, 1), values.to_vec());
        assert_eq!(smooth(&values, 0), values.to_vec());
    }

    #[test]
    fn test_smooth_suppresses_single_dip() {
        let raw = [0.9, 0.9, 0.1, 0.9, 0.9];
        let smoothed = smooth(&raw, 3);
        assert!(smoothed[2] > raw[2]);
        assert!(approx(smoothed[2], (0.9 + 0.1 + 0.9) / 3.0));
    }

    #[test]
    fn test_trace_stats() {
        let trace = SimilarityTrace {
            raw: vec![0.2, 0.4, 0.9],
            smoothed: vec![0.2, 0.4, 0.9],
        };
        let stats = trace.stats().unwrap();
        assert!(approx(stats.mean, 0.5));
        assert!(approx(stats.min, 0.2));
        assert!(approx(stats.max, 0.9));
        assert!(SimilarityTrace::default().stats().is_none());
    }
}
