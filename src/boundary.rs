//! Topic boundary detection.
//!
//! Two signals decide where a new chunk starts:
//!
//! 1. **Low similarity**: the smoothed similarity between sentence `i` and
//!    `i + 1` falls below the threshold.
//! 2. **Transition cue**: sentence `i + 1` contains a discourse marker such as
//!    "meanwhile" or "in other news".
//!
//! Embeddings catch gradual drift; cues catch explicit transitions that a
//! news writer signals in words but that embed close to their neighbours.
//!
//! ## Minimum Spans
//!
//! Each rule needs some distance from the most recent boundary before it may
//! fire again:
//!
//! | Rule | Condition |
//! |------|-----------|
//! | Low similarity | `i > 0` and `i - last >= 3` |
//! | Transition cue | `i - last >= 2` |
//!
//! `last` is whatever boundary was appended most recently, by either rule.
//!
//! ```text
//! smoothed:  0.9  0.9  0.4  0.8  0.3  0.9  0.9  0.9  0.9
//! i:          0    1    2    3    4    5    6    7    8
//!                       ↑         ↑
//!             2 - 0 < 3, skip     4 - 0 >= 3, boundary at 5
//!
//! boundaries: [0, 5, 10]
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Distance from the last boundary required by the low-similarity rule.
pub const LOW_SIMILARITY_SPAN: usize = 3;

/// Distance from the last boundary required by the transition-cue rule.
pub const TRANSITION_CUE_SPAN: usize = 2;

/// Lexical markers of a topic transition.
///
/// Matching is case-insensitive substring containment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TransitionCues(Vec<String>);

impl TransitionCues {
    /// Build a cue list. Phrases are lower-cased; empty phrases are dropped.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            phrases
                .into_iter()
                .map(|p| p.as_ref().trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        )
    }

    /// No cues; only the similarity rule applies.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// Transition markers for English news text.
    pub fn english() -> Self {
        Self::new([
            "next",
            "meanwhile",
            "in other news",
            "another story",
            "switching to",
            "moreover",
            "on the other hand",
            "regarding",
        ])
    }

    /// Transition markers for Vietnamese news text.
    pub fn vietnamese() -> Self {
        Self::new([
            "tiếp theo",
            "bên cạnh đó",
            "trong khi đó",
            "một tin khác",
            "chuyển sang",
            "theo đó",
            "ngoài ra",
            "mặt khác",
            "về vấn đề",
        ])
    }

    /// Whether `sentence` contains any cue.
    pub fn matches(&self, sentence: &str) -> bool {
        if self.0.is_empty() {
            return false;
        }
        let lower = sentence.to_lowercase();
        self.0.iter().any(|cue| lower.contains(cue.as_str()))
    }

    /// The cue phrases, lower-cased.
    pub fn phrases(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for TransitionCues {
    fn from(phrases: Vec<String>) -> Self {
        Self::new(phrases)
    }
}

impl From<TransitionCues> for Vec<String> {
    fn from(cues: TransitionCues) -> Self {
        cues.0
    }
}

impl Default for TransitionCues {
    fn default() -> Self {
        Self::english()
    }
}

/// Strictly increasing sentence indices partitioning a document.
///
/// Always starts at 0 and ends at the sentence count, so consecutive pairs
/// form half-open ranges `[b_i, b_{i+1})` with no gaps or overlaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundaries(Vec<usize>);

impl Boundaries {
    /// The boundary indices, sentinel included.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of sentences covered.
    pub fn sentence_count(&self) -> usize {
        self.0.last().copied().unwrap_or(0)
    }

    /// Number of segments (ranges).
    pub fn segment_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Sentence ranges delimited by consecutive boundaries.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.0.windows(2).map(|w| w[0]..w[1])
    }

    /// Consume into the raw index list.
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    fn start() -> Self {
        Self(vec![0])
    }

    fn last(&self) -> usize {
        self.0.last().copied().unwrap_or(0)
    }

    /// Append unless it would repeat the current last boundary.
    fn push(&mut self, index: usize) -> bool {
        if index > self.last() {
            self.0.push(index);
            true
        } else {
            false
        }
    }
}

/// Detects topic boundaries from a smoothed similarity trace and cue phrases.
///
/// ## Example
///
/// ```rust
/// use seams::{BoundaryDetector, TransitionCues};
///
/// let detector = BoundaryDetector::new(0.5).with_cues(TransitionCues::none());
/// let sentences = vec!["s."; 10];
/// let smoothed = [0.9, 0.9, 0.4, 0.8, 0.3, 0.9, 0.9, 0.9, 0.9];
///
/// let boundaries = detector.detect(&sentences, &smoothed);
/// assert_eq!(boundaries.as_slice(), &[0, 5, 10]);
/// ```
#[derive(Debug, Clone)]
pub struct BoundaryDetector {
    threshold: f32,
    cues: TransitionCues,
}

impl BoundaryDetector {
    /// Create a detector with the given similarity threshold and English cues.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            cues: TransitionCues::default(),
        }
    }

    /// Replace the cue list.
    #[must_use]
    pub fn with_cues(mut self, cues: TransitionCues) -> Self {
        self.cues = cues;
        self
    }

    /// The similarity threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Scan the trace and return boundaries, sentinel included.
    ///
    /// `smoothed` has one value per adjacent sentence pair. Only pairs present
    /// in both inputs are scanned.
    pub fn detect(&self, sentences: &[&str], smoothed: &[f32]) -> Boundaries {
        let mut boundaries = Boundaries::start();

        let pairs = sentences.len().saturating_sub(1);

        for (i, &sim) in smoothed.iter().take(pairs).enumerate() {
            if sim < self.threshold
                && i > 0
                && i.saturating_sub(boundaries.last()) >= LOW_SIMILARITY_SPAN
                && boundaries.push(i + 1)
            {
                tracing::trace!(index = i + 1, similarity = sim, "low-similarity boundary");
            }

            if i.saturating_sub(boundaries.last()) >= TRANSITION_CUE_SPAN
                && sentences
                    .get(i + 1)
                    .is_some_and(|next| self.cues.matches(next))
                && boundaries.push(i + 1)
            {
                tracing::trace!(index = i + 1, "transition-cue boundary");
            }
        }

        boundaries.push(sentences.len());
        boundaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filler(n: usize) -> Vec<&'static str> {
        vec!["Plain sentence."; n]
    }

    #[test]
    fn test_golden_low_similarity() {
        let detector = BoundaryDetector::new(0.5).with_cues(TransitionCues::none());
        let smoothed = [0.9, 0.9, 0.4, 0.8, 0.3, 0.9, 0.9, 0.9, 0.9];
        let boundaries = detector.detect(&filler(10), &smoothed);
        assert_eq!(boundaries.as_slice(), &[0, 5, 10]);
        assert_eq!(boundaries.segment_count(), 2);
    }

    #[test]
    fn test_low_similarity_never_fires_at_zero() {
        let detector = BoundaryDetector::new(0.5).with_cues(TransitionCues::none());
        let boundaries = detector.detect(&filler(2), &[0.0]);
        assert_eq!(boundaries.as_slice(), &[0, 2]);
    }

    #[test]
    fn test_span_measured_from_latest_boundary() {
        let detector = BoundaryDetector::new(0.5).with_cues(TransitionCues::none());
        // Fires at i=3 (boundary 4); next eligible i is 7 (7 - 4 >= 3).
        let smoothed = [0.9, 0.9, 0.9, 0.1, 0.1, 0.1, 0.1, 0.1, 0.9];
        let boundaries = detector.detect(&filler(10), &smoothed);
        assert_eq!(boundaries.as_slice(), &[0, 4, 8, 10]);
    }

    #[test]
    fn test_transition_cue() {
        let detector = BoundaryDetector::new(0.0);
        let sentences = [
            "The council met today.",
            "It approved the budget.",
            "Members debated for hours.",
            "Meanwhile, the river flooded.",
            "Roads were closed.",
        ];
        let smoothed = [0.9; 4];
        let boundaries = detector.detect(&sentences, &smoothed);
        assert_eq!(boundaries.as_slice(), &[0, 3, 5]);
    }

    #[test]
    fn test_cue_too_close_is_ignored() {
        let detector = BoundaryDetector::new(0.0);
        let sentences = ["Intro.", "Meanwhile, more.", "Tail.", "End."];
        let boundaries = detector.detect(&sentences, &[0.9; 3]);
        // i = 0 for "Meanwhile": 0 - 0 < 2.
        assert_eq!(boundaries.as_slice(), &[0, 4]);
    }

    #[test]
    fn test_rules_do_not_double_fire() {
        let detector = BoundaryDetector::new(0.5);
        let sentences = [
            "One.",
            "Two.",
            "Three.",
            "Four.",
            "In other news, five.",
            "Six.",
        ];
        let smoothed = [0.9, 0.9, 0.9, 0.1, 0.9];
        let boundaries = detector.detect(&sentences, &smoothed);
        assert_eq!(boundaries.as_slice(), &[0, 4, 6]);
    }

    #[test]
    fn test_cue_then_low_similarity() {
        let detector = BoundaryDetector::new(0.5);
        let sentences = [
            "A.", "B.", "C.", "Moreover, D.", "E.", "F.", "G.", "H.",
        ];
        // Cue fires at i=2 (boundary 3); low similarity at i=6 (6 - 3 >= 3).
        let smoothed = [0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.2];
        let boundaries = detector.detect(&sentences, &smoothed);
        assert_eq!(boundaries.as_slice(), &[0, 3, 7, 8]);
    }

    #[test]
    fn test_degenerate_inputs() {
        let detector = BoundaryDetector::new(0.5);
        assert_eq!(detector.detect(&[], &[]).as_slice(), &[0]);
        assert_eq!(detector.detect(&["Only."], &[]).as_slice(), &[0, 1]);
    }

    #[test]
    fn test_ranges_partition() {
        let detector = BoundaryDetector::new(0.5).with_cues(TransitionCues::none());
        let smoothed = [0.9, 0.9, 0.4, 0.8, 0.3, 0.9, 0.9, 0.9, 0.9];
        let boundaries = detector.detect(&filler(10), &smoothed);
        let ranges: Vec<_> = boundaries.ranges().collect();
        assert_eq!(ranges, vec![0..5, 5..10]);
        assert_eq!(boundaries.sentence_count(), 10);
    }

    #[test]
    fn test_cue_matching_is_case_insensitive() {
        let cues = TransitionCues::new(["In Other News"]);
        assert!(cues.matches("IN OTHER NEWS, rain."));
        assert!(!cues.matches("Nothing here."));
        assert!(!TransitionCues::none().matches("meanwhile"));
    }

    #[test]
    fn test_vietnamese_cues() {
        let cues = TransitionCues::vietnamese();
        assert!(cues.matches("Trong khi đó, giá vàng tăng."));
        assert!(!cues.matches("Meanwhile, gold rose."));
    }
}
