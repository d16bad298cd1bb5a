//! Size normalization: merge small segments, split large ones.
//!
//! Two passes, always in this order:
//!
//! ```text
//! words:     [12]  [80]  [7]  [9]  [950]  [4]
//!
//! merge (min = 50):
//!            [12 + 80]  [7 + 9]  [950]  [4]
//!             ↑ merged once, never re-checked
//!
//! split (max = 400), on sentence boundaries:
//!            [92]  [16]  [~400] [~400] [~150]  [4]
//! ```
//!
//! ## Merge
//!
//! Left to right. A segment below `min` that is not last absorbs its
//! successor, and the scan moves past both. No cascade: the merged segment is
//! not checked again, even if still small. A small last segment stays.
//!
//! ## Split
//!
//! A segment above `max` is re-segmented into sentences which are packed
//! greedily. When the next sentence would overflow `max`, the current
//! sub-chunk is emitted and the sentence starts a new one. A sentence longer
//! than `max` becomes its own oversized sub-chunk.

use std::cmp::Ordering;

use crate::budget::WordBudget;
use crate::sentence::{count_words, split_sentences};

/// Merge each undersized segment into its successor, in one pass.
///
/// ```rust
/// use seams::merge_small;
///
/// let merged = merge_small(vec!["a b".into(), "c".into(), "d e f".into()], 3);
/// assert_eq!(merged, vec!["a b c", "d e f"]);
/// ```
pub fn merge_small(segments: Vec<String>, min_words: usize) -> Vec<String> {
    let mut merged = Vec::with_capacity(segments.len());
    let mut iter = segments.into_iter().peekable();

    while let Some(mut current) = iter.next() {
        if count_words(&current) < min_words {
            if let Some(next) = iter.next() {
                current.push(' ');
                current.push_str(&next);
            }
        }
        merged.push(current);
    }

    merged
}

/// Split each oversized segment into sentence-aligned sub-chunks.
///
/// ```rust
/// use seams::split_large;
///
/// let split = split_large(vec!["One two. Three four. Five.".into()], 4);
/// assert_eq!(split, vec!["One two. Three four.", "Five."]);
/// ```
pub fn split_large(segments: Vec<String>, max_words: usize) -> Vec<String> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        if count_words(&segment) <= max_words {
            result.push(segment);
            continue;
        }

        let mut current: Vec<&str> = Vec::new();
        let mut current_words = 0;

        for sentence in split_sentences(&segment) {
            let words = count_words(sentence);
            if current_words + words > max_words && !current.is_empty() {
                result.push(current.join(" "));
                current.clear();
                current_words = 0;
            }
            current.push(sentence);
            current_words += words;
        }

        if !current.is_empty() {
            result.push(current.join(" "));
        }
    }

    result
}

/// Run both passes against a [`WordBudget`].
pub fn normalize(segments: Vec<String>, budget: WordBudget) -> Vec<String> {
    let before = segments.len();
    let merged = merge_small(segments, budget.min());
    let after_merge = merged.len();
    let split = split_large(merged, budget.max());

    let oversized = split
        .iter()
        .filter(|s| budget.fits(count_words(s)) == Ordering::Greater)
        .count();
    tracing::debug!(
        before,
        after_merge,
        after_split = split.len(),
        oversized,
        "normalized segment sizes"
    );

    split
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["w"; n].join(" ")
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_merge_single_pass_no_cascade() {
        let merged = merge_small(strings(&["a", "b", "c d e"]), 3);
        // "a b" is still small but is not merged again.
        assert_eq!(merged, vec!["a b", "c d e"]);
    }

    #[test]
    fn test_merge_skips_past_absorbed_segment() {
        let merged = merge_small(strings(&["a", "b", "c", "d"]), 3);
        assert_eq!(merged, vec!["a b", "c d"]);
    }

    #[test]
    fn test_merge_keeps_small_last_segment() {
        let merged = merge_small(strings(&["a b c", "d"]), 3);
        assert_eq!(merged, vec!["a b c", "d"]);
    }

    #[test]
    fn test_merge_large_segments_untouched() {
        let input = strings(&["a b c", "d e f"]);
        assert_eq!(merge_small(input.clone(), 3), input);
    }

    #[test]
    fn test_merge_empty() {
        assert!(merge_small(Vec::new(), 10).is_empty());
    }

    #[test]
    fn test_split_greedy_packing() {
        let segment = "A b c. D e. F g h. I.".to_string();
        let split = split_large(vec![segment], 5);
        assert_eq!(split, vec!["A b c. D e.", "F g h. I."]);
    }

    #[test]
    fn test_split_oversized_sentence_kept_whole() {
        let long = format!("{}.", words(10));
        let segment = format!("Short one. {long} Tail.");
        let split = split_large(vec![segment], 4);
        assert_eq!(split.len(), 3);
        assert_eq!(split[0], "Short one.");
        assert_eq!(count_words(&split[1]), 10);
        assert_eq!(split[2], "Tail.");
    }

    #[test]
    fn test_split_leaves_fitting_segments_alone() {
        let input = strings(&["one two three", "four"]);
        assert_eq!(split_large(input.clone(), 3), input);
    }

    #[test]
    fn test_split_1200_words_into_three() {
        // 120 sentences of 10 words each.
        let sentence = format!("{}.", words(10));
        let segment = vec![sentence; 120].join(" ");
        assert_eq!(count_words(&segment), 1200);

        let split = split_large(vec![segment], 500);
        assert!(split.len() >= 3);
        for piece in &split {
            assert!(count_words(piece) <= 500);
        }
        assert_eq!(split.iter().map(|s| count_words(s)).sum::<usize>(), 1200);
    }

    #[test]
    fn test_normalize_merges_then_splits() {
        let budget = WordBudget::new(3, 4).unwrap();
        let segments = strings(&["A.", "B c d. E f g.", "H i j k."]);
        // Merge: "A. B c d. E f g." (7 words), "H i j k." (4 words).
        // Split: "A. B c d." / "E f g.", "H i j k."
        let result = normalize(segments, budget);
        assert_eq!(result, vec!["A. B c d.", "E f g.", "H i j k."]);
    }
}
