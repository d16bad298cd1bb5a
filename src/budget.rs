//! Chunk size bounds, in words.
//!
//! ## The Problem
//!
//! Boundaries found from topic shifts know nothing about size. A dense news
//! bulletin yields two-sentence fragments; a long feature yields one huge
//! segment. Downstream models want something in between:
//!
//! - Too small: an entity extractor or summarizer sees no context
//! - Too large: the prompt overflows, or the summary drops half the story
//!
//! `WordBudget` is the operating range the size normalizer steers toward:
//!
//! - `min`: segments below this are merged into their successor.
//! - `max`: segments above this are re-split on sentence boundaries.
//!
//! Both are soft. A merged segment may still be small, and a single sentence
//! longer than `max` is never cut.

use std::cmp::Ordering;

/// Minimum and maximum words per chunk.
///
/// # Examples
///
/// ```rust
/// use seams::WordBudget;
/// use std::cmp::Ordering;
///
/// let budget = WordBudget::new(200, 500).unwrap();
/// assert_eq!(budget.fits(150), Ordering::Less);
/// assert_eq!(budget.fits(300), Ordering::Equal);
/// assert_eq!(budget.fits(501), Ordering::Greater);
///
/// // Range syntax
/// let budget = WordBudget::from(50..401);
/// assert_eq!(budget.min(), 50);
/// assert_eq!(budget.max(), 400); // exclusive end
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordBudget {
    min: usize,
    max: usize,
}

impl WordBudget {
    /// Create a budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, WordBudgetError> {
        if min > max {
            Err(WordBudgetError::MinExceedsMax { min, max })
        } else {
            Ok(Self { min, max })
        }
    }

    /// Segments with fewer words are merged forward.
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Segments with more words are split.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Where a word count sits relative to the budget.
    ///
    /// - `Ordering::Less`: below `min`, merge candidate
    /// - `Ordering::Equal`: within `min..=max`
    /// - `Ordering::Greater`: above `max`, split candidate
    #[must_use]
    pub fn fits(&self, words: usize) -> Ordering {
        if words < self.min {
            Ordering::Less
        } else if words > self.max {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Whether adding `additional` words to `current` would exceed `max`.
    #[must_use]
    pub fn would_overflow(&self, current: usize, additional: usize) -> bool {
        current.saturating_add(additional) > self.max
    }
}

impl Default for WordBudget {
    fn default() -> Self {
        Self { min: 50, max: 400 }
    }
}

impl From<std::ops::Range<usize>> for WordBudget {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            min: range.start,
            max: range.end.saturating_sub(1).max(range.start),
        }
    }
}

impl From<std::ops::RangeInclusive<usize>> for WordBudget {
    fn from(range: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            min: *range.start(),
            max: (*range.end()).max(*range.start()),
        }
    }
}

/// Error when configuring a word budget.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordBudgetError {
    /// `min` must not exceed `max`.
    #[error("min words ({min}) must be <= max words ({max})")]
    MinExceedsMax {
        /// The requested minimum.
        min: usize,
        /// The requested maximum.
        max: usize,
    },
}
