//! Scored subsequence matching.
//!
//! A single left-to-right pass over the haystack. Each pattern character is
//! matched greedily, but the haystack character it is attributed to stays
//! *pending* until the scan moves on: if the same letter shows up again with
//! a better context (after a separator, on a camelCase hump, right after
//! another match) before the next pattern character is found, the later one
//! takes its place.
//!
//! Scoring rewards:
//! - matches adjacent to the previous match,
//! - matches right after `_` or a space, or at the start of the haystack,
//! - uppercase matches right after a lowercase character (camelCase),
//!
//! and charges one point for every haystack character left out of the match.
//!
//! # Example:
//! ```
//! use fuzzysearch::contains_scored;
//!
//! let result = contains_scored("MyFile.txt", "mf");
//! assert!(result.matched);
//! assert_eq!(result.indices, [0, 2]);
//!
//! let tight = contains_scored("hello_world", "hw");
//! let loose = contains_scored("xhXelXloXwoXrXld", "hw");
//! assert!(tight.score > loose.score);
//! ```

use serde::Serialize;

use crate::fuzzy_matcher::util::{fold_lower, is_lower, is_separator, is_upper};
use crate::fuzzy_matcher::{FuzzyMatcher, IndexType, MatchIndices, ScoreType};

// ---------------------------------------------------------------------------
// Score constants
// ---------------------------------------------------------------------------

/// Bonus for a match right after the previous match.
const ADJACENCY_BONUS: ScoreType = 5;

/// Bonus for a match after a separator (or at the start of the haystack).
const SEPARATOR_BONUS: ScoreType = 10;

/// Bonus for an uppercase match right after a lowercase character.
const CAMEL_BONUS: ScoreType = 10;

/// Penalty for every haystack character before the first match.
const LEADING_LETTER_PENALTY: ScoreType = 0;

/// Cap on the total leading letter penalty. Penalties are negative, so the
/// cap is applied with `max`.
const MAX_LEADING_LETTER_PENALTY: ScoreType = 0;

/// Penalty for every haystack character that is not part of the match.
const UNMATCHED_LETTER_PENALTY: ScoreType = -1;

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Outcome of [`contains_scored`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoredMatch {
    /// Whether every pattern character was found, in order
    pub matched: bool,
    /// Relevance of the match, higher is better
    pub score: ScoreType,
    /// Character indices of the committed matches, strictly increasing
    pub indices: MatchIndices,
}

// ---------------------------------------------------------------------------
// Scan state
// ---------------------------------------------------------------------------

/// Best haystack letter found so far for the pattern character being matched.
#[derive(Debug, Clone, Copy)]
struct BestLetter {
    lower: char,
    index: IndexType,
    score: ScoreType,
}

#[derive(Debug)]
struct ScanState {
    score: ScoreType,
    pattern_idx: usize,
    prev_matched: bool,
    prev_lower: bool,
    // the start of the haystack counts as following a separator
    prev_separator: bool,
    best: Option<BestLetter>,
    indices: MatchIndices,
}

impl ScanState {
    fn new(pattern_len: usize) -> Self {
        Self {
            score: 0,
            pattern_idx: 0,
            prev_matched: false,
            prev_lower: false,
            prev_separator: true,
            best: None,
            indices: Vec::with_capacity(pattern_len),
        }
    }

    /// Move the pending letter, if any, into the committed match.
    fn commit(&mut self) {
        if let Some(best) = self.best.take() {
            self.score += best.score;
            self.indices.push(best.index);
        }
    }

    fn step(&mut self, index: IndexType, ch: char, pattern: &[char]) {
        let lower = fold_lower(ch);
        let pattern_lower = pattern.get(self.pattern_idx).map(|&p| fold_lower(p));

        let next_match = pattern_lower == Some(lower);
        let rematch = self.best.is_some_and(|best| best.lower == lower);

        // The pattern moved on while a letter was pending, or the pattern
        // asks for the pending letter again: either way its slot is final.
        let advanced = next_match && self.best.is_some();
        let pattern_repeat = self.best.is_some_and(|best| Some(best.lower) == pattern_lower);
        if advanced || pattern_repeat {
            self.commit();
        }

        if next_match || rematch {
            if self.pattern_idx == 0 {
                let penalty = ScoreType::max(index as ScoreType * LEADING_LETTER_PENALTY, MAX_LEADING_LETTER_PENALTY);
                self.score += penalty;
            }

            let mut new_score = 0;
            if self.prev_matched {
                new_score += ADJACENCY_BONUS;
            }
            if self.prev_separator {
                new_score += SEPARATOR_BONUS;
            }
            if self.prev_lower && is_upper(ch) {
                new_score += CAMEL_BONUS;
            }

            if next_match {
                self.pattern_idx += 1;
            }

            let best_score = self.best.map_or(0, |best| best.score);
            if new_score >= best_score {
                if self.best.is_some() {
                    // the displaced letter is now unmatched
                    self.score += UNMATCHED_LETTER_PENALTY;
                }
                self.best = Some(BestLetter {
                    lower,
                    index,
                    score: new_score,
                });
            }

            self.prev_matched = true;
        } else {
            self.score += UNMATCHED_LETTER_PENALTY;
            self.prev_matched = false;
        }

        self.prev_lower = is_lower(ch);
        self.prev_separator = is_separator(ch);
    }

    fn finish(mut self, pattern_len: usize) -> ScoredMatch {
        self.commit();
        ScoredMatch {
            matched: self.pattern_idx == pattern_len,
            score: self.score,
            indices: self.indices,
        }
    }
}

/// Match `pattern` against `haystack` as a case-insensitive subsequence and score the match.
///
/// Unlike [`contains`](crate::contains), empty strings get no special
/// treatment: an empty pattern vacuously matches any haystack (scoring one
/// unmatched letter penalty per haystack character).
pub fn contains_scored(haystack: &str, pattern: &str) -> ScoredMatch {
    let pattern: Vec<char> = pattern.chars().collect();
    let mut state = ScanState::new(pattern.len());

    for (index, ch) in haystack.chars().enumerate() {
        state.step(index, ch, &pattern);
    }

    let result = state.finish(pattern.len());
    trace!(
        "scored {:?} in {:?}: matched={} score={} indices={:?}",
        pattern.iter().collect::<String>(),
        haystack,
        result.matched,
        result.score,
        result.indices
    );
    result
}

// ---------------------------------------------------------------------------
// Public matcher struct
// ---------------------------------------------------------------------------

/// [`FuzzyMatcher`] backed by [`contains_scored`].
///
/// Follows the boundary policy of [`contains`](crate::contains): an empty
/// choice or an empty pattern never matches.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubsequenceMatcher;

impl SubsequenceMatcher {
    /// Create a new matcher.
    pub fn new() -> Self {
        debug!("Initialized subsequence matcher");
        Self
    }
}

impl FuzzyMatcher for SubsequenceMatcher {
    fn fuzzy_indices(&self, choice: &str, pattern: &str) -> Option<(ScoreType, MatchIndices)> {
        if choice.is_empty() || pattern.is_empty() {
            return None;
        }
        let result = contains_scored(choice, pattern);
        result.matched.then_some((result.score, result.indices))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
