//! Fuzzy matching algorithms and implementations.
//!
//! This module provides the subsequence test and the scored subsequence
//! match, along with the [`FuzzyMatcher`] trait front ends consume them
//! through.

/// Scored subsequence matching (greedy with one letter of lookahead)
pub mod scored;
/// Plain case-insensitive subsequence test
pub mod subsequence;
pub mod util;

pub use scored::{ScoredMatch, SubsequenceMatcher, contains_scored};
pub use subsequence::contains;

pub(crate) type IndexType = usize;
pub(crate) type ScoreType = i64;

/// Character indices of the matched haystack characters, one per pattern character.
pub type MatchIndices = Vec<IndexType>;

/// Trait for fuzzy matching text patterns against choices
pub trait FuzzyMatcher: Send + Sync {
    /// fuzzy match choice with pattern, and return the score & matched indices of characters
    fn fuzzy_indices(&self, choice: &str, pattern: &str) -> Option<(ScoreType, MatchIndices)>;

    /// fuzzy match choice with pattern, and return the score of matching
    fn fuzzy_match(&self, choice: &str, pattern: &str) -> Option<ScoreType> {
        self.fuzzy_indices(choice, pattern).map(|(score, _)| score)
    }

    /// Fuzzy match and return (score, begin_char_index, end_char_index).
    ///
    /// `begin` is the character index of the first matched pattern character,
    /// `end` is the character index of the last matched pattern character.
    fn fuzzy_match_range(&self, choice: &str, pattern: &str) -> Option<(ScoreType, usize, usize)> {
        self.fuzzy_indices(choice, pattern).map(|(score, indices)| {
            let begin = indices.first().copied().unwrap_or(0);
            let end = indices.last().copied().unwrap_or(0);
            (score, begin, end)
        })
    }
}
