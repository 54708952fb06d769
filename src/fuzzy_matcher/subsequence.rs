//! Plain subsequence test.
//!
//! Greedy left-to-right consumption of the haystack finds a subsequence if
//! and only if one exists, so a single pass without backtracking suffices.
//!
//! # Example:
//! ```
//! use fuzzysearch::contains;
//!
//! assert!(contains("Hello", "HLO"));
//! assert!(contains("abc", "ac"));
//! assert!(!contains("abc", "ca"));
//! // empty inputs never match
//! assert!(!contains("abc", ""));
//! ```

use crate::fuzzy_matcher::util::eq_ignore_case;

/// Whether `pattern` is a case-insensitive subsequence of `haystack`.
///
/// Returns `false` when either string is empty, even though an empty pattern
/// is trivially a subsequence.
pub fn contains(haystack: &str, pattern: &str) -> bool {
    if haystack.is_empty() || pattern.is_empty() {
        return false;
    }

    let mut pattern_chars = pattern.chars().peekable();
    for ch in haystack.chars() {
        if pattern_chars.next_if(|&p| eq_ignore_case(p, ch)).is_some() && pattern_chars.peek().is_none() {
            return true;
        }
    }

    false
}
