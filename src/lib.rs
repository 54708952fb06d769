//! fuzzysearch is a subsequence fuzzy matching library for Rust.
//!
//! It answers whether a pattern's characters appear, in order and ignoring
//! case, in a haystack, and can score how tight the match looks so callers
//! (file pickers, command palettes, search boxes) can rank candidates.
//!
//! # Examples
//!
//! ```
//! use fuzzysearch::{contains, contains_scored};
//!
//! assert!(contains("Hello", "HLO"));
//! assert!(!contains("abc", "ca"));
//!
//! let result = contains_scored("banana", "ana");
//! assert!(result.matched);
//! assert_eq!(result.indices, [1, 2, 3]);
//! ```
//!
//! Both operations are pure: they keep no state between calls and can be used
//! from any number of threads at once.

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub use crate::error::MatchError;
pub use crate::filter::filter;
pub use crate::fuzzy_matcher::{ScoredMatch, SubsequenceMatcher, contains, contains_scored};
pub use crate::options::{FilterOptions, FilterOptionsBuilder, OutputFormat};

mod error;
pub mod filter;
pub mod fuzzy_matcher;
pub mod options;

//------------------------------------------------------------------------------
// Checked entry points

/// [`contains`] for arguments that may be absent.
///
/// Fails with [`MatchError::InvalidArgument`] naming the first absent argument,
/// before any matching happens.
///
/// ```
/// use fuzzysearch::{MatchError, try_contains};
///
/// assert!(try_contains(Some("abc"), Some("ac")).unwrap());
/// assert!(matches!(try_contains(None, Some("a")), Err(MatchError::InvalidArgument("haystack"))));
/// ```
pub fn try_contains(haystack: Option<&str>, pattern: Option<&str>) -> Result<bool, MatchError> {
    let (haystack, pattern) = require(haystack, pattern)?;
    Ok(contains(haystack, pattern))
}

/// [`contains_scored`] for arguments that may be absent.
///
/// Fails with [`MatchError::InvalidArgument`] naming the first absent argument,
/// before any matching happens.
pub fn try_contains_scored(haystack: Option<&str>, pattern: Option<&str>) -> Result<ScoredMatch, MatchError> {
    let (haystack, pattern) = require(haystack, pattern)?;
    Ok(contains_scored(haystack, pattern))
}

fn require<'a>(haystack: Option<&'a str>, pattern: Option<&'a str>) -> Result<(&'a str, &'a str), MatchError> {
    let haystack = haystack.ok_or(MatchError::InvalidArgument("haystack"))?;
    let pattern = pattern.ok_or(MatchError::InvalidArgument("pattern"))?;
    Ok((haystack, pattern))
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_absent_arguments() {
        assert!(matches!(try_contains(None, Some("a")), Err(MatchError::InvalidArgument("haystack"))));
        assert!(matches!(try_contains(Some("a"), None), Err(MatchError::InvalidArgument("pattern"))));
        assert!(matches!(try_contains(None, None), Err(MatchError::InvalidArgument("haystack"))));
        assert!(matches!(
            try_contains_scored(None, Some("a")),
            Err(MatchError::InvalidArgument("haystack"))
        ));
        assert!(matches!(
            try_contains_scored(Some("a"), None),
            Err(MatchError::InvalidArgument("pattern"))
        ));
    }

    #[test]
    fn test_present_arguments() {
        assert!(try_contains(Some("Hello"), Some("hlo")).unwrap());
        assert!(!try_contains(Some(""), Some("")).unwrap());
        let result = try_contains_scored(Some("banana"), Some("ana")).unwrap();
        assert_eq!(result, contains_scored("banana", "ana"));
    }
}
