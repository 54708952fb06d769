//! Character classification shared by the matchers.
//!
//! Case folding is locale-invariant and strictly one character to one
//! character: when `char::to_lowercase` or `char::to_uppercase` expands to
//! several characters (e.g. `'ß'.to_uppercase()` is `"SS"`), the character
//! is left as is.

use std::fmt::Write;

/// Lowercase form of `ch`, or `ch` itself when it has no single-char lowercase.
#[inline]
pub fn fold_lower(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_lowercase();
    }
    single(ch.to_lowercase()).unwrap_or(ch)
}

/// Uppercase form of `ch`, or `ch` itself when it has no single-char uppercase.
#[inline]
pub fn fold_upper(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_uppercase();
    }
    single(ch.to_uppercase()).unwrap_or(ch)
}

#[inline]
fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    match chars.next() {
        None => Some(first),
        Some(_) => None,
    }
}

/// Whether `ch` has a case at all, i.e. its lower and upper forms differ.
#[inline]
pub fn is_cased(ch: char) -> bool {
    fold_lower(ch) != fold_upper(ch)
}

/// A cased character already in its lowercase form.
#[inline]
pub fn is_lower(ch: char) -> bool {
    ch == fold_lower(ch) && is_cased(ch)
}

/// A cased character already in its uppercase form.
#[inline]
pub fn is_upper(ch: char) -> bool {
    ch == fold_upper(ch) && is_cased(ch)
}

/// Word separators: a match right after one of these gets the separator bonus.
#[inline]
pub fn is_separator(ch: char) -> bool {
    matches!(ch, '_' | ' ')
}

/// Case-insensitive character equality.
#[inline]
pub fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || fold_lower(a) == fold_lower(b)
}

/// Render `text` with every character at one of `indices` wrapped in brackets.
///
/// `indices` are character indices and must be sorted, as the matchers return them.
///
/// ```
/// use fuzzysearch::fuzzy_matcher::util::wrap_matches;
///
/// assert_eq!(wrap_matches("axbycz", &[0, 2, 4]), "[a]x[b]y[c]z");
/// ```
pub fn wrap_matches(text: &str, indices: &[usize]) -> String {
    let mut ret = String::with_capacity(text.len() + 2 * indices.len());
    let mut pending = indices.iter().peekable();
    for (idx, ch) in text.chars().enumerate() {
        if pending.next_if(|&&i| i == idx).is_some() {
            let _ = write!(ret, "[{ch}]");
        } else {
            ret.push(ch);
        }
    }
    ret
}

/// Assert that `pattern` ranks `choices` in the given order (best first).
#[cfg(test)]
pub(crate) fn assert_order(matcher: &dyn super::FuzzyMatcher, pattern: &str, choices: &[&'static str]) {
    let result = filter_and_sort(matcher, pattern, choices);

    if result != choices {
        // debug print
        println!("pattern: {pattern}");
        for &choice in choices.iter() {
            if let Some((score, indices)) = matcher.fuzzy_indices(choice, pattern) {
                println!("{}: {:?}", score, wrap_matches(choice, &indices));
            } else {
                println!("NO MATCH for {choice}");
            }
        }
    }

    assert_eq!(result, choices);
}

#[cfg(test)]
fn filter_and_sort(matcher: &dyn super::FuzzyMatcher, pattern: &str, lines: &[&'static str]) -> Vec<&'static str> {
    let mut lines_with_score: Vec<(i64, &'static str)> = lines
        .iter()
        .filter_map(|&s| matcher.fuzzy_match(s, pattern).map(|score| (score, s)))
        .collect();
    // stable sort keeps input order on ties
    lines_with_score.sort_by_key(|(score, _)| -score);
    lines_with_score.into_iter().map(|(_, string)| string).collect()
}
