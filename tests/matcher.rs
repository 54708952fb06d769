use fuzzysearch::fuzzy_matcher::FuzzyMatcher;
use fuzzysearch::{MatchError, SubsequenceMatcher, contains, contains_scored, try_contains, try_contains_scored};

const CANDIDATES: [&str; 12] = [
    "src/lib.rs",
    "src/error.rs",
    "src/filter.rs",
    "src/options.rs",
    "src/bin/main.rs",
    "src/fuzzy_matcher/mod.rs",
    "src/fuzzy_matcher/util.rs",
    "src/fuzzy_matcher/scored.rs",
    "src/fuzzy_matcher/subsequence.rs",
    "benches/matcher_micro.rs",
    "my_other_file.txt",
    "MyFile.txt",
];

fn is_subsequence(haystack: &str, pattern: &str) -> bool {
    let haystack = haystack.to_lowercase();
    let mut rest = haystack.chars();
    pattern.to_lowercase().chars().all(|p| rest.any(|h| h == p))
}

#[test]
fn contains_is_lowercase_subsequence() {
    for haystack in CANDIDATES {
        for pattern in ["s", "slr", "fm", "SRC", "mf", "rs", "txt", "zz", "sfu", "uf"] {
            assert_eq!(
                contains(haystack, pattern),
                is_subsequence(haystack, pattern),
                "{haystack} / {pattern}"
            );
        }
    }
}

#[test]
fn empty_inputs_never_contain() {
    for s in CANDIDATES.iter().copied().chain([""]) {
        assert!(!contains(s, ""));
        assert!(!contains("", s));
    }
}

#[test]
fn scored_agrees_with_contains() {
    for haystack in CANDIDATES {
        for pattern in ["s", "slr", "fm", "SRC", "mf", "rs", "txt", "zz", "sfu", "uf"] {
            let scored = contains_scored(haystack, pattern);
            assert_eq!(scored.matched, contains(haystack, pattern), "{haystack} / {pattern}");
            if scored.matched {
                assert_eq!(scored.indices.len(), pattern.chars().count());
                assert!(scored.indices.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}

#[test]
fn absent_arguments_are_rejected() {
    assert!(matches!(try_contains(None, Some("x")), Err(MatchError::InvalidArgument("haystack"))));
    assert!(matches!(try_contains(Some("x"), None), Err(MatchError::InvalidArgument("pattern"))));
    assert!(matches!(
        try_contains_scored(None, Some("x")),
        Err(MatchError::InvalidArgument("haystack"))
    ));
    assert!(matches!(
        try_contains_scored(Some("x"), None),
        Err(MatchError::InvalidArgument("pattern"))
    ));
}

#[test]
fn empty_pattern_asymmetry_is_preserved() {
    // The plain test rejects an empty pattern; the scored one matches it vacuously.
    assert!(!try_contains(Some("abc"), Some("")).unwrap());
    assert!(try_contains_scored(Some("abc"), Some("")).unwrap().matched);
}

#[test]
fn tighter_match_ranks_first() {
    let mut ranked: Vec<(i64, &str)> = CANDIDATES
        .iter()
        .filter_map(|&c| SubsequenceMatcher.fuzzy_match(c, "mf").map(|score| (score, c)))
        .collect();
    ranked.sort_by_key(|(score, _)| -score);
    assert_eq!(ranked.first().map(|(_, c)| *c), Some("MyFile.txt"));
}

#[test]
fn usable_from_many_threads() {
    let expected = contains_scored("my_other_file.txt", "mof");
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| contains_scored("my_other_file.txt", "mof")))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn scored_match_snapshot() {
    insta::assert_debug_snapshot!(contains_scored("banana", "ana"), @r"
ScoredMatch {
    matched: true,
    score: 8,
    indices: [
        1,
        2,
        3,
    ],
}
");
}
