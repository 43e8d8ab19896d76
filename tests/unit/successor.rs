//! Successor search on Levenshtein automata.

use levseek::{CacheMode, LevenshteinAutomaton};

fn succ(lev: &LevenshteinAutomaton, query: &str) -> Option<String> {
    lev.smallest_accepted_at_or_after(query)
}

#[test]
fn test_smallest_overall() {
    let lev = LevenshteinAutomaton::new("ab", 1);
    // Insert '\0' in front: nothing smaller is one edit from "ab".
    assert_eq!(succ(&lev, "").as_deref(), Some("\0ab"));
}

#[test]
fn test_accepted_queries_return_themselves() {
    let lev = LevenshteinAutomaton::new("ab", 1);
    for q in ["ab", "b", "a", "ac", "xab", "abz"] {
        assert_eq!(succ(&lev, q).as_deref(), Some(q), "{:?}", q);
    }
}

#[test]
fn test_backtracks_to_sibling_edge() {
    let lev = LevenshteinAutomaton::new("ab", 1);
    assert_eq!(succ(&lev, "ac\0").as_deref(), Some("acb"));
    assert_eq!(succ(&lev, "acc").as_deref(), Some("ad"));
}

#[test]
fn test_strictly_greater_via_nul() {
    let lev = LevenshteinAutomaton::new("dog", 1);
    let after = succ(&lev, "dog\0").unwrap();
    assert!(after.as_str() > "dog");
    assert_eq!(after, "dog\0");
}

#[test]
fn test_exhausted() {
    let lev = LevenshteinAutomaton::new("ab", 0);
    assert_eq!(succ(&lev, "ab\0"), None);
    assert_eq!(succ(&lev, "b"), None);
    assert_eq!(succ(&lev, "\u{10FFFF}"), None);
}

#[test]
fn test_tail_at_max_char() {
    // Nothing comes after U+10FFFF, so the search has to back out past it.
    let lev = LevenshteinAutomaton::new("ba", 1);
    assert_eq!(succ(&lev, "b\u{10FFFF}").as_deref(), Some("b\u{10FFFF}"));
    assert_eq!(succ(&lev, "b\u{10FFFF}\0").as_deref(), Some("b\u{10FFFF}a"));
    assert_eq!(succ(&lev, "b\u{10FFFF}a\0").as_deref(), Some("ca"));
}

#[test]
fn test_skips_surrogate_gap() {
    let lev = LevenshteinAutomaton::new("x", 1);
    // Every single char is accepted; the one after U+D7FF is U+E000.
    assert_eq!(succ(&lev, "\u{D7FF}y").as_deref(), Some("\u{E000}"));
}

#[test]
fn test_results_stable_across_cache_modes() {
    let queries = ["", "a", "fo", "fooa", "foz", "g", "wood", "zzz"];
    let mut lev = LevenshteinAutomaton::new("food", 2);

    let first: Vec<Option<String>> = queries.iter().map(|q| succ(&lev, q)).collect();
    let stats = lev.dfa().cache_stats();
    assert_eq!(stats.path_entries, queries.len());

    let second: Vec<Option<String>> = queries.iter().map(|q| succ(&lev, q)).collect();
    assert_eq!(first, second);

    lev.clear_caches();
    assert_eq!(lev.dfa().cache_stats().edge_entries, 0);

    lev.set_cache_mode(CacheMode::Disabled);
    let uncached: Vec<Option<String>> = queries.iter().map(|q| succ(&lev, q)).collect();
    assert_eq!(first, uncached);
    assert_eq!(lev.dfa().cache_stats().path_entries, 0);
}

#[test]
fn test_clone_starts_with_cold_caches() {
    let lev = LevenshteinAutomaton::new("food", 1);
    let _ = succ(&lev, "f");
    let cloned = lev.clone();
    assert_eq!(cloned.dfa().cache_stats().path_entries, 0);
    assert_eq!(succ(&cloned, "f"), succ(&lev, "f"));
}
