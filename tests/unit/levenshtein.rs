//! Levenshtein automaton against the DP oracle.

use levseek::{
    levenshtein_distance, AutomatonOptions, CacheMode, LevenshteinAutomaton,
};

use crate::common::all_strings;

#[test]
fn test_food_within_one() {
    let lev = LevenshteinAutomaton::new("food", 1);
    for s in ["food", "fod", "fool", "wood", "flood"] {
        assert!(lev.accepts(s), "{:?}", s);
    }
    for s in ["foodie", "flood!", "fo", "doof"] {
        assert!(!lev.accepts(s), "{:?}", s);
    }
}

#[test]
fn test_exhaustive_small_alphabet() {
    // 'x' stands in for every character outside the word.
    let inputs = all_strings(&['a', 'b', 'x'], 5);
    for word in ["", "a", "ab", "aba", "abba"] {
        for k in 0..=2 {
            let lev = LevenshteinAutomaton::new(word, k);
            for s in &inputs {
                let d = levenshtein_distance(word, s) as u32;
                assert_eq!(lev.accepts(s), d <= k, "word {:?} k {} input {:?}", word, k, s);
                assert_eq!(lev.distance(s), (d <= k).then_some(d), "word {:?} k {} input {:?}", word, k, s);
            }
        }
    }
}

#[test]
fn test_accessors() {
    let lev = LevenshteinAutomaton::new("héllo", 2);
    assert_eq!(lev.word(), "héllo");
    assert_eq!(lev.max_distance(), 2);
    assert!(lev.dfa().state_count() > 1);
}

#[test]
fn test_default_options_match_new() {
    let plain = LevenshteinAutomaton::new("search", 2);
    let opts = LevenshteinAutomaton::with_options("search", 2, &AutomatonOptions::default()).unwrap();
    assert_eq!(plain.dfa().state_count(), opts.dfa().state_count());
    assert_eq!(opts.dfa().cache_mode(), CacheMode::Enabled);
}

#[test]
fn test_generous_limit_succeeds() {
    let full = LevenshteinAutomaton::new("search", 2).dfa().state_count();
    let opts = AutomatonOptions::new().with_state_limit(full);
    assert!(LevenshteinAutomaton::with_options("search", 2, &opts).is_ok());
    let opts = AutomatonOptions::new().with_state_limit(full - 1);
    assert!(LevenshteinAutomaton::with_options("search", 2, &opts).is_err());
}

#[test]
fn test_multibyte_characters_count_once() {
    let lev = LevenshteinAutomaton::new("日本", 1);
    assert!(lev.accepts("日本語"));
    assert!(lev.accepts("本"));
    assert!(!lev.accepts("語"));
}
