//! Acceptance and distance properties.

use levseek::{determinize, levenshtein_distance, levenshtein_within, LevenshteinAutomaton, Nfa, Symbol};
use proptest::prelude::*;

use crate::common::{small_word, unicode_word, word};

proptest! {
    /// Property: the automaton accepts exactly the strings within k edits.
    #[test]
    fn prop_accepts_iff_within_distance(
        w in small_word(),
        s in small_word(),
        k in 0u32..=3
    ) {
        let lev = LevenshteinAutomaton::new(&w, k);
        let expected = strsim::levenshtein(&w, &s) <= k as usize;
        prop_assert_eq!(lev.accepts(&s), expected, "w={:?} s={:?} k={}", w, s, k);
    }

    /// Property: the reported distance is the true edit distance.
    #[test]
    fn prop_distance_is_exact(w in word(), s in word(), k in 0u32..=2) {
        let lev = LevenshteinAutomaton::new(&w, k);
        let d = strsim::levenshtein(&w, &s) as u32;
        prop_assert_eq!(lev.distance(&s), (d <= k).then_some(d));
    }

    /// Property: acceptance holds over arbitrary code points, not just ASCII.
    #[test]
    fn prop_unicode_acceptance(w in unicode_word(), s in unicode_word(), k in 0u32..=2) {
        let lev = LevenshteinAutomaton::new(&w, k);
        prop_assert_eq!(lev.accepts(&s), levenshtein_within(&w, &s, k as usize));
    }

    /// Property: the DP oracle agrees with strsim.
    #[test]
    fn prop_oracle_agrees_with_strsim(a in word(), b in word()) {
        prop_assert_eq!(levenshtein_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// Property: every Levenshtein DFA has a finite language.
    #[test]
    fn prop_levenshtein_dfa_is_finite(w in word(), k in 0u32..=2) {
        prop_assert!(LevenshteinAutomaton::new(&w, k).dfa().is_finite());
    }

    /// Property: the determinized DFA agrees with the NFA on every input.
    #[test]
    fn prop_determinize_preserves_language(
        edges in prop::collection::vec((0u8..4, 0u8..4, 0u8..5), 1..12),
        finals in prop::collection::vec(0u8..4, 1..3),
        inputs in prop::collection::vec(small_word(), 1..20)
    ) {
        let mut nfa = Nfa::new(0u8);
        for (src, dst, label) in edges {
            let symbol = match label {
                0 => Symbol::Char('a'),
                1 => Symbol::Char('b'),
                2 => Symbol::Char('c'),
                3 => Symbol::Any,
                _ => Symbol::Epsilon,
            };
            nfa.add_transition(src, symbol, dst);
        }
        for f in finals {
            nfa.add_final_state(f);
        }

        let dfa = determinize(&nfa).dfa;
        for input in inputs.iter().chain(std::iter::once(&"x".to_string())) {
            prop_assert_eq!(dfa.accepts(input), nfa.accepts(input), "input {:?}", input);
        }
    }
}
