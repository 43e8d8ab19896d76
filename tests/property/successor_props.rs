//! Successor search properties.

use levseek::LevenshteinAutomaton;
use proptest::prelude::*;

use crate::common::{all_strings, small_word, unicode_word};

/// Alphabet for brute-force enumeration. Includes '\0' and a char outside
/// {a, b, c} so default edges are exercised.
const PROBE_ALPHABET: &[char] = &['\0', 'a', 'b', 'c', 'd'];

proptest! {
    /// Property: the successor is accepted and not smaller than the probe.
    #[test]
    fn prop_successor_accepted_and_ge(
        w in small_word(),
        q in small_word(),
        k in 0u32..=2
    ) {
        let lev = LevenshteinAutomaton::new(&w, k);
        if let Some(r) = lev.smallest_accepted_at_or_after(&q) {
            prop_assert!(r >= q, "{:?} < {:?}", r, q);
            prop_assert!(lev.accepts(&r), "{:?} not accepted", r);
        }
    }

    /// Property: accepted probes are their own successor.
    #[test]
    fn prop_successor_self_consistent(w in small_word(), q in small_word(), k in 0u32..=2) {
        let lev = LevenshteinAutomaton::new(&w, k);
        if lev.accepts(&q) {
            prop_assert_eq!(lev.smallest_accepted_at_or_after(&q), Some(q));
        }
    }

    /// Property: no accepted string lies strictly between the probe and its
    /// successor (checked over every short string on a small alphabet).
    #[test]
    fn prop_successor_is_smallest(w in "[abc]{0,3}", q in "[abcd]{0,3}", k in 0u32..=1) {
        let lev = LevenshteinAutomaton::new(&w, k);
        let r = lev.smallest_accepted_at_or_after(&q);
        for s in all_strings(PROBE_ALPHABET, 4) {
            if s < q || !lev.accepts(&s) {
                continue;
            }
            match &r {
                Some(r) => prop_assert!(&s >= r, "{:?} accepted, between {:?} and {:?}", s, q, r),
                None => prop_assert!(false, "{:?} accepted but successor of {:?} is None", s, q),
            }
        }
    }

    /// Property: successors are monotone in the probe.
    #[test]
    fn prop_successor_monotone(w in small_word(), a in small_word(), b in small_word(), k in 0u32..=2) {
        let lev = LevenshteinAutomaton::new(&w, k);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        match (
            lev.smallest_accepted_at_or_after(&lo),
            lev.smallest_accepted_at_or_after(&hi),
        ) {
            (Some(x), Some(y)) => prop_assert!(x <= y),
            (None, Some(y)) => prop_assert!(false, "None before {:?}", y),
            _ => {}
        }
    }

    /// Property: successor results respect Unicode scalar boundaries.
    #[test]
    fn prop_successor_unicode(w in unicode_word(), q in unicode_word(), k in 0u32..=1) {
        let lev = LevenshteinAutomaton::new(&w, k);
        if let Some(r) = lev.smallest_accepted_at_or_after(&q) {
            prop_assert!(r >= q);
            prop_assert!(lev.accepts(&r));
        }
    }
}
