// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for Levenshtein automaton acceptance.
//!
//! The automaton must agree with the DP oracle on every pair of strings, and
//! report the same distance. If it lies, every scan built on it lies too.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use levseek::{levenshtein_distance, LevenshteinAutomaton};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    word: String,
    candidate: String,
    max_distance: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap sizes: DFA size grows with word length and distance.
    let word: String = input.word.chars().take(12).collect();
    let candidate: String = input.candidate.chars().take(24).collect();
    let k = u32::from(input.max_distance % 3);

    let lev = LevenshteinAutomaton::new(&word, k);
    let d = levenshtein_distance(&word, &candidate) as u32;

    // INVARIANT 1: acceptance iff within distance
    assert_eq!(
        lev.accepts(&candidate),
        d <= k,
        "word={:?} candidate={:?} k={} d={}",
        word,
        candidate,
        k,
        d
    );

    // INVARIANT 2: distance is exact when reported
    assert_eq!(lev.distance(&candidate), (d <= k).then_some(d));

    // INVARIANT 3: the word always matches itself
    assert_eq!(lev.distance(&word), Some(0));
});
