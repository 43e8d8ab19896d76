// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for automaton-guided dictionary scans.
//!
//! Builds a sorted dictionary from arbitrary words and checks the scan
//! against a linear pass with the DP oracle.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use levseek::{levenshtein_within, LevenshteinAutomaton, SortedVocabulary};

#[derive(Debug, Arbitrary)]
struct ScanInput {
    word: String,
    dictionary: Vec<String>,
    max_distance: u8,
}

fuzz_target!(|input: ScanInput| {
    let word: String = input.word.chars().take(10).collect();
    let k = u32::from(input.max_distance % 3);
    let vocab = SortedVocabulary::from_unsorted(
        input
            .dictionary
            .iter()
            .take(256)
            .map(|w| w.chars().take(16).collect::<String>()),
    );

    let lev = LevenshteinAutomaton::new(&word, k);
    let hits: Vec<&str> = lev.scan(&vocab).collect();
    let expected: Vec<&str> = vocab
        .iter()
        .filter(|entry| levenshtein_within(&word, entry, k as usize))
        .collect();

    // INVARIANT: scan == linear filter, in dictionary order
    assert_eq!(hits, expected, "word={:?} k={}", word, k);
});
