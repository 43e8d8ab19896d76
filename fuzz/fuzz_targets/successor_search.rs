// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the successor search.
//!
//! Arbitrary probes, including ones full of U+0000, U+10FFFF and surrogate
//! neighbours, must yield an accepted string at or after the probe.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use levseek::{AutomatonOptions, CacheMode, LevenshteinAutomaton};

#[derive(Debug, Arbitrary)]
struct SuccessorInput {
    word: String,
    probes: Vec<String>,
    max_distance: u8,
}

fuzz_target!(|input: SuccessorInput| {
    let word: String = input.word.chars().take(10).collect();
    let k = u32::from(input.max_distance % 3);

    let cached = LevenshteinAutomaton::new(&word, k);
    let opts = AutomatonOptions::new().with_cache(CacheMode::Disabled);
    let Ok(uncached) = LevenshteinAutomaton::with_options(&word, k, &opts) else {
        return;
    };

    for probe in input.probes.iter().take(16) {
        let probe: String = probe.chars().take(16).collect();
        let found = cached.smallest_accepted_at_or_after(&probe);

        // INVARIANT 1: caches never change the answer
        assert_eq!(found, uncached.smallest_accepted_at_or_after(&probe));

        if let Some(r) = &found {
            // INVARIANT 2: result is accepted and >= probe
            assert!(r.as_str() >= probe.as_str(), "{:?} < {:?}", r, probe);
            assert!(cached.accepts(r));
        }

        // INVARIANT 3: accepted probes are their own successor
        if cached.accepts(&probe) {
            assert_eq!(found.as_deref(), Some(probe.as_str()));
        }
    }
});
