// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Many query words against one dictionary.
//!
//! Each word needs its own automaton, and the automata share nothing, so the
//! batch is embarrassingly parallel: one rayon task per word, reading the
//! dictionary concurrently. Results come back in input order either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::dictionary::Dictionary;
use crate::macros::debug;

use super::builder::LevenshteinAutomaton;
use super::scan::FuzzyMatch;

/// Matches for every word in `words`, sequentially.
///
/// `result[i]` holds the matches for `words[i]`, in dictionary order.
pub fn fuzzy_lookup_batch<W, D>(words: &[W], max_distance: u32, dict: &D) -> Vec<Vec<FuzzyMatch>>
where
    W: AsRef<str>,
    D: Dictionary + ?Sized,
{
    debug!("batch lookup: {} words, k={}", words.len(), max_distance);
    words
        .iter()
        .map(|word| LevenshteinAutomaton::new(word.as_ref(), max_distance).matches_in(dict))
        .collect()
}

/// Parallel [`fuzzy_lookup_batch`].
///
/// Same output, one rayon task per word. For a handful of words the thread
/// handoff costs more than it saves; use the sequential version.
#[cfg(feature = "parallel")]
pub fn fuzzy_lookup_batch_parallel<W, D>(
    words: &[W],
    max_distance: u32,
    dict: &D,
) -> Vec<Vec<FuzzyMatch>>
where
    W: AsRef<str> + Sync,
    D: Dictionary + Sync + ?Sized,
{
    debug!("parallel batch lookup: {} words, k={}", words.len(), max_distance);
    words
        .par_iter()
        .map(|word| LevenshteinAutomaton::new(word.as_ref(), max_distance).matches_in(dict))
        .collect()
}
