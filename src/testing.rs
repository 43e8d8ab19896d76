// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It holds the brute-force oracles the automaton is measured against.

#![doc(hidden)]

use crate::fuzzy::levenshtein_within;

/// Every string over `alphabet` of length `0..=max_len`, sorted.
///
/// Grows as `|alphabet|^max_len`; keep both small.
pub fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut layer = vec![String::new()];
    for _ in 0..max_len {
        layer = layer
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |&c| {
                    let mut s = prefix.clone();
                    s.push(c);
                    s
                })
            })
            .collect();
        out.extend(layer.iter().cloned());
    }
    out.sort();
    out.dedup();
    out
}

/// Linear-scan reference for a dictionary lookup: every distinct entry
/// within `max_distance` of `word`, in dictionary order.
pub fn brute_force_matches<T: AsRef<str>>(word: &str, max_distance: u32, dict: &[T]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for entry in dict {
        let entry = entry.as_ref();
        if out.last().map(String::as_str) == Some(entry) {
            continue;
        }
        if levenshtein_within(word, entry, max_distance as usize) {
            out.push(entry.to_owned());
        }
    }
    out
}

/// Sort and deduplicate, the shape every dictionary must have.
pub fn sorted_dict<I, T>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut dict: Vec<String> = words.into_iter().map(Into::into).collect();
    dict.sort();
    dict.dedup();
    dict
}
