// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for automaton and scan invariants.
//!
//! Debug-mode assertions that check the properties the algorithms rely on:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`, expensive checks behind
//!    `cfg!(debug_assertions)`)
//! 2. **Early failure detection** while tests run
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function           | Invariant                                         |
//! |-----------------------------|---------------------------------------------------|
//! | `check_subset_closed`       | Every DFA state is an epsilon-closed NFA subset   |
//! | `check_levenshtein_state`   | `position ≤ len(W)` and `edits ≤ k`               |
//! | `check_successor_result`    | Successor is accepted and `≥` the probe           |
//! | `check_dictionary_sorted`   | Dictionary is in ordinal order                    |
//! | `check_lower_bound_result`  | Lower bound lands inside `0..=len`                |
//! | `check_probe_advances`      | Each scan probe is strictly larger than the last  |

use std::hash::Hash;

use crate::automaton::{Dfa, Nfa, StateSet};
use crate::dictionary::Dictionary;

// ============================================================================
// AUTOMATON CONTRACTS
// ============================================================================

/// Check that a subset about to become a DFA state is epsilon-closed.
///
/// # Panics (debug builds only)
/// Panics if following epsilon edges from `subset` reaches a state outside it.
#[inline]
pub fn check_subset_closed<S>(nfa: &Nfa<S>, subset: &StateSet<S>)
where
    S: Copy + Ord + Hash,
{
    if cfg!(debug_assertions) {
        let closure = nfa.epsilon_closure(subset.iter().copied());
        debug_assert!(
            &closure == subset,
            "Contract violation: DFA state of {} NFA states is not epsilon-closed ({} after closure)",
            subset.len(),
            closure.len()
        );
    }
}

/// Check the bounds of a Levenshtein NFA state.
///
/// # Panics (debug builds only)
/// Panics if `position > word_len` or `edits > max_distance`.
#[inline]
pub fn check_levenshtein_state(position: usize, edits: u32, word_len: usize, max_distance: u32) {
    debug_assert!(
        position <= word_len,
        "Contract violation: position {} > word length {}",
        position,
        word_len
    );
    debug_assert!(
        edits <= max_distance,
        "Contract violation: edits {} > max distance {}",
        edits,
        max_distance
    );
}

/// Check a successor search result.
///
/// # Panics (debug builds only)
/// Panics if the result sorts before the probe or is not accepted.
#[inline]
pub fn check_successor_result(dfa: &Dfa, query: &str, result: Option<&str>) {
    if let Some(found) = result {
        debug_assert!(
            found >= query,
            "Contract violation: successor {:?} < probe {:?}",
            found,
            query
        );
        if cfg!(debug_assertions) {
            debug_assert!(
                dfa.accepts(found),
                "Contract violation: successor {:?} of {:?} is not accepted",
                found,
                query
            );
        }
    }
}

// ============================================================================
// DICTIONARY CONTRACTS
// ============================================================================

/// Check that a dictionary is sorted in ordinal order.
///
/// Duplicates are fine; descents are not.
///
/// # Panics (debug builds only)
/// Panics at the first position where an entry is smaller than its predecessor.
#[inline]
pub fn check_dictionary_sorted<D: Dictionary + ?Sized>(dict: &D) {
    if cfg!(debug_assertions) {
        if let Some(position) = first_unsorted_position(dict) {
            panic!(
                "Contract violation: dictionary not sorted at position {} ({:?} < {:?})",
                position,
                dict.entry(position).unwrap_or_default(),
                dict.entry(position - 1).unwrap_or_default()
            );
        }
    }
}

/// Index of the first entry that sorts before its predecessor.
pub(crate) fn first_unsorted_position<D: Dictionary + ?Sized>(dict: &D) -> Option<usize> {
    (1..dict.len()).find(|&i| match (dict.entry(i - 1), dict.entry(i)) {
        (Some(prev), Some(curr)) => prev > curr,
        _ => false,
    })
}

/// Check lower bound result bounds.
///
/// # Panics (debug builds only)
/// Panics if `result > len`.
#[inline]
pub fn check_lower_bound_result(result: usize, len: usize) {
    debug_assert!(
        result <= len,
        "Contract violation: lower bound {} > dictionary length {}",
        result,
        len
    );
}

/// Check that the scan loop makes progress.
///
/// # Panics (debug builds only)
/// Panics if `next <= prev`: the loop would spin forever.
#[inline]
pub fn check_probe_advances(prev: &str, next: &str) {
    debug_assert!(
        next > prev,
        "Contract violation: scan probe did not advance ({:?} -> {:?})",
        prev,
        next
    );
}
