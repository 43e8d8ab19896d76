// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two tools here: a bounded DP for one-off comparisons, and a Levenshtein
//! automaton for bulk matching against a sorted dictionary.

pub mod batch;
pub mod builder;
mod levenshtein;
pub mod scan;

#[cfg(feature = "parallel")]
pub use batch::fuzzy_lookup_batch_parallel;
pub use batch::fuzzy_lookup_batch;
pub use builder::{build_levenshtein_nfa, LevState, LevenshteinAutomaton};
pub use levenshtein::*;
pub use scan::{DictionaryScan, FuzzyMatch};
