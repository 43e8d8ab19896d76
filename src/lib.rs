// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein automata and automaton-guided dictionary search.
//!
//! Build a DFA that accepts exactly the strings within `k` edits of a word,
//! then use it to pull every match out of a sorted dictionary while touching
//! only a handful of entries. The trick is a successor query: "smallest
//! string you accept that is `≥` this probe". Alternate it with the
//! dictionary's lower bound and the two leapfrog each other to the end.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │ fuzzy::builder  │────▶│ automaton::nfa   │────▶│ automaton::     │
//! │ (edit-op grid)  │     │ (Char/Any/ε NFA) │     │ determinize     │
//! └─────────────────┘     └──────────────────┘     └────────┬────────┘
//!                                                           │
//!                                                           ▼
//! ┌─────────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │   dictionary    │◀────│   fuzzy::scan    │◀────│ automaton::dfa  │
//! │ (lower_bound)   │     │ (leapfrog loop)  │     │ (+ successor)   │
//! └─────────────────┘     └──────────────────┘     └─────────────────┘
//!        │                         │                        │
//!        ▼                         ▼                        ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            verify                                │
//! │  (SortedVocabulary, debug contracts on subsets, probes, order)  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use levseek::LevenshteinAutomaton;
//!
//! let dict = vec!["cat", "cats", "dog", "dogs", "fog"];
//! let lev = LevenshteinAutomaton::new("dog", 1);
//!
//! let hits: Vec<&str> = lev.scan(&dict).collect();
//! assert_eq!(hits, ["dog", "dogs", "fog"]);
//!
//! let found = lev.matches_in(&dict);
//! assert_eq!(found[2].term, "fog");
//! assert_eq!(found[2].distance, 1);
//! ```
//!
//! # Features
//!
//! | Feature    | Default | Effect                                          |
//! |------------|---------|-------------------------------------------------|
//! | `parallel` | yes     | `fuzzy_lookup_batch_parallel` via rayon         |
//! | `logging`  | no      | `debug!`/`trace!` through the `log` facade      |
//! | `serde`    | no      | Serialize matches, options and cache stats      |

mod macros;

pub mod automaton;
pub mod dictionary;
pub mod error;
pub mod fuzzy;
pub mod options;
pub mod testing;
pub mod verify;

pub use automaton::{
    determinize, determinize_with_limit, CacheStats, Determinized, Dfa, Nfa, StateId, StateSet,
    Symbol,
};
pub use dictionary::Dictionary;
pub use error::{Error, Result};
#[cfg(feature = "parallel")]
pub use fuzzy::fuzzy_lookup_batch_parallel;
pub use fuzzy::{
    build_levenshtein_nfa, fuzzy_lookup_batch, levenshtein_distance, levenshtein_within,
    DictionaryScan, FuzzyMatch, LevState, LevenshteinAutomaton,
};
pub use options::{AutomatonOptions, CacheMode, DEFAULT_PATH_CACHE_LIMIT};
pub use verify::{InvariantError, SortedVocabulary};
