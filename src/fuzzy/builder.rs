// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein automaton: every string within `k` edits of a word.
//!
//! Build the textbook NFA, then determinize it. NFA states are a grid:
//!
//! ```text
//!            position in W →
//!          (0,0) ─W[0]→ (1,0) ─W[1]→ (2,0) … (n,0)   ← final
//! edits      │  ╲         │  ╲                │
//!   ↓       Any  Any|ε   Any  Any|ε          Any
//!            ▼     ╲      ▼     ╲             ▼
//!          (0,1) ─W[0]→ (1,1) ─W[1]→ (2,1) … (n,1)   ← final
//!            ⋮                                  ⋮
//!          (0,k) ─W[0]→ (1,k) ─W[1]→ (2,k) … (n,k)   ← final
//! ```
//!
//! - **match** `W[i]`: `(i,e) → (i+1,e)`, free
//! - **insertion** `Any`: `(i,e) → (i,e+1)`, eat a char, stay put in W
//! - **deletion** `ε`: `(i,e) → (i+1,e+1)`, skip a char of W
//! - **substitution** `Any`: `(i,e) → (i+1,e+1)`, eat a char in place of W[i]
//!
//! Every `(n,e)` accepts. The DFA state reached by a string knows the smallest
//! `e` among its accepting members, which is exactly the edit distance.
//!
//! # References
//!
//! - Schulz & Mihov (2002): "Fast String Correction with Levenshtein-Automata",
//!   International Journal on Document Analysis and Recognition 5(1).

use crate::automaton::{
    determinize, determinize_with_limit, Determinized, Dfa, Nfa, StateSet, Symbol,
};
use crate::error::Result;
use crate::options::{AutomatonOptions, CacheMode};
use crate::verify::contracts::check_levenshtein_state;

/// A Levenshtein NFA state: matched `position` chars of W, spent `edits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LevState {
    pub position: usize,
    pub edits: u32,
}

impl LevState {
    #[inline]
    pub fn new(position: usize, edits: u32) -> Self {
        Self { position, edits }
    }
}

/// The edit-operation NFA for `word` with at most `max_distance` edits.
///
/// Has exactly `(len(word) + 1) × (max_distance + 1)` states.
pub fn build_levenshtein_nfa(word: &[char], max_distance: u32) -> Nfa<LevState> {
    let n = word.len();
    let mut nfa = Nfa::new(LevState::new(0, 0));

    let add = |nfa: &mut Nfa<LevState>, src: LevState, symbol: Symbol, dst: LevState| {
        check_levenshtein_state(dst.position, dst.edits, n, max_distance);
        nfa.add_transition(src, symbol, dst);
    };

    for (i, &c) in word.iter().enumerate() {
        for e in 0..=max_distance {
            let here = LevState::new(i, e);
            add(&mut nfa, here, Symbol::Char(c), LevState::new(i + 1, e));
            if e < max_distance {
                add(&mut nfa, here, Symbol::Any, LevState::new(i, e + 1));
                add(&mut nfa, here, Symbol::Epsilon, LevState::new(i + 1, e + 1));
                add(&mut nfa, here, Symbol::Any, LevState::new(i + 1, e + 1));
            }
        }
    }

    for e in 0..=max_distance {
        nfa.add_final_state(LevState::new(n, e));
        if e < max_distance {
            add(&mut nfa, LevState::new(n, e), Symbol::Any, LevState::new(n, e + 1));
        }
    }

    nfa
}

/// A DFA accepting exactly the strings within `max_distance` edits of `word`.
///
/// ```
/// use levseek::LevenshteinAutomaton;
///
/// let lev = LevenshteinAutomaton::new("food", 1);
/// assert!(lev.accepts("fool"));
/// assert!(!lev.accepts("flood!"));
/// assert_eq!(lev.distance("wood"), Some(1));
/// assert_eq!(lev.smallest_accepted_at_or_after("foods").as_deref(), Some("foods"));
/// ```
#[derive(Debug, Clone)]
pub struct LevenshteinAutomaton {
    word: String,
    max_distance: u32,
    dfa: Dfa,
    /// Edit distance carried by each DFA state, `None` for non-final states.
    distances: Vec<Option<u32>>,
}

impl LevenshteinAutomaton {
    /// Build with default options (caches on, no state limit).
    pub fn new(word: &str, max_distance: u32) -> Self {
        let chars: Vec<char> = word.chars().collect();
        let nfa = build_levenshtein_nfa(&chars, max_distance);
        Self::assemble(word, max_distance, determinize(&nfa), &AutomatonOptions::default())
    }

    /// Build with explicit options.
    ///
    /// Fails with [`Error::StateLimitExceeded`](crate::Error::StateLimitExceeded)
    /// if the DFA would outgrow `options.state_limit`.
    pub fn with_options(word: &str, max_distance: u32, options: &AutomatonOptions) -> Result<Self> {
        let chars: Vec<char> = word.chars().collect();
        let nfa = build_levenshtein_nfa(&chars, max_distance);
        let det = match options.state_limit {
            Some(limit) => determinize_with_limit(&nfa, limit)?,
            None => determinize(&nfa),
        };
        Ok(Self::assemble(word, max_distance, det, options))
    }

    fn assemble(
        word: &str,
        max_distance: u32,
        det: Determinized<LevState>,
        options: &AutomatonOptions,
    ) -> Self {
        let word_len = word.chars().count();
        let distances = det
            .subsets
            .iter()
            .map(|subset| min_final_edits(subset, word_len))
            .collect();

        let mut dfa = det.dfa;
        dfa.set_cache_mode(options.cache);
        dfa.set_path_cache_limit(options.path_cache_limit);

        Self {
            word: word.to_owned(),
            max_distance,
            dfa,
            distances,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn max_distance(&self) -> u32 {
        self.max_distance
    }

    /// The underlying DFA.
    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    /// Is `candidate` within `max_distance` edits of the word?
    pub fn accepts(&self, candidate: &str) -> bool {
        self.dfa.accepts(candidate)
    }

    /// Exact edit distance to the word, if it is at most `max_distance`.
    pub fn distance(&self, candidate: &str) -> Option<u32> {
        self.dfa
            .walk(candidate)
            .and_then(|state| self.distances[state as usize])
    }

    /// Smallest accepted string `≥ query`. See [`Dfa::smallest_accepted_at_or_after`].
    pub fn smallest_accepted_at_or_after(&self, query: &str) -> Option<String> {
        self.dfa.smallest_accepted_at_or_after(query)
    }

    pub fn set_cache_mode(&mut self, mode: CacheMode) {
        self.dfa.set_cache_mode(mode);
    }

    pub fn clear_caches(&self) {
        self.dfa.clear_caches();
    }
}

/// Fewest edits among the accepting `(n, e)` members of a subset.
fn min_final_edits(subset: &StateSet<LevState>, word_len: usize) -> Option<u32> {
    subset
        .iter()
        .filter(|s| s.position == word_len)
        .map(|s| s.edits)
        .min()
}
