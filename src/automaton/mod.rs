// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Finite automata: the NFA you build, the DFA you search.
//!
//! ```text
//! ┌──────────┐  determinize  ┌──────────┐  successor  ┌────────────────┐
//! │  Nfa<S>  │──────────────▶│   Dfa    │────────────▶│ smallest R ≥ Q │
//! │ (ε, Any) │   (powerset)  │(default  │  (wall-     │ or None        │
//! └──────────┘               │  edges)  │ following)  └────────────────┘
//!                            └──────────┘
//! ```
//!
//! Two reserved symbols ride alongside real characters: `Epsilon` (consumes
//! nothing) and `Any` (matches every character). They are enum variants, not
//! magic code points, so no input can ever collide with them.

pub mod determinize;
pub mod dfa;
pub mod nfa;
mod successor;

pub use determinize::{determinize, determinize_with_limit, Determinized};
pub use dfa::{CacheStats, Dfa, StateId};
pub use nfa::Nfa;

/// An edge label.
///
/// The derived order puts every `Char` before `Any`, so a sorted symbol set
/// lists keyed labels first, in code-point order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// A concrete input character.
    Char(char),
    /// Matches any single input character.
    Any,
    /// Traversed without consuming input.
    Epsilon,
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Char(c)
    }
}

/// A canonical set of NFA states: sorted, no duplicates.
///
/// This is the identity of a DFA state during powerset construction. Two sets
/// with the same members compare and hash equal no matter how they were built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateSet<S> {
    states: Vec<S>,
}

impl<S: Ord> StateSet<S> {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Insert a state. Returns `true` if it was not already present.
    pub fn insert(&mut self, state: S) -> bool {
        match self.states.binary_search(&state) {
            Ok(_) => false,
            Err(pos) => {
                self.states.insert(pos, state);
                true
            }
        }
    }

    pub fn contains(&self, state: &S) -> bool {
        self.states.binary_search(state).is_ok()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.states.iter()
    }

    pub fn as_slice(&self) -> &[S] {
        &self.states
    }
}

impl<S: Ord> Default for StateSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Ord> FromIterator<S> for StateSet<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut states: Vec<S> = iter.into_iter().collect();
        states.sort_unstable();
        states.dedup();
        Self { states }
    }
}

impl<'a, S> IntoIterator for &'a StateSet<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

/// The next character in code-point order, skipping the surrogate gap.
///
/// `None` past `char::MAX`.
#[inline]
pub(crate) fn next_char(c: char) -> Option<char> {
    match c {
        '\u{D7FF}' => Some('\u{E000}'),
        char::MAX => None,
        _ => char::from_u32(c as u32 + 1),
    }
}
