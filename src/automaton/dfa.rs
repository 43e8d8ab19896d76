// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deterministic automaton with wildcard fallback edges.
//!
//! Each state has a sorted list of keyed edges plus at most one *default*
//! edge taken by every character without a key. Levenshtein automata lean on
//! the default edge heavily: from any state only the handful of characters in
//! the target word are special, everything else is "some other character".
//!
//! # Layout
//!
//! ```text
//! states[id] = { edges: [(char, id)] sorted by char,
//!                default: Option<id>,
//!                is_final, is_live }
//! ```
//!
//! `is_live` marks states from which a final state is reachable. The successor
//! search only ever steps into live states, so it never wanders into a branch
//! that cannot produce a match.
//!
//! The two successor caches (`edge_map`, `path_map`) sit behind `RwLock`s: a
//! built `Dfa` is `Sync` and can be searched through `&self` from any thread.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::options::{CacheMode, DEFAULT_PATH_CACHE_LIMIT};

/// Dense DFA state index.
pub type StateId = u32;

#[derive(Debug, Clone, Default)]
pub(crate) struct DfaState {
    pub(crate) edges: Vec<(char, StateId)>,
    pub(crate) default: Option<StateId>,
    pub(crate) is_final: bool,
    pub(crate) is_live: bool,
}

impl DfaState {
    pub(crate) fn new(is_final: bool) -> Self {
        Self {
            is_final,
            ..Self::default()
        }
    }

    #[inline]
    fn keyed(&self, c: char) -> Option<StateId> {
        self.edges
            .binary_search_by_key(&c, |&(label, _)| label)
            .ok()
            .map(|i| self.edges[i].1)
    }
}

/// Entry counts of the successor caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheStats {
    pub edge_entries: usize,
    pub path_entries: usize,
}

/// Memoized smallest usable edge per `(state, candidate)`.
pub(crate) type EdgeMap = HashMap<(StateId, char), Option<(char, StateId)>>;
/// Memoized successor per query string.
pub(crate) type PathMap = HashMap<String, Option<String>>;

/// A deterministic automaton over `char` input.
#[derive(Debug)]
pub struct Dfa {
    pub(crate) states: Vec<DfaState>,
    pub(crate) start: StateId,
    pub(crate) finite: bool,
    pub(crate) cache_mode: CacheMode,
    /// `path_map` is emptied once it holds this many queries.
    pub(crate) path_cache_limit: usize,
    pub(crate) edge_map: RwLock<EdgeMap>,
    pub(crate) path_map: RwLock<PathMap>,
}

impl Dfa {
    /// Assemble a DFA and derive liveness and finiteness.
    pub(crate) fn from_parts(mut states: Vec<DfaState>, start: StateId) -> Self {
        mark_live(&mut states);
        let finite = live_part_is_acyclic(&states, start);
        Self {
            states,
            start,
            finite,
            cache_mode: CacheMode::Enabled,
            path_cache_limit: DEFAULT_PATH_CACHE_LIMIT,
            edge_map: RwLock::new(HashMap::new()),
            path_map: RwLock::new(HashMap::new()),
        }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// # Panics
    ///
    /// Panics if `state >= state_count()`. The same holds for every accessor
    /// taking a [`StateId`].
    pub fn is_final(&self, state: StateId) -> bool {
        self.states[state as usize].is_final
    }

    /// Can some final state still be reached from `state`?
    ///
    /// # Panics
    ///
    /// Panics if `state` is out of range.
    pub fn is_live(&self, state: StateId) -> bool {
        self.states[state as usize].is_live
    }

    /// Does the automaton accept finitely many strings?
    ///
    /// Required by [`smallest_accepted_at_or_after`](Self::smallest_accepted_at_or_after).
    pub fn is_finite(&self) -> bool {
        self.finite
    }

    /// Keyed edges of `state`, sorted by label.
    ///
    /// # Panics
    ///
    /// Panics if `state` is out of range.
    pub fn edges(&self, state: StateId) -> &[(char, StateId)] {
        &self.states[state as usize].edges
    }

    /// Target taken by characters without a keyed edge.
    ///
    /// # Panics
    ///
    /// Panics if `state` is out of range.
    pub fn default_transition(&self, state: StateId) -> Option<StateId> {
        self.states[state as usize].default
    }

    /// One step: the keyed edge for `c` if there is one, else the default.
    ///
    /// # Panics
    ///
    /// Panics if `state` is out of range.
    #[inline]
    pub fn transition(&self, state: StateId, c: char) -> Option<StateId> {
        let node = &self.states[state as usize];
        node.keyed(c).or(node.default)
    }

    /// Run `input` from the start state. `None` if it falls off.
    pub fn walk(&self, input: &str) -> Option<StateId> {
        input
            .chars()
            .try_fold(self.start, |state, c| self.transition(state, c))
    }

    /// Direct membership test. No backtracking, no caches.
    pub fn accepts(&self, input: &str) -> bool {
        self.walk(input).is_some_and(|s| self.is_final(s))
    }

    pub fn cache_mode(&self) -> CacheMode {
        self.cache_mode
    }

    /// Switch memoization on or off. Existing entries are dropped.
    pub fn set_cache_mode(&mut self, mode: CacheMode) {
        self.cache_mode = mode;
        self.clear_caches();
    }

    /// Cap the number of memoized successor queries. `0` stores none.
    ///
    /// A full cache is emptied before the next insert, so memory stays
    /// bounded however many probes a long-lived automaton answers.
    pub fn set_path_cache_limit(&mut self, limit: usize) {
        self.path_cache_limit = limit;
        self.path_map.write().clear();
    }

    pub fn path_cache_limit(&self) -> usize {
        self.path_cache_limit
    }

    /// Forget all memoized successor work. Results are unaffected.
    pub fn clear_caches(&self) {
        self.edge_map.write().clear();
        self.path_map.write().clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            edge_entries: self.edge_map.read().len(),
            path_entries: self.path_map.read().len(),
        }
    }
}

impl Clone for Dfa {
    /// Clones the automaton with empty caches.
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
            start: self.start,
            finite: self.finite,
            cache_mode: self.cache_mode,
            path_cache_limit: self.path_cache_limit,
            edge_map: RwLock::new(HashMap::new()),
            path_map: RwLock::new(HashMap::new()),
        }
    }
}

/// Reverse reachability from the final states.
fn mark_live(states: &mut [DfaState]) {
    let mut reverse: Vec<Vec<StateId>> = vec![Vec::new(); states.len()];
    for (id, node) in states.iter().enumerate() {
        let targets = node.edges.iter().map(|&(_, t)| t).chain(node.default);
        for target in targets {
            reverse[target as usize].push(id as StateId);
        }
    }

    let mut stack: Vec<StateId> = Vec::new();
    for (id, node) in states.iter_mut().enumerate() {
        node.is_live = node.is_final;
        if node.is_final {
            stack.push(id as StateId);
        }
    }

    while let Some(id) = stack.pop() {
        for &pred in &reverse[id as usize] {
            let node = &mut states[pred as usize];
            if !node.is_live {
                node.is_live = true;
                stack.push(pred);
            }
        }
    }
}

/// Cycle check over live states reachable from `start`.
///
/// Iterative three-color DFS. A back edge between live states means the
/// language is infinite.
fn live_part_is_acyclic(states: &[DfaState], start: StateId) -> bool {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Color {
        White,
        Gray,
        Black,
    }

    if states.is_empty() || !states[start as usize].is_live {
        return true;
    }

    let successors = |id: StateId| -> Vec<StateId> {
        let node = &states[id as usize];
        node.edges
            .iter()
            .map(|&(_, t)| t)
            .chain(node.default)
            .filter(|&t| states[t as usize].is_live)
            .collect()
    };

    let mut color = vec![Color::White; states.len()];
    let mut stack: Vec<(StateId, Vec<StateId>)> = vec![(start, successors(start))];
    color[start as usize] = Color::Gray;

    while let Some((id, pending)) = stack.last_mut() {
        match pending.pop() {
            Some(next) => match color[next as usize] {
                Color::Gray => return false,
                Color::Black => {}
                Color::White => {
                    color[next as usize] = Color::Gray;
                    let succ = successors(next);
                    stack.push((next, succ));
                }
            },
            None => {
                color[*id as usize] = Color::Black;
                stack.pop();
            }
        }
    }

    true
}
