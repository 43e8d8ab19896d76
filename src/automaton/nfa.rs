// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Nondeterministic finite automaton with epsilon and wildcard edges.
//!
//! States are whatever the caller wants them to be: anything `Copy + Ord + Hash`.
//! The Levenshtein builder uses `(position, edits)` pairs; tests use plain
//! integers. Transitions are kept in ordered maps so every traversal (and the
//! DFA numbering that falls out of it) is deterministic.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::hash::Hash;

use super::{StateSet, Symbol};

/// A nondeterministic automaton over `char` input.
#[derive(Debug, Clone)]
pub struct Nfa<S> {
    start: S,
    finals: BTreeSet<S>,
    transitions: BTreeMap<S, BTreeMap<Symbol, BTreeSet<S>>>,
}

impl<S: Copy + Ord + Hash> Nfa<S> {
    pub fn new(start: S) -> Self {
        Self {
            start,
            finals: BTreeSet::new(),
            transitions: BTreeMap::new(),
        }
    }

    pub fn start(&self) -> S {
        self.start
    }

    /// Add `dst` to the destinations of `(src, symbol)`.
    ///
    /// Repeated calls accumulate: that's the nondeterminism.
    pub fn add_transition(&mut self, src: S, symbol: Symbol, dst: S) {
        self.transitions
            .entry(src)
            .or_default()
            .entry(symbol)
            .or_default()
            .insert(dst);
    }

    pub fn add_final_state(&mut self, state: S) {
        self.finals.insert(state);
    }

    pub fn is_final(&self, state: &S) -> bool {
        self.finals.contains(state)
    }

    /// Does any member of `states` accept?
    pub fn is_accepting(&self, states: &StateSet<S>) -> bool {
        states.iter().any(|s| self.finals.contains(s))
    }

    /// Smallest superset of `states` closed under epsilon edges.
    ///
    /// Worklist: each state is pushed at most once, so this terminates on any
    /// finite automaton.
    pub fn epsilon_closure<I>(&self, states: I) -> StateSet<S>
    where
        I: IntoIterator<Item = S>,
    {
        let mut seen: HashSet<S> = HashSet::new();
        let mut stack: Vec<S> = Vec::new();
        for s in states {
            if seen.insert(s) {
                stack.push(s);
            }
        }

        while let Some(state) = stack.pop() {
            for next in self.destinations(&state, Symbol::Epsilon) {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }

        seen.into_iter().collect()
    }

    /// States reachable from `states` by one `symbol` step, epsilon-closed.
    ///
    /// `Any` edges fire for every symbol. Asking for `Symbol::Any` itself gives
    /// the destinations of the wildcard edges alone: the "every other
    /// character" class. `Symbol::Epsilon` is just the closure.
    pub fn next_states(&self, states: &StateSet<S>, symbol: Symbol) -> StateSet<S> {
        if symbol == Symbol::Epsilon {
            return self.epsilon_closure(states.iter().copied());
        }

        let mut targets: Vec<S> = Vec::new();
        for state in states {
            if let Symbol::Char(_) = symbol {
                targets.extend(self.destinations(state, symbol));
            }
            targets.extend(self.destinations(state, Symbol::Any));
        }

        self.epsilon_closure(targets)
    }

    /// Distinct labels on edges leaving any member of `states`.
    ///
    /// Includes `Epsilon` when present; the determinizer skips it.
    pub fn outgoing_symbols(&self, states: &StateSet<S>) -> BTreeSet<Symbol> {
        states
            .iter()
            .filter_map(|s| self.transitions.get(s))
            .flat_map(|edges| edges.keys().copied())
            .collect()
    }

    /// Membership by nondeterministic simulation.
    ///
    /// Tracks the full set of live states per character. Slow next to a DFA,
    /// but it is the ground truth the determinizer is tested against.
    pub fn accepts(&self, input: &str) -> bool {
        let mut current = self.epsilon_closure([self.start]);
        for c in input.chars() {
            if current.is_empty() {
                return false;
            }
            current = self.next_states(&current, Symbol::Char(c));
        }
        self.is_accepting(&current)
    }

    /// Number of distinct states mentioned by the automaton.
    pub fn state_count(&self) -> usize {
        let mut all: BTreeSet<S> = BTreeSet::new();
        all.insert(self.start);
        all.extend(self.finals.iter().copied());
        for (src, edges) in &self.transitions {
            all.insert(*src);
            for dsts in edges.values() {
                all.extend(dsts.iter().copied());
            }
        }
        all.len()
    }

    /// Number of `(src, symbol, dst)` triples.
    pub fn transition_count(&self) -> usize {
        self.transitions
            .values()
            .flat_map(|edges| edges.values())
            .map(BTreeSet::len)
            .sum()
    }

    fn destinations(&self, state: &S, symbol: Symbol) -> impl Iterator<Item = S> + '_ {
        self.transitions
            .get(state)
            .and_then(|edges| edges.get(&symbol))
            .into_iter()
            .flatten()
            .copied()
    }
}
