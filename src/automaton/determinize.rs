// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Powerset construction: NFA in, DFA out.
//!
//! Each DFA state stands for the set of NFA states you could be in after
//! reading some prefix. Start from the epsilon-closure of the NFA start,
//! follow every non-epsilon label, intern each new subset, repeat until the
//! worklist drains.
//!
//! The `Any` label gets special treatment: its subset becomes the state's
//! *default* transition rather than a keyed one. For the Levenshtein NFA that
//! keeps the DFA small: one keyed edge per character of the target word that
//! is in play, plus one default edge for "everything else".
//!
//! # References
//!
//! - Rabin & Scott (1959): "Finite Automata and Their Decision Problems",
//!   IBM Journal of Research and Development 3(2).

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use super::dfa::{Dfa, DfaState, StateId};
use super::nfa::Nfa;
use super::{StateSet, Symbol};
use crate::error::{Error, Result};
use crate::macros::debug;
use crate::verify::contracts::check_subset_closed;

/// A DFA together with the NFA subset behind each of its states.
///
/// `subsets[id]` is the epsilon-closed set of NFA states DFA state `id`
/// represents. Callers that need to know *why* a state accepts (the
/// Levenshtein builder reads edit counts off it) look here.
#[derive(Debug, Clone)]
pub struct Determinized<S> {
    pub dfa: Dfa,
    pub subsets: Vec<StateSet<S>>,
}

/// Determinize without a size cap.
pub fn determinize<S>(nfa: &Nfa<S>) -> Determinized<S>
where
    S: Copy + Ord + Hash,
{
    match Powerset::new(nfa, None).run() {
        Ok(done) => done,
        Err(_) => unreachable!("powerset construction without a limit cannot fail"),
    }
}

/// Determinize, giving up once more than `limit` DFA states would exist.
pub fn determinize_with_limit<S>(nfa: &Nfa<S>, limit: usize) -> Result<Determinized<S>>
where
    S: Copy + Ord + Hash,
{
    Powerset::new(nfa, Some(limit)).run()
}

struct Powerset<'a, S> {
    nfa: &'a Nfa<S>,
    limit: Option<usize>,
    subsets: Vec<StateSet<S>>,
    ids: HashMap<StateSet<S>, StateId>,
    states: Vec<DfaState>,
    queue: VecDeque<StateId>,
}

impl<'a, S: Copy + Ord + Hash> Powerset<'a, S> {
    fn new(nfa: &'a Nfa<S>, limit: Option<usize>) -> Self {
        Self {
            nfa,
            limit,
            subsets: Vec::new(),
            ids: HashMap::new(),
            states: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    fn run(mut self) -> Result<Determinized<S>> {
        let start = self.nfa.epsilon_closure([self.nfa.start()]);
        let start_id = self.intern(start)?;

        while let Some(id) = self.queue.pop_front() {
            let subset = self.subsets[id as usize].clone();

            for symbol in self.nfa.outgoing_symbols(&subset) {
                if symbol == Symbol::Epsilon {
                    continue;
                }
                let target = self.nfa.next_states(&subset, symbol);
                let target_id = self.intern(target)?;

                // Symbol order yields keyed edges in ascending char order.
                let node = &mut self.states[id as usize];
                match symbol {
                    Symbol::Char(c) => node.edges.push((c, target_id)),
                    Symbol::Any => node.default = Some(target_id),
                    Symbol::Epsilon => {}
                }
            }
        }

        let dfa = Dfa::from_parts(self.states, start_id);
        debug!(
            "determinized {} NFA states into {} DFA states (finite: {})",
            self.nfa.state_count(),
            dfa.state_count(),
            dfa.is_finite()
        );

        Ok(Determinized {
            dfa,
            subsets: self.subsets,
        })
    }

    /// Id for `subset`, creating and enqueueing a new DFA state if unseen.
    fn intern(&mut self, subset: StateSet<S>) -> Result<StateId> {
        if let Some(&id) = self.ids.get(&subset) {
            return Ok(id);
        }

        if let Some(limit) = self.limit {
            if self.subsets.len() >= limit {
                return Err(Error::StateLimitExceeded {
                    limit,
                    states: self.subsets.len() + 1,
                });
            }
        }

        check_subset_closed(self.nfa, &subset);

        let id = self.subsets.len() as StateId;
        self.states.push(DfaState::new(self.nfa.is_accepting(&subset)));
        self.ids.insert(subset.clone(), id);
        self.subsets.push(subset);
        self.queue.push_back(id);
        Ok(id)
    }
}
