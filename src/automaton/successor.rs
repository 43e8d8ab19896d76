// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wall-following successor search.
//!
//! Given a probe `Q`, find the smallest string `R ≥ Q` the DFA accepts. This is
//! what lets a dictionary scan leap over whole regions of a sorted word list:
//! instead of testing every entry, ask the automaton "what's the next thing
//! you could possibly accept?" and binary-search straight to it.
//!
//! # Algorithm
//!
//! ```text
//! 1. Walk Q from the start state, pushing a frame per character:
//!      (prefix length, state before the char, the char)
//!    Stop at the first char with no live transition.
//! 2. Consumed all of Q into a final state? Q is the answer.
//!    Consumed all of Q otherwise? push (|Q|, state, none).
//! 3. Pop frames deepest-first:
//!      candidate = min char            if the frame has no char
//!                = strict successor    of the frame's char otherwise
//!      x = smallest usable label ≥ candidate from the frame's state
//!      none?  drop the frame (backtrack left)
//!      found? prefix + x; re-push the frame with x (retry x+1 on dead ends)
//!             final → done; else push (new prefix, new state, none)
//! 4. Stack empty: no accepted string ≥ Q.
//! ```
//!
//! An explicit stack rather than recursion: a backtrack resumes a suspended
//! descent at arbitrary depth. Liveness pruning means every descent reaches
//! a final state, so in practice the first usable label found settles the
//! answer.
//!
//! # References
//!
//! - Mihov & Schulz (2004): "Fast Approximate Search in Large Dictionaries",
//!   Computational Linguistics 30(4). Dictionary traversal guided by a
//!   Levenshtein automaton.
//! - The "next valid string" walk used by Lucene's automaton term enumeration.

use super::dfa::{Dfa, StateId};
use super::next_char;
use crate::macros::trace;
use crate::verify::contracts::check_successor_result;

/// A suspended point of the walk.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Byte length of the prefix that led to `state`.
    prefix_len: usize,
    state: StateId,
    /// Character last tried from `state`; `None` if nothing was consumed yet.
    last: Option<char>,
}

impl Dfa {
    /// The lexicographically smallest accepted string `≥ query`.
    ///
    /// Ordering is code-point order, which for `str` is plain byte order.
    /// `None` means nothing at or after `query` is accepted; that is an
    /// ordinary end of enumeration, not an error.
    ///
    /// # Panics
    ///
    /// Panics if the automaton accepts infinitely many strings: there may be
    /// no smallest one (think `a*b`). Levenshtein automata are always finite.
    pub fn smallest_accepted_at_or_after(&self, query: &str) -> Option<String> {
        assert!(
            self.finite,
            "successor search requires an automaton with a finite language"
        );

        let caching = self.cache_mode.is_enabled();
        if caching {
            if let Some(hit) = self.path_map.read().get(query) {
                trace!("path_map hit for {:?}", query);
                return hit.clone();
            }
        }

        let result = self.wall_follow(query);
        check_successor_result(self, query, result.as_deref());

        if caching && self.path_cache_limit > 0 {
            let mut paths = self.path_map.write();
            if paths.len() >= self.path_cache_limit {
                trace!("path_map full at {} entries, clearing", paths.len());
                paths.clear();
            }
            paths.insert(query.to_owned(), result.clone());
        }
        result
    }

    fn wall_follow(&self, query: &str) -> Option<String> {
        if self.states.is_empty() || !self.is_live(self.start) {
            return None;
        }

        let mut stack: Vec<Frame> = Vec::with_capacity(query.len() + 1);
        let mut state = self.start;
        let mut consumed_all = true;

        for (offset, c) in query.char_indices() {
            stack.push(Frame {
                prefix_len: offset,
                state,
                last: Some(c),
            });
            match self.live_transition(state, c) {
                Some(next) => state = next,
                None => {
                    consumed_all = false;
                    break;
                }
            }
        }

        if consumed_all {
            if self.is_final(state) {
                return Some(query.to_owned());
            }
            stack.push(Frame {
                prefix_len: query.len(),
                state,
                last: None,
            });
        }

        let mut buf = query.to_owned();
        while let Some(frame) = stack.pop() {
            let candidate = match frame.last {
                None => '\0',
                Some(c) => match next_char(c) {
                    Some(n) => n,
                    None => continue,
                },
            };

            let Some((label, next)) = self.smallest_edge_at_or_after(frame.state, candidate)
            else {
                continue;
            };

            buf.truncate(frame.prefix_len);
            buf.push(label);
            stack.push(Frame {
                last: Some(label),
                ..frame
            });

            if self.is_final(next) {
                return Some(buf);
            }
            stack.push(Frame {
                prefix_len: buf.len(),
                state: next,
                last: None,
            });
        }

        None
    }

    #[inline]
    fn live_transition(&self, state: StateId, c: char) -> Option<StateId> {
        self.transition(state, c).filter(|&t| self.is_live(t))
    }

    /// Smallest `x ≥ candidate` with a live transition out of `state`.
    ///
    /// Keyed labels win when they equal the running candidate; otherwise a
    /// live default edge makes the candidate itself usable.
    fn smallest_edge_at_or_after(
        &self,
        state: StateId,
        candidate: char,
    ) -> Option<(char, StateId)> {
        let caching = self.cache_mode.is_enabled();
        if caching {
            if let Some(&hit) = self.edge_map.read().get(&(state, candidate)) {
                return hit;
            }
        }

        let found = self.scan_edges(state, candidate);
        if caching {
            self.edge_map.write().insert((state, candidate), found);
        }
        found
    }

    fn scan_edges(&self, state: StateId, candidate: char) -> Option<(char, StateId)> {
        let node = &self.states[state as usize];
        let from = node.edges.partition_point(|&(label, _)| label < candidate);
        let keyed = &node.edges[from..];

        match node.default.filter(|&d| self.is_live(d)) {
            None => keyed.iter().copied().find(|&(_, t)| self.is_live(t)),
            Some(default) => {
                let mut c = candidate;
                for &(label, target) in keyed {
                    if label != c {
                        break;
                    }
                    if self.is_live(target) {
                        return Some((label, target));
                    }
                    c = next_char(c)?;
                }
                Some((c, default))
            }
        }
    }
}
