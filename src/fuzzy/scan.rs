// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Automaton-guided dictionary scan.
//!
//! Alternate between two oracles until one runs dry:
//!
//! ```text
//!   probe ← smallest accepted ≥ ""
//!   loop:
//!     pos ← lower_bound(dict, probe)          dictionary: next real word ≥ probe
//!     pos = len        → done
//!     dict[pos] = probe → yield it; probe ← smallest accepted > probe
//!     otherwise        → probe ← smallest accepted ≥ dict[pos]
//!     probe = none     → done
//! ```
//!
//! Each round the probe strictly increases, so the loop ends. It visits
//! roughly one dictionary position per match plus one per "gap" the
//! automaton jumps, not one per entry.
//!
//! "Strictly greater than `p`" is asked as "at or after `p + '\0'`": no string
//! sits between `p` and `p\0` in code-point order.

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::macros::debug;
use crate::verify::contracts::{
    check_dictionary_sorted, check_lower_bound_result, check_probe_advances,
    first_unsorted_position,
};
use crate::verify::InvariantError;

use super::builder::LevenshteinAutomaton;

/// A dictionary word the automaton accepted, with its exact distance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuzzyMatch {
    pub term: String,
    pub distance: u32,
}

/// Lazy iterator over the accepted words of a sorted dictionary.
///
/// Yields in dictionary order. Duplicate entries are reported once.
#[derive(Debug)]
pub struct DictionaryScan<'a, D: ?Sized> {
    automaton: &'a LevenshteinAutomaton,
    dict: &'a D,
    probe: Option<String>,
    probes: usize,
    matches: usize,
}

impl<'a, D: Dictionary + ?Sized> DictionaryScan<'a, D> {
    pub(crate) fn new(automaton: &'a LevenshteinAutomaton, dict: &'a D) -> Self {
        check_dictionary_sorted(dict);
        let probe = if dict.is_empty() {
            None
        } else {
            automaton.smallest_accepted_at_or_after("")
        };
        Self {
            automaton,
            dict,
            probe,
            probes: 0,
            matches: 0,
        }
    }

    /// Dictionary lookups made so far.
    pub fn probes(&self) -> usize {
        self.probes
    }

    /// Words yielded so far.
    pub fn yielded(&self) -> usize {
        self.matches
    }

    fn finish(&mut self) {
        self.probe = None;
        debug!(
            "scan for {:?} (k={}) finished: {} matches in {} probes over {} entries",
            self.automaton.word(),
            self.automaton.max_distance(),
            self.matches,
            self.probes,
            self.dict.len()
        );
    }
}

impl<'a, D: Dictionary + ?Sized> Iterator for DictionaryScan<'a, D> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let dict: &'a D = self.dict;

        loop {
            let probe = self.probe.take()?;
            self.probes += 1;

            let pos = dict.lower_bound(&probe);
            check_lower_bound_result(pos, dict.len());

            let Some(entry) = dict.entry(pos) else {
                self.finish();
                return None;
            };

            if entry == probe {
                let mut past = probe;
                past.push('\0');
                self.matches += 1;
                self.probe = self.automaton.smallest_accepted_at_or_after(&past);
                match &self.probe {
                    Some(next) => check_probe_advances(entry, next),
                    None => self.finish(),
                }
                return Some(entry);
            }

            self.probe = self.automaton.smallest_accepted_at_or_after(entry);
            match &self.probe {
                Some(next) => check_probe_advances(&probe, next),
                None => self.finish(),
            }
        }
    }
}

impl LevenshteinAutomaton {
    /// Lazily enumerate accepted dictionary words in order.
    ///
    /// `dict` must be sorted in ordinal order; debug builds check this.
    pub fn scan<'a, D: Dictionary + ?Sized>(&'a self, dict: &'a D) -> DictionaryScan<'a, D> {
        DictionaryScan::new(self, dict)
    }

    /// Does any dictionary word lie within `max_distance`?
    pub fn any_match_in<D: Dictionary + ?Sized>(&self, dict: &D) -> bool {
        self.scan(dict).next().is_some()
    }

    /// Every accepted dictionary word with its distance, in dictionary order.
    pub fn matches_in<D: Dictionary + ?Sized>(&self, dict: &D) -> Vec<FuzzyMatch> {
        self.scan(dict)
            .filter_map(|term| {
                self.distance(term).map(|distance| FuzzyMatch {
                    term: term.to_owned(),
                    distance,
                })
            })
            .collect()
    }

    /// [`matches_in`](Self::matches_in), but verify the sort order first.
    ///
    /// Costs a linear pass. Use it on word lists from outside the program.
    pub fn matches_in_checked<D: Dictionary + ?Sized>(&self, dict: &D) -> Result<Vec<FuzzyMatch>> {
        if let Some(position) = first_unsorted_position(dict) {
            return Err(InvariantError::UnsortedDictionary { position }.into());
        }
        Ok(self.matches_in(dict))
    }
}
