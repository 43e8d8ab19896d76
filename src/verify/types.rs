// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make invalid states unrepresentable.
//!
//! The dictionary scan assumes ordinal order and silently returns garbage
//! without it. Instead of re-checking on every scan, wrap the word list in a
//! `SortedVocabulary`: the check is paid once at construction and guaranteed
//! forever after.
//!
//! # Example
//!
//! ```
//! use levseek::{LevenshteinAutomaton, SortedVocabulary};
//!
//! let vocab = SortedVocabulary::new(vec!["cat".into(), "dog".into(), "fog".into()]).unwrap();
//! let lev = LevenshteinAutomaton::new("dog", 1);
//! let hits: Vec<&str> = lev.scan(&vocab).collect();
//! assert_eq!(hits, ["dog", "fog"]);
//! ```

use thiserror::Error;

use super::contracts::first_unsorted_position;
use crate::dictionary::Dictionary;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// Entry at `position` sorts before the entry preceding it.
    #[error("dictionary not sorted at position {position}")]
    UnsortedDictionary { position: usize },
}

/// A word list in ordinal (code-point) order.
///
/// # Invariants (enforced at construction)
/// - For all `i < j`: `terms[i] <= terms[j]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortedVocabulary {
    terms: Vec<String>,
}

impl SortedVocabulary {
    /// Validate an already sorted list.
    ///
    /// Returns `Err` with the first out-of-order position otherwise.
    pub fn new(terms: Vec<String>) -> Result<Self, InvariantError> {
        match first_unsorted_position(&terms) {
            Some(position) => Err(InvariantError::UnsortedDictionary { position }),
            None => Ok(Self { terms }),
        }
    }

    /// Sort and deduplicate arbitrary terms.
    pub fn from_unsorted<I, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        terms.sort_unstable();
        terms.dedup();
        Self { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    pub fn into_inner(self) -> Vec<String> {
        self.terms
    }
}

impl Dictionary for SortedVocabulary {
    fn len(&self) -> usize {
        self.terms.len()
    }

    fn entry(&self, index: usize) -> Option<&str> {
        self.terms.as_slice().get(index).map(String::as_str)
    }

    fn lower_bound(&self, value: &str) -> usize {
        self.terms.partition_point(|t| t.as_str() < value)
    }
}
