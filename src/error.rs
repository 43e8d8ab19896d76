// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! The core algorithms have no recoverable failures: "nothing matched" is a
//! `None`, not an error. What's left are caller mistakes we can detect cheaply
//! (an unsorted dictionary) and the one resource guard (too many DFA states).

use thiserror::Error;

use crate::verify::InvariantError;

/// Errors surfaced by automaton construction and checked dictionary scans.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Powerset construction discovered more DFA states than allowed.
    #[error("determinization produced {states} states, exceeding the limit of {limit}")]
    StateLimitExceeded { limit: usize, states: usize },
    /// Input violated a documented precondition.
    #[error(transparent)]
    Invariant(#[from] InvariantError),
}

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
