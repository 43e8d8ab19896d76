// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Knobs for automaton construction.
//!
//! Nothing here is loaded from disk. The defaults suit
//! almost everyone: caches on, no cap on DFA size. A cap only matters when the
//! word/distance pair comes from untrusted input, since the DFA grows quickly
//! with `k` on long words.

/// Whether successor searches memoize their work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CacheMode {
    /// Fill `edge_map` and `path_map` lazily as searches run.
    #[default]
    Enabled,
    /// Recompute everything on every call.
    Disabled,
}

impl CacheMode {
    #[inline]
    pub fn is_enabled(self) -> bool {
        matches!(self, CacheMode::Enabled)
    }
}

/// Successor queries memoized per automaton before the cache is emptied.
pub const DEFAULT_PATH_CACHE_LIMIT: usize = 1 << 16;

/// Options for [`LevenshteinAutomaton::with_options`](crate::LevenshteinAutomaton::with_options).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutomatonOptions {
    /// Successor-search memoization.
    pub cache: CacheMode,
    /// Maximum number of DFA states determinization may create.
    pub state_limit: Option<usize>,
    /// Maximum number of memoized successor queries.
    pub path_cache_limit: usize,
}

impl Default for AutomatonOptions {
    fn default() -> Self {
        Self {
            cache: CacheMode::Enabled,
            state_limit: None,
            path_cache_limit: DEFAULT_PATH_CACHE_LIMIT,
        }
    }
}

impl AutomatonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(mut self, cache: CacheMode) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_state_limit(mut self, limit: usize) -> Self {
        self.state_limit = Some(limit);
        self
    }

    pub fn with_path_cache_limit(mut self, limit: usize) -> Self {
        self.path_cache_limit = limit;
        self
    }
}
