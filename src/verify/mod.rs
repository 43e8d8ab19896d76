// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: type-level invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrappers** (`SortedVocabulary`) that make invalid states
//!    unrepresentable. If you hold one, it is sorted.
//!
//! 2. **Runtime contracts** that panic in debug builds when invariants are violated.
//!    Zero-cost in release, but catch bugs during development.
//!
//! Use both. The wrapper catches a bad dictionary once, at construction. The
//! contracts catch algorithmic errors when tests run.

mod types;
pub mod contracts;

pub use types::*;
