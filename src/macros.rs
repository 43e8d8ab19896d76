// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Logging shims over the `log` facade.
//!
//! With the `logging` feature off these expand to nothing, so call sites cost
//! zero and the crate carries no `log` dependency.

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::debug!($($tt)*);
        }
    };
}

macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::trace!($($tt)*);
        }
    };
}

pub(crate) use debug;
pub(crate) use trace;
