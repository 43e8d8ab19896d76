// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The dictionary seam.
//!
//! The scan never owns the word list. It needs three things: the length,
//! entry `i`, and "first index whose entry is `≥ v`". Anything sorted in
//! ordinal order that can answer those plugs in: a `Vec<String>`, a slice of
//! `&str`, a [`SortedVocabulary`](crate::SortedVocabulary), or your own
//! memory-mapped word list.
//!
//! Sorting is the caller's job. An unsorted dictionary trips a debug contract
//! and gives undefined (but memory-safe) results in release.

/// Ordered, index-addressable word list.
pub trait Dictionary {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry at `index`, or `None` past the end.
    fn entry(&self, index: usize) -> Option<&str>;

    /// First index whose entry is `≥ value`; `len()` if there is none.
    ///
    /// The default is a binary search over [`entry`](Self::entry).
    fn lower_bound(&self, value: &str) -> usize {
        let (mut lo, mut hi) = (0, self.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match self.entry(mid) {
                Some(entry) if entry < value => lo = mid + 1,
                _ => hi = mid,
            }
        }
        lo
    }
}

impl<T: AsRef<str>> Dictionary for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn entry(&self, index: usize) -> Option<&str> {
        <[T]>::get(self, index).map(|entry| entry.as_ref())
    }

    fn lower_bound(&self, value: &str) -> usize {
        self.partition_point(|entry| entry.as_ref() < value)
    }
}

impl<T: AsRef<str>> Dictionary for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn entry(&self, index: usize) -> Option<&str> {
        self.as_slice().get(index).map(|entry| entry.as_ref())
    }

    fn lower_bound(&self, value: &str) -> usize {
        Dictionary::lower_bound(self.as_slice(), value)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn entry(&self, index: usize) -> Option<&str> {
        (**self).entry(index)
    }

    fn lower_bound(&self, value: &str) -> usize {
        (**self).lower_bound(value)
    }
}
