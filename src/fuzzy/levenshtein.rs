// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain dynamic-programming edit distance.
//!
//! The automaton answers "within k?" in one walk, but this is the ground
//! truth it is checked against, and the right tool for a single comparison
//! where building a DFA would cost more than the DP itself.
//!
//! Distances count Unicode scalar values, never bytes.

/// Exact Levenshtein distance between `a` and `b`.
///
/// Two-row DP, `O(|a|·|b|)` time, `O(|b|)` space.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitute = diag + usize::from(ac != bc);
            row[j + 1] = substitute.min(above + 1).min(row[j] + 1);
            diag = above;
        }
    }

    row[b.len()]
}

/// Are `a` and `b` within `max` edits of each other?
///
/// Same DP as [`levenshtein_distance`] with two shortcuts:
/// 1. a length gap above `max` rejects before allocating
/// 2. a row whose minimum exceeds `max` rejects early, since row minima
///    never decrease
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b: Vec<char> = b.chars().collect();

    if a_len.abs_diff(b.len()) > max {
        return false;
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &bc) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitute = diag + usize::from(ac != bc);
            row[j + 1] = substitute.min(above + 1).min(row[j] + 1);
            row_min = row_min.min(row[j + 1]);
            diag = above;
        }

        if row_min > max {
            return false;
        }
    }

    row[b.len()] <= max
}
