// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the word index.
//!
//! Debug-build assertions that the backends call after mutating or while
//! producing ordered output:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`, loops behind
//!    `cfg!(debug_assertions)`)
//! 2. **Early failure detection** while tests run
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Invariant                                     |
//! |--------------------------------|-----------------------------------------------|
//! | `check_entry_consistent`       | `frequency == line_refs.len()`, lines 1-based |
//! | `check_step_ordered`           | consecutive words strictly ordered            |
//! | `check_words_strictly_ordered` | whole sequence strictly ordered (no dupes)    |
//! | `check_unique_count`           | running unique count matches stored entries   |
//!
//! "Strictly" matters: equal neighbours would mean a word stored twice, which
//! breaks both the BST key invariant and the hash map's unique keys.

use std::cmp::Ordering;

use crate::entry::WordEntry;
use crate::index::SortOrder;

// ============================================================================
// ENTRY CONTRACTS
// ============================================================================

/// Check that an entry's counters agree. Called after every `record`, so only
/// the newest line ref needs checking.
///
/// # Panics (debug builds only)
/// Panics if `frequency != line_refs.len()` or the newest line is `0`.
#[inline]
pub fn check_entry_consistent(entry: &WordEntry) {
    debug_assert_eq!(
        entry.frequency(),
        entry.line_refs().len(),
        "Contract violation: frequency {} != {} line refs for '{}'",
        entry.frequency(),
        entry.line_refs().len(),
        entry.word()
    );
    debug_assert!(
        entry.line_refs().last() != Some(&0),
        "Contract violation: line 0 recorded for '{}'",
        entry.word()
    );
}

// ============================================================================
// ORDERING CONTRACTS
// ============================================================================

/// Check one step of an ordered enumeration.
///
/// # Panics (debug builds only)
/// Panics if `next` does not come strictly after `prev` in `order`.
#[inline]
pub fn check_step_ordered(prev: &str, next: &str, order: SortOrder) {
    let expected = match order {
        SortOrder::Ascending => Ordering::Less,
        SortOrder::Descending => Ordering::Greater,
    };
    debug_assert!(
        prev.cmp(next) == expected,
        "Contract violation: '{}' then '{}' is not strictly {:?}",
        prev,
        next,
        order
    );
}

/// Check that a whole word sequence is strictly ordered.
#[inline]
pub fn check_words_strictly_ordered<'a, I>(words: I, order: SortOrder)
where
    I: IntoIterator<Item = &'a str>,
{
    if !cfg!(debug_assertions) {
        return;
    }
    let mut words = words.into_iter();
    let Some(mut prev) = words.next() else {
        return;
    };
    for next in words {
        check_step_ordered(prev, next, order);
        prev = next;
    }
}

// ============================================================================
// BOOKKEEPING CONTRACTS
// ============================================================================

/// Check the incrementally maintained unique count against a recount.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_unique_count(claimed: usize, actual: usize) {
    debug_assert_eq!(
        claimed, actual,
        "Contract violation: unique count {} but {} entries stored",
        claimed, actual
    );
}
