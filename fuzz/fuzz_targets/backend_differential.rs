// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target: hash and BST backends fed the same insertions must agree.
//!
//! Words are arbitrary strings, so this also covers non-ASCII case folding,
//! whitespace-only words, and line 0.

#![no_main]

use arbitrary::Arbitrary;
use concord::report::diff_indexes;
use concord::{new_index, Backend, SortOrder};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Insertion {
    word: String,
    line: u16,
}

fuzz_target!(|insertions: Vec<Insertion>| {
    let mut hash = new_index(Backend::Hash);
    let mut bst = new_index(Backend::Bst);

    for Insertion { word, line } in &insertions {
        let line = usize::from(*line);
        // Both must accept or reject identically.
        assert_eq!(hash.insert(word, line), bst.insert(word, line));
    }

    let mismatches = diff_indexes(hash.as_ref(), bst.as_ref());
    assert!(mismatches.is_empty(), "{:?}", mismatches);

    let ascending: Vec<_> = bst.entries_sorted(SortOrder::Ascending).collect();
    assert_eq!(ascending.len(), bst.unique_words());
    assert_eq!(
        ascending.iter().map(|&(_, count)| count).sum::<usize>(),
        bst.total_occurrences()
    );
});
