// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The word index: one contract, two backends.
//!
//! Every backend stores one [`WordEntry`](crate::WordEntry) per case-folded word and answers the
//! same queries. They differ only in how they get there:
//!
//! | Operation        | `HashIndex`          | `BstIndex`                    |
//! |------------------|----------------------|-------------------------------|
//! | `insert`         | O(1) amortized       | O(h), h = tree height         |
//! | `frequency/lines`| O(1)                 | O(h)                          |
//! | `most_frequent`  | O(n) scan            | O(n) traversal                |
//! | `entries_sorted` | O(n log n) sort/call | O(n) in-order, O(h) stack     |
//!
//! The tree is never rebalanced, so already-sorted input degrades it to a list
//! (h = n). That is the point of having it around: it is the comparison case.
//!
//! # Contract
//!
//! - Words are case-folded with [`fold_case`] on the way in *and* on lookup.
//! - `insert` rejects an empty or whitespace-only word and line `0`, leaving
//!   the index untouched. Anything else is accepted as-is.
//! - Lookups never fail: unknown words give `0` and an empty line list.
//! - `most_frequent` / `longest` return [`NO_WORD`] (`("", 0)`) when empty.
//! - `entries_sorted` is lazy and restartable. It borrows the index, so
//!   inserting while an enumeration is alive does not compile.

mod bst;
mod hash;
mod rank;

pub use bst::{BstIndex, SortedEntries};
pub use hash::HashIndex;
pub use rank::{Ranking, WordCount, NO_WORD};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Direction for [`WordIndex::entries_sorted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// A to Z
    #[default]
    Ascending,
    /// Z to A
    Descending,
}

impl SortOrder {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }
}

/// Rejected insertion. The index is unchanged after either variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Word was empty or only whitespace.
    EmptyWord,
    /// Line numbers are 1-based; `0` is not a line.
    InvalidLine { word: String },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::EmptyWord => write!(f, "cannot index an empty word"),
            IndexError::InvalidLine { word } => {
                write!(f, "line numbers start at 1 (got 0 for '{}')", word)
            }
        }
    }
}

impl std::error::Error for IndexError {}

/// Case-folding applied to every stored word and every query.
///
/// Plain `to_lowercase`: Unicode's default lowercase mapping, no locale
/// tailoring and no full folding (`"ß"` stays `"ß"`).
#[inline]
pub fn fold_case(word: &str) -> String {
    word.to_lowercase()
}

/// Shared argument check for `insert`, identical for every backend.
pub(crate) fn validate_insert(word: &str, line: usize) -> Result<(), IndexError> {
    if word.trim().is_empty() {
        return Err(IndexError::EmptyWord);
    }
    if line == 0 {
        return Err(IndexError::InvalidLine {
            word: word.to_string(),
        });
    }
    Ok(())
}

/// The capability every backend provides.
///
/// Callers pick a backend once (see [`new_index`]) and talk to it only
/// through this trait.
pub trait WordIndex {
    /// Record one occurrence of `word` on 1-based `line`.
    fn insert(&mut self, word: &str, line: usize) -> Result<(), IndexError>;

    /// Number of distinct words. O(1).
    fn unique_words(&self) -> usize;

    /// Number of accepted insertions. O(1).
    fn total_occurrences(&self) -> usize;

    /// Occurrences of `word` (any case), `0` if absent.
    fn frequency(&self, word: &str) -> usize;

    /// Copy of the line numbers for `word` in insertion order, empty if absent.
    fn lines(&self, word: &str) -> Vec<usize>;

    /// Highest frequency, ties to the ordinally smallest word.
    fn most_frequent(&self) -> WordCount<'_>;

    /// Most characters, ties to higher frequency, then smallest word.
    fn longest(&self) -> WordCount<'_>;

    /// Every stored word exactly once, in ordinal order.
    fn entries_sorted(&self, order: SortOrder) -> Box<dyn Iterator<Item = WordCount<'_>> + '_>;

    /// Which implementation this is.
    fn backend(&self) -> Backend;

    fn is_empty(&self) -> bool {
        self.unique_words() == 0
    }

    fn contains(&self, word: &str) -> bool {
        self.frequency(word) > 0
    }

    /// Longest root-to-leaf path for tree backends, `None` otherwise.
    fn tree_height(&self) -> Option<usize> {
        None
    }
}

/// Backend selector used by [`new_index`] and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Hash,
    Bst,
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::Hash, Backend::Bst];

    pub fn name(self) -> &'static str {
        match self {
            Backend::Hash => "hash",
            Backend::Bst => "bst",
        }
    }

    /// The other backend, for "switch and rebuild".
    pub fn other(self) -> Self {
        match self {
            Backend::Hash => Backend::Bst,
            Backend::Bst => Backend::Hash,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hash" | "hashmap" | "map" => Ok(Backend::Hash),
            "bst" | "tree" => Ok(Backend::Bst),
            other => Err(format!("unknown backend '{}' (expected 'hash' or 'bst')", other)),
        }
    }
}

/// Construct an empty index backed by `backend`.
pub fn new_index(backend: Backend) -> Box<dyn WordIndex> {
    match backend {
        Backend::Hash => Box::new(HashIndex::new()),
        Backend::Bst => Box::new(BstIndex::new()),
    }
}
