// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word concordance: per-word frequency and line references for a text.
//!
//! Every distinct (lowercased) word gets a [`WordEntry`] holding how often it
//! occurs and on which lines. The index answers frequency and line lookups,
//! the most frequent word, the longest word, and a full alphabetical listing.
//!
//! Two backends implement the same [`WordIndex`] contract:
//!
//! - [`HashIndex`]: hash map, O(1) inserts, sorts on demand for listings
//! - [`BstIndex`]: unbalanced binary search tree, ordered listings for free,
//!   O(n) inserts in the worst case
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ tokenize.rs │────▶│  build/      │────▶│  index/          │
//! │ (split,     │     │ (read lines, │     │  WordIndex trait │
//! │  filter)    │     │  time build) │     │  ├─ hash.rs      │
//! └─────────────┘     └──────────────┘     │  ├─ bst.rs       │
//!                                          │  └─ rank.rs      │
//!                                          └──────────────────┘
//!                                                   │
//!        ┌───────────────┐                          ▼
//!        │ contracts.rs  │◀──── debug checks ── entry.rs
//!        └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use concord::{new_index, Backend, SortOrder};
//!
//! let mut index = new_index(Backend::Bst);
//! for (word, line) in [("the", 1), ("fox", 1), ("The", 2), ("dog", 3), ("the", 5)] {
//!     index.insert(word, line).unwrap();
//! }
//!
//! assert_eq!(index.frequency("THE"), 3);
//! assert_eq!(index.lines("the"), vec![1, 2, 5]);
//! assert_eq!(index.most_frequent(), ("the", 3));
//!
//! let listing: Vec<_> = index.entries_sorted(SortOrder::Ascending).collect();
//! assert_eq!(listing, vec![("dog", 1), ("fox", 1), ("the", 3)]);
//! ```

pub mod build;
pub mod config;
pub mod contracts;
mod entry;
mod index;
pub mod report;
pub mod tokenize;

pub use build::{build_from_path, build_from_reader, BuildError, BuildOptions, BuildReport, BuiltIndex};
pub use entry::WordEntry;
pub use index::{
    fold_case, new_index, Backend, BstIndex, HashIndex, IndexError, Ranking, SortOrder,
    SortedEntries, WordCount, WordIndex, NO_WORD,
};
pub use tokenize::{tokenize_line, Tokenizer};
