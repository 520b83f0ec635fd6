// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hash-map backend.
//!
//! O(1) amortized insert and lookup, no inherent order. Sorted views are
//! materialized per call: collect `(word, count)` pairs, sort ordinally, yield.
//! Keys are unique, so the sort is a total order and stability is irrelevant.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::{fold_case, validate_insert, Backend, IndexError, Ranking, SortOrder, WordCount, WordIndex};
use crate::contracts::{check_entry_consistent, check_words_strictly_ordered};
use crate::entry::WordEntry;

/// Word index over a `HashMap<String, WordEntry>`.
///
/// The unique-word count is the map's length, which the map keeps up to date
/// on every insert; nothing is recounted by scanning.
#[derive(Debug, Clone, Default)]
pub struct HashIndex {
    entries: HashMap<String, WordEntry>,
    total: usize,
}

impl HashIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the map, e.g. from a vocabulary estimate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            total: 0,
        }
    }

    /// Entry for `word` (any case).
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries.get(&fold_case(word))
    }

    /// All entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.values()
    }
}

impl WordIndex for HashIndex {
    fn insert(&mut self, word: &str, line: usize) -> Result<(), IndexError> {
        validate_insert(word, line)?;

        match self.entries.entry(fold_case(word)) {
            Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                entry.record(line);
                check_entry_consistent(entry);
            }
            Entry::Vacant(slot) => {
                let entry = WordEntry::new(slot.key().clone(), line);
                slot.insert(entry);
            }
        }
        self.total += 1;
        Ok(())
    }

    fn unique_words(&self) -> usize {
        self.entries.len()
    }

    fn total_occurrences(&self) -> usize {
        self.total
    }

    fn frequency(&self, word: &str) -> usize {
        self.get(word).map_or(0, WordEntry::frequency)
    }

    fn lines(&self, word: &str) -> Vec<usize> {
        self.get(word)
            .map(|entry| entry.line_refs().to_vec())
            .unwrap_or_default()
    }

    fn most_frequent(&self) -> WordCount<'_> {
        Ranking::MostFrequent.pick(self.entries.values())
    }

    fn longest(&self) -> WordCount<'_> {
        Ranking::Longest.pick(self.entries.values())
    }

    fn entries_sorted(&self, order: SortOrder) -> Box<dyn Iterator<Item = WordCount<'_>> + '_> {
        let mut pairs: Vec<WordCount<'_>> = self
            .entries
            .values()
            .map(WordEntry::as_word_count)
            .collect();

        match order {
            SortOrder::Ascending => pairs.sort_unstable_by(|a, b| a.0.cmp(b.0)),
            SortOrder::Descending => pairs.sort_unstable_by(|a, b| b.0.cmp(a.0)),
        }
        check_words_strictly_ordered(pairs.iter().map(|&(word, _)| word), order);

        Box::new(pairs.into_iter())
    }

    fn backend(&self) -> Backend {
        Backend::Hash
    }
}
