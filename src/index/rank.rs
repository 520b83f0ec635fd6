// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tie-break rules for the "best word" queries.
//!
//! Both backends answer `most_frequent` and `longest` with one linear pass,
//! keeping the best entry seen so far. The only thing that differs between the
//! two queries is how two entries compare, so that lives here and the scan is
//! shared.
//!
//! | Query           | Primary key        | Then          | Then                  |
//! |-----------------|--------------------|---------------|-----------------------|
//! | `MostFrequent`  | higher frequency   | -             | smaller word (ordinal)|
//! | `Longest`       | more characters    | higher freq.  | smaller word (ordinal)|
//!
//! Words are unique within an index, so the final ordinal key makes both
//! orders total: visitation order never affects the winner.

use std::cmp::Ordering;

use crate::entry::WordEntry;

/// `(word, count)` pair returned by the query operations.
pub type WordCount<'a> = (&'a str, usize);

/// Sentinel for "no data": returned by the best-word queries on an empty index.
pub const NO_WORD: WordCount<'static> = ("", 0);

/// Which best-word query is being answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    MostFrequent,
    Longest,
}

impl Ranking {
    /// `Greater` means `a` should win over `b`.
    pub fn compare(self, a: &WordEntry, b: &WordEntry) -> Ordering {
        let primary = match self {
            Ranking::MostFrequent => a.frequency().cmp(&b.frequency()),
            Ranking::Longest => a
                .char_len()
                .cmp(&b.char_len())
                .then_with(|| a.frequency().cmp(&b.frequency())),
        };
        // Smaller word wins, so the word comparison is reversed.
        primary.then_with(|| b.word().cmp(a.word()))
    }

    /// Single O(n) scan picking the winning entry, or [`NO_WORD`] if `entries` is empty.
    pub fn pick<'a, I>(self, entries: I) -> WordCount<'a>
    where
        I: IntoIterator<Item = &'a WordEntry>,
    {
        entries
            .into_iter()
            .max_by(|a, b| self.compare(a, b))
            .map_or(NO_WORD, WordEntry::as_word_count)
    }
}
