// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-word statistics shared by every backend.
//!
//! A `WordEntry` is created the first time a word is seen and only ever grows
//! afterwards. The two mutable fields move in lockstep:
//!
//! - **FREQUENCY_MATCHES_LINES**: `frequency == line_refs.len()`
//! - **LINES_IN_ENCOUNTER_ORDER**: `line_refs` is append-only, so it lists
//!   lines in the order they were inserted (duplicates included)
//!
//! Both hold because the fields are private and the only mutator is
//! [`WordEntry::record`].

use serde::Serialize;

/// Occurrence statistics for one case-folded word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    word: String,
    frequency: usize,
    line_refs: Vec<usize>,
}

impl WordEntry {
    /// Create an entry for the first occurrence of `word` on `line`.
    ///
    /// `word` must already be case-folded; backends do that before calling.
    pub fn new(word: String, line: usize) -> Self {
        Self {
            word,
            frequency: 1,
            line_refs: vec![line],
        }
    }

    /// Record one more occurrence on `line`.
    #[inline]
    pub fn record(&mut self, line: usize) {
        self.frequency += 1;
        self.line_refs.push(line);
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn frequency(&self) -> usize {
        self.frequency
    }

    /// Line numbers in encounter order.
    pub fn line_refs(&self) -> &[usize] {
        &self.line_refs
    }

    /// Length used by the longest-word query, in Unicode scalar values.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.word.chars().count()
    }

    /// `(word, frequency)` view used by the query results.
    #[inline]
    pub fn as_word_count(&self) -> (&str, usize) {
        (&self.word, self.frequency)
    }
}
