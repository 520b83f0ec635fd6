// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Line tokenizer and word filter.
//!
//! Turns one line of text into the tokens worth indexing:
//!
//! 1. Split on [`DELIMITERS`] and any whitespace, dropping empty pieces.
//! 2. Keep a piece only if it is word-shaped: ASCII letters, at least two of
//!    them, or exactly `a` / `i`.
//! 3. Drop word-shaped pieces that are really Roman numerals (chapter
//!    headings like `XIV`), unless they are on [`ROMAN_ALLOW_LIST`].
//!
//! Tokens keep their original case. Folding is the index's job.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Punctuation that separates words, in addition to whitespace.
pub const DELIMITERS: &[char] = &[' ', ',', '"', ':', ';', '?', '!', '-', '.', '\'', '*'];

/// Real words that also parse as canonical Roman numerals.
pub const ROMAN_ALLOW_LIST: &[&str] = &["i", "mix", "mi", "xi"];

static WORD_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:[a-z]{2,}|[ai])$").expect("word shape pattern is valid"));

/// Canonical numerals 1..=4999. The pattern also matches "", which callers exclude.
static ROMAN_NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^m{0,4}(cm|cd|d?c{0,3})(xc|xl|l?x{0,3})(ix|iv|v?i{0,3})$")
        .expect("roman numeral pattern is valid")
});

static ALLOWED: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ROMAN_ALLOW_LIST.iter().copied().collect());

#[inline]
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || DELIMITERS.contains(&c)
}

/// Raw pieces of `line` between delimiters, empty pieces removed.
pub fn split_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_delimiter).filter(|piece| !piece.is_empty())
}

/// Letters only and length >= 2, or the single-letter words `a` / `i`.
pub fn is_word(token: &str) -> bool {
    WORD_SHAPE.is_match(token)
}

/// Whether `token` (any case) is a canonical Roman numeral.
pub fn looks_like_roman_numeral(token: &str) -> bool {
    !token.is_empty() && ROMAN_NUMERAL.is_match(&token.to_ascii_lowercase())
}

/// Why a token was or was not indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    NotAWord,
    RomanNumeral,
}

/// Classify a single raw token.
pub fn classify(token: &str) -> Verdict {
    if !is_word(token) {
        return Verdict::NotAWord;
    }
    if looks_like_roman_numeral(token) && !ALLOWED.contains(token.to_ascii_lowercase().as_str()) {
        return Verdict::RomanNumeral;
    }
    Verdict::Accepted
}

/// Accepted tokens of `line`, in order.
pub fn tokenize_line(line: &str) -> impl Iterator<Item = &str> {
    split_tokens(line).filter(|token| classify(token) == Verdict::Accepted)
}

/// Running counts of what the tokenizer saw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TokenStats {
    pub seen: usize,
    pub accepted: usize,
    pub rejected_shape: usize,
    pub rejected_roman: usize,
}

/// Stateful tokenizer that keeps [`TokenStats`] across lines.
#[derive(Debug, Default)]
pub struct Tokenizer {
    stats: TokenStats,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepted tokens of `line`, updating the counters.
    pub fn line<'a>(&mut self, line: &'a str) -> Vec<&'a str> {
        let mut accepted = Vec::new();
        for token in split_tokens(line) {
            self.stats.seen += 1;
            match classify(token) {
                Verdict::Accepted => {
                    self.stats.accepted += 1;
                    accepted.push(token);
                }
                Verdict::NotAWord => self.stats.rejected_shape += 1,
                Verdict::RomanNumeral => self.stats.rejected_roman += 1,
            }
        }
        accepted
    }

    pub fn stats(&self) -> TokenStats {
        self.stats
    }
}
