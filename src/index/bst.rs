// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary-search-tree backend.
//!
//! A plain, unbalanced BST keyed by the case-folded word. Each node owns its
//! entry and its two children; there are no parent pointers.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **BST_ORDER**: every word in a node's left subtree is ordinally smaller
//!    than the node's word, every word in its right subtree is larger.
//! 2. **NO_DUPLICATES**: a repeated word updates its node in place.
//! 3. **UNIQUE_COUNT**: `unique` is bumped exactly when a leaf is created.
//!
//! # Complexity
//!
//! Tree shape depends on insertion order and is never rebalanced. Natural
//! text gives a height around `log n`; sorted input gives a list (`h = n`).
//! Because of that, nothing here recurses: insert and lookup walk down with a
//! loop, traversals use an explicit stack, and `Drop` tears the tree down with
//! a worklist. A list of a few thousand nodes would otherwise blow a thread's
//! call stack.

use std::cmp::Ordering;
use std::fmt;

use super::{fold_case, validate_insert, Backend, IndexError, Ranking, SortOrder, WordCount, WordIndex};
use crate::contracts::{check_entry_consistent, check_step_ordered, check_unique_count};
use crate::entry::WordEntry;

type Link = Option<Box<Node>>;

struct Node {
    entry: WordEntry,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(entry: WordEntry) -> Box<Self> {
        Box::new(Self {
            entry,
            left: None,
            right: None,
        })
    }

    /// Child visited first for `order` (left for A-Z).
    #[inline]
    fn near(&self, order: SortOrder) -> Option<&Node> {
        match order {
            SortOrder::Ascending => self.left.as_deref(),
            SortOrder::Descending => self.right.as_deref(),
        }
    }

    /// Child visited after the node itself.
    #[inline]
    fn far(&self, order: SortOrder) -> Option<&Node> {
        match order {
            SortOrder::Ascending => self.right.as_deref(),
            SortOrder::Descending => self.left.as_deref(),
        }
    }
}

/// Word index over an unbalanced binary search tree.
#[derive(Default)]
pub struct BstIndex {
    root: Link,
    unique: usize,
    total: usize,
}

impl BstIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry for `word` (any case). Iterative descent, O(h).
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        let target = fold_case(word);
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match target.as_str().cmp(node.entry.word()) {
                Ordering::Equal => return Some(&node.entry),
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        None
    }

    /// Lazy in-order (or reverse in-order) walk over the entries.
    pub fn iter(&self, order: SortOrder) -> SortedEntries<'_> {
        SortedEntries {
            stack: Vec::new(),
            cur: self.root.as_deref(),
            order,
            remaining: self.unique,
            expected: self.unique,
            last: None,
        }
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    ///
    /// O(n) with an explicit stack; used to show how skewed the tree is.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> = Vec::new();
        stack.extend(self.root.as_deref().map(|root| (root, 1)));
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }
}

impl WordIndex for BstIndex {
    fn insert(&mut self, word: &str, line: usize) -> Result<(), IndexError> {
        validate_insert(word, line)?;
        let word = fold_case(word);

        let mut slot = &mut self.root;
        loop {
            match slot {
                None => {
                    *slot = Some(Node::leaf(WordEntry::new(word, line)));
                    self.unique += 1;
                    break;
                }
                Some(node) => match word.as_str().cmp(node.entry.word()) {
                    Ordering::Equal => {
                        node.entry.record(line);
                        check_entry_consistent(&node.entry);
                        break;
                    }
                    Ordering::Less => slot = &mut node.left,
                    Ordering::Greater => slot = &mut node.right,
                },
            }
        }
        self.total += 1;
        Ok(())
    }

    fn unique_words(&self) -> usize {
        self.unique
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
        Ranking::MostFrequent.pick(self.iter(SortOrder::Ascending))
    }

    fn longest(&self) -> WordCount<'_> {
        Ranking::Longest.pick(self.iter(SortOrder::Ascending))
    }

    fn entries_sorted(&self, order: SortOrder) -> Box<dyn Iterator<Item = WordCount<'_>> + '_> {
        Box::new(self.iter(order).map(WordEntry::as_word_count))
    }

    fn backend(&self) -> Backend {
        Backend::Bst
    }

    fn tree_height(&self) -> Option<usize> {
        Some(self.height())
    }
}

impl fmt::Debug for BstIndex {
    // Derived Debug would recurse through the whole tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BstIndex")
            .field("unique", &self.unique)
            .field("total", &self.total)
            .field("height", &self.height())
            .finish()
    }
}

impl Drop for BstIndex {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Stack-driven in-order iterator returned by [`BstIndex::iter`].
///
/// Holds at most `h` node references. It borrows the tree, so the index
/// cannot be mutated until the iterator is dropped.
pub struct SortedEntries<'a> {
    stack: Vec<&'a Node>,
    cur: Option<&'a Node>,
    order: SortOrder,
    remaining: usize,
    expected: usize,
    last: Option<&'a str>,
}

impl<'a> Iterator for SortedEntries<'a> {
    type Item = &'a WordEntry;

    fn next(&mut self) -> Option<Self::Item> {
        // Descend the near spine, then emit the deepest pending node.
        while let Some(node) = self.cur {
            self.stack.push(node);
            self.cur = node.near(self.order);
        }

        let Some(node) = self.stack.pop() else {
            check_unique_count(self.expected, self.expected - self.remaining);
            return None;
        };
        self.cur = node.far(self.order);
        self.remaining = self.remaining.saturating_sub(1);

        let word = node.entry.word();
        if let Some(prev) = self.last {
            check_step_ordered(prev, word, self.order);
        }
        self.last = Some(word);

        Some(&node.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SortedEntries<'_> {}
