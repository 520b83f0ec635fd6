//! Best-word queries on both backends.

use super::common::populate;
use concord::{Backend, NO_WORD};

/// Insert `word` `count` times on consecutive lines.
fn repeated(words: &[(&'static str, usize)]) -> Vec<(&'static str, usize)> {
    let mut insertions = Vec::new();
    let mut line = 1;
    for &(word, count) in words {
        for _ in 0..count {
            insertions.push((word, line));
            line += 1;
        }
    }
    insertions
}

#[test]
fn test_most_frequent_ties_go_to_smallest_word() {
    let insertions = repeated(&[("cat", 3), ("dog", 3), ("bee", 3)]);
    for backend in Backend::ALL {
        let index = populate(backend, &insertions);
        assert_eq!(index.most_frequent(), ("bee", 3), "{}", backend);
    }
}

#[test]
fn test_longest_prefers_frequency_then_smallest_word() {
    for backend in Backend::ALL {
        let index = populate(backend, &repeated(&[("abcd", 1), ("wxyz", 2)]));
        assert_eq!(index.longest(), ("wxyz", 2), "{}", backend);

        let index = populate(backend, &repeated(&[("wxyz", 1), ("abcd", 1)]));
        assert_eq!(index.longest(), ("abcd", 1), "{}", backend);
    }
}

#[test]
fn test_longest_counts_characters_not_bytes() {
    for backend in Backend::ALL {
        // "éé" is 4 bytes but only 2 characters.
        let index = populate(backend, &[("éé", 1), ("abc", 2)]);
        assert_eq!(index.longest(), ("abc", 1), "{}", backend);
    }
}

#[test]
fn test_insertion_order_does_not_change_winners() {
    let forward = repeated(&[("moor", 2), ("fog", 2), ("hound", 1), ("night", 1)]);
    let mut backward = forward.clone();
    backward.reverse();

    for backend in Backend::ALL {
        let a = populate(backend, &forward);
        let b = populate(backend, &backward);
        assert_eq!(a.most_frequent(), ("fog", 2));
        assert_eq!(a.most_frequent(), b.most_frequent());
        assert_eq!(a.longest(), ("hound", 1));
        assert_eq!(a.longest(), b.longest());
    }
}

#[test]
fn test_empty_index_returns_sentinel() {
    for backend in Backend::ALL {
        let index = populate(backend, &[]);
        assert_eq!(index.most_frequent(), NO_WORD);
        assert_eq!(index.longest(), NO_WORD);
    }
}
