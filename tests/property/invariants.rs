//! Structural invariants that must hold after any insertion sequence.

use super::common::populate;
use concord::{new_index, Backend, IndexError, SortOrder};
use proptest::prelude::*;
use std::collections::HashSet;

/// Mostly valid insertions, with some empty words, blank words and line 0.
fn insertion_strategy() -> impl Strategy<Value = (String, usize)> {
    prop_oneof![
        8 => (prop::string::string_regex("[a-dA-D]{1,3}").unwrap(), 1usize..30),
        1 => (prop::sample::select(vec!["", " ", "\t"]).prop_map(String::from), 1usize..30),
        1 => (prop::string::string_regex("[a-d]{1,3}").unwrap(), Just(0usize)),
    ]
}

proptest! {
    #[test]
    fn prop_rejected_inserts_leave_no_trace(
        insertions in prop::collection::vec(insertion_strategy(), 0..60)
    ) {
        for backend in Backend::ALL {
            let mut index = new_index(backend);
            let mut accepted: Vec<(&str, usize)> = Vec::new();

            for (word, line) in &insertions {
                let before = (index.unique_words(), index.total_occurrences());
                match index.insert(word, *line) {
                    Ok(()) => accepted.push((word.as_str(), *line)),
                    Err(IndexError::EmptyWord) => {
                        prop_assert!(word.trim().is_empty());
                        prop_assert_eq!((index.unique_words(), index.total_occurrences()), before);
                    }
                    Err(IndexError::InvalidLine { .. }) => {
                        prop_assert_eq!(*line, 0);
                        prop_assert_eq!((index.unique_words(), index.total_occurrences()), before);
                    }
                }
            }

            // Same result as inserting only the valid pairs.
            let clean = populate(backend, &accepted);
            prop_assert_eq!(
                index.entries_sorted(SortOrder::Ascending).collect::<Vec<_>>(),
                clean.entries_sorted(SortOrder::Ascending).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn prop_listing_is_strict_and_consistent(
        insertions in prop::collection::vec(
            (prop::string::string_regex("[a-fA-F]{1,4}").unwrap(), 1usize..100),
            0..100,
        )
    ) {
        for backend in Backend::ALL {
            let mut index = new_index(backend);
            for (word, line) in &insertions {
                index.insert(word, *line).unwrap();
            }

            let listing: Vec<_> = index.entries_sorted(SortOrder::Ascending).collect();
            prop_assert_eq!(listing.len(), index.unique_words());
            prop_assert!(listing.windows(2).all(|pair| pair[0].0 < pair[1].0));

            let mut seen = HashSet::new();
            let mut total = 0;
            for &(word, count) in &listing {
                prop_assert!(seen.insert(word));
                prop_assert_eq!(index.frequency(word), count);
                prop_assert_eq!(index.lines(word).len(), count);
                prop_assert!(index.contains(word));
                total += count;
            }
            prop_assert_eq!(total, index.total_occurrences());
        }
    }
}
