//! Shape of the unbalanced tree under different insertion orders.

use concord::{BstIndex, SortOrder, WordIndex};

fn insert_all(index: &mut BstIndex, words: &[&str]) {
    for (line, word) in words.iter().enumerate() {
        index.insert(word, line + 1).unwrap();
    }
}

#[test]
fn test_balanced_insertion_order_gives_minimal_height() {
    let mut index = BstIndex::new();
    insert_all(&mut index, &["dd", "bb", "ff", "aa", "cc", "ee", "gg"]);
    assert_eq!(index.height(), 3);
    assert_eq!(index.tree_height(), Some(3));
}

#[test]
fn test_sorted_insertion_degenerates_to_a_list() {
    let mut index = BstIndex::new();
    insert_all(&mut index, &["aa", "bb", "cc", "dd", "ee"]);
    assert_eq!(index.height(), 5);

    let listing: Vec<_> = index.entries_sorted(SortOrder::Descending).collect();
    assert_eq!(listing.first(), Some(&("ee", 1)));
    assert_eq!(listing.last(), Some(&("aa", 1)));
}

#[test]
fn test_repeated_words_do_not_grow_the_tree() {
    let mut index = BstIndex::new();
    insert_all(&mut index, &["moor", "fog", "moor", "MOOR", "fog"]);
    assert_eq!(index.height(), 2);
    assert_eq!(index.unique_words(), 2);
    assert_eq!(index.total_occurrences(), 5);
    assert_eq!(index.lines("moor"), vec![1, 3, 4]);
}

#[test]
fn test_iterator_reports_exact_length() {
    let mut index = BstIndex::new();
    insert_all(&mut index, &["watson", "holmes", "hudson", "lestrade"]);

    let mut iter = index.iter(SortOrder::Ascending);
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next().map(|e| e.word()), Some("holmes"));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.by_ref().count(), 3);
    assert_eq!(iter.len(), 0);
}

#[test]
fn test_deep_tree_descending_and_drop() {
    let mut index = BstIndex::new();
    let words: Vec<String> = (0..5_000).map(|i| format!("w{:05}", 5_000 - i)).collect();
    for word in &words {
        index.insert(word, 1).unwrap();
    }
    assert_eq!(index.height(), 5_000);
    assert_eq!(index.entries_sorted(SortOrder::Ascending).next(), Some(("w00001", 1)));
    drop(index);
}
