//! Building from files on disk.

use super::common::{init_logging, write_fixture, STORY};
use concord::{build_from_path, Backend, BuildError, BuildOptions, SortOrder, Tokenizer};
use tempfile::TempDir;

#[test]
fn test_build_story_counts() {
    init_logging();
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_fixture(dir.path(), "story.txt", STORY);

    for backend in Backend::ALL {
        let built = build_from_path(&path, BuildOptions::new(backend)).unwrap();
        let report = &built.report;

        assert_eq!(report.backend, backend);
        assert_eq!(report.source, path.display().to_string());
        assert_eq!(report.lines, 6);
        assert_eq!(report.tokens.seen, 42);
        assert_eq!(report.tokens.rejected_roman, 1);
        assert_eq!(report.words_indexed, 41);
        assert_eq!(report.unique_words, 22);

        let index = &built.index;
        assert_eq!(index.most_frequent(), ("the", 6));
        assert_eq!(index.longest(), ("chapter", 2));
        assert_eq!(index.lines("The"), vec![1, 3, 3, 3, 5, 6]);
        assert_eq!(index.lines("hound"), vec![1, 3, 3]);
        assert_eq!(index.lines("moor"), vec![3, 5, 6]);
        assert_eq!(index.frequency("i"), 2);
        assert_eq!(index.frequency("mix"), 1);
        assert_eq!(index.frequency("ii"), 0);
        assert_eq!(
            index.entries_sorted(SortOrder::Ascending).take(3).collect::<Vec<_>>(),
            vec![("a", 2), ("and", 2), ("chapter", 2)]
        );
        assert_eq!(
            index.entries_sorted(SortOrder::Descending).next(),
            Some(("watson", 2))
        );
    }
}

#[test]
fn test_story_token_counts_per_line() {
    let mut tokenizer = Tokenizer::new();
    let accepted: Vec<usize> = STORY.lines().map(|line| tokenizer.line(line).len()).collect();
    assert_eq!(accepted, vec![4, 12, 12, 0, 3, 10]);

    let stats = tokenizer.stats();
    assert_eq!(stats.seen, 4 + 12 + 12 + 0 + 4 + 10);
    assert_eq!(stats.accepted, 41);
    assert_eq!(stats.rejected_roman, 1);
    assert_eq!(stats.rejected_shape, 0);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("no-such-book.txt");

    let err = build_from_path(&path, BuildOptions::default())
        .err()
        .expect("missing file should fail");
    match &err {
        BuildError::Open { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("expected Open error, got {:?}", other),
    }
    assert!(err.to_string().contains("no-such-book.txt"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_empty_file_builds_empty_index() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_fixture(dir.path(), "empty.txt", "");

    for backend in Backend::ALL {
        let built = build_from_path(&path, BuildOptions::new(backend)).unwrap();
        assert!(built.index.is_empty());
        assert_eq!(built.report.lines, 0);
        assert_eq!(built.index.most_frequent(), ("", 0));
        assert_eq!(built.index.entries_sorted(SortOrder::Descending).count(), 0);
    }
}

#[test]
fn test_progress_option_does_not_change_result() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_fixture(dir.path(), "story.txt", STORY);

    let quiet = build_from_path(&path, BuildOptions::new(Backend::Bst)).unwrap();
    let noisy = build_from_path(&path, BuildOptions::new(Backend::Bst).with_progress(true)).unwrap();
    assert_eq!(
        quiet.index.entries_sorted(SortOrder::Ascending).collect::<Vec<_>>(),
        noisy.index.entries_sorted(SortOrder::Ascending).collect::<Vec<_>>()
    );
}
