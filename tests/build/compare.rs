//! Backend comparison and report serialization.

use super::common::{build_all, STORY};
use concord::report::{compare_backends, diff_indexes, Summary};
use concord::Backend;

#[test]
fn test_compare_story_agrees() {
    let comparison = compare_backends(STORY.as_bytes(), "story").unwrap();
    assert!(comparison.agrees(), "{:?}", comparison.mismatches);

    let names: Vec<Backend> = comparison.backends.iter().map(|t| t.backend).collect();
    assert_eq!(names, Backend::ALL.to_vec());
    for timing in &comparison.backends {
        assert_eq!(timing.unique_words, 22);
    }
}

#[test]
fn test_built_backends_have_no_diff() {
    let built = build_all(STORY);
    let (hash, bst) = (&built[0], &built[1]);
    assert!(diff_indexes(hash.index.as_ref(), bst.index.as_ref()).is_empty());
    assert_eq!(hash.index.tree_height(), None);
    assert!(bst.index.tree_height().unwrap() >= 5);
}

#[test]
fn test_comparison_json_shape() {
    let comparison = compare_backends(STORY.as_bytes(), "story").unwrap();
    let json = serde_json::to_value(&comparison).unwrap();

    assert_eq!(json["source"], "story");
    assert_eq!(json["backends"][0]["backend"], "hash");
    assert_eq!(json["backends"][1]["backend"], "bst");
    assert!(json["backends"][1]["tree_height"].is_u64());
    assert!(json["backends"][0]["tree_height"].is_null());
    assert!(json["backends"][0]["traversal_ms"].is_f64());
    assert_eq!(json["mismatches"], serde_json::json!([]));
}

#[test]
fn test_summary_json_flattens_build_report() {
    for built in build_all(STORY) {
        let summary = Summary::new(built.index.as_ref(), built.report);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["words_indexed"], 41);
        assert_eq!(json["unique_words"], 22);
        assert_eq!(json["tokens"]["rejected_roman"], 1);
        assert_eq!(json["most_frequent"]["word"], "the");
        assert_eq!(json["most_frequent"]["count"], 6);
        assert_eq!(json["longest"]["word"], "chapter");
    }
}

#[test]
fn test_empty_summary_has_null_highlights() {
    for built in build_all("") {
        let summary = Summary::new(built.index.as_ref(), built.report);
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["most_frequent"].is_null());
        assert!(json["longest"].is_null());
    }
}
