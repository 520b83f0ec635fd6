//! Whole builds from generated text versus an oracle built from the tokenizer.

use super::common::{build_all, init_logging};
use concord::{fold_case, tokenize_line, SortOrder};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Words, numerals, allow-listed words and junk, so every tokenizer path runs.
fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::string::string_regex("[a-zA-Z]{1,7}").unwrap(),
        1 => prop::sample::select(vec!["IV", "xii", "MIX", "i", "A", "mi", "Xi"]).prop_map(String::from),
        1 => prop::string::string_regex("[0-9]{1,3}[a-z]?").unwrap(),
    ]
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", ", ", ". ", " - ", "; ", "!\t", "\" ", " '", "*"])
}

fn line_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((token_strategy(), separator_strategy()), 0..10).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(token, sep)| format!("{}{}", token, sep))
            .collect()
    })
}

fn text_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(), 0..12)
}

fn oracle(lines: &[String]) -> BTreeMap<String, Vec<usize>> {
    let mut map: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (i, line) in lines.iter().enumerate() {
        for token in tokenize_line(line) {
            map.entry(fold_case(token)).or_default().push(i + 1);
        }
    }
    map
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_build_matches_oracle(lines in text_strategy()) {
        init_logging();
        let text = lines.join("\n");
        let expected = oracle(&lines);
        let total: usize = expected.values().map(Vec::len).sum();

        for built in build_all(&text) {
            let index = &built.index;
            prop_assert_eq!(index.unique_words(), expected.len());
            prop_assert_eq!(index.total_occurrences(), total);
            prop_assert_eq!(built.report.words_indexed, total);
            prop_assert_eq!(built.report.tokens.accepted, total);

            for (word, lines) in &expected {
                prop_assert_eq!(&index.lines(word), lines);
            }

            let listing: Vec<String> = index
                .entries_sorted(SortOrder::Ascending)
                .map(|(word, _)| word.to_string())
                .collect();
            let oracle_words: Vec<String> = expected.keys().cloned().collect();
            prop_assert_eq!(listing, oracle_words);
        }
    }

    #[test]
    fn prop_no_numerals_indexed(lines in text_strategy()) {
        let text = lines.join("\n");
        for built in build_all(&text) {
            for numeral in ["iv", "xii", "xx", "mcm"] {
                prop_assert_eq!(built.index.frequency(numeral), 0);
            }
        }
    }
}
