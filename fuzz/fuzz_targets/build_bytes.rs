// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target: building from arbitrary bytes never fails or panics, and
//! every indexed word passes the tokenizer's own filter.

#![no_main]

use concord::tokenize::{classify, Verdict};
use concord::{build_from_reader, Backend, BuildOptions, SortOrder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for backend in Backend::ALL {
        let built = build_from_reader(data, "fuzz", BuildOptions::new(backend))
            .expect("in-memory builds cannot fail");

        let report = &built.report;
        assert_eq!(report.tokens.accepted, report.words_indexed);
        assert!(report.lossy_lines <= report.lines);

        for (word, count) in built.index.entries_sorted(SortOrder::Ascending) {
            assert!(count > 0);
            assert_eq!(classify(word), Verdict::Accepted, "indexed {:?}", word);
            assert!(built.index.lines(word).iter().all(|&line| line >= 1 && line <= report.lines));
        }
    }
});
