// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query summaries and the backend comparison.
//!
//! Everything here is plain data with `Serialize`, so the CLI can print it as
//! text or emit it with `--json`. None of it is meant to be read back in.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::build::{build_from_reader, serialize_millis, BuildError, BuildOptions, BuildReport};
use crate::index::{Backend, SortOrder, WordCount, WordIndex};

/// A `(word, count)` result, owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordStat {
    pub word: String,
    pub count: usize,
}

impl WordStat {
    /// `None` for the `("", 0)` "no data" sentinel.
    pub fn from_result((word, count): WordCount<'_>) -> Option<Self> {
        (count > 0).then(|| Self {
            word: word.to_string(),
            count,
        })
    }
}

/// Headline numbers for one built index.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    #[serde(flatten)]
    pub build: BuildReport,
    pub most_frequent: Option<WordStat>,
    pub longest: Option<WordStat>,
}

impl Summary {
    pub fn new(index: &dyn WordIndex, build: BuildReport) -> Self {
        Self {
            build,
            most_frequent: WordStat::from_result(index.most_frequent()),
            longest: WordStat::from_result(index.longest()),
        }
    }
}

/// Result of looking up one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lookup {
    pub word: String,
    pub frequency: usize,
    pub lines: Vec<usize>,
}

impl Lookup {
    pub fn new(index: &dyn WordIndex, word: &str) -> Self {
        Self {
            word: word.to_string(),
            frequency: index.frequency(word),
            lines: index.lines(word),
        }
    }
}

/// Timings and shape for one backend in a comparison.
#[derive(Debug, Clone, Serialize)]
pub struct BackendTiming {
    pub backend: Backend,
    #[serde(rename = "build_ms", serialize_with = "serialize_millis")]
    pub build_time: Duration,
    /// Full ascending plus descending enumeration.
    #[serde(rename = "traversal_ms", serialize_with = "serialize_millis")]
    pub traversal_time: Duration,
    pub unique_words: usize,
    pub tree_height: Option<usize>,
}

/// Both backends built from the same bytes, timed and cross-checked.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub source: String,
    pub backends: Vec<BackendTiming>,
    /// Human-readable disagreements; empty when the backends agree.
    pub mismatches: Vec<String>,
}

impl Comparison {
    pub fn agrees(&self) -> bool {
        self.mismatches.is_empty()
    }
}

type Snapshot<'a> = (Vec<WordCount<'a>>, Vec<WordCount<'a>>);

fn snapshot(index: &dyn WordIndex) -> (Snapshot<'_>, Duration) {
    let started = Instant::now();
    let ascending: Vec<_> = index.entries_sorted(SortOrder::Ascending).collect();
    let descending: Vec<_> = index.entries_sorted(SortOrder::Descending).collect();
    ((ascending, descending), started.elapsed())
}

/// Report every way `right` disagrees with `left`.
pub fn diff_indexes(left: &dyn WordIndex, right: &dyn WordIndex) -> Vec<String> {
    let mut mismatches = Vec::new();
    let mut check = |what: &str, a: String, b: String| {
        if a != b {
            mismatches.push(format!(
                "{}: {} says {}, {} says {}",
                what,
                left.backend(),
                a,
                right.backend(),
                b
            ));
        }
    };

    check(
        "unique words",
        left.unique_words().to_string(),
        right.unique_words().to_string(),
    );
    check(
        "total occurrences",
        left.total_occurrences().to_string(),
        right.total_occurrences().to_string(),
    );
    check(
        "most frequent",
        format!("{:?}", left.most_frequent()),
        format!("{:?}", right.most_frequent()),
    );
    check(
        "longest",
        format!("{:?}", left.longest()),
        format!("{:?}", right.longest()),
    );

    let ((left_asc, left_desc), _) = snapshot(left);
    let ((right_asc, right_desc), _) = snapshot(right);
    if left_asc != right_asc {
        mismatches.push("ascending enumeration differs".to_string());
    }
    if left_desc != right_desc {
        mismatches.push("descending enumeration differs".to_string());
    }

    for &(word, _) in &left_asc {
        let (a, b) = (left.lines(word), right.lines(word));
        if a != b {
            mismatches.push(format!("lines for '{}': {:?} vs {:?}", word, a, b));
        }
    }

    mismatches
}

/// Build every backend from `bytes`, time the build and a full traversal,
/// and cross-check the results.
pub fn compare_backends(bytes: &[u8], source: &str) -> Result<Comparison, BuildError> {
    let mut built = Vec::with_capacity(Backend::ALL.len());
    for backend in Backend::ALL {
        built.push(build_from_reader(bytes, source, BuildOptions::new(backend))?);
    }

    let backends = built
        .iter()
        .map(|b| {
            let (_, traversal_time) = snapshot(b.index.as_ref());
            BackendTiming {
                backend: b.report.backend,
                build_time: b.report.build_time,
                traversal_time,
                unique_words: b.index.unique_words(),
                tree_height: b.index.tree_height(),
            }
        })
        .collect();

    let mut mismatches = Vec::new();
    if let Some((first, rest)) = built.split_first() {
        for other in rest {
            mismatches.extend(diff_indexes(first.index.as_ref(), other.index.as_ref()));
        }
    }
    if !mismatches.is_empty() {
        log::warn!("{} backend mismatches for {}", mismatches.len(), source);
    }

    Ok(Comparison {
        source: source.to_string(),
        backends,
        mismatches,
    })
}
