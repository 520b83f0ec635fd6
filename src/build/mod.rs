// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build an index from a text source.
//!
//! Reads the source line by line (1-based numbering), runs each line through
//! the [`Tokenizer`], and inserts every accepted token into a fresh index of
//! the requested backend. The wall-clock time of the whole pass is recorded in
//! the [`BuildReport`] so backends can be compared.
//!
//! Lines that are not valid UTF-8 are decoded lossily rather than aborting
//! the build; the report counts them.

mod error;

pub use error::BuildError;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Serialize, Serializer};

#[cfg(feature = "progress")]
use crate::config::PROGRESS_TICK_LINES;
use crate::index::{new_index, Backend, WordIndex};
use crate::tokenize::{TokenStats, Tokenizer};

/// How to build.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    pub backend: Backend,
    /// Show a spinner on stderr while reading (needs the `progress` feature).
    pub progress: bool,
}

impl BuildOptions {
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            progress: false,
        }
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}

/// What a build did, for display and `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub source: String,
    pub backend: Backend,
    pub lines: usize,
    pub lossy_lines: usize,
    pub tokens: TokenStats,
    pub words_indexed: usize,
    pub unique_words: usize,
    #[serde(rename = "build_ms", serialize_with = "serialize_millis")]
    pub build_time: Duration,
}

/// A populated index plus the report of how it was built.
pub struct BuiltIndex {
    pub index: Box<dyn WordIndex>,
    pub report: BuildReport,
}

pub(crate) fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64() * 1_000.0)
}

/// Create the reading spinner.
#[cfg(feature = "progress")]
fn create_spinner(source: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_prefix("Indexing");
    spinner.set_message(source.to_string());
    spinner
}

/// Index everything `reader` yields. `source` only labels the report.
pub fn build_from_reader<R: BufRead>(
    mut reader: R,
    source: &str,
    options: BuildOptions,
) -> Result<BuiltIndex, BuildError> {
    let started = Instant::now();
    let mut index = new_index(options.backend);
    let mut tokenizer = Tokenizer::new();

    #[cfg(feature = "progress")]
    let spinner = options.progress.then(|| create_spinner(source));

    let mut buf = Vec::new();
    let mut line_number = 0;
    let mut lossy_lines = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| BuildError::Read {
                line: line_number + 1,
                source,
            })?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let text = match std::str::from_utf8(&buf) {
            Ok(text) => std::borrow::Cow::Borrowed(text),
            Err(_) => {
                lossy_lines += 1;
                log::warn!("{}:{}: invalid UTF-8, decoding lossily", source, line_number);
                String::from_utf8_lossy(&buf)
            }
        };
        let text = text.trim_end_matches(['\n', '\r']);

        for token in tokenizer.line(text) {
            index
                .insert(token, line_number)
                .map_err(|source| BuildError::Index {
                    line: line_number,
                    source,
                })?;
        }

        #[cfg(feature = "progress")]
        if let Some(spinner) = &spinner {
            if line_number % PROGRESS_TICK_LINES == 0 {
                spinner.set_message(format!("{} ({} lines)", source, line_number));
                spinner.tick();
            }
        }
    }

    let build_time = started.elapsed();

    #[cfg(feature = "progress")]
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let report = BuildReport {
        source: source.to_string(),
        backend: options.backend,
        lines: line_number,
        lossy_lines,
        tokens: tokenizer.stats(),
        words_indexed: index.total_occurrences(),
        unique_words: index.unique_words(),
        build_time,
    };
    log::debug!(
        "built {} index from {}: {} lines, {} words, {} unique in {:?}",
        report.backend,
        report.source,
        report.lines,
        report.words_indexed,
        report.unique_words,
        report.build_time
    );

    Ok(BuiltIndex { index, report })
}

/// Open `path` and index it.
pub fn build_from_path(path: &Path, options: BuildOptions) -> Result<BuiltIndex, BuildError> {
    let file = File::open(path).map_err(|source| BuildError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    build_from_reader(BufReader::new(file), &path.display().to_string(), options)
}
