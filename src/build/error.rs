// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::index::IndexError;

/// Failure while building an index from a source.
#[derive(Debug)]
pub enum BuildError {
    /// The source file could not be opened.
    Open { path: PathBuf, source: io::Error },
    /// Reading failed partway through.
    Read { line: usize, source: io::Error },
    /// The index rejected a token. The tokenizer never yields empty tokens,
    /// so this points at a bug rather than bad input.
    Index { line: usize, source: IndexError },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Open { path, source } => {
                write!(f, "failed to open {}: {}", path.display(), source)
            }
            BuildError::Read { line, source } => {
                write!(f, "failed to read line {}: {}", line, source)
            }
            BuildError::Index { line, source } => {
                write!(f, "line {}: {}", line, source)
            }
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Open { source, .. } | BuildError::Read { source, .. } => Some(source),
            BuildError::Index { source, .. } => Some(source),
        }
    }
}
