// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the concord command-line interface.
//!
//! Every subcommand indexes a text file first. `stats`, `lookup` and `list`
//! answer one kind of query and exit; `compare` builds both backends and
//! checks they agree; `menu` keeps the index in memory for an interactive
//! session.

pub mod display;
pub mod menu;
pub mod pager;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use concord::config::{DEFAULT_PAGE_SIZE, MAX_LINES_SHOWN};
use concord::{Backend, BuildOptions};

#[derive(Parser)]
#[command(
    name = "concord",
    about = "Word concordance: frequencies and line references for a text file",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// The file to index and how.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Text file to index
    pub file: PathBuf,

    /// Index backend: `hash` or `bst`
    #[arg(short, long, default_value = "hash", env = "CONCORD_BACKEND")]
    pub backend: Backend,

    /// Don't show the progress spinner while reading
    #[arg(short, long)]
    pub quiet: bool,
}

impl SourceArgs {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions::new(self.backend).with_progress(!self.quiet)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the index and print a summary
    Stats {
        #[command(flatten)]
        source: SourceArgs,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show frequency and line numbers for one or more words
    Lookup {
        #[command(flatten)]
        source: SourceArgs,

        /// Words to look up (case-insensitive)
        #[arg(required = true)]
        words: Vec<String>,

        /// Line numbers printed per word before cutting off
        #[arg(long, default_value_t = MAX_LINES_SHOWN)]
        max_lines: usize,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List every distinct word with its count, alphabetically
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Z to A instead of A to Z
        #[arg(short, long)]
        desc: bool,

        /// Stop after this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Rows per page when writing to a terminal (0 disables paging)
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Build with both backends, time them, and check they agree
    Compare {
        /// Text file to index
        file: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Interactive menu over one index
    Menu {
        #[command(flatten)]
        source: SourceArgs,

        /// Rows per page for full listings (0 disables paging)
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
}
