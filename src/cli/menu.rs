// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interactive menu over one built index.
//!
//! Reads choices from any `BufRead` and writes to any `Write`, so a session
//! can be scripted in tests the same way it runs against a terminal.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use concord::config::{MAX_LINES_SHOWN, PREVIEW_LEN};
use concord::report::Lookup;
use concord::{build_from_path, BuiltIndex, SortOrder};

use super::display::{backend_badge, format_count, line_list, listing_row, timing_ms, word_count};
use super::pager::Pager;
use super::SourceArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    ListAscending,
    ListDescending,
    PreviewAscending,
    PreviewDescending,
    Longest,
    Search,
    SearchLoop,
    Exit,
    SwitchBackend,
}

impl Choice {
    /// Blank input exits, like choosing 8.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" => Some(Choice::ListAscending),
            "2" => Some(Choice::ListDescending),
            "3" => Some(Choice::PreviewAscending),
            "4" => Some(Choice::PreviewDescending),
            "5" => Some(Choice::Longest),
            "6" => Some(Choice::Search),
            "7" => Some(Choice::SearchLoop),
            "" | "8" | "q" | "quit" | "exit" => Some(Choice::Exit),
            "9" => Some(Choice::SwitchBackend),
            _ => None,
        }
    }
}

pub struct Menu<R: BufRead, W: Write> {
    input: R,
    out: W,
    source: SourceArgs,
    built: BuiltIndex,
    page_size: usize,
    interactive: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(
        input: R,
        out: W,
        source: SourceArgs,
        built: BuiltIndex,
        page_size: usize,
        interactive: bool,
    ) -> Self {
        Self {
            input,
            out,
            source,
            built,
            page_size,
            interactive,
        }
    }

    /// Loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.print_summary()?;
        loop {
            self.print_options()?;
            let Some(answer) = self.prompt("Select: ")? else {
                writeln!(self.out)?;
                break;
            };
            match Choice::parse(&answer) {
                Some(Choice::Exit) => break,
                Some(choice) => self.dispatch(choice)?,
                None => writeln!(self.out, "Please select 1-9.")?,
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: Choice) -> Result<()> {
        match choice {
            Choice::ListAscending => self.list("All words A to Z", SortOrder::Ascending, None)?,
            Choice::ListDescending => self.list("All words Z to A", SortOrder::Descending, None)?,
            Choice::PreviewAscending => self.list(
                &format!("Preview A to Z (first {})", PREVIEW_LEN),
                SortOrder::Ascending,
                Some(PREVIEW_LEN),
            )?,
            Choice::PreviewDescending => self.list(
                &format!("Preview Z to A (first {})", PREVIEW_LEN),
                SortOrder::Descending,
                Some(PREVIEW_LEN),
            )?,
            Choice::Longest => {
                let (word, count) = self.built.index.longest();
                writeln!(self.out, "Longest word: {}", word_count(word, count))?;
            }
            Choice::Search => {
                if let Some(word) = self.prompt("Enter a word: ")? {
                    self.search(word.trim())?;
                }
            }
            Choice::SearchLoop => loop {
                match self.prompt("\nEnter a word (Enter to stop): ")? {
                    Some(word) if !word.trim().is_empty() => self.search(word.trim())?,
                    _ => break,
                }
            },
            Choice::SwitchBackend => self.switch_backend()?,
            Choice::Exit => {}
        }
        Ok(())
    }

    fn print_summary(&mut self) -> io::Result<()> {
        let report = &self.built.report;
        let (top, top_count) = self.built.index.most_frequent();
        writeln!(
            self.out,
            "{} {} contains {} words ({} unique), built in {}",
            backend_badge(report.backend.name()),
            report.source,
            format_count(report.words_indexed),
            format_count(report.unique_words),
            timing_ms(report.build_time.as_secs_f64() * 1_000.0)
        )?;
        writeln!(self.out, "Most frequent: {}", word_count(top, top_count))?;
        Ok(())
    }

    fn print_options(&mut self) -> io::Result<()> {
        let other = self.built.report.backend.other();
        writeln!(self.out, "\nMenu:")?;
        writeln!(self.out, " 1) List all words A to Z")?;
        writeln!(self.out, " 2) List all words Z to A")?;
        writeln!(self.out, " 3) Preview first {} words A to Z", PREVIEW_LEN)?;
        writeln!(self.out, " 4) Preview first {} words Z to A", PREVIEW_LEN)?;
        writeln!(self.out, " 5) Show longest word")?;
        writeln!(self.out, " 6) Search word (frequency with line numbers)")?;
        writeln!(self.out, " 7) Search loop (keep searching words)")?;
        writeln!(self.out, " 8) Exit")?;
        writeln!(self.out, " 9) Rebuild with the {} backend", other)?;
        Ok(())
    }

    /// `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn list(&mut self, heading: &str, order: SortOrder, limit: Option<usize>) -> io::Result<()> {
        writeln!(self.out, "\n{}:", heading)?;
        let rows = self
            .built
            .index
            .entries_sorted(order)
            .take(limit.unwrap_or(usize::MAX))
            .map(|(word, count)| listing_row(word, count));
        // Previews are short enough to print without paging.
        let page_size = if limit.is_some() { 0 } else { self.page_size };
        Pager::new(&mut self.out, &mut self.input, page_size, self.interactive).lines(rows)?;
        Ok(())
    }

    fn search(&mut self, word: &str) -> io::Result<()> {
        let lookup = Lookup::new(self.built.index.as_ref(), word);
        writeln!(self.out, "Frequency: {}", lookup.frequency)?;
        writeln!(self.out, "Lines: {}", line_list(&lookup.lines, MAX_LINES_SHOWN))?;
        Ok(())
    }

    fn switch_backend(&mut self) -> Result<()> {
        self.source.backend = self.built.report.backend.other();
        self.built = build_from_path(&self.source.file, self.source.build_options())
            .with_context(|| format!("rebuilding with the {} backend", self.source.backend))?;
        log::info!("switched to the {} backend", self.source.backend);
        self.print_summary()?;
        Ok(())
    }
}
