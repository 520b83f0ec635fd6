// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page long listings on a terminal.
//!
//! After every `page_size` rows the pager prints a `-- more --` prompt and
//! waits for a line of input; `q` stops the listing. When output is not
//! interactive (or `page_size` is 0) rows are written straight through.

use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "-- more (Enter to continue, q to stop) --";

pub struct Pager<'a, W: Write, R: BufRead> {
    out: &'a mut W,
    input: &'a mut R,
    page_size: usize,
    interactive: bool,
    written: usize,
}

impl<'a, W: Write, R: BufRead> Pager<'a, W, R> {
    pub fn new(out: &'a mut W, input: &'a mut R, page_size: usize, interactive: bool) -> Self {
        Self {
            out,
            input,
            page_size,
            interactive,
            written: 0,
        }
    }

    /// Write one row. `Ok(false)` means the reader asked to stop.
    pub fn line(&mut self, text: &str) -> io::Result<bool> {
        if self.page_full() && !self.wait_for_more()? {
            return Ok(false);
        }
        writeln!(self.out, "{}", text)?;
        self.written += 1;
        Ok(true)
    }

    /// Write rows until they run out or the reader stops. Returns rows written.
    pub fn lines<I, S>(&mut self, rows: I) -> io::Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for row in rows {
            if !self.line(row.as_ref())? {
                break;
            }
        }
        self.out.flush()?;
        Ok(self.written)
    }

    fn page_full(&self) -> bool {
        self.interactive && self.page_size > 0 && self.written > 0 && self.written % self.page_size == 0
    }

    fn wait_for_more(&mut self) -> io::Result<bool> {
        write!(self.out, "{}", PROMPT)?;
        self.out.flush()?;
        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(false);
        }
        let answer = answer.trim();
        Ok(!(answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit")))
    }
}
