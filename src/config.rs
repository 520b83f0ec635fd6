// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Defaults for the command-line front end.
//!
//! Compile-time constants only. Runtime overrides come from CLI flags and the
//! `CONCORD_BACKEND` and the theme variable below.

/// Rows printed before the pager asks to continue.
pub const DEFAULT_PAGE_SIZE: usize = 40;

/// Rows shown by the menu's "preview" options.
pub const PREVIEW_LEN: usize = 50;

/// Line numbers printed per word before the list is cut off with "...".
pub const MAX_LINES_SHOWN: usize = 30;

/// Lines read between progress spinner updates.
pub const PROGRESS_TICK_LINES: usize = 1_024;

/// Forces the display theme (`dark` / `light`).
pub const THEME_ENV: &str = "CONCORD_THEME";
