// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the concord CLI: colour, the boxed `stats` and
//! `compare` reports, and the small formatters the menu shares.
//!
//! The theme comes from `CONCORD_THEME`, then `COLORFGBG`, then defaults to
//! dark. Colour is off when `NO_COLOR` is set or stdout is not a TTY.

use std::sync::OnceLock;

use concord::config::THEME_ENV;

/// Columns between the two vertical borders of a report box.
pub const BOX_WIDTH: usize = 64;

/// Columns reserved for a field label, including its leading space.
const LABEL_WIDTH: usize = 17;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Accepts `dark`, `d`, `light` or `l` in any case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" | "d" => Some(Theme::Dark),
            "light" | "l" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Reads the background slot of a `COLORFGBG` value such as `15;0`.
    /// Palette indices 7 and above are light, except 8 (dark gray).
    pub fn from_colorfgbg(value: &str) -> Option<Self> {
        let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        if background >= 7 && background != 8 {
            Some(Theme::Light)
        } else {
            Some(Theme::Dark)
        }
    }

    fn detect() -> Self {
        let from_env = |name: &str, parse: fn(&str) -> Option<Theme>| {
            std::env::var(name).ok().as_deref().and_then(parse)
        };
        from_env(THEME_ENV, Theme::parse)
            .or_else(|| from_env("COLORFGBG", Theme::from_colorfgbg))
            .unwrap_or(Theme::Dark)
    }

    pub fn current() -> Self {
        static THEME: OnceLock<Theme> = OnceLock::new();
        *THEME.get_or_init(Theme::detect)
    }
}

/// What a piece of output means. The palette maps each role to a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Word,
    Badge,
    Heading,
    Title,
    Frame,
    Fast,
    Moderate,
    Slow,
}

impl Role {
    /// OneDark on dark terminals, One Light on light ones.
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Role::Word | Role::Fast) => (152, 195, 121),
            (Theme::Dark, Role::Badge) => (97, 175, 239),
            (Theme::Dark, Role::Heading) => (86, 182, 194),
            (Theme::Dark, Role::Title) => (102, 217, 239),
            (Theme::Dark, Role::Frame) => (92, 99, 112),
            (Theme::Dark, Role::Moderate) => (229, 192, 123),
            (Theme::Dark, Role::Slow) => (224, 108, 117),
            (Theme::Light, Role::Word | Role::Fast) => (80, 161, 79),
            (Theme::Light, Role::Badge) => (64, 120, 242),
            (Theme::Light, Role::Heading) => (1, 132, 188),
            (Theme::Light, Role::Title) => (1, 112, 158),
            (Theme::Light, Role::Frame) => (160, 161, 167),
            (Theme::Light, Role::Moderate) => (193, 132, 1),
            (Theme::Light, Role::Slow) => (228, 86, 73),
        }
    }
}

/// Turns roles into escape sequences, or into nothing when colour is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    theme: Theme,
    enabled: bool,
}

impl Palette {
    pub fn new(theme: Theme, enabled: bool) -> Self {
        Self { theme, enabled }
    }

    /// The palette for stdout as it is right now.
    pub fn terminal() -> Self {
        let enabled = std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout);
        Self::new(Theme::current(), enabled)
    }

    fn escape(self, role: Role) -> String {
        if !self.enabled {
            return String::new();
        }
        let (r, g, b) = role.rgb(self.theme);
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }

    fn reset(self) -> &'static str {
        if self.enabled {
            RESET
        } else {
            ""
        }
    }

    pub fn paint(self, role: Role, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("{}{}{}", self.escape(role), text, RESET)
    }

    /// `paint` in bold.
    pub fn strong(self, role: Role, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("{}{}{}{}", BOLD, self.escape(role), text, RESET)
    }
}

/// Printed width of `s`, skipping `ESC ... m` sequences.
pub fn visible_len(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            width += 1;
        }
    }
    width
}

fn spaces(n: usize) -> String {
    " ".repeat(n)
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORT BOXES
// ═══════════════════════════════════════════════════════════════════════════

/// Which border of a report box a rule draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Mid,
    Bottom,
}

fn rule_line(palette: Palette, edge: Edge, heading: Option<&str>) -> String {
    let (left, right) = match edge {
        Edge::Top => ('┌', '┐'),
        Edge::Mid => ('├', '┤'),
        Edge::Bottom => ('└', '┘'),
    };
    let heading = heading
        .map(|text| format!("─ {} ", palette.strong(Role::Heading, text)))
        .unwrap_or_default();
    let fill = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&heading)));
    let frame = palette.escape(Role::Frame);
    let reset = palette.reset();
    format!("{frame}{left}{reset}{heading}{frame}{fill}{right}{reset}")
}

fn field_line(palette: Palette, label: &str, value: &str) -> String {
    let label = format!(" {:<width$}", label, width = LABEL_WIDTH - 1);
    let body = format!("{}{}", palette.paint(Role::Frame, &label), value);
    let pad = spaces(BOX_WIDTH.saturating_sub(visible_len(&body)));
    let border = palette.paint(Role::Frame, "│");
    format!("{border}{body}{pad}{border}")
}

fn banner_lines(palette: Palette, text: &str) -> [String; 3] {
    let frame = palette.escape(Role::Badge);
    let reset = palette.reset();
    let slack = BOX_WIDTH.saturating_sub(visible_len(text));
    let (before, after) = (slack / 2, slack - slack / 2);
    let rule = "═".repeat(BOX_WIDTH);
    [
        format!("{frame}╔{rule}╗{reset}"),
        format!(
            "{frame}║{reset}{}{}{}{frame}║{reset}",
            spaces(before),
            palette.strong(Role::Title, text),
            spaces(after)
        ),
        format!("{frame}╚{rule}╝{reset}"),
    ]
}

/// Print a centered title in a double-line box.
pub fn banner(text: &str) {
    for line in banner_lines(Palette::terminal(), text) {
        println!("{}", line);
    }
}

/// Print a box border, with `heading` set into it when given.
pub fn rule(edge: Edge, heading: Option<&str>) {
    println!("{}", rule_line(Palette::terminal(), edge, heading));
}

/// Print one `label  value` row inside a box.
pub fn field(label: &str, value: &str) {
    println!("{}", field_line(Palette::terminal(), label, value));
}

// ═══════════════════════════════════════════════════════════════════════════
// FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Thousands separators: 1234567 -> "1,234,567".
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// A word in the highlight colour.
pub fn word(text: &str) -> String {
    Palette::terminal().strong(Role::Word, text)
}

/// `'word' (count=N)`, or `(none)` for the empty-index sentinel.
pub fn word_count(text: &str, count: usize) -> String {
    if count == 0 {
        return Palette::terminal().paint(Role::Frame, "(none)");
    }
    format!("'{}' (count={})", word(text), format_count(count))
}

/// One listing row: `word : count`.
pub fn listing_row(word: &str, count: usize) -> String {
    format!("{} : {}", word, count)
}

/// Comma-separated line numbers, cut off after `max`.
///
/// `1,2,5  (3 of 3)`, `1,2,...,30 ...  (30 of 41)`, or `(none)`.
pub fn line_list(lines: &[usize], max: usize) -> String {
    if lines.is_empty() {
        return "(none)".to_string();
    }
    let shown = lines.len().min(max);
    let joined = lines[..shown]
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    let more = if lines.len() > shown { " ..." } else { "" };
    format!("{}{}  ({} of {})", joined, more, shown, lines.len())
}

/// Milliseconds, green under 5 ms, yellow under 50 ms, red above.
pub fn timing_ms(value: f64) -> String {
    let role = if value < 5.0 {
        Role::Fast
    } else if value < 50.0 {
        Role::Moderate
    } else {
        Role::Slow
    };
    Palette::terminal().paint(role, &format!("{:.3} ms", value))
}

/// `[hash]` / `[bst]` badge.
pub fn backend_badge(name: &str) -> String {
    Palette::terminal().strong(Role::Badge, &format!("[{}]", name))
}
