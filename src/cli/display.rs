// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the mintsearch CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. Detection tries
//! `MINTSEARCH_THEME` first, then `COLORFGBG`, then falls back to dark.
//! `NO_COLOR` and non-TTY stdout turn colors (and match highlighting) off, so
//! piped output is plain text.

use std::sync::OnceLock;

use mintsearch::{AnsiMarkup, Highlighter, Markup, PlainMarkup};

/// Width between the │ borders.
pub const BOX_WIDTH: usize = 78;

/// Cells in a relevance bar.
const BAR_CELLS: usize = 10;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("MINTSEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": background 7 and up (except 8, dark gray) is light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Theme color plus modifiers, or plain text when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut `text` to at most `max` characters, ending in `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Highlight matches in terminal colors, or pass text through when colors are off.
pub fn highlight_terminal(highlighter: &Highlighter, text: &str) -> String {
    let markup: &dyn Markup = if use_colors() { &AnsiMarkup } else { &PlainMarkup };
    highlighter.render(markup, text)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(text: &str) -> String {
    themed(GRAY, &[], text)
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// ├──────────────────┤
pub fn section_mid() {
    println!("{}", border(&format!("├{}┤", "─".repeat(BOX_WIDTH))));
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// `███████░░░ 70%`, colored by strength.
pub fn relevance_bar(pct: u8) -> String {
    let filled = (usize::from(pct) * BAR_CELLS + 50) / 100;
    let bar = format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(BAR_CELLS - filled.min(BAR_CELLS))
    );
    let color: fn() -> String = if pct >= 75 {
        GREEN
    } else if pct >= 40 {
        YELLOW
    } else {
        RED
    };
    format!("{} {:>3}%", themed(color, &[], &bar), pct)
}

/// Color-coded record type.
pub fn type_badge(record_type: &str) -> String {
    let color: fn() -> String = match record_type {
        "Setting" => BLUE,
        "Specific Setting" => CYAN,
        "Utility" => GREEN,
        "Bluetooth Manager" => MAGENTA,
        "System Tool" => YELLOW,
        _ => GRAY,
    };
    themed(color, &[], &format!("[{}]", record_type))
}

/// Dimmed secondary text.
pub fn dim(text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", DIM, text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
