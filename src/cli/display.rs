// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the shufsearch CLI.
//!
//! Layout diagrams and probe traces read much better with a little color:
//! medians, lower and upper blocks each get their own hue, and the probe trail
//! marks which way each comparison went. OneDark for dark terminals, One Light
//! for light ones. Respects `NO_COLOR` and falls back to plain text when stdout
//! is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `SHUFSEARCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::cmp::Ordering;
use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

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
    if let Ok(theme) = std::env::var("SHUFSEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
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

fn rgb((r, g, b): (u8, u8, u8)) -> String {
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
            match theme() {
                Theme::Dark => rgb(onedark::$name),
                Theme::Light => rgb(onelight::$name),
            }
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

/// Colors only when stdout is a TTY and `NO_COLOR` is unset.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Colors for stderr diagnostics.
pub fn use_colors_stderr() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

/// Apply theme color with optional modifiers.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI escapes.
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

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    let border = border();
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    let border = border();
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// How a probed element compared to the key, as the descent sees it.
pub fn ordering_badge(ordering: Ordering) -> String {
    match ordering {
        Ordering::Equal => themed(GREEN, &[], "= match"),
        Ordering::Less => themed(BLUE, &[], "< go upper"),
        Ordering::Greater => themed(MAGENTA, &[], "> go lower"),
    }
}

/// Value in a layout diagram, colored by its role in the root block.
pub fn layout_cell(value: &str, position: usize, len: usize) -> String {
    let lower_end = 1 + len / 2;
    let color: fn() -> String = if position == 0 {
        YELLOW
    } else if position < lower_end {
        BLUE
    } else {
        MAGENTA
    };
    themed(color, &[], value)
}

/// "✓ message" on stdout.
pub fn success(message: &str) {
    println!("{} {}", themed(GREEN, &[BOLD], "✓"), message);
}

/// "✗ message" on stderr.
pub fn failure(message: &str) {
    if use_colors_stderr() {
        eprintln!("{}{}✗{} {}", BOLD, RED(), RESET, message);
    } else {
        eprintln!("✗ {}", message);
    }
}

/// Milliseconds, green when quick, yellow when slow.
pub fn timing_ms(value: f64) -> String {
    let color: fn() -> String = if value < 100.0 { GREEN } else { YELLOW };
    themed(color, &[], &format!("{:.1} ms", value))
}
