// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the lapdex CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. The theme comes
//! from `LAPDEX_THEME` when set, then `COLORFGBG`, then defaults to dark.
//! `NO_COLOR` and non-TTY stdout turn styling off entirely, so piped output
//! is plain text.

use std::sync::OnceLock;

use lapdex::{Document, MatchKind, PageRank, VocabularyEntry};

/// Width between the box borders.
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
    if let Ok(theme) = std::env::var("LAPDEX_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and up (except 8) are light
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
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(RED);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never when `NO_COLOR` is set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a theme color with optional modifiers, or nothing off-TTY.
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

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(text: &str) -> String {
    themed(GRAY, &[], text)
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

/// │ content          │
pub fn row(content: &str) {
    println!("{}{}{}", border("│"), pad_right(content, BOX_WIDTH), border("│"));
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

fn empty_row(what: &str) {
    row(&themed(GRAY, &[DIM], &format!(" no {}", what)));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Edit distance colored by closeness: 0 green, 1-2 yellow, more red.
pub fn distance_badge(distance: usize) -> String {
    let color: fn() -> String = match distance {
        0 => GREEN,
        1..=2 => YELLOW,
        _ => RED,
    };
    themed(color, &[], &format!("d={}", distance))
}

pub fn kind_label(kind: MatchKind) -> &'static str {
    match kind {
        MatchKind::Word => "word",
        MatchKind::NGram => "ngram",
    }
}

fn document_line(document: &Document) -> String {
    format!(
        " {:>6}  {}  {}",
        themed(GRAY, &[], &document.id.to_string()),
        themed(CYAN, &[BOLD], &document.brand_name),
        document.product_name
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_documents(label: &str, documents: &[&Document]) {
    section_top(&format!("{} ({})", label, documents.len()));
    if documents.is_empty() {
        empty_row("matches");
    }
    for document in documents {
        row(&document_line(document));
    }
    section_bot();
}

/// Fuzzy results with the distance and match kind behind each one.
pub fn print_candidates(label: &str, candidates: &[(&Document, usize, MatchKind)]) {
    section_top(&format!("{} ({})", label, candidates.len()));
    if candidates.is_empty() {
        empty_row("matches");
    }
    for (document, distance, kind) in candidates {
        row(&format!(
            "{}  {} {}",
            document_line(document),
            distance_badge(*distance),
            themed(GRAY, &[DIM], kind_label(*kind))
        ));
    }
    section_bot();
}

pub fn print_words(label: &str, words: &[String]) {
    section_top(&format!("{} ({})", label, words.len()));
    if words.is_empty() {
        empty_row("words");
    }
    for word in words {
        row(&format!(" {}", word));
    }
    section_bot();
}

pub fn print_completions(prefix: &str, entries: &[VocabularyEntry]) {
    section_top(&format!("COMPLETIONS \"{}\"", prefix));
    if entries.is_empty() {
        empty_row("completions");
    }
    let width = entries
        .iter()
        .map(|entry| entry.word.chars().count())
        .max()
        .unwrap_or(0);
    for entry in entries {
        row(&format!(
            " {}  {}",
            pad_right(&themed(GREEN, &[BOLD], &entry.word), width),
            themed(GRAY, &[], &entry.frequency.to_string())
        ));
    }
    section_bot();
}

pub fn print_pages(term: &str, page_size: usize, ranks: &[PageRank]) {
    section_top(&format!("PAGES \"{}\" (size {})", term, page_size));
    if ranks.is_empty() {
        empty_row("pages");
    }
    for rank in ranks {
        page_row(rank.page, rank.count);
    }
    section_bot();
}

/// One page's occurrence count, as printed by `rank --page`.
pub fn print_page_frequency(term: &str, page: usize, page_size: usize, count: usize) {
    section_top(&format!("PAGE {} \"{}\" (size {})", page, term, page_size));
    page_row(page, count);
    section_bot();
}

fn page_row(page: usize, count: usize) {
    let count = if count == 0 {
        themed(GRAY, &[DIM], "0")
    } else {
        themed(YELLOW, &[BOLD], &count.to_string())
    };
    row(&format!(" page {:>4}  {}", page, count));
}
