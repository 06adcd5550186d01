//! Display and output formatting utilities

use crate::engine::Cell;
use anyhow::Result;
use itertools::Itertools;

/// Formats alive-cell sets for console and file output
pub struct CellFormatter;

impl CellFormatter {
    /// One `x,y` per line, sorted so the output is stable across runs.
    pub fn format_cells<'a, I>(cells: I) -> String
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        cells.into_iter().sorted().join("\n")
    }

    /// The same set as a pretty-printed JSON array of `{x, y}` objects.
    pub fn format_cells_json<'a, I>(cells: I) -> Result<String>
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        let sorted: Vec<&Cell> = cells.into_iter().sorted().collect();
        Ok(serde_json::to_string_pretty(&sorted)?)
    }
}

/// Color output utilities
pub struct ColorOutput;

enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl Color {
    fn code(&self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Cyan => 36,
        }
    }
}

impl ColorOutput {
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Cyan)
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format text with color (if terminal supports it)
    fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }
}
