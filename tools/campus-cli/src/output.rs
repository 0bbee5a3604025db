//! Output formatting for the CLI.

use campus_commerce::catalog::ListingStatus;
use console::style;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Text,
    Json,
}

/// Writes human-readable text, or nothing but JSON documents in `--json` mode.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    mode: Mode,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        let mode = if json { Mode::Json } else { Mode::Text };
        Self { verbose, mode }
    }

    pub fn is_json(&self) -> bool {
        self.mode == Mode::Json
    }

    fn text(&self) -> bool {
        self.mode == Mode::Text
    }

    pub fn info(&self, msg: &str) {
        if self.text() {
            println!("{} {}", style("ℹ").blue(), msg);
        }
    }

    pub fn success(&self, msg: &str) {
        if self.text() {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    pub fn warn(&self, msg: &str) {
        if self.text() {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors are reported in both modes; JSON mode writes `{"error": ...}` to stderr.
    pub fn error(&self, msg: &str) {
        match self.mode {
            Mode::Text => eprintln!("{} {}", style("✗").red(), style(msg).red()),
            Mode::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && self.text() {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        if self.text() {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if self.text() {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    pub fn list_item(&self, item: &str) {
        if self.text() {
            println!("  {} {}", style("•").dim(), item);
        }
    }

    /// Print one row, padding each column to its width.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if !self.text() {
            return;
        }
        let row = cols
            .iter()
            .zip(widths)
            .map(|(col, width)| format!("{:width$}", col, width = *width))
            .collect::<Vec<_>>()
            .join("  ");
        println!("  {}", row.trim_end());
    }

    /// Print a value as pretty JSON.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("Failed to encode output: {}", e)),
        }
    }
}

/// Status badge for listing states.
pub fn status_badge(status: ListingStatus) -> String {
    match status {
        ListingStatus::Available => style(status).green().to_string(),
        ListingStatus::Pending => style(status).yellow().to_string(),
        ListingStatus::Sold => style(status).dim().to_string(),
    }
}

/// Shorten text to at most `max` characters, marking the cut with "...".
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
