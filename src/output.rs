//! Output formatting utilities with TTY auto-detection and semantic styling.

use std::io::IsTerminal;

use clap::ValueEnum;
use colored::{ColoredString, Colorize};

/// Output format for reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-optimized: colors and tables
    #[default]
    Pretty,
    /// Script-optimized: no colors, pipe-delimited
    Plain,
    /// Machine-readable JSON
    Json,
    /// Machine-readable YAML
    Yaml,
}

impl OutputFormat {
    /// Resolve the output format, applying TTY auto-detection.
    ///
    /// If format is Pretty but stdout is not a TTY, returns Plain.
    pub fn resolve(self) -> Self {
        match self {
            OutputFormat::Pretty if !std::io::stdout().is_terminal() => OutputFormat::Plain,
            other => other,
        }
    }
}

// ============================================================================
// Semantic Styling
// ============================================================================

/// Style a line width relative to the limit: red past it, green otherwise.
pub fn style_width(width: usize, limit: usize) -> ColoredString {
    let text = width.to_string();
    if limit > 0 && width > limit {
        text.red().bold()
    } else {
        text.green()
    }
}

/// Style for the limit column when wrapping is disabled.
pub fn style_limit(limit: usize) -> ColoredString {
    if limit == 0 {
        "none".dimmed()
    } else {
        limit.to_string().normal()
    }
}

// ============================================================================
// Text output
// ============================================================================

/// Print reflowed text followed by a newline; nothing for empty text.
pub fn print_text(text: &str) {
    if !text.is_empty() {
        println!("{}", text);
    }
}

// ============================================================================
// Terminal utilities
// ============================================================================

/// Get terminal width, defaulting to 80 if unavailable.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Truncate a string from the back, showing "prefix…".
pub fn truncate_back(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        "…".to_string()
    } else {
        let truncated: String = s.chars().take(max_chars - 1).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_back() {
        assert_eq!(truncate_back("hello", 10), "hello");
        assert_eq!(truncate_back("hello world", 6), "hello…");
        assert_eq!(truncate_back("hello", 1), "…");
    }

    #[test]
    fn test_style_width_plain_text() {
        colored::control::set_override(false);
        assert_eq!(style_width(12, 10).to_string(), "12");
        assert_eq!(style_limit(0).to_string(), "none");
        assert_eq!(style_limit(72).to_string(), "72");
    }

    #[test]
    fn test_non_pretty_formats_unchanged() {
        assert_eq!(OutputFormat::Json.resolve(), OutputFormat::Json);
        assert_eq!(OutputFormat::Plain.resolve(), OutputFormat::Plain);
    }
}
