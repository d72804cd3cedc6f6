//! Shared CLI argument structs for consistent flag definitions across commands.
//!
//! Use `#[command(flatten)]` to include them in command-specific Args structs.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::output::{self, OutputFormat};

// ============================================================================
// FormatArgs - Output format flags
// ============================================================================

/// Common output format flags.
///
/// Provides consistent --format/-f and --json flags across commands.
/// Use `resolve()` to get the effective format with TTY auto-detection.
#[derive(Args, Clone, Debug, Default)]
pub struct FormatArgs {
    /// Output format (auto-detects TTY for pretty vs plain)
    #[arg(short = 'f', long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,

    /// Output as JSON (shorthand for --format=json)
    #[arg(long, conflicts_with = "format")]
    pub json: bool,
}

impl FormatArgs {
    /// Resolve the effective output format.
    ///
    /// Handles --json shorthand and applies TTY auto-detection for pretty mode.
    pub fn resolve(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format.resolve()
        }
    }
}

// ============================================================================
// WidthArgs - Column limit flags
// ============================================================================

/// Common column limit flags.
#[derive(Args, Clone, Debug, Default)]
pub struct WidthArgs {
    /// Column limit including the indent (0 disables wrapping)
    #[arg(short = 'w', long, value_name = "N")]
    pub width: Option<usize>,

    /// Wrap to the terminal width
    #[arg(long, conflicts_with = "width")]
    pub fit: bool,
}

impl WidthArgs {
    /// Resolve the effective width: flag, then terminal fit, then config default.
    pub fn resolve(&self, config: &Config) -> usize {
        if let Some(width) = self.width {
            width
        } else if self.fit || config.defaults.fit_terminal {
            output::terminal_width()
        } else {
            config.defaults.width
        }
    }

    /// True if any width flag was given on the command line.
    pub fn is_set(&self) -> bool {
        self.width.is_some() || self.fit
    }
}

// ============================================================================
// InputArgs - Input source
// ============================================================================

/// Input file argument; stdin when omitted or "-".
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// File to read (default: stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_flag_wins() {
        let mut config = Config::default();
        config.defaults.fit_terminal = true;
        let args = WidthArgs {
            width: Some(40),
            fit: false,
        };
        assert_eq!(args.resolve(&config), 40);
        assert!(args.is_set());
    }

    #[test]
    fn test_width_from_config() {
        let mut config = Config::default();
        config.defaults.width = 66;
        let args = WidthArgs::default();
        assert_eq!(args.resolve(&config), 66);
        assert!(!args.is_set());
    }

    #[test]
    fn test_zero_width_flag() {
        let args = WidthArgs {
            width: Some(0),
            fit: false,
        };
        assert_eq!(args.resolve(&Config::default()), 0);
    }

    #[test]
    fn test_json_shorthand() {
        let args = FormatArgs {
            format: OutputFormat::Yaml,
            json: true,
        };
        assert_eq!(args.resolve(), OutputFormat::Json);
    }
}
