use std::io;
use std::process;

use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::env::CompleteEnv;
use clap_complete::{Shell, generate};
use tracing::Level;

mod args;
mod cmd;
mod config;
mod input;
mod output;

#[derive(Parser)]
#[command(name = "wordwrap")]
#[command(version = env!("WORDWRAP_VERSION"))]
#[command(about = "Paragraph-aware word wrapping and indentation")]
#[command(
    long_about = "wordwrap - Reflow and indent plain text.\n\nParagraphs (lines starting with a non-space character) are joined and\nrefilled to a column limit. Lines starting with whitespace are kept as\nthey are, so code blocks and hand-formatted lists survive untouched."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wrap paragraphs to a column limit
    Wrap(cmd::wrap::WrapArgs),

    /// Indent each line, optionally wrapping
    Indent(cmd::indent::IndentArgs),

    /// Report lines that exceed a column limit
    Check(cmd::check::CheckArgs),

    /// Configuration introspection
    Config(cmd::config_cmd::ConfigArgs),

    /// Generate shell completion script
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
struct CompletionArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: CompletionShell,
}

#[derive(Clone, ValueEnum)]
enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Pick the log level: -v flags win, then WORDWRAP_LOG, then warn.
fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => config::env_string("WORDWRAP_LOG")
            .and_then(|v| v.parse().ok())
            .unwrap_or(Level::WARN),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Send diagnostics to stderr so stdout carries only the reflowed text.
fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_max_level(log_level(verbose))
        .init();
}

fn main() {
    // Handle dynamic shell completions
    CompleteEnv::with_factory(Cli::command).complete();

    // Use try_parse to catch errors and normalize exit code
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Exit with 0 for help/version, 1 for actual errors
            let exit_code = if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                0
            } else {
                1
            };
            process::exit(exit_code);
        }
    };

    init_logging(cli.verbose);

    if let Commands::Completion(args) = &cli.command {
        let shell = match args.shell {
            CompletionShell::Bash => Shell::Bash,
            CompletionShell::Zsh => Shell::Zsh,
            CompletionShell::Fish => Shell::Fish,
            CompletionShell::Powershell => Shell::PowerShell,
        };
        generate(shell, &mut Cli::command(), "wordwrap", &mut io::stdout());
        return;
    }

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("cannot get cwd: {}", e);
            process::exit(1);
        }
    };
    let loaded = config::load_config(&cwd);

    let result = match cli.command {
        Commands::Wrap(args) => cmd::wrap::run(args, &loaded.config),
        Commands::Indent(args) => cmd::indent::run(args, &loaded.config),
        Commands::Check(args) => cmd::check::run(args, &loaded.config),
        Commands::Config(args) => cmd::config_cmd::run(args, &loaded.config, &loaded.sources),
        Commands::Completion(_) => unreachable!(), // Handled above
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_flags() {
        assert_eq!(log_level(1), Level::INFO);
        assert_eq!(log_level(2), Level::DEBUG);
        assert_eq!(log_level(7), Level::TRACE);
    }

    #[test]
    fn test_parse_indent_with_hyphen_prefix() {
        let cli = Cli::try_parse_from(["wordwrap", "indent", "-p", "- ", "--hanging", "-w", "40"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Indent(_)));
    }

    #[test]
    fn test_last_hanging_flag_wins() {
        let cli = Cli::try_parse_from(["wordwrap", "indent", "--hanging", "--no-hanging"]).unwrap();
        let Commands::Indent(args) = cli.command else {
            panic!("expected indent command");
        };
        let reflow = cmd::indent::reflow(&args, &config::Config::default());
        assert!(!reflow.hanging);
    }

    #[test]
    fn test_negative_width_rejected() {
        // Only 0 disables wrapping; there is no signed "no limit" value
        assert!(Cli::try_parse_from(["wordwrap", "wrap", "-w", "-1"]).is_err());
        assert!(Cli::try_parse_from(["wordwrap", "wrap", "-w", "0"]).is_ok());
    }

    #[test]
    fn test_width_and_fit_conflict() {
        assert!(Cli::try_parse_from(["wordwrap", "wrap", "-w", "40", "--fit"]).is_err());
    }
}
