use clap::Args;
use wordwrap::Reflow;

use crate::args::{InputArgs, WidthArgs};
use crate::config::Config;
use crate::input;
use crate::output;

#[derive(Args)]
pub struct IndentArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Prefix for each line (default: from config)
    #[arg(short = 'p', long, allow_hyphen_values = true)]
    prefix: Option<String>,

    /// Indent only the first line, pad the rest with spaces
    #[arg(long, overrides_with = "no_hanging")]
    hanging: bool,

    /// Repeat the prefix on every line, even when config enables hanging
    #[arg(long, overrides_with = "hanging")]
    no_hanging: bool,

    // Without a width flag lines are only indented
    #[command(flatten)]
    width: WidthArgs,
}

/// Build the reflow settings. Width stays 0 (indent only) unless a width flag is given.
pub(crate) fn reflow(args: &IndentArgs, config: &Config) -> Reflow {
    let prefix = args
        .prefix
        .clone()
        .unwrap_or_else(|| config.defaults.indent.clone());
    let width = if args.width.is_set() {
        args.width.resolve(config)
    } else {
        0
    };

    let hanging = if args.no_hanging {
        false
    } else {
        args.hanging || config.defaults.hanging
    };

    Reflow::new(width).with_indent(prefix).with_hanging(hanging)
}

pub fn run(args: IndentArgs, config: &Config) -> Result<(), String> {
    let text = input::read_input(args.input.file.as_deref())?;
    let reflow = reflow(&args, config);

    tracing::info!(
        width = reflow.width,
        indent = %reflow.indent,
        hanging = reflow.hanging,
        "indenting input"
    );
    output::print_text(&reflow.apply(&text));

    Ok(())
}
