use clap::Args;

use crate::args::{InputArgs, WidthArgs};
use crate::config::Config;
use crate::input;
use crate::output;

#[derive(Args)]
pub struct WrapArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    width: WidthArgs,
}

pub fn run(args: WrapArgs, config: &Config) -> Result<(), String> {
    let text = input::read_input(args.input.file.as_deref())?;
    let width = args.width.resolve(config);

    tracing::info!(width, bytes = text.len(), "wrapping input");
    output::print_text(&wordwrap::wrap(width, &text));

    Ok(())
}
