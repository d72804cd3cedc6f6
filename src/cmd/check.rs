//! Measure text against a column limit.

use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use wordwrap::Measurement;

use crate::args::{FormatArgs, InputArgs, WidthArgs};
use crate::config::Config;
use crate::input;
use crate::output::{self, OutputFormat};

/// Characters of an overlong line shown in the pretty table
const PREVIEW_CHARS: usize = 48;

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Line prefix that is not counted as a word (default: from config)
    #[arg(short = 'p', long, allow_hyphen_values = true)]
    prefix: Option<String>,

    #[command(flatten)]
    width: WidthArgs,

    #[command(flatten)]
    format: FormatArgs,
}

/// Row data for the overlong-lines table
#[derive(Tabled)]
struct OverlongRow {
    #[tabled(rename = "LINE")]
    line: String,
    #[tabled(rename = "WIDTH")]
    width: String,
    #[tabled(rename = "TEXT")]
    text: String,
}

pub fn run(args: CheckArgs, config: &Config) -> Result<(), String> {
    let format = args.format.resolve();
    let text = input::read_input(args.input.file.as_deref())?;
    let text = text.trim_end_matches('\n');
    let limit = args.width.resolve(config);
    let prefix = args.prefix.as_deref().unwrap_or(&config.defaults.indent);

    let measurement = wordwrap::measure_indented(limit, prefix, text);
    tracing::debug!(
        lines = measurement.lines,
        overlong = measurement.overlong.len(),
        "measured input"
    );

    match format {
        OutputFormat::Pretty => output_pretty(&measurement, text),
        OutputFormat::Plain => output_plain(&measurement),
        OutputFormat::Json => output_json(&measurement)?,
        OutputFormat::Yaml => output_yaml(&measurement)?,
    }

    if !measurement.fits() && config.check.fail_on_overlong {
        return Err(summary(&measurement));
    }

    Ok(())
}

/// One-line summary of a failed check.
fn summary(measurement: &Measurement) -> String {
    let count = measurement.overlong.len();
    format!(
        "{} {} exceed{} width {}",
        count,
        if count == 1 { "line" } else { "lines" },
        if count == 1 { "s" } else { "" },
        measurement.limit
    )
}

fn output_pretty(measurement: &Measurement, text: &str) {
    println!(
        "{} {} lines, widest {}, limit {}",
        "Checked".bold(),
        measurement.lines,
        output::style_width(measurement.widest, measurement.limit),
        output::style_limit(measurement.limit)
    );

    if measurement.fits() {
        println!("{}", "All lines fit.".green());
        return;
    }
    println!();

    let lines: Vec<&str> = text.split('\n').collect();
    let rows: Vec<OverlongRow> = measurement
        .overlong
        .iter()
        .map(|o| OverlongRow {
            line: o.line_number.to_string(),
            width: output::style_width(o.width, measurement.limit).to_string(),
            text: output::truncate_back(
                lines.get(o.line_number - 1).copied().unwrap_or_default(),
                PREVIEW_CHARS,
            ),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

fn output_plain(measurement: &Measurement) {
    println!(
        "Lines: {} | Widest: {} | Limit: {}",
        measurement.lines, measurement.widest, measurement.limit
    );

    if measurement.fits() {
        return;
    }

    println!("LINE | WIDTH");
    for o in &measurement.overlong {
        println!("{} | {}", o.line_number, o.width);
    }
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    fits: bool,
    #[serde(flatten)]
    measurement: &'a Measurement,
}

fn output_json(measurement: &Measurement) -> Result<(), String> {
    let output = CheckOutput {
        fits: measurement.fits(),
        measurement,
    };
    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| format!("JSON serialization failed: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn output_yaml(measurement: &Measurement) -> Result<(), String> {
    let output = CheckOutput {
        fits: measurement.fits(),
        measurement,
    };
    let yaml =
        serde_yaml::to_string(&output).map_err(|e| format!("YAML serialization failed: {}", e))?;
    print!("{}", yaml);
    Ok(())
}
