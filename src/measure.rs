//! Width measurement of formatted text.
//!
//! The column limit is soft: a line holding a single word longer than the
//! limit is acceptable, anything else past the limit is reported.

use serde::Serialize;

use crate::fill::blank_indent;

/// A line that exceeds the limit while holding more than one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlong {
    /// 1-based line number
    pub line_number: usize,
    /// Byte width of the line
    pub width: usize,
}

/// Result of measuring text against a column limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Measurement {
    /// Column limit measured against (0 = unlimited)
    pub limit: usize,
    /// Number of physical lines
    pub lines: usize,
    /// Width of the widest line
    pub widest: usize,
    /// Lines breaking the limit
    pub overlong: Vec<Overlong>,
}

impl Measurement {
    /// True if no line breaks the limit.
    pub fn fits(&self) -> bool {
        self.overlong.is_empty()
    }
}

/// Measure `text` against `limit`. A limit of 0 never reports overlong lines.
pub fn measure(limit: usize, text: &str) -> Measurement {
    measure_indented(limit, "", text)
}

/// Measure `text` whose lines carry `indent`, or its blank equivalent.
///
/// The prefix still counts towards a line's width, but is not a word: a line
/// holding the prefix and a single overlong word is exempt, just as the
/// filler produces it.
pub fn measure_indented(limit: usize, indent: &str, text: &str) -> Measurement {
    let mut measurement = Measurement {
        limit,
        ..Default::default()
    };

    if text.is_empty() {
        return measurement;
    }

    let blank = blank_indent(indent);
    for (i, line) in text.split('\n').enumerate() {
        let width = line.len();
        measurement.lines += 1;
        measurement.widest = measurement.widest.max(width);

        if limit > 0 && width > limit && word_count(strip_indent(line, indent, &blank)) > 1 {
            measurement.overlong.push(Overlong {
                line_number: i + 1,
                width,
            });
        }
    }

    measurement
}

fn strip_indent<'a>(line: &'a str, indent: &str, blank: &str) -> &'a str {
    if indent.is_empty() {
        return line;
    }
    line.strip_prefix(indent)
        .or_else(|| line.strip_prefix(blank))
        .unwrap_or(line)
}

fn word_count(line: &str) -> usize {
    line.split_whitespace().take(2).count()
}
