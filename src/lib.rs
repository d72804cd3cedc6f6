//! Paragraph-aware word wrapping and indentation.
//!
//! Text is split into paragraphs (runs of lines starting with a
//! non-whitespace character), verbatim lines (lines starting with
//! whitespace) and blank lines. Paragraphs are joined and refilled to a
//! column limit; verbatim lines are only indented, so code blocks and
//! hand-formatted lists survive untouched.
//!
//! Widths are byte lengths, not display columns. The column limit is soft:
//! a word longer than the limit is placed on its own line and never split.
//!
//! ```
//! let text = "Now is the time for all good men to come to the aid of their country.";
//! assert_eq!(
//!     wordwrap::wrap(15, text),
//!     "Now is the\ntime for all\ngood men to\ncome to the aid\nof their\ncountry."
//! );
//!
//! assert_eq!(
//!     wordwrap::indent("leader: ", true, "first line\nsecond line"),
//!     "leader: first line\n        second line"
//! );
//! ```

pub mod fill;
pub mod indent;
pub mod measure;
pub mod segment;

use serde::{Deserialize, Serialize};

use crate::fill::blank_indent;
use crate::segment::{Block, Segmenter};

pub use crate::measure::{Measurement, Overlong, measure, measure_indented};

/// Word-wrap `input` on the `limit` column boundary.
///
/// Whitespace inside paragraphs collapses to single spaces. Leading blank
/// lines and all trailing whitespace are stripped. Blank lines and lines
/// starting with whitespace are kept as they are.
///
/// The limit is unsigned, so 0 is the only value that disables wrapping.
/// Every other value, up to `usize::MAX`, wraps on that column.
///
/// ```
/// assert_eq!(
///     wordwrap::wrap(10, "Test text Test text Test text Test text"),
///     "Test text\nTest text\nTest text\nTest text"
/// );
/// assert_eq!(wordwrap::wrap(0, "not wrapped at all"), "not wrapped at all");
/// ```
pub fn wrap(limit: usize, input: &str) -> String {
    if limit < 1 {
        tracing::debug!("wrap: limit 0, indenting only");
        return indent::indent_lines("", false, input);
    }

    wrap_text(limit, "", false, input)
}

/// Prefix each line of `input` with `indent`, never wrapping.
///
/// With `hanging` set, lines after the first get spaces of the same length
/// as `indent` instead. Leading blank lines and trailing whitespace are
/// stripped; empty input yields `indent` itself.
pub fn indent(indent: &str, hanging: bool, input: &str) -> String {
    indent::indent_lines(indent, hanging, input)
}

/// Wrap `input` at `limit` columns, counting `indent` against the limit.
///
/// Falls back to [`indent()`] when the indent leaves no room for text, which
/// includes a `limit` of 0.
///
/// ```
/// assert_eq!(
///     wordwrap::indent_with_wrap(30, "First line:", true, "Test text that fills over first line"),
///     "First line:Test text that\n           fills over first\n           line"
/// );
/// ```
pub fn indent_with_wrap(limit: usize, indent: &str, hanging: bool, input: &str) -> String {
    if limit <= indent.len() {
        tracing::debug!(
            limit,
            indent_len = indent.len(),
            "indent_with_wrap: no room for text, indenting only"
        );
        return indent::indent_lines(indent, hanging, input);
    }

    wrap_text(limit, indent, hanging, input)
}

/// Segment, fill and indent. Requires `limit > indent.len()`.
fn wrap_text(limit: usize, indent: &str, hanging: bool, input: &str) -> String {
    let blank = blank_indent(indent);
    let mut active = indent;
    let mut output = String::with_capacity(input.len() + input.len() / 8);

    for block in Segmenter::new(input) {
        match block {
            Block::Paragraph(paragraph) => {
                tracing::trace!(len = paragraph.len(), "fill paragraph");
                output.push_str(&fill::fill(limit, active, hanging, &paragraph));
            }
            Block::Verbatim(line) => {
                tracing::trace!(len = line.len(), "verbatim line");
                output.push_str(&indent::indent_lines(active, hanging, line));
            }
            Block::Blank => {}
        }
        output.push('\n');

        // A hanging indent only applies to the first block
        if hanging {
            active = &blank;
        }
    }

    output.truncate(output.trim_end_matches('\n').len());
    output
}

/// Reflow settings: column limit, indent and hanging mode.
///
/// A `width` of 0 disables wrapping; the indent is still applied.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reflow {
    /// Column limit, including the indent (0 = no wrapping)
    pub width: usize,
    /// Prefix for each line
    pub indent: String,
    /// Indent only the first line, pad the rest with spaces
    pub hanging: bool,
}

impl Reflow {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_hanging(mut self, hanging: bool) -> Self {
        self.hanging = hanging;
        self
    }

    /// Apply these settings to `input`.
    ///
    /// ```
    /// use wordwrap::Reflow;
    ///
    /// let reflow = Reflow::new(20).with_indent("  ");
    /// assert_eq!(
    ///     reflow.apply("Test text that fills over first line"),
    ///     "  Test text that\n  fills over first\n  line"
    /// );
    /// ```
    pub fn apply(&self, input: &str) -> String {
        indent_with_wrap(self.width, &self.indent, self.hanging, input)
    }
}
