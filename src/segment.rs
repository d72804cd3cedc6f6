//! Line classification and paragraph segmentation.
//!
//! Input is split into physical lines, each classified as blank, verbatim
//! (starts with whitespace) or paragraph text. Consecutive text lines are
//! joined into one paragraph; blank and verbatim lines stand on their own.

use std::sync::LazyLock;

use regex::Regex;

// Cached matchers. Whitespace here is the ASCII set `\t \n \f \r` and space.
static BLANK_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\t\n\x0C\r ]*$").expect("valid blank-line regex"));

static LEADING_WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\t\n\x0C\r ]").expect("valid leading-whitespace regex"));

/// Characters stripped from the end of input before processing.
const TRAILING: &[char] = &[' ', '\t', '\n'];

/// Classification of a single physical line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only
    Blank,
    /// Non-blank, begins with whitespace; never reflowed
    Verbatim,
    /// Non-blank, begins with a non-whitespace character
    Text,
}

/// Classify a physical line (no embedded newline).
pub fn classify(line: &str) -> LineKind {
    if BLANK_LINE_RE.is_match(line) {
        LineKind::Blank
    } else if LEADING_WHITESPACE_RE.is_match(line) {
        LineKind::Verbatim
    } else {
        LineKind::Text
    }
}

/// Strip trailing spaces, tabs and newlines.
pub fn trim_trailing(input: &str) -> &str {
    input.trim_end_matches(TRAILING)
}

/// A unit of segmented input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block<'a> {
    /// A blank line after text has started
    Blank,
    /// A line starting with whitespace, passed through as-is
    Verbatim(&'a str),
    /// Consecutive text lines joined with single spaces
    Paragraph(String),
}

/// Iterator over the blocks of an input string.
///
/// Leading blank lines are skipped. A paragraph is yielded as soon as the
/// blank or verbatim line that ends it is seen, followed by that line's own
/// block on the next call.
pub struct Segmenter<'a> {
    lines: std::str::Split<'a, char>,
    text_started: bool,
    paragraph: String,
    pending: Option<Block<'a>>,
}

impl<'a> Segmenter<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: trim_trailing(input).split('\n'),
            text_started: false,
            paragraph: String::new(),
            pending: None,
        }
    }

    fn take_paragraph(&mut self) -> Option<Block<'a>> {
        if self.paragraph.is_empty() {
            None
        } else {
            Some(Block::Paragraph(std::mem::take(&mut self.paragraph)))
        }
    }
}

impl<'a> Iterator for Segmenter<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Block<'a>> {
        if let Some(block) = self.pending.take() {
            return Some(block);
        }

        for line in self.lines.by_ref() {
            let block = match classify(line) {
                LineKind::Blank if !self.text_started => continue,
                LineKind::Blank => Block::Blank,
                LineKind::Verbatim => Block::Verbatim(line),
                LineKind::Text => {
                    self.text_started = true;
                    if !self.paragraph.is_empty() {
                        self.paragraph.push(' ');
                    }
                    self.paragraph.push_str(line);
                    continue;
                }
            };

            self.text_started = true;
            if self.paragraph.is_empty() {
                return Some(block);
            }
            self.pending = Some(block);
            return Some(Block::Paragraph(std::mem::take(&mut self.paragraph)));
        }

        self.take_paragraph()
    }
}
