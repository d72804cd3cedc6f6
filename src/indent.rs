//! Line indentation with optional hanging indent.

use crate::fill::blank_indent;
use crate::segment::{self, LineKind};

/// Prefix every line of `input` with `indent`.
///
/// Leading blank lines and trailing whitespace are dropped. With `hanging`
/// set, only the first line gets `indent`; later lines get spaces of the
/// same length. Empty input yields the bare indent.
pub fn indent_lines(indent: &str, hanging: bool, input: &str) -> String {
    if input.is_empty() {
        return indent.to_string();
    }

    let continuation = if hanging {
        blank_indent(indent)
    } else {
        indent.to_string()
    };

    let mut output = String::with_capacity(input.len() + indent.len() * 4);
    let mut text_started = false;
    for line in segment::trim_trailing(input).split('\n') {
        if !text_started {
            if segment::classify(line) == LineKind::Blank {
                continue;
            }
            output.push_str(indent);
            text_started = true;
        } else {
            output.push_str(&continuation);
        }
        output.push_str(line);
        output.push('\n');
    }

    output.truncate(output.trim_end_matches('\n').len());
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_returns_indent() {
        assert_eq!(indent_lines("indent: ", true, ""), "indent: ");
        assert_eq!(indent_lines("", false, ""), "");
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(indent_lines("> ", false, " \n\t\n"), "");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(indent_lines("> ", false, "text"), "> text");
        assert_eq!(
            indent_lines("indent: ", true, "A single line\n"),
            "indent: A single line"
        );
    }

    #[test]
    fn test_every_line_indented() {
        assert_eq!(
            indent_lines("indent: ", false, "Three lines\nof indented\ntext"),
            "indent: Three lines\nindent: of indented\nindent: text"
        );
    }

    #[test]
    fn test_hanging() {
        assert_eq!(
            indent_lines("indent: ", true, "Three lines\nof indented\ntext"),
            "indent: Three lines\n        of indented\n        text"
        );
    }

    #[test]
    fn test_leading_blank_lines_stripped() {
        assert_eq!(
            indent_lines(
                "indent: ",
                false,
                "\nThe leading newline will be stripped from this text."
            ),
            "indent: The leading newline will be stripped from this text."
        );
    }

    #[test]
    fn test_inner_lines_not_reflowed() {
        assert_eq!(
            indent_lines("| ", false, "a\n\n    b  c"),
            "| a\n| \n|     b  c"
        );
    }

    #[test]
    fn test_leading_whitespace_of_first_line_kept() {
        assert_eq!(indent_lines("> ", false, "\n   code"), ">    code");
    }
}
