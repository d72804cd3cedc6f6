//! Greedy first-fit paragraph filling.

/// Blank prefix of the same byte length as `indent`.
pub(crate) fn blank_indent(indent: &str) -> String {
    " ".repeat(indent.len())
}

/// Fill a single paragraph to `limit` columns, prefixing every line.
///
/// The first line gets `indent`; continuation lines get `indent` again, or a
/// blank prefix of equal length when `hanging` is set. Widths are byte
/// lengths. The caller guarantees `limit > indent.len()`.
///
/// A word only joins the current line if it fits together with one trailing
/// separator, so a line counts as full one column early. After a break the
/// budget is reset to the content width minus the word alone. Words longer
/// than the content width are placed on their own line, never split.
pub fn fill(limit: usize, indent: &str, hanging: bool, paragraph: &str) -> String {
    let words: Vec<&str> = paragraph.split_whitespace().collect();
    if words.len() <= 1 {
        return format!("{}{}", indent, paragraph);
    }

    let width = limit.saturating_sub(indent.len());
    let continuation = if hanging {
        blank_indent(indent)
    } else {
        indent.to_string()
    };

    let mut output = String::with_capacity(paragraph.len() + indent.len() * 4);
    output.push_str(indent);

    // An overlong word empties the budget until the next break.
    let mut remaining = width;
    for word in words {
        let len = word.len();
        if len.saturating_add(1) > remaining {
            if !output.is_empty() {
                output.push('\n');
                output.push_str(&continuation);
            }
            output.push_str(word);
            remaining = width.saturating_sub(len);
        } else {
            if output.len() > indent.len() {
                output.push(' ');
            }
            output.push_str(word);
            remaining -= len + 1;
        }
    }

    output
}
