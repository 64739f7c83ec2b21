//! Two-column fixed-width text wrapping.
//!
//! [`wrap_with_prefix`] renders the `prefix  body...` rows used by the
//! usage block (e.g. `group may be  a | b | c`). The body is word-wrapped
//! to the space right of the indent column and continuation lines are
//! left-padded to the indent. An overlong prefix pushes the whole body onto
//! its own fully-indented block.

/// Greedy word wrap at `width` columns.
///
/// Splits on whitespace only, so hyphenated words are never broken. A word
/// longer than `width` gets a line of its own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Writes a two-column block to `out`.
///
/// `message` is wrapped to `width - indent` columns with the separator
/// token `' | '` protected from splitting; each continuation line is
/// left-padded to `indent`. When `prefix` (plus `spacing` plus 2 reserved
/// columns) does not fit in the indent, the prefix is written alone and the
/// body starts on the next line.
///
/// # Examples
///
/// ```
/// use arg_usage_render::wrap::wrap_with_prefix;
///
/// let mut out = String::new();
/// wrap_with_prefix(&mut out, "group may be", "a | b | c", 25, 80, "  ");
/// assert_eq!(out, "  group may be           a | b | c\n");
/// ```
pub fn wrap_with_prefix(
    out: &mut String,
    prefix: &str,
    message: &str,
    indent: usize,
    width: usize,
    spacing: &str,
) {
    // Keep ' | ' separators attached to the preceding word while wrapping.
    let protected = message.replace(" | ", "&| ");
    let body_width = width.saturating_sub(indent);
    let continuation = format!("\n{:indent$}", "", indent = indent);
    let message = wrap(&protected, body_width)
        .join(&continuation)
        .replace("&|", " |");

    if prefix.len() + spacing.len() + 2 > indent {
        out.push_str(spacing);
        out.push_str(prefix);
        out.push('\n');
        out.push_str(&format!("{:indent$}", "", indent = indent));
        out.push_str(&message);
        out.push('\n');
    } else {
        let pad = indent - prefix.len() - spacing.len();
        out.push_str(spacing);
        out.push_str(prefix);
        out.push_str(&format!("{:pad$}", "", pad = pad));
        out.push_str(&message);
        out.push('\n');
    }
}
