//! Short/long help extraction from free-form description text.

/// Splits a description into `(short_help, long_help)`.
///
/// Everything before the first blank line, joined into one flowing line,
/// becomes the short help; everything after it, uniformly dedented, becomes
/// the long help. Without a blank line the flattened text serves as both.
/// A description starting with a blank line gets its short help from the
/// flattened long help; an empty long help falls back to the short help.
///
/// # Examples
///
/// ```
/// use arg_usage_render::help::extract_help_strings;
///
/// let (short, long) = extract_help_strings("Short one.\n\nLong explanation.\nMore.");
/// assert_eq!(short, "Short one.");
/// assert_eq!(long, "Long explanation.\nMore.");
///
/// let (short, long) = extract_help_strings("Only one line");
/// assert_eq!(short, "Only one line");
/// assert_eq!(long, "Only one line");
///
/// assert_eq!(extract_help_strings(""), (String::new(), String::new()));
/// ```
pub fn extract_help_strings(docstring: &str) -> (String, String) {
    if docstring.is_empty() {
        return (String::new(), String::new());
    }

    let unstripped: Vec<&str> = docstring.lines().collect();
    let stripped: Vec<&str> = unstripped.iter().map(|s| s.trim()).collect();

    let (mut short_help, long_help) = match stripped.iter().position(|s| s.is_empty()) {
        Some(empty_line_index) => {
            let short = stripped[..empty_line_index].join(" ");
            let raw_long = unstripped[empty_line_index + 1..].join("\n");
            let long = dedent(&raw_long).trim().to_string();
            if short.is_empty() {
                // Description started with a blank line: flatten the long
                // help into the short help.
                let flattened = stripped[empty_line_index + 1..].join(" ").trim().to_string();
                (flattened, long)
            } else {
                (short, long)
            }
        }
        None => (stripped.join(" ").trim().to_string(), String::new()),
    };
    short_help = short_help.trim().to_string();

    if long_help.is_empty() {
        let short = short_help.clone();
        (short_help, short)
    } else {
        (short_help, long_help)
    }
}

/// Removes the longest common leading whitespace from all non-blank lines.
pub(crate) fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            continue;
        }
        let indent = &line[..line.len() - trimmed.len()];
        margin = Some(match margin {
            None => indent,
            Some(current) => {
                // Compare per char so the slice below stays on a boundary.
                let common = current
                    .char_indices()
                    .zip(indent.chars())
                    .take_while(|((_, a), b)| a == b)
                    .last()
                    .map(|((i, a), _)| i + a.len_utf8())
                    .unwrap_or(0);
                &current[..common]
            }
        });
    }

    let margin = margin.unwrap_or("");
    text.lines()
        .map(|line| {
            if let Some(rest) = line.strip_prefix(margin) {
                rest
            } else {
                // Blank lines may carry less whitespace than the margin.
                line.trim_start()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
