//! Markdown marker emission for usage text.
//!
//! The renderer only emits the marker characters; converting them to
//! terminal attributes is a downstream concern.

use std::sync::LazyLock;

use regex::Regex;

/// Bold marker wrapped around flag names in markdown mode.
pub const MARKDOWN_BOLD: &str = "*";

/// Italic marker wrapped around metavars and identifiers in markdown mode.
pub const MARKDOWN_ITALIC: &str = "_";

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[a-zA-Z][-a-zA-Z_0-9]*").expect("static regex must compile")
});

/// Wraps every identifier-shaped word in `msg` with italic markers.
///
/// # Examples
///
/// ```
/// use arg_usage_render::markdown::apply_markdown_italic;
///
/// assert_eq!(apply_markdown_italic("KEY=VALUE"), "_KEY_=_VALUE_");
/// ```
pub fn apply_markdown_italic(msg: &str) -> String {
    IDENTIFIER
        .replace_all(msg, |caps: &regex::Captures<'_>| {
            format!("{MARKDOWN_ITALIC}{}{MARKDOWN_ITALIC}", &caps[0])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_italicizes_single_identifier() {
        assert_eq!(apply_markdown_italic("ZONE"), "_ZONE_");
    }

    #[test]
    fn test_italicizes_hyphenated_identifier() {
        assert_eq!(apply_markdown_italic("log-level"), "_log-level_");
    }

    #[test]
    fn test_leaves_punctuation_alone() {
        assert_eq!(apply_markdown_italic("[FILE ...]"), "[_FILE_ ...]");
    }

    #[test]
    fn test_skips_leading_digits() {
        // Words must start with a letter.
        assert_eq!(apply_markdown_italic("123"), "123");
    }
}
