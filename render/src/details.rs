//! Detailed per-argument help text with autogenerated extras.
//!
//! Splices choice lists, property-override notes, and default-true disable
//! hints into an argument's help message, then rewrites paragraph breaks
//! into the `\n+\n` form the downstream markdown renderer expects.

use arg_usage_core::{Argument, Choices, NArgs, Value};

use crate::help::dedent;
use crate::usage::inverted_flag_name;

/// Returns the help message for `arg` with autogenerated details appended.
///
/// Choices render as `_METAVAR_ must be one of: ...` (described choices as
/// a sorted definition list). Flags that store a property get an override
/// note, with a `--no-*` disable hint when the property has a default.
/// Default-true boolean flags get an `Enabled by default` note.
///
/// # Examples
///
/// ```
/// use arg_usage_core::Argument;
/// use arg_usage_render::details::arg_details;
///
/// let format = Argument::flag(&["--format"])
///     .with_choices(&["json", "yaml"])
///     .with_help("Output format.");
/// assert_eq!(
///     arg_details(&format),
///     "Output format. _FORMAT_ must be one of: *json*, *yaml*.",
/// );
/// ```
pub fn arg_details(arg: &Argument) -> String {
    let mut help_message = dedent(&arg.help);
    if arg.hidden {
        return help_message;
    }

    let choices = if arg.is_group() || arg.is_positional() {
        None
    } else {
        arg.choices.as_ref()
    };

    let mut extra_help: Vec<String> = Vec::new();
    if let Some(property) = &arg.store_property {
        // Skip the note when the help already mentions the property.
        if !help_message.contains(&property.name) {
            extra_help.push(format!(
                "Overrides the default *{}* property value for this command invocation.",
                property.name
            ));
            if property.has_default && matches!(arg.nargs, NArgs::Zero | NArgs::ZeroOrOne) {
                extra_help.push(format!("Use *{}* to disable.", inverted_flag_name(arg)));
            }
        }
    } else if let Some(choices) = choices.filter(|c| !c.is_empty()) {
        let metavar = arg.display_metavar();
        let one_of = if choices.len() > 1 {
            "one of"
        } else {
            "(currently only one value is supported)"
        };
        match choices {
            Choices::Map(described) => {
                let body = described
                    .iter()
                    .map(|(name, desc)| format!("*{name}*::: {desc}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                extra_help.push(format!("_{metavar}_ must be {one_of}:\n\n{body}\n\n"));
            }
            Choices::List(names) => {
                let body = names
                    .iter()
                    .map(|name| format!("*{name}*"))
                    .collect::<Vec<_>>()
                    .join(", ");
                extra_help.push(format!("_{metavar}_ must be {one_of}: {body}."));
            }
        }
    } else if arg.is_group() || arg.is_positional() || arg.nargs != NArgs::Zero {
        // Not a boolean flag.
    } else if arg.default == Some(Value::Bool(true)) {
        extra_help.push(format!(
            "Enabled by default, use *{}* to disable.",
            inverted_flag_name(arg)
        ));
    }

    if !extra_help.is_empty() {
        help_message = help_message.trim_end().to_string();
        if !help_message.is_empty() {
            let extra_help_message = extra_help.join(" ");
            let example_continuation = help_message
                .rfind('\n')
                .is_some_and(|idx| help_message.as_bytes().get(idx + 1) == Some(&b' '));
            if example_continuation {
                // Keep example markdown at the end of the message intact.
                help_message.push_str("\n\n");
                help_message.push_str(&extra_help_message);
                help_message.push('\n');
            } else {
                if !help_message.ends_with('.') {
                    help_message.push('.');
                }
                if help_message.rfind("\n\n").is_some_and(|idx| idx > 0) {
                    // Multi-paragraph help: extras go in a new paragraph.
                    help_message.push_str("\n\n");
                } else {
                    help_message.push(' ');
                }
                help_message.push_str(&extra_help_message);
            }
        }
    }
    help_message.replace("\n\n", "\n+\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use arg_usage_core::StoreProperty;

    use super::*;

    #[test]
    fn test_plain_help_passes_through() {
        let arg = Argument::flag(&["--zone"]).with_help("Compute zone.");
        assert_eq!(arg_details(&arg), "Compute zone.");
    }

    #[test]
    fn test_hidden_arg_gets_no_extras() {
        let arg = Argument::flag(&["--zone"])
            .with_choices(&["a", "b"])
            .with_help("Internal.")
            .hide();
        assert_eq!(arg_details(&arg), "Internal.");
    }

    #[test]
    fn test_list_choices_appended() {
        let arg = Argument::flag(&["--format"])
            .with_choices(&["json", "yaml", "text"])
            .with_help("Output format.");
        assert_eq!(
            arg_details(&arg),
            "Output format. _FORMAT_ must be one of: *json*, *yaml*, *text*."
        );
    }

    #[test]
    fn test_single_choice_wording() {
        let arg = Argument::flag(&["--format"])
            .with_choices(&["json"])
            .with_help("Output format.");
        assert_eq!(
            arg_details(&arg),
            "Output format. _FORMAT_ must be (currently only one value is supported): *json*."
        );
    }

    #[test]
    fn test_described_choices_render_definition_list() {
        let mut described = BTreeMap::new();
        described.insert("json".to_string(), "Machine readable.".to_string());
        described.insert("text".to_string(), "Human readable.".to_string());
        let arg = Argument::flag(&["--format"])
            .with_choice_descriptions(described)
            .with_help("Output format.");

        let details = arg_details(&arg);
        assert!(details.starts_with("Output format. _FORMAT_ must be one of:"));
        assert!(details.contains("*json*::: Machine readable."));
        assert!(details.contains("*text*::: Human readable."));
        // Paragraph breaks are rewritten for the markdown renderer.
        assert!(details.contains("\n+\n"));
        assert!(!details.contains("\n\n"));
    }

    #[test]
    fn test_default_true_boolean_gets_disable_hint() {
        let arg = Argument::boolean_flag(&["--enable-logging"])
            .with_default(true)
            .with_help("Write request logs.");
        assert_eq!(
            arg_details(&arg),
            "Write request logs. Enabled by default, use *--no-enable-logging* to disable."
        );
    }

    #[test]
    fn test_store_property_note() {
        let mut arg = Argument::flag(&["--verbosity"]).with_help("Per-invocation verbosity.");
        arg.store_property = Some(StoreProperty {
            name: "core/verbosity".to_string(),
            has_default: false,
        });
        assert_eq!(
            arg_details(&arg),
            "Per-invocation verbosity. Overrides the default *core/verbosity* property \
             value for this command invocation."
        );
    }

    #[test]
    fn test_store_property_with_default_adds_disable_hint() {
        let mut arg = Argument::boolean_flag(&["--prompt"]).with_help("Prompt before acting.");
        arg.store_property = Some(StoreProperty {
            name: "core/prompt".to_string(),
            has_default: true,
        });
        let details = arg_details(&arg);
        assert!(details.contains("Overrides the default *core/prompt* property"));
        assert!(details.ends_with("Use *--no-prompt* to disable."));
    }

    #[test]
    fn test_store_property_skipped_when_already_mentioned() {
        let mut arg =
            Argument::flag(&["--verbosity"]).with_help("Sets the core/verbosity property.");
        arg.store_property = Some(StoreProperty {
            name: "core/verbosity".to_string(),
            has_default: false,
        });
        assert_eq!(arg_details(&arg), "Sets the core/verbosity property.");
    }

    #[test]
    fn test_positional_choices_not_listed() {
        let arg = Argument::positional("format")
            .with_choices(&["json", "yaml"])
            .with_help("Output format.");
        assert_eq!(arg_details(&arg), "Output format.");
    }

    #[test]
    fn test_extras_dropped_when_help_is_empty() {
        let arg = Argument::flag(&["--format"]).with_choices(&["json", "yaml"]);
        assert_eq!(arg_details(&arg), "");
    }

    #[test]
    fn test_multi_paragraph_help_gets_extras_in_new_paragraph() {
        let arg = Argument::flag(&["--format"])
            .with_choices(&["json"])
            .with_help("First paragraph.\n\nSecond paragraph.");
        let details = arg_details(&arg);
        assert!(details.starts_with("First paragraph.\n+\nSecond paragraph.\n+\n_FORMAT_"));
    }
}
