//! Top-level `Usage:` block composition for a command or group node.

use std::collections::BTreeMap;

use arg_usage_core::{Argument, HelpInfo};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::usage::{UsageContext, arg_usage, get_flags};
use crate::wrap::wrap_with_prefix;
use crate::{HELP_INDENT, LINE_WIDTH};

/// A command or group node in the CLI tree, as seen by the composer.
///
/// The command-registration collaborator supplies the implementation; the
/// composer only reads paths, child listings, and hidden status.
pub trait Command {
    /// The full command path, e.g. `["mycli", "compute", "instances"]`.
    fn path(&self) -> &[String];
    /// Ensures subgroup/subcommand metadata is populated before traversal.
    fn load_all_sub_elements(&mut self);
    /// Child group names mapped to their help summaries.
    fn sub_group_helps(&self) -> BTreeMap<String, HelpInfo>;
    /// Child command names mapped to their help summaries.
    fn sub_command_helps(&self) -> BTreeMap<String, HelpInfo>;
    /// Whether this node itself is hidden.
    fn is_hidden(&self) -> bool;
}

/// A self-contained [`Command`] implementation.
///
/// Useful for tests and for loading command trees from serialized files;
/// real CLIs typically implement [`Command`] on their own registry nodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandNode {
    /// The full command path.
    pub path: Vec<String>,
    /// The node is hidden.
    #[serde(default)]
    pub hidden: bool,
    /// Child groups by name.
    #[serde(default)]
    pub groups: BTreeMap<String, HelpInfo>,
    /// Child commands by name.
    #[serde(default)]
    pub commands: BTreeMap<String, HelpInfo>,
}

impl Command for CommandNode {
    fn path(&self) -> &[String] {
        &self.path
    }

    fn load_all_sub_elements(&mut self) {}

    fn sub_group_helps(&self) -> BTreeMap<String, HelpInfo> {
        self.groups.clone()
    }

    fn sub_command_helps(&self) -> BTreeMap<String, HelpInfo> {
        self.commands.clone()
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Returns the full `Usage:` block for one command or group node.
///
/// The primary line carries the brief flag usage (or a
/// `<group | command>` placeholder when children exist), followed by
/// wrapped `group may be` / `command may be` / `optional flags may be`
/// rows and the fixed `--help` trailer.
pub fn get_usage<C: Command>(command: &mut C, arguments: &Argument) -> String {
    command.load_all_sub_elements();
    let command_path = command.path().join(" ");
    let topic = command.path().len() >= 2 && command.path()[1] == "topic";
    let command_id = if topic { "topic" } else { "command" };

    let mut buf = String::from("Usage: ");
    let mut usage_parts: Vec<String> = Vec::new();

    if !topic {
        usage_parts.push(arg_usage(
            arguments,
            UsageContext {
                brief: true,
                optional: false,
                top: true,
                ..UsageContext::new()
            },
            None,
        ));
    }

    let include_hidden = command.is_hidden();
    let groups = visible_names(&command.sub_group_helps(), include_hidden);
    let commands = visible_names(&command.sub_command_helps(), include_hidden);

    debug!(
        command = %command_path,
        groups = groups.len(),
        commands = commands.len(),
        "Composing usage block"
    );

    let mut all_subtypes: Vec<&str> = Vec::new();
    if !groups.is_empty() {
        all_subtypes.push("group");
    }
    if !commands.is_empty() {
        all_subtypes.push(command_id);
    }
    let optional_flags = if !groups.is_empty() || !commands.is_empty() {
        usage_parts.push(format!("<{}>", all_subtypes.join(" | ")));
        Vec::new()
    } else {
        get_flags(arguments, true)
    };

    let usage_msg = usage_parts.join(" ");
    buf.push_str(&format!("{command_path} {usage_msg}\n"));

    if !groups.is_empty() {
        wrap_with_prefix(
            &mut buf,
            "group may be",
            &groups.join(" | "),
            HELP_INDENT,
            LINE_WIDTH,
            "  ",
        );
    }
    if !commands.is_empty() {
        wrap_with_prefix(
            &mut buf,
            &format!("{command_id} may be"),
            &commands.join(" | "),
            HELP_INDENT,
            LINE_WIDTH,
            "  ",
        );
    }
    if !optional_flags.is_empty() {
        wrap_with_prefix(
            &mut buf,
            "optional flags may be",
            &optional_flags.join(" | "),
            HELP_INDENT,
            LINE_WIDTH,
            "  ",
        );
    }

    buf.push_str(&format!(
        "\nFor detailed information on this command and its flags, run:\n  {command_path} --help\n"
    ));

    buf
}

fn visible_names(helps: &BTreeMap<String, HelpInfo>, include_hidden: bool) -> Vec<String> {
    let mut names: Vec<String> = helps
        .iter()
        .filter(|(_, info)| include_hidden || !info.is_hidden)
        .map(|(name, _)| name.clone())
        .collect();
    names.sort();
    names
}
