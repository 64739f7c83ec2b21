//! Partitioning a command's arguments into display sections.
//!
//! Sections come out in document order: positional arguments, required
//! flags, commonly used flags, other flags, then user-defined categories
//! lexicographically. Global flags are split out into their own flat set
//! when rendering a non-root command.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use arg_usage_core::Argument;

use crate::usage::has_positional;

/// Category label used for commonly used flags on non-root commands.
pub const COMMONLY_USED_FLAGS: &str = "COMMONLY USED";

/// A positional/flag display section.
///
/// Created fresh per render; not part of the persistent model.
#[derive(Debug, Clone)]
pub struct Section {
    /// The section heading.
    pub heading: String,
    /// The arguments in the section, in input order.
    pub args: Vec<Argument>,
}

/// Returns the section heading for an argument category.
///
/// Categories already containing `ARGUMENTS` or `FLAGS` are used verbatim;
/// anything else gets ` FLAGS` appended.
pub fn arg_heading(category: Option<&str>) -> String {
    let category = category.unwrap_or("OTHER");
    if category.contains("ARGUMENTS") || category.contains("FLAGS") {
        category.to_string()
    } else {
        format!("{category} FLAGS")
    }
}

/// Partitions `arguments` into display sections.
///
/// Returns the ordered sections plus the set of global flag names (first
/// long alias). Global flags are only collected for non-root commands and
/// are excluded from the main sections. Arguments sharing a destination
/// name are deduplicated, first occurrence winning.
pub fn arg_sections(arguments: &[Argument], is_root: bool) -> (Vec<Section>, BTreeSet<String>) {
    let mut categories: BTreeMap<String, Vec<Argument>> = BTreeMap::new();
    let mut dests: HashSet<String> = HashSet::new();
    let mut global_flags: BTreeSet<String> = BTreeSet::new();

    for arg in arguments {
        if arg.hidden {
            continue;
        }
        if has_positional(arg) {
            categories
                .entry("POSITIONAL ARGUMENTS".to_string())
                .or_default()
                .push(arg.clone());
            continue;
        }
        if arg.global && !is_root {
            let members: Vec<&Argument> = if arg.is_group() {
                arg.arguments().iter().collect()
            } else {
                vec![arg]
            };
            for member in members {
                if member.hidden {
                    continue;
                }
                if let Some(flag) = member.option_strings.first()
                    && flag.starts_with("--")
                {
                    global_flags.insert(flag.clone());
                }
            }
            continue;
        }
        let category = if arg.required {
            "REQUIRED".to_string()
        } else {
            arg.category.clone().unwrap_or_else(|| "OTHER".to_string())
        };
        if !arg.name.is_empty() {
            if dests.contains(&arg.name) {
                continue;
            }
            dests.insert(arg.name.clone());
        }
        categories.entry(category).or_default().push(arg.clone());
    }

    // Priority sections first: POSITIONAL ARGUMENTS, REQUIRED, the
    // commonly-used category, OTHER. Remaining categories follow sorted.
    let common = if is_root { "GLOBAL" } else { COMMONLY_USED_FLAGS };
    let mut other_flags_heading = "FLAGS".to_string();
    let mut sections: Vec<Section> = Vec::new();
    for (category, other) in [
        ("POSITIONAL ARGUMENTS", Some("")),
        ("REQUIRED", Some("OPTIONAL")),
        (common, Some("OTHER")),
        ("OTHER", None),
    ] {
        if !categories.contains_key(category) {
            continue;
        }
        let heading = match other {
            Some(other) => {
                if !other.is_empty() {
                    other_flags_heading = other.to_string();
                }
                category.to_string()
            }
            // The sole remaining section at the leaf level takes the
            // generic heading instead of repeating its category name.
            None if categories.len() > 1 => "FLAGS".to_string(),
            None => other_flags_heading.clone(),
        };
        let args = categories.remove(category).unwrap_or_default();
        sections.push(Section {
            heading: arg_heading(Some(&heading)),
            args,
        });
    }

    for (category, args) in categories {
        sections.push(Section {
            heading: arg_heading(Some(&category)),
            args,
        });
    }

    (sections, global_flags)
}
