//! Argument tree validation.
//!
//! Validates structural invariants of display trees before they reach the
//! renderer: no empty nested groups, well-formed option strings, flags with at
//! least one alias, and no duplicate aliases within a group scope. The
//! renderer itself assumes well-formed input; this is the opt-in front door
//! for tree builders.
//!
//! # Examples
//!
//! ```
//! use arg_usage_core::*;
//!
//! let tree = Argument::group(vec![
//!     Argument::positional("name"),
//!     Argument::boolean_flag(&["--async"]),
//! ]);
//! assert!(validate_tree(&tree).is_empty());
//!
//! // Invalid: alias missing its leading dash
//! let bad = Argument::group(vec![Argument::boolean_flag(&["async"])]);
//! assert!(!validate_tree(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::Argument;

/// Argument tree validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A group contains no arguments.
    #[error("group must contain at least one argument")]
    EmptyGroup,
    /// A flag has no option strings.
    #[error("flag has no option strings: {0}")]
    MissingOptionStrings(String),
    /// An option string does not start with `-` or is too short.
    #[error("invalid option string: {0}")]
    InvalidOptionString(String),
    /// A positional argument carries option strings.
    #[error("positional argument has option strings: {0}")]
    PositionalWithOptions(String),
    /// Two flags in the same group scope share an alias.
    #[error("duplicate option string in group: {0}")]
    DuplicateOptionString(String),
}

/// Validates an argument tree, returning all structural errors found.
///
/// Groups are validated recursively; alias uniqueness is checked per group
/// scope so sibling flags cannot collide. An empty root group is valid: it
/// is how a command with no arguments of its own is modeled.
pub fn validate_tree(arg: &Argument) -> Vec<ValidationError> {
    if arg.is_group() && arg.arguments().is_empty() {
        return Vec::new();
    }
    let mut errors = Vec::new();
    validate_node(arg, &mut errors);
    errors
}

fn validate_node(arg: &Argument, errors: &mut Vec<ValidationError>) {
    if arg.is_group() {
        if arg.arguments().is_empty() {
            errors.push(ValidationError::EmptyGroup);
            return;
        }
        let mut seen: HashSet<&str> = HashSet::new();
        for child in arg.arguments() {
            for name in &child.option_strings {
                if !seen.insert(name.as_str()) {
                    errors.push(ValidationError::DuplicateOptionString(name.clone()));
                }
            }
            validate_node(child, errors);
        }
        return;
    }

    if arg.is_positional() {
        if !arg.option_strings.is_empty() {
            errors.push(ValidationError::PositionalWithOptions(arg.name.clone()));
        }
        return;
    }

    // A flag leaf.
    if arg.option_strings.is_empty() {
        errors.push(ValidationError::MissingOptionStrings(arg.name.clone()));
        return;
    }
    for name in &arg.option_strings {
        if !name.starts_with('-') || name.len() < 2 {
            errors.push(ValidationError::InvalidOptionString(name.clone()));
        }
    }
}
