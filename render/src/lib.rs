//! Usage and help text rendering for declarative argument trees.
//!
//! Given an [`Argument`](arg_usage_core::Argument) tree describing a
//! command's positionals, flags, and (possibly mutually exclusive) groups,
//! this crate derives the canonical `Usage:` line and the structured help
//! sections shown for `--help` or on error.
//!
//! # Main entry points
//!
//! - [`compose::get_usage`] — the full multi-line usage block for a
//!   command or group node.
//! - [`usage::arg_usage`] — the usage-grammar fragment for one argument
//!   or group.
//! - [`sections::arg_sections`] — ordered display sections for a flat
//!   argument list.
//! - [`help::extract_help_strings`] — short/long help split by the
//!   first-blank-line convention.
//! - [`suggest::TextSuggester`] — did-you-mean suggestions for mistyped
//!   command and choice names.
//!
//! # Example
//!
//! ```
//! use arg_usage_core::Argument;
//! use arg_usage_render::compose::{CommandNode, get_usage};
//!
//! let arguments = Argument::group(vec![
//!     Argument::positional("instance"),
//!     Argument::flag(&["--zone"]).with_required(),
//! ]);
//! let mut node = CommandNode {
//!     path: vec!["mycli".into(), "update".into()],
//!     ..CommandNode::default()
//! };
//!
//! let usage = get_usage(&mut node, &arguments);
//! assert!(usage.starts_with("Usage: mycli update INSTANCE --zone=ZONE"));
//! ```
//!
//! Rendering is synchronous and side-effect-free; the argument tree is
//! treated as read-only, so concurrent renders over one shared tree are
//! safe.

pub mod compose;
pub mod details;
pub mod help;
pub mod markdown;
pub mod sections;
pub mod suggest;
pub mod usage;
pub mod wrap;

/// Total line width for wrapped usage text, in columns.
pub const LINE_WIDTH: usize = 80;

/// Column where the body of a two-column row begins.
pub const HELP_INDENT: usize = 25;
