//! Core argument tree model for CLI usage and help rendering.
//!
//! This crate defines the types consumed by the rendering crate:
//!
//! - [`Argument`] — one node in an argument tree: a positional, a flag, or
//!   a (possibly mutually exclusive) group of arguments.
//! - [`ArgKind`] — the positional/flag/group discriminant with group
//!   children carried inline.
//! - [`NArgs`] — value cardinality, including `Remainder` for trailing
//!   token capture.
//! - [`Value`] / [`Choices`] — default values and valid-value sets.
//! - [`HelpInfo`] / [`ReleaseTrack`] — summaries used when listing
//!   subcommands and subgroups.
//!
//! Validation ([`validate_tree`]) catches structural errors such as empty
//! groups, malformed option strings, and duplicate aliases.
//!
//! # Example
//!
//! ```
//! use arg_usage_core::*;
//!
//! let tree = Argument::group(vec![
//!     Argument::positional("instance").with_help("Instance to update."),
//!     Argument::flag(&["--zone"])
//!         .with_default("us-east1-b")
//!         .with_help("Compute zone."),
//!     Argument::mutex_group(vec![
//!         Argument::boolean_flag(&["--async"]),
//!         Argument::boolean_flag(&["--sync"]),
//!     ]),
//! ]);
//!
//! assert!(validate_tree(&tree).is_empty());
//! assert_eq!(tree.arguments().len(), 3);
//! ```

mod types;
mod validate;

pub use types::*;
pub use validate::{ValidationError, validate_tree};
