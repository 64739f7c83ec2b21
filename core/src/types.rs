//! Argument tree type definitions.
//!
//! This module defines the data model consumed by the rendering crate: a
//! tree of positional arguments, flags, and (possibly mutually exclusive)
//! groups. The types are designed for serialization with [`serde`] so trees
//! can round-trip through JSON and YAML.
//!
//! Renderers treat the tree as read-only. The one place that needs to adjust
//! a node (promoting a singleton group's required bit) clones the node first.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Cardinality of the values an argument accepts.
///
/// # Examples
///
/// ```
/// use arg_usage_core::NArgs;
///
/// assert_eq!(NArgs::default(), NArgs::One);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NArgs {
    /// No value: a boolean flag.
    Zero,
    /// Exactly one value (the default).
    #[default]
    One,
    /// Zero or one value.
    ZeroOrOne,
    /// Zero or more values.
    ZeroOrMore,
    /// One or more values.
    OneOrMore,
    /// Greedily captures all trailing tokens after a `--` separator.
    Remainder,
}

/// A default value attached to a flag.
///
/// Mirrors the scalar/list/mapping shapes that argument registration code
/// supplies. Truthiness follows the usual conventions: `false`, `0`, empty
/// strings, and empty collections do not produce a `; default=` suffix in
/// usage text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// String scalar.
    Str(String),
    /// List of strings, displayed comma-joined.
    List(Vec<String>),
    /// String mapping, displayed as sorted `k=v` pairs.
    Map(BTreeMap<String, String>),
}

impl Value {
    /// Returns `true` unless the value is `false`, zero, or empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use arg_usage_core::Value;
    ///
    /// assert!(Value::Str("x".into()).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(!Value::Int(0).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::List(l) => !l.is_empty(),
            Value::Map(m) => !m.is_empty(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

/// Valid values for a flag or positional.
///
/// Either a plain ordered list of names, or a mapping from name to a
/// per-choice description used in detailed help.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Choices {
    /// Ordered choice names.
    List(Vec<String>),
    /// Choice name to description.
    Map(BTreeMap<String, String>),
}

impl Choices {
    /// Number of choices.
    pub fn len(&self) -> usize {
        match self {
            Choices::List(l) => l.len(),
            Choices::Map(m) => m.len(),
        }
    }

    /// Returns `true` when no choices are present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Choice names in display order (list order, or sorted map keys).
    pub fn names(&self) -> Vec<&str> {
        match self {
            Choices::List(l) => l.iter().map(String::as_str).collect(),
            Choices::Map(m) => m.keys().map(String::as_str).collect(),
        }
    }
}

/// Discriminant for the three argument shapes.
///
/// Groups carry their children inline; leaves carry no extra payload. All
/// shared attributes live on [`Argument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArgKind {
    /// An argument identified by position.
    Positional,
    /// An argument identified by one or more `-`/`--` option strings.
    Flag,
    /// A container of arguments, optionally mutually exclusive.
    Group {
        /// Ordered child arguments. Never empty for display trees.
        arguments: Vec<Argument>,
        /// Children are alternatives; at most one may be supplied.
        #[serde(default)]
        mutex: bool,
    },
}

/// One node in an argument tree: a positional, a flag, or a group.
///
/// Built once by command-registration code and treated as read-only by the
/// rendering crate. Use the constructors plus `with_*` chainers:
///
/// ```
/// use arg_usage_core::{Argument, NArgs};
///
/// let format = Argument::flag(&["--format", "-f"])
///     .with_metavar("FORMAT")
///     .with_default("json")
///     .with_help("Output format.");
/// assert!(format.is_flag());
/// assert_eq!(format.display_metavar(), "FORMAT");
///
/// let files = Argument::positional("files").with_nargs(NArgs::OneOrMore);
/// let group = Argument::group(vec![format, files]);
/// assert_eq!(group.arguments().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    /// Destination name. Uppercased as the metavar fallback.
    pub name: String,
    /// Explicit metavar. A single space suppresses the metavar entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metavar: Option<String>,
    /// Value cardinality.
    #[serde(default)]
    pub nargs: NArgs,
    /// Flag aliases (e.g. `--foo`, `-f`). Empty for positionals and groups.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_strings: Vec<String>,
    /// Must be supplied by the user.
    #[serde(default)]
    pub required: bool,
    /// Excluded from usage and help unless hidden display is requested.
    #[serde(default)]
    pub hidden: bool,
    /// Inherited from the CLI root; listed separately on non-root commands.
    #[serde(default)]
    pub global: bool,
    /// Default value shown for non-required flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Valid values, when constrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Choices>,
    /// Free-form display category (e.g. `COMMONLY USED`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Help text. Short/long splitting is the renderer's concern.
    #[serde(default)]
    pub help: String,
    /// Positional/flag/group discriminant and group payload.
    #[serde(flatten)]
    pub kind: ArgKind,
    /// Property override metadata, when this flag stores a property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_property: Option<StoreProperty>,
    /// Replacement flag to list in flag collections (e.g. the `--no-*`
    /// form of a default-true boolean flag).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_inverted: Option<Box<Argument>>,
    /// Render the `--no-*` inverted name in synopses.
    #[serde(default)]
    pub inverted_synopsis: bool,
}

impl Argument {
    fn leaf(name: &str, kind: ArgKind) -> Self {
        Self {
            name: name.to_string(),
            metavar: None,
            nargs: NArgs::One,
            option_strings: Vec::new(),
            required: false,
            hidden: false,
            global: false,
            default: None,
            choices: None,
            category: None,
            help: String::new(),
            kind,
            store_property: None,
            show_inverted: None,
            inverted_synopsis: false,
        }
    }

    /// Creates a required positional argument taking exactly one value.
    pub fn positional(name: &str) -> Self {
        let mut arg = Self::leaf(name, ArgKind::Positional);
        arg.required = true;
        arg
    }

    /// Creates a flag taking one value. The destination name is derived
    /// from the first alias with leading dashes stripped and `-` mapped
    /// to `_`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arg_usage_core::Argument;
    ///
    /// let flag = Argument::flag(&["--log-level"]);
    /// assert_eq!(flag.name, "log_level");
    /// ```
    pub fn flag(names: &[&str]) -> Self {
        let dest = names
            .first()
            .map(|n| n.trim_start_matches('-').replace('-', "_"))
            .unwrap_or_default();
        let mut arg = Self::leaf(&dest, ArgKind::Flag);
        arg.option_strings = names.iter().map(|n| n.to_string()).collect();
        arg
    }

    /// Creates a boolean flag (no value).
    pub fn boolean_flag(names: &[&str]) -> Self {
        let mut arg = Self::flag(names);
        arg.nargs = NArgs::Zero;
        arg
    }

    /// Creates a group of arguments.
    pub fn group(arguments: Vec<Argument>) -> Self {
        Self::leaf(
            "",
            ArgKind::Group {
                arguments,
                mutex: false,
            },
        )
    }

    /// Creates a mutually exclusive group: at most one child may be given.
    pub fn mutex_group(arguments: Vec<Argument>) -> Self {
        Self::leaf(
            "",
            ArgKind::Group {
                arguments,
                mutex: true,
            },
        )
    }

    /// Sets the metavar.
    pub fn with_metavar(mut self, metavar: &str) -> Self {
        self.metavar = Some(metavar.to_string());
        self
    }

    /// Sets the value cardinality.
    pub fn with_nargs(mut self, nargs: NArgs) -> Self {
        self.nargs = nargs;
        self
    }

    /// Marks as required.
    pub fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks as optional (positionals are required by default).
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Marks as hidden.
    pub fn hide(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Marks as a global (root-inherited) flag.
    pub fn make_global(mut self) -> Self {
        self.global = true;
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Sets list choices.
    pub fn with_choices(mut self, choices: &[&str]) -> Self {
        self.choices = Some(Choices::List(
            choices.iter().map(|c| c.to_string()).collect(),
        ));
        self
    }

    /// Sets described choices (name to description).
    pub fn with_choice_descriptions(mut self, choices: BTreeMap<String, String>) -> Self {
        self.choices = Some(Choices::Map(choices));
        self
    }

    /// Sets the display category.
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Sets the help text.
    pub fn with_help(mut self, help: &str) -> Self {
        self.help = help.to_string();
        self
    }

    /// Returns `true` for groups.
    pub fn is_group(&self) -> bool {
        matches!(self.kind, ArgKind::Group { .. })
    }

    /// Returns `true` for positionals.
    pub fn is_positional(&self) -> bool {
        matches!(self.kind, ArgKind::Positional)
    }

    /// Returns `true` for flags.
    pub fn is_flag(&self) -> bool {
        matches!(self.kind, ArgKind::Flag)
    }

    /// Returns `true` for mutually exclusive groups.
    pub fn is_mutex(&self) -> bool {
        matches!(self.kind, ArgKind::Group { mutex: true, .. })
    }

    /// Child arguments; empty for leaves.
    pub fn arguments(&self) -> &[Argument] {
        match &self.kind {
            ArgKind::Group { arguments, .. } => arguments,
            _ => &[],
        }
    }

    /// Metavar for display: the explicit metavar or the uppercased name.
    pub fn display_metavar(&self) -> String {
        self.metavar
            .clone()
            .unwrap_or_else(|| self.name.to_uppercase())
    }

    /// Flag aliases in sorted order.
    pub fn sorted_option_strings(&self) -> Vec<String> {
        let mut names = self.option_strings.clone();
        names.sort();
        names
    }
}

/// Property override metadata for flags that set a configuration property
/// for the duration of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreProperty {
    /// The property name (e.g. `core/verbosity`).
    pub name: String,
    /// The property has a default value, so the flag can be disabled with
    /// its `--no-*` form.
    #[serde(default)]
    pub has_default: bool,
}

/// Maturity level of a command or group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReleaseTrack {
    /// Generally available (the default).
    #[default]
    Ga,
    /// Beta.
    Beta,
    /// Alpha.
    Alpha,
}

/// Summary used when listing subcommands and subgroups.
///
/// Created fresh per listing call and discarded after render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpInfo {
    /// The help text for the command or group.
    pub help_text: String,
    /// Whether the command or group is hidden.
    #[serde(default)]
    pub is_hidden: bool,
    /// Maturity level.
    #[serde(default)]
    pub release_track: ReleaseTrack,
}

impl HelpInfo {
    /// Creates a new help summary.
    pub fn new(help_text: &str, is_hidden: bool, release_track: ReleaseTrack) -> Self {
        Self {
            help_text: help_text.to_string(),
            is_hidden,
            release_track,
        }
    }
}
