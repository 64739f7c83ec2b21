//! Usage-grammar rendering for argument trees.
//!
//! Turns one [`Argument`] (or a whole group tree) into the synopsis
//! fragment shown on the `Usage:` line. Mutually exclusive alternatives are
//! separated by `' | '`, other siblings by `' '`. Required groups are
//! enclosed in `(...)`, optional ones in `[...]`. Required members of a
//! group are separated from the optional members by `' : '`.

use std::collections::HashSet;
use std::sync::LazyLock;

use arg_usage_core::{ArgKind, Argument, NArgs, Value};
use regex::Regex;

use crate::markdown::{MARKDOWN_BOLD, apply_markdown_italic};

static GROUPING_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[\](){}|]").expect("static regex must compile"));
static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +").expect("static regex must compile"));

/// Options threaded through recursive usage rendering.
///
/// The defaults match a plain, non-brief render: optional members shown,
/// values shown, hidden arguments suppressed.
#[derive(Debug, Clone, Copy)]
pub struct UsageContext {
    /// Show one alias per flag and no default values.
    pub brief: bool,
    /// Definition-list rendering: never substitute the inverted synopsis.
    pub definition: bool,
    /// Emit markdown markers.
    pub markdown: bool,
    /// Include optional members.
    pub optional: bool,
    /// This is the top-level group of a command.
    pub top: bool,
    /// Show `name=value` for flags that take a value.
    pub value: bool,
    /// Include hidden arguments.
    pub hidden: bool,
}

impl Default for UsageContext {
    fn default() -> Self {
        Self {
            brief: false,
            definition: false,
            markdown: false,
            optional: true,
            top: false,
            value: true,
            hidden: false,
        }
    }
}

impl UsageContext {
    /// A default (non-brief, non-top) context.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Returns the usage fragment for a positional argument.
///
/// # Examples
///
/// ```
/// use arg_usage_core::{Argument, NArgs};
/// use arg_usage_render::usage::positional_usage;
///
/// let files = Argument::positional("files").with_nargs(NArgs::OneOrMore);
/// assert_eq!(positional_usage(&files, false), "FILES [FILES ...]");
/// ```
pub fn positional_usage(arg: &Argument, markdown: bool) -> String {
    let mut var = arg.display_metavar();
    if markdown {
        var = apply_markdown_italic(&var);
    }
    match arg.nargs {
        NArgs::OneOrMore => format!("{var} [{var} ...]"),
        NArgs::ZeroOrMore => format!("[{var} ...]"),
        NArgs::Remainder => format!("[-- {var} ...]"),
        NArgs::ZeroOrOne => format!("[{var}]"),
        _ => var,
    }
}

/// Returns the usage separator plus metavar for one alias of a flag.
///
/// Long (`--`) aliases use `=` as the separator, short aliases a space. A
/// metavar of a single space suppresses the metavar entirely. For
/// zero-or-one and zero-or-more flags the metavar is bracketed.
fn flag_metavar(flag: &Argument, metavar: &str, name: &str, markdown: bool) -> String {
    if metavar == " " {
        return String::new();
    }
    let mut metavar = metavar.to_string();
    if markdown {
        metavar = apply_markdown_italic(&metavar);
    }
    let mut separator = if name.starts_with("--") { "=" } else { " " };
    if separator == "=" {
        metavar = format!("={metavar}");
        separator = "";
    }
    if matches!(flag.nargs, NArgs::ZeroOrOne | NArgs::ZeroOrMore) {
        metavar = format!("[{metavar}]");
        separator = "";
    }
    format!("{separator}{metavar}")
}

/// Quotes a default value for display, preferring double quotes.
fn quote_value(value: &str) -> String {
    if value.contains('"') {
        format!("'{value}'")
    } else {
        format!("\"{value}\"")
    }
}

/// Renders a default value for the `; default=` suffix.
///
/// Lists are comma-joined, mappings become sorted `k=v` pairs; string-like
/// results are quoted, other scalars use their plain display form.
fn default_display(value: &Value) -> String {
    match value {
        Value::Str(s) => quote_value(s),
        Value::List(items) => quote_value(&items.join(",")),
        Value::Map(map) => {
            let pairs: Vec<String> = map.iter().map(|(k, v)| format!("{k}={v}")).collect();
            quote_value(&pairs.join(","))
        }
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
    }
}

/// Returns the usage fragment for a flag.
///
/// All aliases are sorted and joined with `, `; flags taking a value get a
/// metavar per alias. Brief mode shows only the first alias and never the
/// default suffix. `inverted` rewrites each alias to its `--no-` form.
///
/// # Examples
///
/// ```
/// use arg_usage_core::Argument;
/// use arg_usage_render::usage::flag_usage;
///
/// let foo = Argument::flag(&["--foo"]).with_metavar("FOO").with_required();
/// assert_eq!(flag_usage(&foo, false, false, false, true), "--foo=FOO");
///
/// let bar = Argument::flag(&["--bar"]).with_metavar("BAR").with_default("x");
/// assert_eq!(
///     flag_usage(&bar, false, false, false, true),
///     "--bar=BAR; default=\"x\"",
/// );
/// ```
pub fn flag_usage(arg: &Argument, brief: bool, markdown: bool, inverted: bool, value: bool) -> String {
    let mut names = arg.sorted_option_strings();
    if inverted {
        names = names
            .iter()
            .map(|n| n.replacen("--", "--no-", 1))
            .collect();
    }
    let metavar = arg.display_metavar();

    if !value || brief {
        let long_string = names.first().cloned().unwrap_or_default();
        if !value || arg.nargs == NArgs::Zero {
            return long_string;
        }
        let metavar = flag_metavar(arg, &metavar, &long_string, false);
        return format!("{long_string}{metavar}");
    }

    if arg.nargs == NArgs::Zero {
        return if markdown {
            names
                .iter()
                .map(|n| format!("{MARKDOWN_BOLD}{n}{MARKDOWN_BOLD}"))
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            names.join(", ")
        };
    }

    let bold = if markdown { MARKDOWN_BOLD } else { "" };
    let mut usage = names
        .iter()
        .map(|name| {
            let metavar = flag_metavar(arg, &metavar, name, markdown);
            format!("{bold}{name}{bold}{metavar}")
        })
        .collect::<Vec<_>>()
        .join(", ");

    if let Some(default) = &arg.default
        && default.is_truthy()
        && !arg.required
    {
        usage.push_str(&format!("; default={}", default_display(default)));
    }
    usage
}

/// The `--no-*` form of a flag's first registered alias.
pub(crate) fn inverted_flag_name(flag: &Argument) -> String {
    flag.option_strings
        .first()
        .map(|n| n.replacen("--", "--no-", 1))
        .unwrap_or_default()
}

/// Returns `true` if `arg` is a positional or a group containing one.
///
/// Hidden arguments never count.
pub fn has_positional(arg: &Argument) -> bool {
    if arg.hidden {
        return false;
    }
    if arg.is_positional() {
        return true;
    }
    arg.arguments().iter().any(has_positional)
}

/// Returns the single effective (non-hidden, recursively collapsed) child
/// of a group, or `None` when the group has more than one.
///
/// When the group is required and the sole child is not, the returned copy
/// has its required bit promoted; the shared tree is never mutated.
pub fn singleton(group: &Argument) -> Option<Argument> {
    let mut found: Option<Argument> = None;
    for arg in group.arguments() {
        if arg.hidden {
            continue;
        }
        let candidate = if arg.is_group() {
            singleton(arg)?
        } else {
            arg.clone()
        };
        if found.is_some() {
            return None;
        }
        found = Some(candidate);
    }
    let mut single = found?;
    if group.required && !single.required {
        single.required = true;
    }
    Some(single)
}

/// Sort key for a rendered usage name.
///
/// Positional-looking names share one low rank so their original relative
/// order is preserved by the stable sort. `--no-x` sorts immediately after
/// `--x`, long flags before short flags, anything unrecognized last.
pub fn usage_sort_key(name: &str) -> (u8, String, String) {
    let Some(first) = name.chars().next() else {
        return (0, String::new(), String::new());
    };
    if let Some(rest) = name.strip_prefix("--no-") {
        (3, rest.to_string(), "x".to_string())
    } else if let Some(rest) = name.strip_prefix("--") {
        (3, rest.to_string(), String::new())
    } else if let Some(rest) = name.strip_prefix('-') {
        (4, rest.to_string(), String::new())
    } else if first.is_alphabetic() {
        (1, String::new(), String::new())
    } else {
        (5, name.to_string(), String::new())
    }
}

/// Sort key for an argument within a group.
///
/// Positionals (and positional-bearing groups) first in original order,
/// required flags next, optional flags ordered by stripped name, then
/// required groups, optional groups, and REMAINDER arguments last.
pub fn arg_sort_key(arg: &Argument) -> (u8, String, String) {
    let rendered = arg_usage(
        arg,
        UsageContext {
            value: false,
            hidden: true,
            ..UsageContext::new()
        },
        None,
    );
    let name = SPACE_RUNS
        .replace_all(&GROUPING_CHARS.replace_all(&rendered, ""), " ")
        .into_owned();

    let collapsed;
    let mut arg = arg;
    if arg.is_group() {
        if let Some(single) = singleton(arg) {
            collapsed = single;
            arg = &collapsed;
        }
    }
    if arg.is_group() {
        if has_positional(arg) {
            return (1, String::new(), String::new());
        }
        if arg.required {
            return (6, name, String::new());
        }
        return (7, name, String::new());
    } else if arg.nargs == NArgs::Remainder {
        return (8, name, String::new());
    }
    if arg.is_positional() {
        return (1, String::new(), String::new());
    }
    if arg.required {
        return (2, name, String::new());
    }
    usage_sort_key(&name)
}

/// Returns the usage string for `arg` and all nested groups within it.
///
/// `remainder_usage` collects REMAINDER fragments: when the caller supplies
/// an accumulator, REMAINDER usage is appended there instead of to the
/// returned string; otherwise it is appended once at the end of this call's
/// own result.
pub fn arg_usage(
    arg: &Argument,
    ctx: UsageContext,
    remainder_usage: Option<&mut Vec<String>>,
) -> String {
    if arg.hidden && !ctx.hidden {
        return String::new();
    }

    // A group with one effective member renders as that member, except a
    // REMAINDER leaf which must keep its end-of-line placement.
    let collapsed = if arg.is_group() {
        singleton(arg).filter(|s| s.is_group() || s.nargs != NArgs::Remainder)
    } else {
        None
    };
    let arg = collapsed.as_ref().unwrap_or(arg);

    if !arg.is_group() {
        let usage = if arg.is_positional() {
            positional_usage(arg, ctx.markdown)
        } else {
            let inverted = !ctx.definition && arg.inverted_synopsis;
            flag_usage(arg, ctx.brief, ctx.markdown, inverted, ctx.value)
        };
        if !usage.is_empty() && ctx.top && !arg.required && !usage.starts_with('[') {
            return format!("[{usage}]");
        }
        return usage;
    }

    let sep = if arg.is_mutex() { " | " } else { " " };
    let child_ctx = UsageContext {
        markdown: ctx.markdown,
        value: ctx.value,
        hidden: ctx.hidden,
        ..UsageContext::new()
    };

    let mut local_remainder: Vec<String> = Vec::new();
    let (remainder, include_remainder) = match remainder_usage {
        Some(shared) => (shared, false),
        None => (&mut local_remainder, true),
    };

    let mut children: Vec<((u8, String, String), &Argument)> = arg
        .arguments()
        .iter()
        .map(|a| (arg_sort_key(a), a))
        .collect();
    children.sort_by(|a, b| a.0.cmp(&b.0));

    let mut positional_args: Vec<Argument> = Vec::new();
    let mut required_usage: Vec<String> = Vec::new();
    let mut optional_usage: Vec<String> = Vec::new();
    for (_, child) in children {
        if child.hidden && !ctx.hidden {
            continue;
        }
        let collapsed_child = if child.is_group() {
            singleton(child)
        } else {
            None
        };
        let child = collapsed_child.as_ref().unwrap_or(child);
        if !child.is_group() && child.nargs == NArgs::Remainder {
            remainder.push(arg_usage(child, child_ctx, None));
        } else if has_positional(child) {
            positional_args.push(child.clone());
        } else {
            let usage = arg_usage(child, child_ctx, None);
            if usage.is_empty() {
                continue;
            }
            if child.required {
                if !required_usage.contains(&usage) {
                    required_usage.push(usage);
                }
            } else {
                let usage = if ctx.top { format!("[{usage}]") } else { usage };
                if !optional_usage.contains(&usage) {
                    optional_usage.push(usage);
                }
            }
        }
    }

    let mut all_usage: Vec<String> = Vec::new();
    if !positional_args.is_empty() {
        // A run of optional positionals merges into one bracket pair with
        // the closing brackets counted and appended once.
        let mut nesting = 0;
        let positional_ctx = UsageContext {
            markdown: ctx.markdown,
            hidden: ctx.hidden,
            ..UsageContext::new()
        };
        let mut run: Vec<String> = Vec::new();
        for child in &positional_args {
            let usage = arg_usage(child, positional_ctx, None);
            if usage.is_empty() {
                continue;
            }
            if !child.required && !usage.starts_with('[') {
                nesting += 1;
                run.push(format!("[{usage}"));
            } else {
                run.push(usage);
            }
        }
        if nesting > 0
            && let Some(last) = run.last_mut()
        {
            last.push_str(&"]".repeat(nesting));
        }
        all_usage.extend(run);
    }
    if !required_usage.is_empty() {
        all_usage.push(required_usage.join(sep));
    }
    if !optional_usage.is_empty() {
        if ctx.optional {
            if !ctx.top && !required_usage.is_empty() {
                all_usage.push(":".to_string());
            }
            all_usage.push(optional_usage.join(sep));
        } else if ctx.brief && ctx.top {
            all_usage.push("[optional flags]".to_string());
        }
    }
    if ctx.brief {
        all_usage.sort_by(|a, b| usage_sort_key(a).cmp(&usage_sort_key(b)));
    }
    if !remainder.is_empty() && include_remainder {
        all_usage.push(remainder.join(" "));
    }

    let usage = all_usage.join(" ");
    if arg.required {
        return format!("({usage})");
    }
    if ctx.top || all_usage.len() <= 1 {
        return usage;
    }
    format!("[{usage}]")
}

/// Returns the sorted first-alias names of all flags in `arg`.
///
/// Hidden, positional, and global arguments are excluded. With `optional`
/// set, required flags are excluded and `--help` is added.
pub fn get_flags(arg: &Argument, optional: bool) -> Vec<String> {
    let mut flags: HashSet<String> = HashSet::new();
    if optional {
        flags.insert("--help".to_string());
    }
    collect_flags(arg, optional, &mut flags);
    let mut flags: Vec<String> = flags.into_iter().collect();
    flags.sort_by(|a, b| usage_sort_key(a).cmp(&usage_sort_key(b)));
    flags
}

fn collect_flags(arg: &Argument, optional: bool, flags: &mut HashSet<String>) {
    if arg.hidden {
        return;
    }
    if let ArgKind::Group { arguments, .. } = &arg.kind {
        for child in arguments {
            collect_flags(child, optional, flags);
        }
        return;
    }
    let arg = arg.show_inverted.as_deref().unwrap_or(arg);
    if !arg.option_strings.is_empty()
        && !arg.is_positional()
        && !arg.global
        && (!optional || !arg.required)
        && let Some(first) = arg.sorted_option_strings().into_iter().next()
    {
        flags.insert(first);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_positional_usage_forms() {
        let one = Argument::positional("name");
        assert_eq!(positional_usage(&one, false), "NAME");

        let plus = Argument::positional("name").with_nargs(NArgs::OneOrMore);
        assert_eq!(positional_usage(&plus, false), "NAME [NAME ...]");

        let star = Argument::positional("name").with_nargs(NArgs::ZeroOrMore);
        assert_eq!(positional_usage(&star, false), "[NAME ...]");

        let opt = Argument::positional("name").with_nargs(NArgs::ZeroOrOne);
        assert_eq!(positional_usage(&opt, false), "[NAME]");

        let rest = Argument::positional("args").with_nargs(NArgs::Remainder);
        assert_eq!(positional_usage(&rest, false), "[-- ARGS ...]");
    }

    #[test]
    fn test_positional_usage_markdown() {
        let one = Argument::positional("name");
        assert_eq!(positional_usage(&one, true), "_NAME_");
    }

    #[test]
    fn test_flag_usage_required_value_flag() {
        let foo = Argument::flag(&["--foo"]).with_metavar("FOO").with_required();
        assert_eq!(flag_usage(&foo, false, false, false, true), "--foo=FOO");
    }

    #[test]
    fn test_flag_usage_short_alias_uses_space_separator() {
        let foo = Argument::flag(&["--foo", "-f"]).with_metavar("FOO");
        assert_eq!(flag_usage(&foo, false, false, false, true), "--foo=FOO, -f FOO");
    }

    #[test]
    fn test_flag_usage_optional_with_default() {
        let foo = Argument::flag(&["--foo"]).with_metavar("FOO").with_default("x");
        assert_eq!(
            flag_usage(&foo, false, false, false, true),
            "--foo=FOO; default=\"x\""
        );
    }

    #[test]
    fn test_flag_usage_list_default_comma_joined() {
        let scopes = Argument::flag(&["--scopes"])
            .with_default(Value::List(vec!["a".into(), "b".into()]));
        assert_eq!(
            flag_usage(&scopes, false, false, false, true),
            "--scopes=SCOPES; default=\"a,b\""
        );
    }

    #[test]
    fn test_flag_usage_map_default_sorted_pairs() {
        let mut map = BTreeMap::new();
        map.insert("b".to_string(), "2".to_string());
        map.insert("a".to_string(), "1".to_string());
        let labels = Argument::flag(&["--labels"]).with_default(Value::Map(map));
        assert_eq!(
            flag_usage(&labels, false, false, false, true),
            "--labels=LABELS; default=\"a=1,b=2\""
        );
    }

    #[test]
    fn test_flag_usage_default_containing_quote_uses_single_quotes() {
        let msg = Argument::flag(&["--message"]).with_default("say \"hi\"");
        assert_eq!(
            flag_usage(&msg, false, false, false, true),
            "--message=MESSAGE; default='say \"hi\"'"
        );
    }

    #[test]
    fn test_flag_usage_required_flag_omits_default() {
        let foo = Argument::flag(&["--foo"]).with_default("x").with_required();
        assert_eq!(flag_usage(&foo, false, false, false, true), "--foo=FOO");
    }

    #[test]
    fn test_flag_usage_brief_mode_single_alias_no_default() {
        let foo = Argument::flag(&["--foo", "-f"]).with_default("x");
        assert_eq!(flag_usage(&foo, true, false, false, true), "--foo=FOO");

        let quiet = Argument::boolean_flag(&["--quiet", "-q"]);
        assert_eq!(flag_usage(&quiet, true, false, false, true), "--quiet");
    }

    #[test]
    fn test_flag_usage_inverted_names() {
        let enable = Argument::boolean_flag(&["--enable"]);
        assert_eq!(flag_usage(&enable, false, false, true, true), "--no-enable");
    }

    #[test]
    fn test_flag_usage_zero_or_one_brackets_metavar() {
        let level = Argument::flag(&["--level"]).with_nargs(NArgs::ZeroOrOne);
        assert_eq!(
            flag_usage(&level, false, false, false, true),
            "--level[=LEVEL]"
        );
    }

    #[test]
    fn test_flag_usage_markdown_bolds_names() {
        let quiet = Argument::boolean_flag(&["--quiet"]);
        assert_eq!(flag_usage(&quiet, false, true, false, true), "*--quiet*");
    }

    #[test]
    fn test_hidden_arg_renders_empty() {
        let hidden = Argument::boolean_flag(&["--secret"]).hide();
        assert_eq!(arg_usage(&hidden, UsageContext::new(), None), "");
        assert_eq!(
            arg_usage(
                &hidden,
                UsageContext {
                    hidden: true,
                    ..UsageContext::new()
                },
                None,
            ),
            "--secret"
        );
    }

    #[test]
    fn test_singleton_collapses_nested_groups() {
        let group = Argument::group(vec![Argument::group(vec![Argument::boolean_flag(&[
            "--only",
        ])])]);
        let single = singleton(&group).expect("singleton");
        assert_eq!(single.option_strings, vec!["--only"]);
    }

    #[test]
    fn test_singleton_promotes_required_on_a_copy() {
        let child = Argument::boolean_flag(&["--only"]);
        let group = Argument::group(vec![child]).with_required();

        let single = singleton(&group).expect("singleton");
        assert!(single.required);
        // The shared tree is untouched.
        assert!(!group.arguments()[0].required);
    }

    #[test]
    fn test_singleton_none_for_multiple_children() {
        let group = Argument::group(vec![
            Argument::boolean_flag(&["--a"]),
            Argument::boolean_flag(&["--b"]),
        ]);
        assert!(singleton(&group).is_none());
    }

    #[test]
    fn test_singleton_ignores_hidden_children() {
        let group = Argument::group(vec![
            Argument::boolean_flag(&["--shown"]),
            Argument::boolean_flag(&["--secret"]).hide(),
        ]);
        let single = singleton(&group).expect("singleton");
        assert_eq!(single.option_strings, vec!["--shown"]);
    }

    #[test]
    fn test_singleton_group_renders_like_its_child() {
        let flag = Argument::flag(&["--zone"]);
        let group = Argument::group(vec![flag.clone()]);
        assert_eq!(
            arg_usage(&group, UsageContext::new(), None),
            arg_usage(&flag, UsageContext::new(), None)
        );
    }

    #[test]
    fn test_mutex_group_uses_pipe_separator() {
        let group = Argument::mutex_group(vec![
            Argument::boolean_flag(&["--async"]).with_required(),
            Argument::boolean_flag(&["--sync"]).with_required(),
        ]);
        // A single joined fragment needs no brackets of its own.
        assert_eq!(
            arg_usage(&group, UsageContext::new(), None),
            "--async | --sync"
        );
    }

    #[test]
    fn test_required_mutex_group_uses_parentheses() {
        let group = Argument::mutex_group(vec![
            Argument::boolean_flag(&["--async"]).with_required(),
            Argument::boolean_flag(&["--sync"]).with_required(),
        ])
        .with_required();
        assert_eq!(
            arg_usage(&group, UsageContext::new(), None),
            "(--async | --sync)"
        );
    }

    #[test]
    fn test_required_and_optional_members_separated_by_colon() {
        let group = Argument::group(vec![
            Argument::flag(&["--zone"]).with_required(),
            Argument::boolean_flag(&["--quiet"]),
        ]);
        assert_eq!(
            arg_usage(&group, UsageContext::new(), None),
            "[--zone=ZONE : --quiet]"
        );
    }

    #[test]
    fn test_top_level_wraps_optional_members_individually() {
        let group = Argument::group(vec![
            Argument::flag(&["--zone"]).with_required(),
            Argument::boolean_flag(&["--quiet"]),
        ]);
        let usage = arg_usage(
            &group,
            UsageContext {
                top: true,
                ..UsageContext::new()
            },
            None,
        );
        assert_eq!(usage, "--zone=ZONE [--quiet]");
    }

    #[test]
    fn test_optional_positional_run_merges_brackets() {
        let group = Argument::group(vec![
            Argument::positional("first").optional(),
            Argument::positional("second").optional(),
        ]);
        let usage = arg_usage(
            &group,
            UsageContext {
                top: true,
                ..UsageContext::new()
            },
            None,
        );
        assert_eq!(usage, "[FIRST [SECOND]]");
    }

    #[test]
    fn test_remainder_renders_last() {
        let group = Argument::group(vec![
            Argument::positional("args").with_nargs(NArgs::Remainder).optional(),
            Argument::positional("name"),
            Argument::boolean_flag(&["--quiet"]),
        ]);
        let usage = arg_usage(
            &group,
            UsageContext {
                top: true,
                ..UsageContext::new()
            },
            None,
        );
        assert_eq!(usage, "NAME [--quiet] [-- ARGS ...]");
    }

    #[test]
    fn test_remainder_shared_accumulator_defers_output() {
        let group = Argument::group(vec![
            Argument::positional("args").with_nargs(NArgs::Remainder).optional(),
            Argument::positional("name"),
        ]);
        let mut remainder: Vec<String> = Vec::new();
        let usage = arg_usage(&group, UsageContext::new(), Some(&mut remainder));
        assert_eq!(usage, "NAME");
        assert_eq!(remainder, vec!["[-- ARGS ...]"]);
    }

    #[test]
    fn test_brief_top_level_collapses_optional_flags() {
        let group = Argument::group(vec![
            Argument::positional("name"),
            Argument::boolean_flag(&["--quiet"]),
            Argument::flag(&["--zone"]).with_required(),
        ]);
        let usage = arg_usage(
            &group,
            UsageContext {
                brief: true,
                top: true,
                optional: false,
                ..UsageContext::new()
            },
            None,
        );
        assert_eq!(usage, "NAME --zone=ZONE [optional flags]");
    }

    #[test]
    fn test_duplicate_fragments_suppressed() {
        let group = Argument::group(vec![
            Argument::boolean_flag(&["--quiet"]),
            Argument::boolean_flag(&["--quiet"]),
        ]);
        assert_eq!(arg_usage(&group, UsageContext::new(), None), "--quiet");
    }

    #[test]
    fn test_usage_sort_key_orders_no_variant_adjacent() {
        let mut names = vec!["--no-abc", "--abc", "--abd", "-z", "NAME"];
        names.sort_by(|a, b| usage_sort_key(a).cmp(&usage_sort_key(b)));
        assert_eq!(names, vec!["NAME", "--abc", "--no-abc", "--abd", "-z"]);
    }

    #[test]
    fn test_arg_sort_key_positionals_stable() {
        let first = Argument::positional("zeta");
        let second = Argument::positional("alpha");
        assert_eq!(arg_sort_key(&first), arg_sort_key(&second));

        let group = Argument::group(vec![first, second]);
        // Stable sort keeps the original relative order.
        let usage = arg_usage(
            &group,
            UsageContext {
                top: true,
                ..UsageContext::new()
            },
            None,
        );
        assert_eq!(usage, "ZETA ALPHA");
    }

    #[test]
    fn test_get_flags_collects_first_aliases() {
        let group = Argument::group(vec![
            Argument::boolean_flag(&["--verbose", "-v"]),
            Argument::flag(&["--zone"]).with_required(),
            Argument::boolean_flag(&["--global-thing"]).make_global(),
            Argument::boolean_flag(&["--secret"]).hide(),
        ]);

        let all = get_flags(&group, false);
        assert_eq!(all, vec!["--verbose", "--zone"]);

        let optional = get_flags(&group, true);
        assert_eq!(optional, vec!["--help", "--verbose"]);
    }

    #[test]
    fn test_get_flags_honors_show_inverted() {
        let mut flag = Argument::boolean_flag(&["--enable"]).with_default(true);
        flag.show_inverted = Some(Box::new(Argument::boolean_flag(&["--no-enable"])));
        let group = Argument::group(vec![flag]);

        assert_eq!(get_flags(&group, false), vec!["--no-enable"]);
    }
}
