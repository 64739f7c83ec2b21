use std::fs;
use std::path::{Path, PathBuf};

use arg_usage_core::{Argument, validate_tree};
use arg_usage_render::compose::{CommandNode, get_usage};
use arg_usage_render::details::arg_details;
use arg_usage_render::sections::arg_sections;
use arg_usage_render::suggest::TextSuggester;
use arg_usage_render::usage::{UsageContext, arg_usage};
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

/// A command description file: the node's position in the CLI tree plus its
/// argument tree.
#[derive(Debug, Deserialize)]
struct CommandFile {
    #[serde(flatten)]
    node: CommandNode,
    arguments: Argument,
}

#[derive(Debug, Parser)]
#[command(name = "arg-usage")]
#[command(about = "Render usage and help text from declarative argument trees")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the full usage block for a command description file.
    Usage(UsageArgs),
    /// Print the help sections for a command description file.
    Sections(SectionsArgs),
    /// Suggest the closest choice for a mistyped token.
    Suggest(SuggestArgs),
}

#[derive(Debug, Args)]
struct UsageArgs {
    /// Command description file (.json or .yaml).
    file: PathBuf,
}

#[derive(Debug, Args)]
struct SectionsArgs {
    /// Command description file (.json or .yaml).
    file: PathBuf,
    /// Treat the command as the CLI root (global flags stay inline).
    #[arg(long)]
    root: bool,
}

#[derive(Debug, Args)]
struct SuggestArgs {
    /// The mistyped token.
    token: String,
    /// Valid choices to match against.
    #[arg(required = true)]
    choices: Vec<String>,
    /// Also match common command-verb synonyms (create/add, delete/remove,
    /// describe/get, patch/update).
    #[arg(long)]
    synonyms: bool,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Usage(args) => run_usage(args),
        Command::Sections(args) => run_sections(args),
        Command::Suggest(args) => run_suggest(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_usage(args: UsageArgs) -> Result<(), String> {
    let mut file = load_command_file(&args.file)?;
    print!("{}", get_usage(&mut file.node, &file.arguments));
    Ok(())
}

fn run_sections(args: SectionsArgs) -> Result<(), String> {
    let file = load_command_file(&args.file)?;
    let (sections, global_flags) = arg_sections(file.arguments.arguments(), args.root);

    for section in &sections {
        println!("{}", section.heading);
        for arg in &section.args {
            let usage = arg_usage(
                arg,
                UsageContext {
                    markdown: true,
                    ..UsageContext::new()
                },
                None,
            );
            println!("  {usage}");
            let details = arg_details(arg);
            if !details.is_empty() {
                for line in details.lines() {
                    println!("      {line}");
                }
            }
        }
        println!();
    }

    if !global_flags.is_empty() {
        println!("GLOBAL FLAGS");
        for flag in &global_flags {
            println!("  {flag}");
        }
    }
    Ok(())
}

fn run_suggest(args: SuggestArgs) -> Result<(), String> {
    let mut suggester = TextSuggester::with_choices(args.choices.iter().map(String::as_str));
    if args.synonyms {
        suggester.add_synonyms();
    }
    match suggester.suggestion(&args.token) {
        Some(choice) => println!("{choice}"),
        None => println!("no suggestion"),
    }
    Ok(())
}

fn load_command_file(path: &Path) -> Result<CommandFile, String> {
    let contents = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let file: CommandFile = match extension {
        "json" => serde_json::from_str(&contents)
            .map_err(|err| format!("Invalid JSON in '{}': {err}", path.display()))?,
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .map_err(|err| format!("Invalid YAML in '{}': {err}", path.display()))?,
        other => {
            return Err(format!(
                "Unsupported file extension '{other}' (expected .json, .yaml, or .yml)"
            ));
        }
    };

    let errors = validate_tree(&file.arguments);
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(format!(
            "Invalid argument tree in '{}': {}",
            path.display(),
            messages.join("; ")
        ));
    }
    Ok(file)
}
