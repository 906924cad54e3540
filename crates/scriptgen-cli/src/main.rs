//! scriptgen CLI - Create C# scripts from templates
//!
//! Commands:
//! - `scriptgen generate` - Create a script from a template
//! - `scriptgen namespace` - Show the namespace inferred for a folder
//! - `scriptgen templates` - List the available templates
//! - `scriptgen check-functions` - Validate a function specification file

use anyhow::Context;
use clap::{Parser, Subcommand};
use scriptgen_cli::generate::{self, GenerateRequest, Output};
use scriptgen_cli::settings::Settings;
use scriptgen_cli::{check, logging, namespace, templates};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scriptgen")]
#[command(author, version, about = "Create C# scripts from templates", long_about = None)]
struct Cli {
    /// Path to scriptgen.toml (default: ./scriptgen.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Built-in template directory, overriding the settings
    #[arg(long, global = true)]
    templates: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a script from a template
    Generate {
        /// Template name, e.g. MonoBehaviour
        #[arg(short, long)]
        template: String,

        /// Class name of the new script
        #[arg(short = 'n', long = "class")]
        class_name: Option<String>,

        /// Project relative folder of the new script
        #[arg(short, long, default_value = "Assets")]
        dir: String,

        /// Class a custom editor is made for ($TargetClassName)
        #[arg(long)]
        target: Option<String>,

        /// Extra replacement, repeatable (e.g. --set '$Author=Sam')
        #[arg(long = "set", value_name = "TOKEN=VALUE", value_parser = parse_substitution)]
        substitutions: Vec<(String, String)>,

        /// Include an optional function, remembered for this base class
        #[arg(long, value_name = "FUNCTION")]
        include: Vec<String>,

        /// Exclude a function, remembered for this base class
        #[arg(long, value_name = "FUNCTION")]
        exclude: Vec<String>,

        /// Write to this file instead of the project folder
        #[arg(short, long, conflicts_with = "stdout")]
        out: Option<PathBuf>,

        /// Print the script instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// Show the namespace inferred for a folder or file path
    Namespace {
        /// Project relative path, e.g. Assets/MyGame/Scripts/UI
        path: String,
    },

    /// List the available templates
    Templates,

    /// Validate a function specification file
    CheckFunctions {
        /// Path to a <BaseClass>.functions.txt file
        file: PathBuf,

        /// Apply the stored function choices of this base class
        #[arg(short, long)]
        base: Option<String>,
    },
}

fn parse_substitution(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((token, value)) if !token.is_empty() => Ok((token.to_string(), value.to_string())),
        _ => Err(format!("expected TOKEN=VALUE, got '{arg}'")),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(dir) = cli.templates {
        settings.templates.builtin_dir = dir;
    }

    match cli.command {
        Commands::Generate {
            template,
            class_name,
            dir,
            target,
            substitutions,
            include,
            exclude,
            out,
            stdout,
        } => {
            let request = GenerateRequest {
                template,
                class_name,
                directory: dir,
                target_class: target,
                substitutions,
                include,
                exclude,
            };
            let output = match (out, stdout) {
                (_, true) => Output::Stdout,
                (Some(path), false) => Output::File(path),
                (None, false) => Output::Project,
            };
            generate::run(&settings, &request, output)?;
        }
        Commands::Namespace { path } => {
            namespace::run(&settings, &path)?;
        }
        Commands::Templates => {
            templates::list(&settings)?;
        }
        Commands::CheckFunctions { file, base } => {
            check::run(&settings, &file, base.as_deref())?;
        }
    }

    Ok(())
}
