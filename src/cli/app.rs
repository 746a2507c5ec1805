//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use tagcheck::output::OutputMode;

/// tagcheck - Find unbalanced HTML tags in Markdown notes
#[derive(Parser, Debug)]
#[command(
    name = "tagcheck",
    version,
    about = "Find unbalanced HTML tags in Markdown notes",
    long_about = "Check Markdown files for HTML start tags without a matching end tag.\n\n\
                  Tags inside fenced code blocks are ignored. Void elements such as\n\
                  <img> and <br> never need closing. Exits with status 1 when any\n\
                  file has problems."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use this config file instead of searching for .tagcheck.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a Markdown file or a directory of Markdown files
    Check {
        /// File or directory to check (defaults to the configured target)
        path: Option<PathBuf>,

        /// List every tag found in each file
        #[arg(long)]
        tags: bool,
    },

    /// Write a default .tagcheck.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    if cli.no_color || cli.json {
        colored::control::set_override(false);
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Check { path, tags }) => {
            commands::check(path.as_deref(), tags, cli.config.as_deref(), output_mode)
        },
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("tagcheck v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => commands::check(None, false, cli.config.as_deref(), output_mode),
    }
}
