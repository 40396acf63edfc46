//! CLI definitions and entry point

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use super::commands;
use roster::config::{DEFAULT_CONFIG_FILE, RosterConfig};
use roster::output::OutputMode;

/// roster - Collect student records and save them as a sorted list
#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Collect student records and save them as a sorted list",
    long_about = "Prompts for each student's name, address and GPA until 'done' is entered,\n\
                  then saves the records sorted by name, one per line.\n\n\
                  Running without a subcommand is the same as 'roster collect'."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file [default: roster.toml if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub collect: CollectArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options for collecting and saving a list
#[derive(Args, Debug, Clone, Default)]
pub struct CollectArgs {
    /// File to save the sorted list to [default: StudentList.txt]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exit with an error if the list cannot be saved
    #[arg(long)]
    pub strict: bool,
}

impl CollectArgs {
    /// Fill options not given after `collect` from those given before it
    #[must_use]
    pub fn or(self, outer: &Self) -> Self {
        Self {
            output: self.output.or_else(|| outer.output.clone()),
            strict: self.strict || outer.strict,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enter students interactively and save them sorted by name
    Collect(CollectArgs),

    /// Print a previously saved list
    Show {
        /// Saved list to read [default: configured output]
        path: Option<PathBuf>,
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
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Command::Collect(args)) => {
            commands::collect(&args.or(&cli.collect), &config, output_mode)
        },
        Some(Command::Show { path }) => commands::show(path.as_deref(), &config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": roster::VERSION
                    })
                );
            } else {
                println!("roster v{}", roster::VERSION);
            }
            Ok(())
        },
        None => commands::collect(&cli.collect, &config, output_mode),
    }
}

/// An explicit `--config` must exist; the default file is optional
fn load_config(explicit: Option<&Path>) -> anyhow::Result<RosterConfig> {
    match explicit {
        Some(path) => RosterConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(RosterConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?),
    }
}
