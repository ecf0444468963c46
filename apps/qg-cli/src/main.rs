//! # qg-cli
//!
//! Command-line interface for Qualgate.
//!
//! - `qg configure` — interactively add task defaults to qualgate.yml
//! - `qg tasks list` — list the tasks that can be configured
//! - `qg tasks show <name>` — print a task's default options as YAML

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use qg_tasks::TaskConfigResolver;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "QG_LOG";

/// Qualgate CLI — configure quality gate tasks.
#[derive(Parser)]
#[command(name = "qg", version, about)]
struct Cli {
    /// Project root directory (defaults to current directory).
    #[arg(long, default_value = ".", global = true)]
    project_root: PathBuf,

    /// Configuration file to edit (defaults to qualgate.yml in the project root).
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Never ask questions.
    #[arg(short = 'n', long, global = true)]
    no_interaction: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add tasks with their default options to the configuration file.
    Configure {
        /// Do nothing when the configuration file already exists.
        #[arg(long)]
        skip_if_exists: bool,
    },
    /// Inspect the available tasks.
    Tasks {
        #[command(subcommand)]
        command: commands::tasks::TaskCommands,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interfere with prompts on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let project_root = cli.project_root.canonicalize().unwrap_or(cli.project_root);
    let registry = TaskConfigResolver::builtin();

    match &cli.command {
        Commands::Configure { skip_if_exists } => {
            let code = commands::configure::execute(
                &project_root,
                cli.config.as_deref(),
                cli.no_interaction,
                *skip_if_exists,
                &registry,
            )?;
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Commands::Tasks { command } => commands::tasks::execute(command, &registry),
    }
}
