//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::tasks::{TaskVariant, DEFAULT_OPERATION};

/// Project automation for the Iconfinder client library.
#[derive(Debug, Parser)]
#[command(name = "iconfinder")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides <project>/iconfinder.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Recipe variant deciding which binaries the operations run
    #[arg(long, global = true, value_enum, env = "ICONFINDER_TASK_VARIANT")]
    pub variant: Option<TaskVariant>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a project operation (default if no command specified)
    Run(RunArgs),

    /// List operations and the commands they run
    List,

    /// Fetch a license from the Iconfinder API
    License(LicenseArgs),

    /// List icon categories
    Categories(PageArgs),

    /// List icon styles
    Styles(PageArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Operation to run: all, test, nose, flake8, publish, clean
    #[arg(default_value = DEFAULT_OPERATION)]
    pub operation: String,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            operation: DEFAULT_OPERATION.to_string(),
        }
    }
}

/// Arguments for the `license` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LicenseArgs {
    /// License ID
    pub id: u64,
}

/// Paging arguments for list commands.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PageArgs {
    /// Maximum number of entries to return
    #[arg(long)]
    pub count: Option<u32>,

    /// Identifier of the last entry of the previous page
    #[arg(long)]
    pub after: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
