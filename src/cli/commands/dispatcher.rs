//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::config::EnvSnapshot;
use crate::error::Result;

use super::context::CommandContext;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing any report to `out`.
    ///
    /// External tools inherit the process stdio and do not go through `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Result carrying a child process exit code.
    pub fn from_exit_code(exit_code: i32) -> Self {
        if exit_code == 0 {
            Self::success()
        } else {
            Self::failure(exit_code)
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    env: EnvSnapshot,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            env: EnvSnapshot::capture(),
        }
    }

    /// Replace the captured process environment.
    pub fn with_env(mut self, env: EnvSnapshot) -> Self {
        self.env = env;
        self
    }

    fn context(&self, cli: &Cli) -> Result<CommandContext> {
        CommandContext::load(
            &self.project_root,
            cli.config.as_deref(),
            cli.variant,
            self.env.clone(),
        )
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Run(args)) => {
                let cmd = super::run::RunCommand::new(self.context(cli)?, args.clone());
                cmd.execute(out)
            }
            Some(Commands::List) => {
                let cmd = super::list::ListCommand::new(self.context(cli)?);
                cmd.execute(out)
            }
            Some(Commands::License(args)) => {
                let client = self.context(cli)?.client()?;
                let cmd = super::api::LicenseCommand::new(client, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Categories(args)) => {
                let client = self.context(cli)?.client()?;
                let cmd = super::api::CategoriesCommand::new(client, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Styles(args)) => {
                let client = self.context(cli)?.client()?;
                let cmd = super::api::StylesCommand::new(client, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(out)
            }
            None => {
                // Default to `run all`
                let cmd = super::run::RunCommand::new(self.context(cli)?, RunArgs::default());
                cmd.execute(out)
            }
        }
    }
}
