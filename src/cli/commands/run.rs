//! Run command implementation.
//!
//! The `iconfinder run` command executes one project operation. The child's
//! output is the only output; its exit code becomes ours.

use std::io::Write;

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::tasks::TaskRunner;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    context: CommandContext,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(context: CommandContext, args: RunArgs) -> Self {
        Self { context, args }
    }
}

impl Command for RunCommand {
    fn execute(&self, _out: &mut dyn Write) -> Result<CommandResult> {
        let runner = TaskRunner::new(self.context.toolchain(), self.context.project_root.clone());
        let outcome = runner.run_named(&self.args.operation)?;

        tracing::debug!(
            "{} finished with exit code {}",
            outcome.operation,
            outcome.exit_code
        );
        Ok(CommandResult::from_exit_code(outcome.exit_code))
    }
}
