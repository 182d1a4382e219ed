//! List command implementation.
//!
//! The `iconfinder list` command shows every operation of the active variant
//! and the command line it would run.

use std::io::Write;

use crate::error::Result;
use crate::tasks::{plan, Operation, Tool, Toolchain};

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    context: CommandContext,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }
}

/// The overridable tool an operation runs, if any.
fn overridable_tool(op: Operation, toolchain: &Toolchain) -> Option<&Tool> {
    if !toolchain.variant.allows_overrides() {
        return None;
    }
    match op {
        Operation::Test | Operation::Nose => Some(&toolchain.test_runner),
        Operation::Flake8 => Some(&toolchain.style_checker),
        _ => None,
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let toolchain = self.context.toolchain();

        writeln!(out, "Operations ({} variant):", toolchain.variant)?;
        for op in Operation::available(toolchain.variant) {
            let action = plan(op, &toolchain);
            match overridable_tool(op, &toolchain) {
                Some(tool) => writeln!(out, "  {:<8} {}  [{}]", op.name(), action, tool.source)?,
                None => writeln!(out, "  {:<8} {}", op.name(), action)?,
            }
        }

        Ok(CommandResult::success())
    }
}
