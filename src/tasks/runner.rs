//! Operation dispatch.

use std::path::{Path, PathBuf};

use super::clean::clean;
use super::plan::{plan, Action, Invocation};
use super::process::{self, CommandOptions};
use super::{Operation, Toolchain};
use crate::error::Result;

/// Runs external programs on behalf of the [`TaskRunner`].
pub trait Executor {
    /// Run `invocation` in `cwd` and return its exit code.
    fn execute(&self, invocation: &Invocation, cwd: &Path) -> Result<i32>;
}

/// Executes programs as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    fn execute(&self, invocation: &Invocation, cwd: &Path) -> Result<i32> {
        let options = CommandOptions {
            cwd: Some(cwd.to_path_buf()),
            ..Default::default()
        };
        Ok(process::execute(invocation, &options)?.exit_code)
    }
}

/// Outcome of a single operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutcome {
    pub operation: Operation,

    /// Exit code the runner should terminate with.
    pub exit_code: i32,

    /// Paths removed, for `clean`.
    pub removed: Vec<PathBuf>,
}

impl TaskOutcome {
    fn new(operation: Operation, exit_code: i32) -> Self {
        Self {
            operation,
            exit_code,
            removed: Vec::new(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Resolves operation names and runs them in the project root.
pub struct TaskRunner<E = ProcessExecutor> {
    toolchain: Toolchain,
    project_root: PathBuf,
    executor: E,
}

impl TaskRunner<ProcessExecutor> {
    /// Create a runner that spawns real processes.
    pub fn new(toolchain: Toolchain, project_root: impl Into<PathBuf>) -> Self {
        Self::with_executor(toolchain, project_root, ProcessExecutor)
    }
}

impl<E: Executor> TaskRunner<E> {
    pub fn with_executor(toolchain: Toolchain, project_root: impl Into<PathBuf>, executor: E) -> Self {
        Self {
            toolchain,
            project_root: project_root.into(),
            executor,
        }
    }

    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Parse `name` and run it. Unknown names fail before anything runs.
    pub fn run_named(&self, name: &str) -> Result<TaskOutcome> {
        let op = Operation::parse(name, self.toolchain.variant)?;
        self.run(op)
    }

    /// Run `op` once. No retries; the child's exit code is passed through.
    pub fn run(&self, op: Operation) -> Result<TaskOutcome> {
        match plan(op, &self.toolchain) {
            Action::Noop => Ok(TaskOutcome::new(op, 0)),
            Action::Invoke(invocation) => {
                tracing::debug!("{}: {}", op, invocation);
                let code = self.executor.execute(&invocation, &self.project_root)?;
                Ok(TaskOutcome::new(op, code))
            }
            Action::Clean => {
                let report = clean(&self.project_root)?;
                Ok(TaskOutcome {
                    removed: report.removed,
                    ..TaskOutcome::new(op, 0)
                })
            }
        }
    }
}
