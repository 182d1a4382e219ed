//! Mapping from operation to action.

use std::fmt;

use super::{Operation, TaskVariant, Toolchain};

/// Package directory passed to the style checker.
pub const PACKAGE_DIR: &str = "pyiconfinder";

/// Tests directory passed to the style checker.
pub const TESTS_DIR: &str = "tests";

/// Packaging script.
pub const SETUP_SCRIPT: &str = "setup.py";

/// Paths handed to the style checker, in order.
pub const LINT_PATHS: [&str; 3] = [PACKAGE_DIR, TESTS_DIR, SETUP_SCRIPT];

/// Entries removed by `clean`, as shell globs relative to the project root.
pub const ARTIFACT_PATTERNS: [&str; 3] = ["build", "dist", "*.egg*"];

/// A single external program call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// What running an operation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Noop,
    Invoke(Invocation),
    Clean,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noop => f.write_str("(no-op)"),
            Self::Invoke(invocation) => invocation.fmt(f),
            Self::Clean => write!(f, "rm -rf {}", ARTIFACT_PATTERNS.join(" ")),
        }
    }
}

/// Resolve `op` to its action under `toolchain`.
pub fn plan(op: Operation, toolchain: &Toolchain) -> Action {
    match op {
        Operation::All => Action::Noop,
        Operation::Test => match toolchain.variant {
            TaskVariant::Script => {
                Action::Invoke(Invocation::new(&toolchain.python, [SETUP_SCRIPT, "test"]))
            }
            _ => Action::Invoke(Invocation::new(
                &toolchain.test_runner.program,
                Vec::<String>::new(),
            )),
        },
        Operation::Nose => Action::Invoke(Invocation::new(
            &toolchain.test_runner.program,
            Vec::<String>::new(),
        )),
        Operation::Flake8 => Action::Invoke(Invocation::new(
            &toolchain.style_checker.program,
            LINT_PATHS,
        )),
        Operation::Publish => Action::Invoke(Invocation::new(
            &toolchain.python,
            [SETUP_SCRIPT, "sdist", "upload"],
        )),
        Operation::Clean => Action::Clean,
    }
}
