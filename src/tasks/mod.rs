//! Project task runner.
//!
//! A fixed set of named operations, each resolved to exactly one external
//! program call (or the built-in artifact cleanup, or nothing at all):
//!
//! | Operation | Action |
//! |-----------|--------|
//! | `all`     | no-op |
//! | `test`    | `python setup.py test`, or the test-discovery binary |
//! | `nose`    | test-discovery binary (script variant only) |
//! | `flake8`  | style checker over `pyiconfinder tests setup.py` |
//! | `publish` | `python setup.py sdist upload` |
//! | `clean`   | remove `build`, `dist`, `*.egg*` |
//!
//! # Example
//!
//! ```
//! use iconfinder::config::{EnvSnapshot, TaskSettings};
//! use iconfinder::tasks::{plan, Action, Operation, TaskVariant, Toolchain};
//!
//! let env = EnvSnapshot::from_pairs([("FLAKE8", "flake8-3")]);
//! let toolchain = Toolchain::resolve(TaskVariant::Configurable, &TaskSettings::default(), &env);
//!
//! let action = plan(Operation::parse("flake8", toolchain.variant).unwrap(), &toolchain);
//! assert_eq!(action.to_string(), "flake8-3 pyiconfinder tests setup.py");
//! ```

pub mod clean;
pub mod operation;
pub mod plan;
pub mod process;
pub mod runner;
pub mod toolchain;
pub mod variant;

pub use clean::{clean, CleanReport};
pub use operation::{Operation, DEFAULT_OPERATION};
pub use plan::{plan, Action, Invocation, ARTIFACT_PATTERNS, LINT_PATHS};
pub use runner::{Executor, ProcessExecutor, TaskOutcome, TaskRunner};
pub use toolchain::{Tool, ToolSource, Toolchain, STYLE_CHECKER_ENV, TEST_RUNNER_ENV};
pub use variant::TaskVariant;
