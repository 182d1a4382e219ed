//! iconfinder - project automation and API client for the Iconfinder
//! client library.
//!
//! The task runner maps a fixed set of operation names (`all`, `test`,
//! `nose`, `flake8`, `publish`, `clean`) to exactly one external tool
//! invocation each and propagates the tool's exit status. The API client
//! talks to the Iconfinder REST API.
//!
//! # Modules
//!
//! - [`api`] - Iconfinder API client, models and HTTP date helpers
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `iconfinder.yml` loading and environment overrides
//! - [`error`] - Error types and result aliases
//! - [`tasks`] - Operations, tool resolution and execution
//!
//! # Example
//!
//! ```
//! use iconfinder::config::{EnvSnapshot, TaskSettings};
//! use iconfinder::tasks::{plan, Operation, TaskVariant, Toolchain};
//!
//! let toolchain = Toolchain::resolve(
//!     TaskVariant::Script,
//!     &TaskSettings::default(),
//!     &EnvSnapshot::default(),
//! );
//! let action = plan(Operation::Publish, &toolchain);
//! assert_eq!(action.to_string(), "python setup.py sdist upload");
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod tasks;

pub use error::{IconfinderError, Result};
