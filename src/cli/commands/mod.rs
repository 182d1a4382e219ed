//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that need the project
//! configuration receive a [`CommandContext`]; API commands receive a ready
//! [`Client`](crate::api::Client).

pub mod api;
pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod list;
pub mod run;

pub use context::CommandContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
