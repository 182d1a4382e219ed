//! Project configuration.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Environment snapshot in [`environment`]
//! - API client settings assembly in [`client`]
//!
//! # Example
//!
//! ```
//! use iconfinder::config::load_config;
//! use iconfinder::tasks::TaskVariant;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("iconfinder.yml"), "tasks:\n  variant: script\n").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.tasks.variant, Some(TaskVariant::Script));
//! ```
//!
//! # Precedence
//!
//! Command-line flags override the environment, which overrides
//! `iconfinder.yml`, which overrides built-in defaults.

pub mod client;
pub mod environment;
pub mod loader;
pub mod schema;

pub use client::{client_config, CLIENT_ID_ENV, CLIENT_SECRET_ENV};
pub use environment::EnvSnapshot;
pub use loader::{
    find_project_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME,
};
pub use schema::{ClientSettings, ProjectConfig, TaskSettings};
