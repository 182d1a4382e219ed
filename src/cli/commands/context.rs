//! State shared by commands that need the project configuration.

use std::path::{Path, PathBuf};

use crate::api::Client;
use crate::config::{client_config, load_config, EnvSnapshot, ProjectConfig};
use crate::error::Result;
use crate::tasks::{TaskVariant, Toolchain};

/// Loaded configuration plus the choices derived from it.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub project_root: PathBuf,
    pub config: ProjectConfig,
    pub variant: TaskVariant,
    pub env: EnvSnapshot,
}

impl CommandContext {
    /// Load the project configuration.
    ///
    /// `variant` comes from the command line (or its environment variable)
    /// and wins over `tasks.variant` in the file.
    pub fn load(
        project_root: &Path,
        config_path: Option<&Path>,
        variant: Option<TaskVariant>,
        env: EnvSnapshot,
    ) -> Result<Self> {
        let config = load_config(project_root, config_path)?;
        let variant = variant.or(config.tasks.variant).unwrap_or_default();
        tracing::debug!("Using {} variant", variant);

        Ok(Self {
            project_root: project_root.to_path_buf(),
            config,
            variant,
            env,
        })
    }

    /// Binaries for the active variant.
    pub fn toolchain(&self) -> Toolchain {
        Toolchain::resolve(self.variant, &self.config.tasks, &self.env)
    }

    /// API client from the `client` section and the environment.
    pub fn client(&self) -> Result<Client> {
        Ok(Client::new(client_config(&self.config.client, &self.env))?)
    }
}
