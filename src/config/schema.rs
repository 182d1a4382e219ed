//! Configuration schema for `iconfinder.yml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::tasks::TaskVariant;

/// Root of the project configuration file.
///
/// Every section is optional; a missing file is equivalent to
/// `ProjectConfig::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Task runner settings.
    pub tasks: TaskSettings,

    /// API client settings.
    pub client: ClientSettings,
}

/// Task runner settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskSettings {
    /// Which recipe variant to follow.
    pub variant: Option<TaskVariant>,

    /// Interpreter used for `setup.py` operations.
    pub python: Option<String>,

    /// Test-discovery binary. Honoured by the configurable variant only.
    pub test_runner: Option<String>,

    /// Style checker binary. Honoured by the configurable variant only.
    pub style_checker: Option<String>,
}

/// API client settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientSettings {
    pub api_base_url: Option<String>,
    pub site_base_url: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Extra PEM bundle trusted for both the API and the site.
    pub ca_bundle: Option<PathBuf>,

    /// Set to `false` to skip certificate verification entirely.
    pub verify_tls: Option<bool>,
}
