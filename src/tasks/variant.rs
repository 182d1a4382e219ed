//! Task runner variants.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which binary the `test` operation runs.
///
/// The variants differ only in how the test command is chosen; every other
/// operation is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskVariant {
    /// `test` runs the packaging tool's test entry point (`python setup.py test`).
    /// The test-discovery tool is still reachable through `nose`.
    Script,
    /// `test` runs the test-discovery binary directly.
    Discovery,
    /// Like `Discovery`, but the test and lint binaries can be overridden
    /// through `NOSETESTS` and `FLAKE8`.
    #[default]
    Configurable,
}

impl TaskVariant {
    /// Whether tool binaries may be overridden by the environment or config file.
    pub fn allows_overrides(&self) -> bool {
        matches!(self, Self::Configurable)
    }

    /// Whether the standalone `nose` operation exists in this variant.
    pub fn has_nose(&self) -> bool {
        matches!(self, Self::Script)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Discovery => "discovery",
            Self::Configurable => "configurable",
        }
    }
}

impl fmt::Display for TaskVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
