//! Resolution of the external tool binaries.

use std::fmt;

use super::TaskVariant;
use crate::config::{EnvSnapshot, TaskSettings};

/// Environment variable naming the test-discovery binary.
pub const TEST_RUNNER_ENV: &str = "NOSETESTS";

/// Environment variable naming the style checker binary.
pub const STYLE_CHECKER_ENV: &str = "FLAKE8";

pub const DEFAULT_PYTHON: &str = "python";
pub const DEFAULT_TEST_RUNNER: &str = "nosetests";
pub const DEFAULT_STYLE_CHECKER: &str = "flake8";

/// Where a tool's binary name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolSource {
    Default,
    ConfigFile,
    Environment(&'static str),
}

impl fmt::Display for ToolSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::ConfigFile => f.write_str("iconfinder.yml"),
            Self::Environment(var) => write!(f, "${var}"),
        }
    }
}

/// A resolved binary name plus its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub program: String,
    pub source: ToolSource,
}

impl Tool {
    fn default_named(program: &str) -> Self {
        Self {
            program: program.to_string(),
            source: ToolSource::Default,
        }
    }
}

/// The binaries every operation may invoke, fixed for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub variant: TaskVariant,
    pub python: String,
    pub test_runner: Tool,
    pub style_checker: Tool,
}

impl Toolchain {
    /// Resolve binaries for `variant`.
    ///
    /// Only the configurable variant consults overrides, with the
    /// environment taking precedence over the config file.
    pub fn resolve(variant: TaskVariant, settings: &TaskSettings, env: &EnvSnapshot) -> Self {
        let python = settings
            .python
            .clone()
            .unwrap_or_else(|| DEFAULT_PYTHON.to_string());

        if !variant.allows_overrides() {
            if settings.test_runner.is_some() || settings.style_checker.is_some() {
                tracing::warn!(
                    "test_runner/style_checker in iconfinder.yml are ignored by the {} variant",
                    variant
                );
            }
            return Self {
                variant,
                python,
                test_runner: Tool::default_named(DEFAULT_TEST_RUNNER),
                style_checker: Tool::default_named(DEFAULT_STYLE_CHECKER),
            };
        }

        Self {
            variant,
            python,
            test_runner: overridable(
                TEST_RUNNER_ENV,
                settings.test_runner.as_deref(),
                DEFAULT_TEST_RUNNER,
                env,
            ),
            style_checker: overridable(
                STYLE_CHECKER_ENV,
                settings.style_checker.as_deref(),
                DEFAULT_STYLE_CHECKER,
                env,
            ),
        }
    }
}

fn overridable(
    var: &'static str,
    configured: Option<&str>,
    default: &str,
    env: &EnvSnapshot,
) -> Tool {
    if let Some(program) = env.get(var) {
        return Tool {
            program: program.to_string(),
            source: ToolSource::Environment(var),
        };
    }
    match configured.filter(|p| !p.is_empty()) {
        Some(program) => Tool {
            program: program.to_string(),
            source: ToolSource::ConfigFile,
        },
        None => Tool::default_named(default),
    }
}
