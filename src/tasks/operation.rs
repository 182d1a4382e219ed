//! Named operations.

use std::fmt;

use super::TaskVariant;
use crate::error::{IconfinderError, Result};

/// Operation run when no name is given.
pub const DEFAULT_OPERATION: &str = "all";

/// One entry of the fixed operation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// No-op default target.
    All,
    /// Run the test suite.
    Test,
    /// Run the test-discovery tool directly. Script variant only.
    Nose,
    /// Run the style checker over the package, tests and setup script.
    Flake8,
    /// Build a source distribution and upload it.
    Publish,
    /// Remove build artifacts.
    Clean,
}

impl Operation {
    /// Every operation, in listing order.
    pub const ALL: [Operation; 6] = [
        Operation::All,
        Operation::Test,
        Operation::Nose,
        Operation::Flake8,
        Operation::Publish,
        Operation::Clean,
    ];

    /// Resolve an operation name against the set defined for `variant`.
    ///
    /// Fails with [`IconfinderError::UnknownOperation`] for names outside the
    /// set, including `nose` in variants that do not define it.
    pub fn parse(name: &str, variant: TaskVariant) -> Result<Self> {
        let op = match name {
            "all" => Self::All,
            "test" => Self::Test,
            "nose" if variant.has_nose() => Self::Nose,
            "flake8" => Self::Flake8,
            "publish" => Self::Publish,
            "clean" => Self::Clean,
            _ => {
                return Err(IconfinderError::UnknownOperation {
                    name: name.to_string(),
                })
            }
        };
        Ok(op)
    }

    /// Operations available in `variant`, in listing order.
    pub fn available(variant: TaskVariant) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|op| *op != Self::Nose || variant.has_nose())
            .collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Test => "test",
            Self::Nose => "nose",
            Self::Flake8 => "flake8",
            Self::Publish => "publish",
            Self::Clean => "clean",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
