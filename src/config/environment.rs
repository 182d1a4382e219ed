//! Snapshot of the process environment.
//!
//! Overrides are read from a captured snapshot rather than `std::env`
//! directly so resolution stays a pure function of its inputs.

use std::collections::HashMap;

/// Environment variables captured once at start-up.
///
/// # Example
///
/// ```
/// use iconfinder::config::EnvSnapshot;
///
/// let env = EnvSnapshot::from_pairs([("FLAKE8", "flake8-strict"), ("NOSETESTS", "")]);
/// assert_eq!(env.get("FLAKE8"), Some("flake8-strict"));
/// // Empty values count as unset.
/// assert_eq!(env.get("NOSETESTS"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build a snapshot from explicit pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of `key`, treating empty values as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let env = EnvSnapshot::default();
        assert_eq!(env.get("NOSETESTS"), None);
    }

    #[test]
    fn capture_sees_process_env() {
        let env = EnvSnapshot::capture();
        if let Ok(path) = std::env::var("PATH") {
            if !path.is_empty() {
                assert_eq!(env.get("PATH"), Some(path.as_str()));
            }
        }
    }
}
