//! External process execution.

use crate::error::{IconfinderError, Result};
use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use std::time::{Duration, Instant};

use super::Invocation;

/// Result of running an external program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code. Signal deaths are reported as `128 + signal` on Unix.
    pub exit_code: i32,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program exited with status 0.
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,
}

/// Run `invocation` to completion with inherited stdio.
///
/// The program is executed directly, not through a shell, so arguments
/// reach it exactly as given.
pub fn execute(invocation: &Invocation, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    let status = cmd.status().map_err(|source| IconfinderError::SpawnFailed {
        program: invocation.program.clone(),
        source,
    })?;

    let duration = start.elapsed();
    tracing::debug!(
        "{} exited with {:?} after {:?}",
        invocation.program,
        status.code(),
        duration
    );

    Ok(CommandResult {
        exit_code: exit_code(status),
        duration,
        success: status.success(),
    })
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn sh(script: &str) -> Invocation {
        Invocation::new("sh", ["-c", script])
    }

    #[cfg(unix)]
    #[test]
    fn execute_successful_command() {
        let result = execute(&sh("exit 0"), &CommandOptions::default()).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[cfg(unix)]
    #[test]
    fn execute_propagates_exit_code() {
        let result = execute(&sh("exit 3"), &CommandOptions::default()).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 3);
    }

    #[cfg(unix)]
    #[test]
    fn signal_death_maps_to_128_plus_signal() {
        let result = execute(&sh("kill -TERM $$"), &CommandOptions::default()).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 128 + 15);
    }

    #[cfg(unix)]
    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker"), "").unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            ..Default::default()
        };

        let result = execute(&sh("test -f marker"), &options).unwrap();
        assert!(result.success);
    }

    #[test]
    fn missing_program_is_spawn_failure() {
        let inv = Invocation::new("iconfinder-no-such-tool", Vec::<String>::new());
        let err = execute(&inv, &CommandOptions::default()).unwrap_err();
        match err {
            IconfinderError::SpawnFailed { program, source } => {
                assert_eq!(program, "iconfinder-no-such-tool");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn command_result_tracks_duration() {
        let result = execute(&sh("true"), &CommandOptions::default()).unwrap();
        assert!(result.duration.as_millis() < 5000);
    }
}
