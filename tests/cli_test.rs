//! Integration tests for the iconfinder binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// The binary with every override variable cleared.
fn iconfinder(project: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("iconfinder"));
    cmd.current_dir(project)
        .env_remove("NOSETESTS")
        .env_remove("FLAKE8")
        .env_remove("ICONFINDER_TASK_VARIANT")
        .env_remove("ICONFINDER_CLIENT_ID")
        .env_remove("ICONFINDER_CLIENT_SECRET")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("iconfinder"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Project automation"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("iconfinder"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_runs_all() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir(temp.path().join("build"))?;

    iconfinder(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert!(temp.path().join("build").exists());
    Ok(())
}

#[test]
fn cli_run_defaults_to_all() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    iconfinder(temp.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_unknown_operation_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    iconfinder(temp.path())
        .args(["run", "deploy"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown operation: deploy"));
    Ok(())
}

#[test]
fn cli_nose_unknown_in_default_variant() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    iconfinder(temp.path())
        .args(["run", "nose"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown operation: nose"));
    Ok(())
}

#[test]
fn cli_clean_removes_artifacts() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join("build/lib"))?;
    fs::create_dir(temp.path().join("dist"))?;
    fs::create_dir(temp.path().join("foo.egg-info"))?;
    fs::create_dir(temp.path().join("pyiconfinder"))?;
    fs::write(temp.path().join("setup.py"), "")?;

    iconfinder(temp.path())
        .args(["run", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(!temp.path().join("build").exists());
    assert!(!temp.path().join("dist").exists());
    assert!(!temp.path().join("foo.egg-info").exists());
    assert!(temp.path().join("pyiconfinder").exists());
    assert!(temp.path().join("setup.py").exists());

    // Idempotent
    iconfinder(temp.path())
        .args(["run", "clean"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn cli_clean_in_project_dir() -> Result<(), Box<dyn std::error::Error>> {
    let cwd = TempDir::new()?;
    let project = TempDir::new()?;
    fs::create_dir(project.path().join("dist"))?;
    fs::create_dir(cwd.path().join("dist"))?;

    iconfinder(cwd.path())
        .arg("--project")
        .arg(project.path())
        .args(["run", "clean"])
        .assert()
        .success();

    assert!(!project.path().join("dist").exists());
    assert!(cwd.path().join("dist").exists());
    Ok(())
}

#[test]
fn cli_missing_tool_exits_127() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    iconfinder(temp.path())
        .env("FLAKE8", temp.path().join("no-such-flake8"))
        .args(["run", "flake8"])
        .assert()
        .code(127)
        .stderr(predicate::str::contains("Failed to run"));
    Ok(())
}

#[test]
fn cli_broken_config_exits_1() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("iconfinder.yml"), "tasks:\n  variant: make\n")?;
    iconfinder(temp.path())
        .args(["run", "all"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_list_shows_commands() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    iconfinder(temp.path())
        .env("FLAKE8", "flake8-3")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operations (configurable variant):"))
        .stdout(predicate::str::contains(
            "flake8-3 pyiconfinder tests setup.py  [$FLAKE8]",
        ))
        .stdout(predicate::str::contains("python setup.py sdist upload"));
    Ok(())
}

#[test]
fn cli_list_honours_variant_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    iconfinder(temp.path())
        .env("ICONFINDER_TASK_VARIANT", "script")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operations (script variant):"))
        .stdout(predicate::str::contains("python setup.py test"));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    iconfinder(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("iconfinder"));
    Ok(())
}

#[cfg(unix)]
mod stub_tools {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    /// Write an executable that records its arguments to `<name>.args` and
    /// exits with `code`.
    fn stub(dir: &Path, name: &str, code: i32) -> PathBuf {
        let path = dir.join(name);
        let record = dir.join(format!("{name}.args"));
        fs::write(
            &path,
            format!(
                "#!/bin/sh\necho \"$@\" > '{}'\nexit {}\n",
                record.display(),
                code
            ),
        )
        .unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn recorded(dir: &Path, name: &str) -> Option<String> {
        fs::read_to_string(dir.join(format!("{name}.args")))
            .ok()
            .map(|s| s.trim_end().to_string())
    }

    #[test]
    fn test_uses_nosetests_override() -> Result<(), Box<dyn std::error::Error>> {
        let project = TempDir::new()?;
        let bin = TempDir::new()?;
        let tool = stub(bin.path(), "my-nose", 3);

        iconfinder(project.path())
            .env("NOSETESTS", &tool)
            .args(["run", "test"])
            .assert()
            .code(3)
            .stdout(predicate::str::is_empty());

        assert_eq!(recorded(bin.path(), "my-nose").as_deref(), Some(""));
        Ok(())
    }

    #[test]
    fn flake8_passes_fixed_paths() -> Result<(), Box<dyn std::error::Error>> {
        let project = TempDir::new()?;
        let bin = TempDir::new()?;
        let tool = stub(bin.path(), "my-flake8", 3);

        iconfinder(project.path())
            .env("FLAKE8", &tool)
            .args(["run", "flake8"])
            .assert()
            .code(3);

        assert_eq!(
            recorded(bin.path(), "my-flake8").as_deref(),
            Some("pyiconfinder tests setup.py")
        );
        Ok(())
    }

    #[test]
    fn successful_tool_exits_0() -> Result<(), Box<dyn std::error::Error>> {
        let project = TempDir::new()?;
        let bin = TempDir::new()?;
        let tool = stub(bin.path(), "my-flake8", 0);

        iconfinder(project.path())
            .env("FLAKE8", &tool)
            .args(["run", "flake8"])
            .assert()
            .success();
        Ok(())
    }

    #[test]
    fn config_file_overrides_are_used() -> Result<(), Box<dyn std::error::Error>> {
        let project = TempDir::new()?;
        let bin = TempDir::new()?;
        let tool = stub(bin.path(), "file-nose", 5);
        fs::write(
            project.path().join("iconfinder.yml"),
            format!("tasks:\n  test_runner: '{}'\n", tool.display()),
        )?;

        iconfinder(project.path())
            .args(["run", "test"])
            .assert()
            .code(5);
        assert!(recorded(bin.path(), "file-nose").is_some());
        Ok(())
    }

    #[test]
    fn discovery_variant_ignores_overrides() -> Result<(), Box<dyn std::error::Error>> {
        let project = TempDir::new()?;
        let bin = TempDir::new()?;
        let override_tool = stub(bin.path(), "my-nose", 3);
        stub(bin.path(), "nosetests", 6);

        iconfinder(project.path())
            .env("PATH", bin.path())
            .env("NOSETESTS", &override_tool)
            .args(["--variant", "discovery", "run", "test"])
            .assert()
            .code(6);

        assert!(recorded(bin.path(), "my-nose").is_none());
        assert_eq!(recorded(bin.path(), "nosetests").as_deref(), Some(""));
        Ok(())
    }

    #[test]
    fn script_variant_uses_setup_py() -> Result<(), Box<dyn std::error::Error>> {
        let project = TempDir::new()?;
        let bin = TempDir::new()?;
        let python = stub(bin.path(), "fake-python", 7);
        fs::write(
            project.path().join("iconfinder.yml"),
            format!(
                "tasks:\n  variant: script\n  python: '{}'\n",
                python.display()
            ),
        )?;

        iconfinder(project.path())
            .args(["run", "test"])
            .assert()
            .code(7);
        assert_eq!(
            recorded(bin.path(), "fake-python").as_deref(),
            Some("setup.py test")
        );

        iconfinder(project.path())
            .args(["run", "publish"])
            .assert()
            .code(7);
        assert_eq!(
            recorded(bin.path(), "fake-python").as_deref(),
            Some("setup.py sdist upload")
        );
        Ok(())
    }

    #[test]
    fn script_variant_nose() -> Result<(), Box<dyn std::error::Error>> {
        let project = TempDir::new()?;
        let bin = TempDir::new()?;
        stub(bin.path(), "nosetests", 0);

        iconfinder(project.path())
            .env("PATH", bin.path())
            .args(["--variant", "script", "run", "nose"])
            .assert()
            .success();
        assert_eq!(recorded(bin.path(), "nosetests").as_deref(), Some(""));
        Ok(())
    }

    #[test]
    fn signal_death_maps_to_128_plus_signal() -> Result<(), Box<dyn std::error::Error>> {
        let project = TempDir::new()?;
        let bin = TempDir::new()?;
        let tool = bin.path().join("dies");
        fs::write(&tool, "#!/bin/sh\nkill -TERM $$\n")?;
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755))?;

        iconfinder(project.path())
            .env("FLAKE8", &tool)
            .args(["run", "flake8"])
            .assert()
            .code(143);
        Ok(())
    }
}
