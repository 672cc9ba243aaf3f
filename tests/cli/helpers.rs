use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Stub that echoes its input unchanged.
pub const ECHO: &str = "cat";
/// Stub that uppercases its input.
pub const UPPERCASE: &str = "tr '[:lower:]' '[:upper:]'";
/// Stub that prints one argument per line and ignores its input.
pub const PRINT_ARGS: &str = "cat > /dev/null\nprintf '%s\\n' \"$@\"";

/// A scratch project directory with its own HOME and XDG config dir, so the
/// user's real configuration never leaks into a test.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let project = Self {
            dir: TempDir::new().unwrap(),
        };
        fs::create_dir_all(project.home()).unwrap();
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn home(&self) -> PathBuf {
        self.path().join("home")
    }

    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path().join(rel)).unwrap()
    }

    /// Write an executable shell script `dir/name` running `body`.
    pub fn stub(&self, dir: &str, name: &str, body: &str) -> PathBuf {
        let path = self.write(&format!("{dir}/{name}"), &format!("#!/bin/sh\n{body}\n"));
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Write `.formatrelay.toml` at the project root.
    pub fn config(&self, toml: &str) -> PathBuf {
        self.write(".formatrelay.toml", toml)
    }

    /// Config pointing `formatter` at the `tools` directory.
    pub fn tools_config(&self, formatter: &str, extra: &str) -> PathBuf {
        self.config(&format!(
            "[formatters.{formatter}]\npath = \"{}\"\n{extra}",
            self.path().join("tools").display()
        ))
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("formatrelay");
        cmd.current_dir(self.path())
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env_remove("RUST_LOG");
        cmd
    }

    /// Like `cmd`, but with an empty search path.
    pub fn isolated_cmd(&self) -> Command {
        let empty = self.path().join("empty-path");
        fs::create_dir_all(&empty).unwrap();
        let mut cmd = self.cmd();
        cmd.env("PATH", empty);
        cmd
    }
}
