#![allow(dead_code, clippy::unwrap_used, clippy::panic)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use tempfile::TempDir;

pub const DONE: &str = "[\u{f42e} DONE]";
pub const FAIL: &str = "[\u{f068c} FAIL]";
pub const SKIP: &str = "[\u{f517} SKIP]";

/// A temporary home directory and repository
pub struct Sandbox {
    pub home: TempDir,
    pub repo: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
            repo: TempDir::new().unwrap(),
        }
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    pub fn repo(&self) -> &Path {
        self.repo.path()
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home.path().join(relative)
    }

    pub fn repo_path(&self, relative: &str) -> PathBuf {
        self.repo.path().join(relative)
    }

    pub fn write_fragments(&self, content: &str) {
        fs::write(self.repo_path("fragments.toml"), content).unwrap();
    }

    pub fn write_home(&self, relative: &str, content: &str) {
        write(&self.home_path(relative), content);
    }

    pub fn write_repo(&self, relative: &str, content: &str) {
        write(&self.repo_path(relative), content);
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_nastrajacz"));
        cmd.current_dir(self.repo())
            .env("HOME", self.home())
            .env("USERPROFILE", self.home())
            .env_remove("NASTRAJACZ_ICONS")
            .env_remove("NASTRAJACZ_LOG_FILE")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run with the given arguments and return stdout
    pub fn run(&self, args: &[&str]) -> String {
        let assert = self.command().args(args).assert().success();
        String::from_utf8(assert.get_output().stdout.clone()).unwrap()
    }
}

pub fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// Expected stdout built from lines
pub fn lines(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
