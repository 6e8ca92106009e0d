// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scratch repositories and helpers shared by the integration tests.

#![allow(dead_code, unreachable_pub)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const GIT_ENV: [(&str, &str); 6] = [
    ("GIT_CONFIG_NOSYSTEM", "1"),
    ("GIT_CONFIG_GLOBAL", "/dev/null"),
    ("GIT_AUTHOR_NAME", "Test"),
    ("GIT_AUTHOR_EMAIL", "test@example.com"),
    ("GIT_COMMITTER_NAME", "Test"),
    ("GIT_COMMITTER_EMAIL", "test@example.com"),
];

pub fn have_git() -> bool {
    which::which("git").is_ok()
}

/// Run git in `dir`, panicking on failure, and return trimmed stdout.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .envs(GIT_ENV)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout)
        .expect("git output is UTF-8")
        .trim()
        .to_string()
}

/// Run the gg binary in `dir`.
pub fn gg(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gg"))
        .args(args)
        .current_dir(dir)
        .envs(GIT_ENV)
        .env_remove("GG_GERRIT__NOTIFY")
        .output()
        .expect("failed to run gg")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// A work tree on `main` and a bare repository it pushes to.
pub struct Fixture {
    temp: TempDir,
    pub work: PathBuf,
    pub upstream: PathBuf,
}

impl Fixture {
    /// One commit on `main`, already pushed to `upstream`, which is `origin`.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("failed to create temp dir");
        let work = temp.path().join("work");
        let upstream = temp.path().join("upstream.git");
        fs::create_dir(&work).expect("mkdir work");

        git(temp.path(), &["init", "--quiet", "--bare", path_str(&upstream)]);
        git(&work, &["init", "--quiet"]);
        git(&work, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        git(&work, &["remote", "add", "origin", path_str(&upstream)]);

        let fixture = Self {
            temp,
            work,
            upstream,
        };
        fixture.commit_file("a.txt", "one\n", "first");
        git(&fixture.work, &["push", "--quiet", "origin", "main"]);
        fixture
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn commit_file(&self, name: &str, content: &str, message: &str) -> String {
        fs::write(self.work.join(name), content).expect("write file");
        git(&self.work, &["add", name]);
        git(&self.work, &["commit", "--quiet", "-m", message]);
        self.head()
    }

    pub fn head(&self) -> String {
        git(&self.work, &["rev-parse", "HEAD"])
    }

    /// Commit `name` points to in the upstream repository, if it exists.
    pub fn upstream_ref(&self, name: &str) -> Option<String> {
        let output = Command::new("git")
            .args(["rev-parse", "--verify", "--quiet", name])
            .current_dir(&self.upstream)
            .envs(GIT_ENV)
            .output()
            .expect("failed to run git");
        output
            .status
            .success()
            .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}
