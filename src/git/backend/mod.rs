// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only repository queries.
//!
//! ```text
//! GitQuery --> GixBackend   (gix, in-process, config snapshot at open)
//!          \-> ShellBackend (git config / git remote)
//! ```
//!
//! Unset and empty configuration values are both reported as `None`.

use std::path::Path;

use crate::error::{GitError, GixError, GgResult};

use super::tool::GitTool;

/// Configuration and repository-state lookups used to pick push targets.
pub trait GitQuery {
    /// Value of a git configuration key (`branch.main.remote`).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the configuration cannot be read.
    fn config_value(&self, key: &str) -> GgResult<Option<String>>;

    /// Whether a remote with this name is configured.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the remotes cannot be listed.
    fn remote_exists(&self, name: &str) -> GgResult<bool>;

    /// `remote.<name>.pushurl`, if set.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the configuration cannot be read.
    fn remote_push_url(&self, remote: &str) -> GgResult<Option<String>> {
        self.config_value(&format!("remote.{remote}.pushurl"))
    }
}

// --- GixBackend Implementation (Pure Rust) ---

/// In-process backend using gix.
///
/// The configuration is read when the repository is opened; later changes
/// made by git subprocesses are not observed.
pub struct GixBackend {
    repo: gix::Repository,
}

impl GixBackend {
    /// Open the repository containing `path`.
    ///
    /// # Errors
    ///
    /// Returns `GixError::Discover` if `path` is not inside a repository.
    pub fn discover(path: &Path) -> GgResult<Self> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        Ok(Self { repo })
    }
}

impl GitQuery for GixBackend {
    fn config_value(&self, key: &str) -> GgResult<Option<String>> {
        let value = self
            .repo
            .config_snapshot()
            .string(key)
            .map(|v| v.to_string())
            .filter(|v| !v.is_empty());
        Ok(value)
    }

    fn remote_exists(&self, name: &str) -> GgResult<bool> {
        Ok(self
            .repo
            .remote_names()
            .iter()
            .any(|remote| remote.to_string() == name))
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Backend that asks the git executable.
///
/// Sees exactly what git itself sees, including `GIT_CONFIG_*` overrides set
/// on the [`GitTool`].
pub struct ShellBackend {
    git: GitTool,
}

impl ShellBackend {
    #[must_use]
    pub const fn new(git: GitTool) -> Self {
        Self { git }
    }
}

impl GitQuery for ShellBackend {
    fn config_value(&self, key: &str) -> GgResult<Option<String>> {
        self.git.query(&["config", "--get", key])
    }

    fn remote_exists(&self, name: &str) -> GgResult<bool> {
        let remotes = self.git.output(&["remote"])?;
        Ok(remotes.lines().any(|remote| remote == name))
    }
}
