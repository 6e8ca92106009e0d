// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> GitSession
//!   push, mail, commit, status           |
//!                                        +-- query()    GixBackend | ShellBackend
//!                                        +-- execute()  git (or print with --dry)
//! ```

pub mod commit;
pub mod mail;
pub mod push;
pub mod status;

#[cfg(test)]
mod tests;

use std::ffi::OsStr;

use tracing::{debug, info};

use crate::error::GgResult;
use crate::git::backend::{GitQuery, GixBackend, ShellBackend};
use crate::git::tool::GitTool;

/// The git executable, working directory and dry-run switch of one invocation.
#[derive(Debug, Clone)]
pub struct GitSession {
    git: GitTool,
    dry_run: bool,
}

impl GitSession {
    #[must_use]
    pub const fn new(git: GitTool, dry_run: bool) -> Self {
        Self { git, dry_run }
    }

    #[must_use]
    pub const fn git(&self) -> &GitTool {
        &self.git
    }

    /// Configuration reader for the repository.
    ///
    /// Uses gix when the repository can be opened in-process and falls back
    /// to asking git.
    #[must_use]
    pub fn query(&self) -> Box<dyn GitQuery> {
        match GixBackend::discover(self.git.dir()) {
            Ok(backend) => Box::new(backend),
            Err(e) => {
                debug!(error = %e, "gix unavailable, using git for configuration");
                Box::new(ShellBackend::new(self.git.clone()))
            }
        }
    }

    /// Run the command that changes something, or print it under `--dry`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git cannot be started or fails.
    pub fn execute<S: AsRef<OsStr>>(&self, args: &[S]) -> GgResult<()> {
        let command_line = GitTool::command_line(args);
        if self.dry_run {
            println!("{command_line}");
            return Ok(());
        }
        info!(cmd = %command_line, "running");
        self.git.run_interactive(args)
    }
}
