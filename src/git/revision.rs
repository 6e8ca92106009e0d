// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Revision resolution.
//!
//! ```text
//! "HEAD~1" --rev-parse --verify "HEAD~1^{commit}"----> CommitHash
//!          \-rev-parse --symbolic-full-name "HEAD~1"--> Option<ref>
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{GitError, GgError, GgResult};

use super::tool::GitTool;

/// Full 40-digit commit hash, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitHash(String);

impl CommitHash {
    pub const LEN: usize = 40;

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if `bytes` is exactly a commit hash in either case.
    #[must_use]
    pub fn is_hash(bytes: &[u8]) -> bool {
        bytes.len() == Self::LEN && bytes.iter().all(u8::is_ascii_hexdigit)
    }
}

impl FromStr for CommitHash {
    type Err = GgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_hash(s.as_bytes()) {
            return Err(GitError::InvalidHash(s.to_string()).into());
        }
        Ok(Self(s.to_ascii_lowercase()))
    }
}

impl fmt::Display for CommitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A commit plus the ref it was named by, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    commit: CommitHash,
    ref_name: Option<String>,
}

impl Revision {
    #[must_use]
    pub const fn new(commit: CommitHash, ref_name: Option<String>) -> Self {
        Self { commit, ref_name }
    }

    #[must_use]
    pub const fn commit(&self) -> &CommitHash {
        &self.commit
    }

    /// Full ref name (`refs/heads/main`), None for plain commit expressions.
    #[must_use]
    pub fn ref_name(&self) -> Option<&str> {
        self.ref_name.as_deref()
    }

    /// Branch short name when the ref lives under `refs/heads/`.
    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        self.ref_name()?.strip_prefix("refs/heads/")
    }
}

/// Resolve a revision expression to a commit and, if it names one, a ref.
///
/// # Errors
///
/// Returns `GitError::InvalidRevision` if the expression does not name a
/// commit, or a `GitError` if git fails.
pub fn resolve_revision(git: &GitTool, expr: &str) -> GgResult<Revision> {
    let peeled = format!("{expr}^{{commit}}");
    let hash = git
        .query(&["rev-parse", "--verify", "--quiet", peeled.as_str()])?
        .ok_or_else(|| GitError::InvalidRevision {
            rev: expr.to_string(),
        })?;
    let commit: CommitHash = hash.parse()?;

    let ref_name = git
        .query(&["rev-parse", "--symbolic-full-name", expr])?
        .filter(|name| name.starts_with("refs/"));

    debug!(rev = expr, commit = %commit, ref_name = ?ref_name, "resolved revision");
    Ok(Revision::new(commit, ref_name))
}
