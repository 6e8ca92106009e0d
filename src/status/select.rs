// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Choosing the paths `gg commit` passes to git when none are named.

use crate::error::CommitError;

use super::{StatusCode, StatusEntry};

/// Root-relative pathspec magic; status paths are relative to the top level.
pub const ROOT_PATHSPEC: &str = ":/:";

/// Paths to commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub paths: Vec<String>,
    /// Missing files left out of the commit.
    pub missing: usize,
}

/// Accumulates status entries one at a time.
#[derive(Debug, Default)]
pub struct ChangeSetSelector {
    paths: Vec<String>,
    missing: usize,
    missing_staged: usize,
    unmerged: usize,
}

impl ChangeSetSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: &StatusEntry) {
        match entry.code {
            StatusCode::Added
            | StatusCode::Modified
            | StatusCode::Removed
            | StatusCode::Copied
            | StatusCode::Renamed => {
                self.paths.push(format!("{ROOT_PATHSPEC}{}", entry.name));
            }
            StatusCode::Ignored | StatusCode::Untracked | StatusCode::Other(_) => {}
            StatusCode::Unmerged => self.unmerged += 1,
            StatusCode::Missing { staged } => {
                self.missing += 1;
                if staged {
                    self.missing_staged += 1;
                }
            }
        }
    }

    /// Decide the outcome.
    ///
    /// # Errors
    ///
    /// Checked in order: `UnmergedChanges`, `NothingChanged`,
    /// `StagedMissingFiles`.
    pub fn finish(self) -> Result<ChangeSet, CommitError> {
        if self.unmerged > 0 {
            return Err(CommitError::UnmergedChanges(self.unmerged));
        }
        if self.paths.is_empty() {
            return Err(CommitError::NothingChanged {
                missing: self.missing,
            });
        }
        if self.missing_staged > 0 {
            return Err(CommitError::StagedMissingFiles(self.missing_staged));
        }
        Ok(ChangeSet {
            paths: self.paths,
            missing: self.missing,
        })
    }
}

/// Select commit paths from a complete list of entries.
///
/// # Errors
///
/// See [`ChangeSetSelector::finish`].
pub fn select_paths<'a, I>(entries: I) -> Result<ChangeSet, CommitError>
where
    I: IntoIterator<Item = &'a StatusEntry>,
{
    let mut selector = ChangeSetSelector::new();
    for entry in entries {
        selector.push(entry);
    }
    selector.finish()
}
