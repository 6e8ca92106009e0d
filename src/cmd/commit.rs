// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `gg commit` implementation.
//!
//! ```text
//! gg commit a.txt        git commit -- a.txt
//! gg commit              git status --porcelain=v1 -z -unormal
//!                          -> ChangeSetSelector
//!                          -> git commit -- :/:b.txt :/:c.txt
//! ```

use tracing::{debug, warn};

use crate::cli::commit::CommitArgs;
use crate::error::{GgResult, Result};
use crate::git::tool::GitTool;
use crate::status::porcelain::STATUS_ARGS;
use crate::status::{ChangeSet, ChangeSetSelector, PorcelainReader};

use super::GitSession;

/// Ask git which paths changed and select the ones to commit.
///
/// Status output is consumed as it streams.
///
/// # Errors
///
/// Returns a status parse error, a git error, or a `CommitError` when the
/// working copy has conflicts, nothing to commit, or staged changes for
/// missing files.
pub fn infer_change_set(git: &GitTool) -> GgResult<ChangeSet> {
    let mut process = git.start(&STATUS_ARGS)?;
    let mut selector = ChangeSetSelector::new();
    for entry in PorcelainReader::new(process.stdout()) {
        let entry = entry?;
        debug!(code = %entry.code.letter(), name = %entry.name, "status");
        selector.push(&entry);
    }
    process.wait()?;
    Ok(selector.finish()?)
}

/// Arguments for `git commit`.
///
/// # Errors
///
/// Returns the inference error when no files were named.
pub fn plan_commit(git: &GitTool, args: &CommitArgs) -> GgResult<Vec<String>> {
    let mut commit_args = vec!["commit".to_string()];
    if args.amend {
        commit_args.push("--amend".to_string());
    }
    if let Some(message) = args.message.as_deref().filter(|m| !m.is_empty()) {
        commit_args.push(format!("--message={message}"));
    }
    commit_args.push("--".to_string());

    if args.files.is_empty() {
        let changes = infer_change_set(git)?;
        if changes.missing > 0 {
            warn!(
                count = changes.missing,
                "missing files are not part of the commit; see 'gg status'"
            );
        }
        commit_args.extend(changes.paths);
    } else {
        commit_args.extend(args.files.iter().cloned());
    }
    Ok(commit_args)
}

/// Main handler for the commit command.
///
/// # Errors
///
/// Returns an error if the file list cannot be inferred or `git commit` fails.
pub fn run_commit_command(args: &CommitArgs, session: &GitSession) -> Result<()> {
    let commit_args = plan_commit(session.git(), args)?;
    session.execute(&commit_args)?;
    Ok(())
}
