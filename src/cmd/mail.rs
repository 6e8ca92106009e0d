// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `gg mail` implementation.
//!
//! ```text
//! -r REV ------------------> commit (+ branch)
//! DST | resolve_destination -> repository
//! -d BRANCH | branch.<b>.merge -> review branch
//! encode(branch, options) --> refs/for/<branch>%...
//! git push -- <repository> <commit>:refs/for/<branch>%...
//! ```

use tracing::{debug, info};

use crate::cli::mail::MailArgs;
use crate::config::Config;
use crate::error::{GgResult, PushError, Result};
use crate::gerrit::{GerritOptions, encode};
use crate::git::backend::GitQuery;
use crate::git::revision::{CommitHash, Revision, resolve_revision};
use crate::git::tool::GitTool;
use crate::remote::resolve_destination;

use super::GitSession;

/// A resolved upload for review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailPlan {
    pub repository: String,
    pub commit: CommitHash,
    pub review_ref: String,
}

impl MailPlan {
    /// Arguments for `git push`.
    #[must_use]
    pub fn git_args(&self) -> Vec<String> {
        vec![
            "push".to_string(),
            "--".to_string(),
            self.repository.clone(),
            format!("{}:{}", self.commit, self.review_ref),
        ]
    }
}

/// Branch the change is for: `-d`, else the source branch's upstream.
fn review_branch(
    query: &dyn GitQuery,
    explicit: Option<&str>,
    source: &Revision,
) -> GgResult<String> {
    if let Some(branch) = explicit {
        return Ok(branch.strip_prefix("refs/heads/").unwrap_or(branch).to_string());
    }
    let Some(branch) = source.branch() else {
        return Err(PushError::AmbiguousDestination.into());
    };
    let merge = query.config_value(&format!("branch.{branch}.merge"))?;
    debug!(branch, upstream = ?merge, "review branch");
    merge
        .map(|upstream| {
            upstream
                .strip_prefix("refs/heads/")
                .unwrap_or(&upstream)
                .to_string()
        })
        .ok_or_else(|| PushError::AmbiguousDestination.into())
}

/// Work out the push that uploads a change for review.
///
/// # Errors
///
/// Returns an error if the revision is unknown, no repository or branch can
/// be chosen, or the options cannot be carried by a review ref.
pub fn plan_mail(
    git: &GitTool,
    query: &dyn GitQuery,
    args: &MailArgs,
    options: &GerritOptions,
) -> GgResult<MailPlan> {
    let source = resolve_revision(git, &args.rev)?;
    let repository = match &args.destination {
        Some(repository) => repository.clone(),
        None => resolve_destination(query, source.branch())?,
    };
    let branch = review_branch(query, args.dest_branch.as_deref(), &source)?;
    options.validate(&branch)?;

    let review_ref = encode(&branch, options);
    info!(review_ref = %review_ref, "review ref");
    Ok(MailPlan {
        repository,
        commit: source.commit().clone(),
        review_ref,
    })
}

/// Main handler for the mail command.
///
/// # Errors
///
/// Returns an error if planning or `git push` fails.
pub fn run_mail_command(args: &MailArgs, config: &Config, session: &GitSession) -> Result<()> {
    let options = args.to_options(&config.gerrit);
    let query = session.query();
    let plan = plan_mail(session.git(), query.as_ref(), args, &options)?;
    session.execute(&plan.git_args())?;
    Ok(())
}
