// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `gg push` implementation.
//!
//! ```text
//! -r REV --resolve_revision--> commit + ref
//! DST | resolve_destination --> repository
//! -d REF | source ref --------> destination ref
//! (no --create) ref_exists(listing_target) else RefNotFound
//! git push [--force] -- <repository> <commit>:<ref>
//! ```

use anyhow::Context;
use tracing::info;

use crate::cli::push::PushArgs;
use crate::config::Config;
use crate::error::{GgResult, PushError, Result};
use crate::git::backend::GitQuery;
use crate::git::revision::{CommitHash, resolve_revision};
use crate::git::tool::GitTool;
use crate::remote::{listing_target, ref_exists, resolve_destination, resolve_destination_ref};

use super::GitSession;

/// A fully resolved push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushPlan {
    pub repository: String,
    pub commit: CommitHash,
    pub dest_ref: String,
    pub force: bool,
}

impl PushPlan {
    /// Arguments for `git push`.
    #[must_use]
    pub fn git_args(&self) -> Vec<String> {
        let mut args = vec!["push".to_string()];
        if self.force {
            args.push("--force".to_string());
        }
        args.push("--".to_string());
        args.push(self.repository.clone());
        args.push(format!("{}:{}", self.commit, self.dest_ref));
        args
    }
}

/// Work out what `gg push` would do, without checking the remote.
///
/// # Errors
///
/// Returns an error if the revision is unknown, no repository can be chosen,
/// or no destination ref can be inferred.
pub fn plan_push(git: &GitTool, query: &dyn GitQuery, args: &PushArgs) -> GgResult<PushPlan> {
    let source = resolve_revision(git, &args.rev)?;
    let repository = match &args.destination {
        Some(repository) => repository.clone(),
        None => resolve_destination(query, source.branch())?,
    };
    let dest_ref = resolve_destination_ref(args.dest_ref.as_deref(), source.ref_name())?;
    Ok(PushPlan {
        repository,
        commit: source.commit().clone(),
        dest_ref,
        force: args.force,
    })
}

/// Fail unless `plan.dest_ref` already exists where the push will go.
///
/// # Errors
///
/// Returns `PushError::RefNotFound` if the ref is absent, or the listing's
/// error if the remote cannot be read.
pub fn verify_destination(git: &GitTool, query: &dyn GitQuery, plan: &PushPlan) -> GgResult<()> {
    let target = listing_target(query, &plan.repository)?;
    if ref_exists(git, &target, &plan.dest_ref)? {
        return Ok(());
    }
    Err(PushError::RefNotFound {
        remote: plan.repository.clone(),
        ref_name: plan.dest_ref.clone(),
    }
    .into())
}

/// Main handler for the push command.
///
/// # Errors
///
/// Returns an error if planning, verification or `git push` fails.
pub fn run_push_command(args: &PushArgs, config: &Config, session: &GitSession) -> Result<()> {
    let git = session.git();
    let query = session.query();
    let plan = plan_push(git, query.as_ref(), args)?;

    if args.create || config.push.create {
        info!(dest_ref = %plan.dest_ref, "skipping remote ref check");
    } else {
        verify_destination(git, query.as_ref(), &plan)
            .with_context(|| format!("verify remote ref {}", plan.dest_ref))?;
    }

    session.execute(&plan.git_args())?;
    Ok(())
}
