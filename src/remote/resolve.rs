// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Choosing the repository and ref a push updates.

use tracing::{debug, info};

use crate::error::{GgResult, PushError};
use crate::git::backend::GitQuery;

/// One step of the fallback chain; evaluated only if earlier steps were empty.
type Lookup<'a> = Box<dyn Fn() -> GgResult<Option<String>> + 'a>;

/// Pick the repository to push to when none was given.
///
/// Same order as git: `branch.<b>.pushRemote`, `remote.pushDefault`,
/// `branch.<b>.remote`, then `origin` if such a remote exists. Branch
/// lookups are skipped when `branch` is None.
///
/// # Errors
///
/// Returns `PushError::NoDestination` if every step is empty, or the
/// lookup's error if configuration cannot be read.
pub fn resolve_destination<Q>(query: &Q, branch: Option<&str>) -> GgResult<String>
where
    Q: GitQuery + ?Sized,
{
    let mut chain: Vec<(String, Lookup<'_>)> = Vec::with_capacity(4);
    if let Some(branch) = branch {
        let key = format!("branch.{branch}.pushRemote");
        chain.push((key.clone(), config_lookup(query, key)));
    }
    let key = "remote.pushDefault".to_string();
    chain.push((key.clone(), config_lookup(query, key)));
    if let Some(branch) = branch {
        let key = format!("branch.{branch}.remote");
        chain.push((key.clone(), config_lookup(query, key)));
    }
    chain.push(("remote \"origin\"".to_string(), origin_lookup(query)));

    for (source, lookup) in chain {
        match lookup()? {
            Some(remote) if !remote.is_empty() => {
                info!(remote = %remote, from = %source, "push destination");
                return Ok(remote);
            }
            _ => debug!(from = %source, "unset"),
        }
    }
    Err(PushError::NoDestination.into())
}

fn config_lookup<'a, Q>(query: &'a Q, key: String) -> Lookup<'a>
where
    Q: GitQuery + ?Sized,
{
    Box::new(move || query.config_value(&key))
}

fn origin_lookup<Q>(query: &Q) -> Lookup<'_>
where
    Q: GitQuery + ?Sized,
{
    Box::new(move || -> GgResult<Option<String>> {
        Ok(query
            .remote_exists("origin")?
            .then(|| "origin".to_string()))
    })
}

/// Pick the remote ref to update.
///
/// An explicit ref starting with `refs/` is used as-is, anything else names a
/// branch. Without one, the source's own ref is reused.
///
/// # Errors
///
/// Returns `PushError::AmbiguousDestination` if there is neither an explicit
/// ref nor a source ref.
pub fn resolve_destination_ref(explicit: Option<&str>, source_ref: Option<&str>) -> GgResult<String> {
    match (explicit, source_ref) {
        (Some(name), _) if name.starts_with("refs/") => Ok(name.to_string()),
        (Some(name), _) => Ok(format!("refs/heads/{name}")),
        (None, Some(source)) => Ok(source.to_string()),
        (None, None) => Err(PushError::AmbiguousDestination.into()),
    }
}

/// What to list when checking a ref on `remote`.
///
/// A push to a configured remote goes to its push URL, so that is where the
/// ref has to exist.
///
/// # Errors
///
/// Returns the lookup's error if configuration cannot be read.
pub fn listing_target<Q>(query: &Q, remote: &str) -> GgResult<String>
where
    Q: GitQuery + ?Sized,
{
    if query.remote_exists(remote)?
        && let Some(url) = query.remote_push_url(remote)?
    {
        debug!(remote, url = %url, "listing push URL");
        return Ok(url);
    }
    Ok(remote.to_string())
}
