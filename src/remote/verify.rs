// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote ref existence checks over `git ls-remote` output.
//!
//! ```text
//! <40 hex>\t<ref>\n
//! ^        ^
//! 0        40
//! ```

use std::io::BufRead;

use tracing::{debug, trace};

use crate::error::{GgResult, PushError};
use crate::git::revision::CommitHash;
use crate::git::tool::GitTool;

/// Scan a listing for an exact `ref_name` match.
///
/// Stops at the first match.
///
/// # Errors
///
/// Returns `PushError::MalformedListing` for a line that does not start with
/// a hash and a tab, or an I/O error from the reader.
pub fn scan_listing<R: BufRead>(reader: R, ref_name: &str) -> GgResult<bool> {
    const TAB: usize = CommitHash::LEN;

    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        if line.len() <= TAB || line[TAB] != b'\t' || !CommitHash::is_hash(&line[..TAB]) {
            return Err(PushError::MalformedListing { line: index + 1 }.into());
        }
        let listed = &line[TAB + 1..];
        trace!(listed = %String::from_utf8_lossy(listed), "ls-remote");
        if listed == ref_name.as_bytes() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Ask `remote` whether it has `ref_name`.
///
/// # Errors
///
/// Returns `PushError::RemoteUnreachable` if `git ls-remote` fails, or a
/// listing parse error.
pub fn ref_exists(git: &GitTool, remote: &str, ref_name: &str) -> GgResult<bool> {
    let mut process = git.start(&["ls-remote", "--quiet", "--refs", "--", remote, ref_name])?;
    if scan_listing(process.stdout(), ref_name)? {
        debug!(remote, ref_name, "ref exists");
        return Ok(true);
    }

    let (status, message) = process.finish()?;
    if !status.success() {
        return Err(PushError::RemoteUnreachable {
            remote: remote.to_string(),
            message,
        }
        .into());
    }
    debug!(remote, ref_name, "ref missing");
    Ok(false)
}
