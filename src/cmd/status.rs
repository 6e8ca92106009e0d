// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `gg status` implementation.

use std::io::{self, Write};

use anyhow::Context;

use crate::cli::status::StatusArgs;
use crate::error::{GgResult, Result};
use crate::git::tool::GitTool;
use crate::status::porcelain::STATUS_ARGS;
use crate::status::{PorcelainReader, write_entry};

/// Arguments for `git status`, limited to `files` when any are given.
#[must_use]
pub fn status_args(files: &[String]) -> Vec<String> {
    let mut args: Vec<String> = STATUS_ARGS.iter().map(ToString::to_string).collect();
    if !files.is_empty() {
        args.push("--".to_string());
        args.extend(files.iter().cloned());
    }
    args
}

/// Copy git's status to `out` in the `gg status` line format.
///
/// Returns the number of entries written.
///
/// # Errors
///
/// Returns a status parse error, a git error, or a write error.
pub fn write_status<W: Write + ?Sized>(git: &GitTool, files: &[String], out: &mut W) -> GgResult<usize> {
    let mut process = git.start(&status_args(files))?;
    let mut count = 0;
    for entry in PorcelainReader::new(process.stdout()) {
        write_entry(out, &entry?)?;
        count += 1;
    }
    process.wait()?;
    Ok(count)
}

/// Main handler for the status command.
///
/// Runs under `--dry` too; it changes nothing.
///
/// # Errors
///
/// Returns an error if git fails or its output cannot be parsed.
pub fn run_status_command(args: &StatusArgs, git: &GitTool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_status(git, &args.files, &mut out)?;
    out.flush().context("failed to write status")?;
    Ok(())
}
