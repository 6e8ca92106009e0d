// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `commit` command.

use clap::Args;

/// Arguments for the `commit` command.
///
/// Without files, every added, modified, removed, copied or renamed path is
/// committed; missing files are left out and reported.
#[derive(Debug, Clone, Args)]
pub struct CommitArgs {
    /// Amend the parent of the working directory.
    #[arg(long)]
    pub amend: bool,

    /// Use text as commit message.
    #[arg(short = 'm', long = "message", value_name = "MSG")]
    pub message: Option<String>,

    /// Files to commit.
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}
