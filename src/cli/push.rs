// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `push` command.
//!
//! ```text
//! gg push                      HEAD's branch to the same ref on its push remote
//! gg push -d main upstream     HEAD to refs/heads/main on "upstream"
//! gg push -r v1 -d refs/tags/v1 --create
//! ```

use clap::Args;

/// Arguments for the `push` command.
///
/// When no destination repository is given, push uses the first non-empty
/// of `branch.*.pushRemote`, `remote.pushDefault`, `branch.*.remote`, or
/// the remote called "origin".
#[derive(Debug, Clone, Args)]
pub struct PushArgs {
    /// Source revision.
    #[arg(short = 'r', long = "rev", value_name = "REV", default_value = "HEAD")]
    pub rev: String,

    /// Destination ref; a name without "refs/" is a branch.
    #[arg(short = 'd', long = "dest", value_name = "REF")]
    pub dest_ref: Option<String>,

    /// Allow pushing a new ref.
    #[arg(long)]
    pub create: bool,

    /// Allow overwriting a ref that is not an ancestor.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Destination repository (remote name or URL).
    #[arg(value_name = "DST")]
    pub destination: Option<String>,
}
