// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `status` command.

use clap::Args;

/// Arguments for the `status` command.
#[derive(Debug, Clone, Args)]
pub struct StatusArgs {
    /// Limit the listing to these paths.
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}
