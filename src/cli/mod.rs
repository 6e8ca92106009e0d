// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gg using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gg [global options] <command>
//! version
//! push   [-r REV] [-d REF] [--create] [-f] [DST]
//! mail   [-r REV] [-d BRANCH] [-m MSG] [-R ADDR]... [DST]
//! commit [--amend] [-m MSG] [FILE...]
//! status [FILE...]
//! ```

pub mod commit;
pub mod global;
pub mod mail;
pub mod push;
pub mod status;


use crate::cli::commit::CommitArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::mail::MailArgs;
use crate::cli::push::PushArgs;
use crate::cli::status::StatusArgs;
use clap::{Parser, Subcommand};

/// Workflow-oriented front end for git.
#[derive(Debug, Parser)]
#[command(
    name = "gg",
    author,
    version,
    about = "Workflow-oriented front end for git",
    long_about = "gg-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  gg decides which git operations to run and reads their\n\
                  output; every change is made by git itself. Use --dry to\n\
                  print the final git command instead of running it.",
    after_help = "CONFIGURATION:\n\n\
                  gg reads gg.toml from the working directory if present, then\n\
                  every file passed with --config, then GG_* environment\n\
                  variables (GG_GERRIT__NOTIFY=NONE). Command-line flags win\n\
                  over all of them. Remotes and upstreams always come from\n\
                  git's own configuration."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Pushes a commit to a remote ref.
    Push(PushArgs),

    /// Uploads a commit to Gerrit for review.
    Mail(MailArgs),

    /// Commits the given files or all outstanding changes.
    Commit(CommitArgs),

    /// Shows changed files in the working copy.
    Status(StatusArgs),
}

impl Command {
    /// Subcommand name as typed.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::Push(_) => "push",
            Self::Mail(_) => "mail",
            Self::Commit(_) => "commit",
            Self::Status(_) => "status",
        }
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
