// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git access.
//!
//! ```text
//!          commands (cmd/)
//!          /      |      \
//!         v       v       v
//!   backend   revision   tool
//!  GitQuery   rev-parse  GitTool
//!     |           \       /
//!     v            v     v
//!  GixBackend     git subprocess
//!  ShellBackend --/
//! ```
//!
//! **`GixBackend`**: in-process config and HEAD reads.
//! **`GitTool`**: every write, listing and status stream goes through the git CLI.

pub mod backend;
pub mod revision;
pub mod tool;

#[cfg(test)]
mod tests;
