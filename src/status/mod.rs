// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Working copy status.
//!
//! ```text
//! git status --porcelain=v1 -z       gg status output
//!          |                                |
//!          v                                v
//!   porcelain::PorcelainReader     lines::parse_status(sink)
//!          |                                |
//!          +-------> StatusEntry <----------+
//!                     |        |
//!                     v        v
//!         select::ChangeSetSelector   render::write_entry
//!              (gg commit)              (gg status)
//! ```
//!
//! Letters in `gg status` output:
//!
//! ```text
//! A added (copies and renames too, with a "  <source>" line)
//! M modified   R removed   ! missing   ? untracked
//! I ignored    U unmerged
//! ```
//!
//! Any other letter read back from `gg status` text is kept as
//! [`StatusCode::Other`] and never selected for a commit.

pub mod lines;
pub mod porcelain;
pub mod render;
pub mod select;


pub use lines::{Collect, DiagnosticSink, FailFast, LogSink, ParsedStatus, parse_status};
pub use porcelain::PorcelainReader;
pub use render::write_entry;
pub use select::{ChangeSet, ChangeSetSelector, select_paths};

/// What happened to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Added,
    Modified,
    Removed,
    Copied,
    Renamed,
    Unmerged,
    Ignored,
    Untracked,
    /// Deleted from the working copy without `git rm`.
    Missing {
        /// The index also has a change for the path.
        staged: bool,
    },
    /// Letter gg does not emit itself.
    Other(char),
}

impl StatusCode {
    /// Letter used in `gg status` output.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Added | Self::Copied | Self::Renamed => 'A',
            Self::Modified => 'M',
            Self::Removed => 'R',
            Self::Missing { .. } => '!',
            Self::Untracked => '?',
            Self::Ignored => 'I',
            Self::Unmerged => 'U',
            Self::Other(letter) => letter,
        }
    }

    /// Inverse of [`StatusCode::letter`]; `A` always reads back as added.
    #[must_use]
    pub const fn from_letter(letter: u8) -> Self {
        match letter {
            b'A' => Self::Added,
            b'M' => Self::Modified,
            b'R' => Self::Removed,
            b'!' => Self::Missing { staged: false },
            b'?' => Self::Untracked,
            b'I' => Self::Ignored,
            b'U' => Self::Unmerged,
            other => Self::Other(other as char),
        }
    }
}

/// One path in a status listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub code: StatusCode,
    /// Path relative to the repository root.
    pub name: String,
    /// Source path of a copy or rename.
    pub from: Option<String>,
}

impl StatusEntry {
    #[must_use]
    pub fn new(code: StatusCode, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
            from: None,
        }
    }

    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }
}
