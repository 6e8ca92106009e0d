// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!               GgError (16 bytes)
//!                      |
//!   +------+------+----+----+------+------+------+
//!   |      |      |    |    |      |      |      |
//!   v      v      v    v    v      v      v      v
//!  Git   Push  Gerrit Status Commit Config Proc   Io
//!  Box   Box    Box   Box    Box    Box    Box   Box
//!
//! Sub-errors (unboxed internally):
//!   Git     Gix, CommandFailed, InvalidRevision
//!   Push    NoDestination, AmbiguousDestination,
//!           MalformedListing, RemoteUnreachable, RefNotFound
//!   Gerrit  MalformedMessage, InvalidOptionValue
//!   Status  LineFormat, OrphanSource,
//!           DuplicateEntry, MalformedPorcelain
//!   Commit  UnmergedChanges, NothingChanged, StagedMissingFiles
//!   Process ExecutableNotFound, SpawnFailed, NonZeroExit
//!
//! All variants boxed => GgError is a tag plus one pointer.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`GgError`].
pub type GgResult<T> = std::result::Result<T, GgError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at 16 bytes on the stack.
/// The sub-error is rendered inline and is not reported as a `source`, so
/// `{:#}` prints each message once.
#[derive(Debug, Error)]
pub enum GgError {
    /// Git query or command failed.
    #[error("git error: {0}")]
    Git(Box<GitError>),

    /// Push destination could not be determined or verified.
    #[error("{0}")]
    Push(Box<PushError>),

    /// Review ref could not be built or parsed.
    #[error("{0}")]
    Gerrit(Box<GerritError>),

    /// Status output could not be parsed.
    #[error("status: {0}")]
    Status(Box<StatusError>),

    /// Commit inputs could not be inferred.
    #[error("{0}")]
    Commit(Box<CommitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for GgError {
                fn from(err: $error) -> Self {
                    GgError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    PushError => Push,
    GerritError => Gerrit,
    StatusError => Status,
    CommitError => Commit,
    ConfigError => Config,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// A revision expression did not resolve to a commit.
    #[error("unknown revision {rev:?}")]
    InvalidRevision { rev: String },

    /// Git printed something that is not a commit hash.
    #[error("invalid commit hash {0:?}")]
    InvalidHash(String),
}

// --- Push Errors ---

/// Errors choosing or checking a push destination.
#[derive(Debug, Error)]
pub enum PushError {
    /// No repository argument and nothing configured.
    #[error("no destination given and no remote named \"origin\" found")]
    NoDestination,

    /// Source is not a ref and no destination ref was given.
    #[error("cannot infer destination (source is not a ref); use -d to specify destination ref")]
    AmbiguousDestination,

    /// A `git ls-remote` line did not start with a hash and a tab.
    #[error("parse git ls-remote: line {line} must start with SHA1")]
    MalformedListing { line: usize },

    /// The remote listing operation failed.
    #[error("cannot list refs on {remote}: {message}")]
    RemoteUnreachable { remote: String, message: String },

    /// The destination ref does not exist and creation was not requested.
    #[error("remote {remote} does not have ref {ref_name}; pass --create to create it")]
    RefNotFound { remote: String, ref_name: String },
}

// --- Gerrit Errors ---

/// Errors encoding or decoding a review ref.
#[derive(Debug, Error)]
pub enum GerritError {
    /// The message option had invalid percent-encoding.
    #[error("malformed {key} option: {message}")]
    MalformedMessage { key: String, message: String },

    /// A value cannot be represented in the ref.
    #[error("invalid {key} value {value:?}: {reason}")]
    InvalidOptionValue {
        key: String,
        value: String,
        reason: &'static str,
    },
}

// --- Status Errors ---

/// Status stream parse errors.
///
/// Line errors are reported through a diagnostic sink and do not abort parsing
/// by themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    /// Line is too short, lacks the separating space, or is not UTF-8.
    #[error("line {line}: got {text:?}; want status, then space, then name")]
    LineFormat { line: usize, text: String },

    /// A source line without an entry it could belong to.
    #[error("line {line}: source {name:?} not valid after previous line")]
    OrphanSource { line: usize, name: String },

    /// Same path listed twice.
    #[error("line {line}: duplicate for {name}")]
    DuplicateEntry { line: usize, name: String },

    /// `git status --porcelain -z` record could not be read.
    #[error("parse git status: {0}")]
    MalformedPorcelain(String),
}

// --- Commit Errors ---

/// Reasons a commit's file list could not be inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommitError {
    /// Conflicts in the working copy.
    #[error("{0} unmerged {files}; see 'gg status'", files = plural_files(*.0))]
    UnmergedChanges(usize),

    /// No committable changes.
    #[error("{}", nothing_changed(*.missing))]
    NothingChanged { missing: usize },

    /// Git has staged changes for files missing from the working copy.
    #[error("git has staged changes for {0} missing {files}; see 'gg status'", files = plural_files(*.0))]
    StagedMissingFiles(usize),
}

const fn plural_files(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}

fn nothing_changed(missing: usize) -> String {
    match missing {
        0 => "nothing changed".to_string(),
        n => format!("nothing changed ({n} missing {}; see 'gg status')", plural_files(n)),
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to load configuration: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Process was terminated by a signal.
    #[error("process '{command}' was terminated")]
    Terminated { command: String },
}
