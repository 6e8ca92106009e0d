// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [global]  output_log_level, file_log_level, log_file
//! [git]     path
//! [push]    create
//! [gerrit]  reviewers, cc, notify, publish_comments
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::gerrit::NotifyMode;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stderr output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::DEBUG,
            log_file: None,
        }
    }
}

/// Git executable selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Explicit path to git; looked up on `PATH` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Defaults for `gg push`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PushConfig {
    /// Allow creating refs on the remote without `--create`.
    pub create: bool,
}

/// Defaults for `gg mail`, merged with command-line options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GerritConfig {
    /// Reviewers added to every change.
    pub reviewers: Vec<String>,
    /// Addresses copied on every change.
    pub cc: Vec<String>,
    /// Notification mode when `--notify` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify: Option<NotifyMode>,
    /// Publish draft comments on upload.
    pub publish_comments: bool,
}
