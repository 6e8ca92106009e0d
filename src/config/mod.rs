// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gg.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gg.toml (cwd, optional)
//! 3. --config FILE (repeatable, in order)
//! 4. GG_* env vars
//! 5. CLI overrides (--git, --log-level, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GG_PUSH__CREATE=true            → push.create = true
//! GG_GERRIT__NOTIFY=OWNER         → gerrit.notify = "OWNER"
//! GG_GERRIT__REVIEWERS=a@x,b@y    → gerrit.reviewers = ["a@x", "b@y"]
//! GG_GLOBAL__OUTPUT_LOG_LEVEL=4   → global.output_log_level = 4
//! ```
//!
//! Git's own configuration (remotes, upstreams) is never duplicated here; it
//! is read through [`crate::git::backend::GitQuery`].

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GerritConfig, GitConfig, GlobalConfig, PushConfig};

/// Name of the per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = "gg.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "GG";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging options.
    pub global: GlobalConfig,
    /// Git executable.
    pub git: GitConfig,
    /// `gg push` defaults.
    pub push: PushConfig,
    /// `gg mail` defaults.
    pub gerrit: GerritConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gg_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gg.toml")
    ///     .add_toml_file("team.toml")
    ///     .with_env_prefix("GG")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Standard source stack: `gg.toml` in `dir`, then `extra` files, then env.
    ///
    /// CLI overrides are added by the caller with [`ConfigLoader::set`].
    #[must_use]
    pub fn standard_loader(dir: &Path, extra: &[PathBuf]) -> ConfigLoader {
        extra.iter().fold(
            Self::builder().add_toml_file_optional(dir.join(LOCAL_CONFIG_FILE)),
            ConfigLoader::add_toml_file,
        )
        .with_env_prefix(ENV_PREFIX)
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Reject values that deserialize but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty git path or an empty
    /// reviewer / cc address.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self
            .git
            .path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        for (key, list) in [("reviewers", &self.gerrit.reviewers), ("cc", &self.gerrit.cc)] {
            if list.iter().any(|entry| entry.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    section: "gerrit".to_string(),
                    key: key.to_string(),
                    message: "addresses must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
