// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Diagnostics for gg.
//!
//! ```text
//! [global] output_log_level --> stderr   (no timestamps, color on a tty)
//! [global] file_log_level   --> log_file (appended, span close events)
//!
//! LogLevel:  0=OFF  1=ERROR  2=WARN  3=INFO
//!            4=DEBUG  5=TRACE  6=DUMP(+gix)
//! ```
//!
//! Stdout is never written here: it carries `gg status` output and the
//! commands `--dry` prints.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::types::GlobalConfig;
use crate::error::{ConfigError, Result};

/// Verbosity from 0 (silent) to 6 (everything, dependencies included).
///
/// 3 reports which remote and ref were picked, 4 adds every git invocation,
/// 5 adds parser detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LogLevel(u8);

impl LogLevel {
    pub const SILENT: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);
    pub const DUMP: Self = Self(6);

    /// `EnvFilter` directive. Below DUMP only gg's own events pass.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::SILENT => "off",
            Self::ERROR => "gg_rs=error",
            Self::WARN => "gg_rs=warn",
            Self::INFO => "gg_rs=info",
            Self::DEBUG => "gg_rs=debug",
            Self::TRACE => "gg_rs=trace",
            _ => "trace",
        }
    }

    fn filter(self) -> EnvFilter {
        EnvFilter::new(self.directive())
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::WARN
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(level: u8) -> std::result::Result<Self, Self::Error> {
        if level <= Self::DUMP.0 {
            Ok(Self(level))
        } else {
            Err(ConfigError::InvalidValue {
                section: "global".to_string(),
                key: "log_level".to_string(),
                message: format!("log level must be 0-6, got {level}"),
            })
        }
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

/// Where log events go and how many of them.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct LogConfig {
    #[builder(default)]
    pub console: LogLevel,
    #[builder(default = LogLevel::DEBUG)]
    pub file: LogLevel,
    /// No file layer when unset.
    pub path: Option<PathBuf>,
}

impl From<&GlobalConfig> for LogConfig {
    fn from(global: &GlobalConfig) -> Self {
        Self::builder()
            .console(global.output_log_level)
            .file(global.file_log_level)
            .maybe_path(global.log_file.clone())
            .build()
    }
}

/// Flushes the log file when dropped; hold it until `main` returns.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file or its directory cannot be created.
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let (file, file_guard) = config
        .path
        .as_deref()
        .map(|path| file_layer(path, config.file))
        .transpose()?
        .unzip();

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .with_filter(config.console.filter());

    tracing_subscriber::registry()
        .with(file)
        .with(console_layer)
        .init();

    Ok(LogGuard { _file: file_guard })
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn file_layer(path: &Path, level: LogLevel) -> Result<(BoxedLayer, WorkerGuard)> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(level.filter())
        .boxed();
    Ok((layer, guard))
}
