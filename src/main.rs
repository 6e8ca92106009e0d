// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> GitSession --> Command Dispatch
//!   Version | Push | Mail | Commit | Status
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, info_span};

use gg_rs::cli::global::GlobalOptions;
use gg_rs::cli::{self, Command};
use gg_rs::cmd::GitSession;
use gg_rs::cmd::commit::run_commit_command;
use gg_rs::cmd::mail::run_mail_command;
use gg_rs::cmd::push::run_push_command;
use gg_rs::cmd::status::run_status_command;
use gg_rs::config::Config;
use gg_rs::error::Result;
use gg_rs::git::tool::GitTool;
use gg_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let dir = match working_dir(&cli.global) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let (config, sources) = match load_config(&cli.global, &dir) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&LogConfig::from(&config.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    for source in &sources {
        debug!(source = %source, "config");
    }

    match dispatch_command(&cli, &config, &dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn working_dir(global: &GlobalOptions) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    Ok(match &global.dir {
        Some(dir) => cwd.join(dir),
        None => cwd,
    })
}

/// Load configuration; also returns the files it was read from, for logging
/// once the subscriber is up.
fn load_config(global: &GlobalOptions, dir: &Path) -> Result<(Config, Vec<String>)> {
    let loader = global.to_config_overrides().into_iter().fold(
        Config::standard_loader(dir, &global.configs),
        |loader, (key, value)| loader.set(key, value),
    );
    let sources = loader.format_loaded_files();
    Ok((loader.build()?, sources))
}

fn dispatch_command(cli: &cli::Cli, config: &Config, dir: &Path) -> Result<()> {
    let Some(command) = &cli.command else {
        eprintln!("No command specified. Use --help for usage information.");
        return Err(anyhow::anyhow!("No command specified"));
    };

    let _span = info_span!("command", name = command.name()).entered();
    let session = || open_session(config, dir, cli.global.dry);
    match command {
        Command::Version => {
            handle_version_command();
            Ok(())
        }
        Command::Push(args) => run_push_command(args, config, &session()?),
        Command::Mail(args) => run_mail_command(args, config, &session()?),
        Command::Commit(args) => run_commit_command(args, &session()?),
        Command::Status(args) => run_status_command(args, session()?.git()),
    }
}

fn handle_version_command() {
    println!("gg {}", env!("CARGO_PKG_VERSION"));
}

fn open_session(config: &Config, dir: &Path, dry_run: bool) -> Result<GitSession> {
    let exe = GitTool::locate(config.git.path.as_deref())?;
    debug!(git = %exe.display(), dir = %dir.display(), dry_run, "session");
    Ok(GitSession::new(GitTool::new(exe, dir), dry_run))
}
