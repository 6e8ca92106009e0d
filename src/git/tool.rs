// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git subprocess wrapper.
//!
//! ```text
//! GitTool { exe, dir, env }
//!   .output(args)          capture stdout, fail on non-zero
//!   .query(args)           exit 1 => None (git config --get, rev-parse --verify)
//!   .run_interactive(args) inherit stdio (push, commit)
//!   .start(args)           GitProcess: stream stdout, then wait()
//! ```
//!
//! A streaming process has its stderr drained on a helper thread, so git
//! never blocks on a full stderr pipe while the caller reads stdout.

use std::ffi::{OsStr, OsString};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use tracing::{debug, trace, warn};

use crate::error::{GitError, GgResult, ProcessError};

/// Handle for running git in one working directory.
#[derive(Debug, Clone)]
pub struct GitTool {
    exe: PathBuf,
    dir: PathBuf,
    env: Vec<(OsString, OsString)>,
}

impl GitTool {
    #[must_use]
    pub fn new(exe: impl Into<PathBuf>, dir: impl Into<PathBuf>) -> Self {
        Self {
            exe: exe.into(),
            dir: dir.into(),
            env: Vec::new(),
        }
    }

    /// Find the git executable.
    ///
    /// A configured path wins over a `PATH` lookup.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if git is not on `PATH`.
    pub fn locate(configured: Option<&Path>) -> GgResult<PathBuf> {
        if let Some(path) = configured {
            return Ok(path.to_path_buf());
        }
        which::which("git").map_err(|_| {
            ProcessError::ExecutableNotFound {
                name: "git".to_string(),
            }
            .into()
        })
    }

    /// Add an environment variable to every git invocation.
    #[must_use]
    pub fn with_env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Same executable and environment, different working directory.
    #[must_use]
    pub fn with_dir(&self, dir: impl Into<PathBuf>) -> Self {
        Self {
            exe: self.exe.clone(),
            dir: dir.into(),
            env: self.env.clone(),
        }
    }

    #[must_use]
    pub fn exe(&self) -> &Path {
        &self.exe
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Render `git <args>` for logs and dry runs.
    #[must_use]
    pub fn command_line<S: AsRef<OsStr>>(args: &[S]) -> String {
        let mut line = String::from("git");
        for arg in args {
            let arg = arg.as_ref().to_string_lossy();
            line.push(' ');
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                line.push('"');
                line.push_str(&arg);
                line.push('"');
            } else {
                line.push_str(&arg);
            }
        }
        line
    }

    fn command<S: AsRef<OsStr>>(&self, args: &[S]) -> Command {
        let mut command = Command::new(&self.exe);
        command.args(args).current_dir(&self.dir);
        for (key, value) in &self.env {
            command.env(key, value);
        }
        command
    }

    /// Run git and return its trimmed stdout.
    ///
    /// Sets `GIT_TERMINAL_PROMPT=0`: captured commands must never block on a
    /// credential prompt.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` (with git's stderr) on non-zero exit.
    pub fn output<S: AsRef<OsStr>>(&self, args: &[S]) -> GgResult<String> {
        let (status, stdout, stderr) = self.capture(args)?;
        if !status.success() {
            return Err(GitError::CommandFailed {
                command: Self::command_line(args),
                message: stderr.trim().to_string(),
            }
            .into());
        }
        Ok(stdout.trim().to_string())
    }

    /// Run a git lookup where exit code 1 means "no value".
    ///
    /// Empty output is also reported as `None`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` for any other non-zero exit.
    pub fn query<S: AsRef<OsStr>>(&self, args: &[S]) -> GgResult<Option<String>> {
        let (status, stdout, stderr) = self.capture(args)?;
        match status.code() {
            Some(0) => {
                let value = stdout.trim();
                Ok((!value.is_empty()).then(|| value.to_string()))
            }
            Some(1) => Ok(None),
            _ => Err(GitError::CommandFailed {
                command: Self::command_line(args),
                message: stderr.trim().to_string(),
            }
            .into()),
        }
    }

    fn capture<S: AsRef<OsStr>>(&self, args: &[S]) -> GgResult<(ExitStatus, String, String)> {
        let command_line = Self::command_line(args);
        debug!(cwd = %self.dir.display(), cmd = %command_line, "exec");

        let output = self
            .command(args)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command_line.clone(),
                source,
            })?;

        trace!(cmd = %command_line, status = ?output.status.code(), "completed");
        Ok((
            output.status,
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }

    /// Run git attached to the terminal.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git cannot be spawned or exits non-zero.
    pub fn run_interactive<S: AsRef<OsStr>>(&self, args: &[S]) -> GgResult<()> {
        let command_line = Self::command_line(args);
        debug!(cwd = %self.dir.display(), cmd = %command_line, "exec (interactive)");

        let status = self
            .command(args)
            .status()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command_line.clone(),
                source,
            })?;

        check_status(status, command_line)
    }

    /// Start git with stdout piped for incremental reading.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::SpawnFailed` if git cannot be started.
    pub fn start<S: AsRef<OsStr>>(&self, args: &[S]) -> GgResult<GitProcess> {
        let command_line = Self::command_line(args);
        debug!(cwd = %self.dir.display(), cmd = %command_line, "exec (streaming)");

        let mut child = self
            .command(args)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command_line.clone(),
                source,
            })?;

        let not_captured = |pipe: &str| ProcessError::SpawnFailed {
            command: command_line.clone(),
            source: std::io::Error::other(format!("{pipe} was not captured")),
        };
        let stdout = child
            .stdout
            .take()
            .map(BufReader::new)
            .ok_or_else(|| not_captured("stdout"))?;
        let mut stderr_pipe = child.stderr.take().ok_or_else(|| not_captured("stderr"))?;
        let stderr = thread::spawn(move || {
            let mut text = String::new();
            stderr_pipe.read_to_string(&mut text).map(|_| text)
        });

        Ok(GitProcess {
            child,
            stdout,
            stderr: Some(stderr),
            command_line,
            finished: false,
        })
    }
}

fn check_status(status: ExitStatus, command: String) -> GgResult<()> {
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(ProcessError::NonZeroExit { command, code }.into()),
        None => Err(ProcessError::Terminated { command }.into()),
    }
}

/// A running git process whose stdout is consumed as a stream.
///
/// Dropping it before [`GitProcess::wait`] kills and reaps the child.
pub struct GitProcess {
    child: Child,
    stdout: BufReader<ChildStdout>,
    stderr: Option<JoinHandle<std::io::Result<String>>>,
    command_line: String,
    finished: bool,
}

impl GitProcess {
    /// Buffered reader over git's stdout.
    pub fn stdout(&mut self) -> &mut BufReader<ChildStdout> {
        &mut self.stdout
    }

    #[must_use]
    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    /// Wait for git to exit and return its status and stderr.
    ///
    /// Stdout must be drained first, or a chatty child can block forever.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if stderr cannot be read or the child cannot be
    /// waited on.
    pub fn finish(mut self) -> GgResult<(ExitStatus, String)> {
        let stderr = match self.stderr.take() {
            Some(reader) => reader
                .join()
                .map_err(|_| std::io::Error::other("stderr reader panicked"))??,
            None => String::new(),
        };
        let status = self.child.wait()?;
        self.finished = true;
        Ok((status, stderr.trim().to_string()))
    }

    /// Wait for git to exit.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` carrying git's stderr on non-zero exit.
    pub fn wait(self) -> GgResult<()> {
        let command = self.command_line.clone();
        let (status, message) = self.finish()?;
        if status.success() {
            return Ok(());
        }
        Err(GitError::CommandFailed { command, message }.into())
    }
}

impl Drop for GitProcess {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if let Err(e) = self.child.kill() {
            warn!(cmd = %self.command_line, error = %e, "failed to kill git");
        }
        let _ = self.child.wait();
    }
}
