// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parser for `gg status` output.
//!
//! ```text
//! "<code> <name>"     new entry          expecting_source = true
//! "  <source>"        source of previous expecting_source = false
//! anything malformed  sink.record(err)   expecting_source = false
//! ```
//!
//! The sink decides whether an error stops the parse. The status letter is
//! not checked; unfamiliar letters come back as [`StatusCode::Other`].

use std::collections::HashSet;
use std::io::BufRead;

use tracing::warn;

use crate::error::{GgResult, StatusError};

use super::{StatusCode, StatusEntry};

/// Receives line errors while parsing.
pub trait DiagnosticSink {
    /// Record one error. Returning `Err` aborts the parse.
    ///
    /// # Errors
    ///
    /// Implementations that stop at the first problem return it here.
    fn record(&mut self, error: StatusError) -> GgResult<()>;
}

/// Abort on the first error.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailFast;

impl DiagnosticSink for FailFast {
    fn record(&mut self, error: StatusError) -> GgResult<()> {
        Err(error.into())
    }
}

/// Keep every error and carry on.
#[derive(Debug, Default, Clone)]
pub struct Collect {
    pub errors: Vec<StatusError>,
}

impl DiagnosticSink for Collect {
    fn record(&mut self, error: StatusError) -> GgResult<()> {
        self.errors.push(error);
        Ok(())
    }
}

/// Log each error as a warning and count it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink {
    pub count: usize,
}

impl DiagnosticSink for LogSink {
    fn record(&mut self, error: StatusError) -> GgResult<()> {
        warn!(%error, "status");
        self.count += 1;
        Ok(())
    }
}

/// Entries in input order plus how many errors were recorded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedStatus {
    pub entries: Vec<StatusEntry>,
    pub error_count: usize,
}

/// Parse `gg status` lines from `reader`.
///
/// # Errors
///
/// Returns an I/O error from the reader, or whatever the sink returns.
pub fn parse_status<R, S>(reader: R, sink: &mut S) -> GgResult<ParsedStatus>
where
    R: BufRead,
    S: DiagnosticSink + ?Sized,
{
    let mut parsed = ParsedStatus::default();
    let mut seen: HashSet<String> = HashSet::new();
    let mut expecting_source = false;

    let mut report = |parsed: &mut ParsedStatus, error: StatusError| -> GgResult<()> {
        parsed.error_count += 1;
        sink.record(error)
    };

    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let number = index + 1;

        let text = match std::str::from_utf8(&line) {
            Ok(text) if text.len() >= 3 && line[1] == b' ' => text,
            _ => {
                expecting_source = false;
                report(
                    &mut parsed,
                    StatusError::LineFormat {
                        line: number,
                        text: String::from_utf8_lossy(&line).into_owned(),
                    },
                )?;
                continue;
            }
        };
        let name = &text[2..];

        if line[0] == b' ' {
            let previous = parsed.entries.last_mut().filter(|_| expecting_source);
            let Some(previous) = previous else {
                report(
                    &mut parsed,
                    StatusError::OrphanSource {
                        line: number,
                        name: name.to_string(),
                    },
                )?;
                continue;
            };
            previous.from = Some(name.to_string());
            expecting_source = false;
            continue;
        }

        if !seen.insert(name.to_string()) {
            expecting_source = false;
            report(
                &mut parsed,
                StatusError::DuplicateEntry {
                    line: number,
                    name: name.to_string(),
                },
            )?;
            continue;
        }

        let code = StatusCode::from_letter(line[0]);
        parsed.entries.push(StatusEntry::new(code, name));
        expecting_source = true;
    }

    Ok(parsed)
}
