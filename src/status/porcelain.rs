// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reader for `git status --porcelain=v1 -z`.
//!
//! ```text
//! XY<SP><path>\0              ordinary record
//! XY<SP><path>\0<source>\0    X or Y is R/C
//! ```
//!
//! A rename git only sees in the working tree (` R`, after `git add -N`)
//! yields two entries: the new path as added and the old path as missing.
//! ` C` yields only the added copy.

use std::io::BufRead;

use crate::error::{GgResult, StatusError};

use super::{StatusCode, StatusEntry};

/// Arguments that make git emit the format this module reads.
pub const STATUS_ARGS: [&str; 4] = ["status", "--porcelain=v1", "-z", "-unormal"];

/// Iterator over porcelain records.
pub struct PorcelainReader<R> {
    reader: R,
    buf: Vec<u8>,
    pending: Option<StatusEntry>,
    done: bool,
}

impl<R: BufRead> PorcelainReader<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pending: None,
            done: false,
        }
    }

    /// Read one NUL-terminated field. `None` at a clean end of input.
    fn field(&mut self) -> GgResult<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\0', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.pop() != Some(b'\0') {
            return Err(malformed("record is not NUL-terminated"));
        }
        let text = String::from_utf8(std::mem::take(&mut self.buf))
            .map_err(|_| malformed("path is not UTF-8"))?;
        Ok(Some(text))
    }

    fn next_entry(&mut self) -> GgResult<Option<StatusEntry>> {
        let Some(record) = self.field()? else {
            return Ok(None);
        };
        let bytes = record.as_bytes();
        if bytes.len() < 4 || bytes[2] != b' ' {
            return Err(malformed(&format!("bad record {record:?}")));
        }
        let (x, y) = (bytes[0], bytes[1]);
        let code = classify(x, y)?;
        let mut entry = StatusEntry::new(code, &record[3..]);

        if matches!(x, b'R' | b'C') || matches!(y, b'R' | b'C') {
            let from = self
                .field()?
                .filter(|from| !from.is_empty())
                .ok_or_else(|| malformed(&format!("missing source for {}", entry.name)))?;
            if x != b' ' {
                entry.from = Some(from);
            } else if y == b'R' {
                self.pending = Some(StatusEntry::new(
                    StatusCode::Missing { staged: false },
                    from,
                ));
            }
        }
        Ok(Some(entry))
    }
}

impl<R: BufRead> Iterator for PorcelainReader<R> {
    type Item = GgResult<StatusEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(entry) = self.pending.take() {
            return Some(Ok(entry));
        }
        if self.done {
            return None;
        }
        let item = self.next_entry().transpose();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
        }
        item
    }
}

fn malformed(message: &str) -> crate::error::GgError {
    StatusError::MalformedPorcelain(message.to_string()).into()
}

/// Map an `XY` pair to a status code.
///
/// # Errors
///
/// Returns `StatusError::MalformedPorcelain` for letters git does not emit.
pub fn classify(x: u8, y: u8) -> GgResult<StatusCode> {
    const KNOWN: &[u8] = b" MTADRCU?!";
    if !KNOWN.contains(&x) || !KNOWN.contains(&y) {
        return Err(malformed(&format!(
            "unknown status {:?}",
            String::from_utf8_lossy(&[x, y])
        )));
    }

    Ok(match (x, y) {
        (b'D', b'D')
        | (b'A', b'U')
        | (b'U', b'D')
        | (b'U', b'A')
        | (b'D', b'U')
        | (b'A', b'A')
        | (b'U', b'U') => StatusCode::Unmerged,
        (b'?', b'?') => StatusCode::Untracked,
        (b'!', b'!') => StatusCode::Ignored,
        (x, b'D') => StatusCode::Missing { staged: x != b' ' },
        (b' ', b'R' | b'C') => StatusCode::Added,
        (b'D', _) => StatusCode::Removed,
        (b'R', _) => StatusCode::Renamed,
        (b'C', _) => StatusCode::Copied,
        (b'A', _) | (_, b'A') => StatusCode::Added,
        _ => StatusCode::Modified,
    })
}
