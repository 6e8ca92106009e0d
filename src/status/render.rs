// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `gg status` output.

use std::io::{self, Write};

use super::{StatusCode, StatusEntry};

/// Write one entry in the format [`super::parse_status`] reads.
///
/// ```text
/// A new.txt        rename of old.txt
///   old.txt
/// R old.txt
/// ```
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_entry<W: Write + ?Sized>(out: &mut W, entry: &StatusEntry) -> io::Result<()> {
    writeln!(out, "{} {}", entry.code.letter(), entry.name)?;
    if let Some(from) = &entry.from {
        writeln!(out, "  {from}")?;
        if entry.code == StatusCode::Renamed {
            writeln!(out, "{} {from}", StatusCode::Removed.letter())?;
        }
    }
    Ok(())
}
