// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Message escaping for the `m=` option.
//!
//! ```text
//! encode: [A-Za-z0-9-] kept, ' ' -> '+', anything else -> %XX
//! decode: '_' | '+' -> ' ', %XX -> byte, result must be UTF-8
//! ```
//!
//! `.` and `~` are escaped too: left bare they can form `..` or `~`,
//! which git refuses in a ref name.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::error::{GerritError, GgResult};

/// Bytes escaped in a message. Only alphanumerics and `-` pass through.
const MESSAGE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-');

/// Escape a review message so it survives inside a ref name.
#[must_use]
pub fn escape_message(message: &str) -> String {
    utf8_percent_encode(message, MESSAGE)
        .to_string()
        .replace("%20", "+")
}

/// Reverse [`escape_message`], also accepting `_` for space.
///
/// # Errors
///
/// Returns `GerritError::MalformedMessage` for a truncated or non-hex escape,
/// or if the decoded bytes are not UTF-8.
pub fn unescape_message(key: &str, value: &str) -> GgResult<String> {
    let malformed = |message: String| GerritError::MalformedMessage {
        key: key.to_string(),
        message,
    };

    // percent_decode passes bad escapes through; gg refuses them.
    let bytes = value.as_bytes();
    if let Some(offset) = bytes.iter().enumerate().position(|(i, &byte)| {
        byte == b'%'
            && !bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit))
    }) {
        return Err(malformed(format!("invalid escape at offset {offset}")).into());
    }

    let spaced = value.replace(['_', '+'], " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| malformed("not valid UTF-8".to_string()).into())
}
