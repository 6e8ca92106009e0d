// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Gerrit "magic ref" codec.
//!
//! ```text
//! refs/for/<branch>%<opt>,<opt>,...
//!                   opt = key | key=value
//!
//! encode order:
//!   [no-]publish-comments  (always)
//!   m  r*  cc*  notify  notify-to*  notify-cc*  notify-bcc*  topic  l*
//!
//! decode:
//!   split at first '%', then on ','; empty segments skipped
//!   key          -> None
//!   key=value    -> Some(value)   (m/message: unescaped)
//! ```
//!
//! Encoding takes [`GerritOptions`]; decoding yields a [`GerritRef`], which
//! keeps unknown keys as-is.

mod escape;


use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GerritError, GgResult};

pub use escape::{escape_message, unescape_message};

/// Prefix of review refs.
pub const REVIEW_PREFIX: &str = "refs/for/";

/// Who Gerrit emails about the upload.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotifyMode {
    None,
    Owner,
    OwnerReviewers,
    All,
}

impl NotifyMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Owner => "OWNER",
            Self::OwnerReviewers => "OWNER_REVIEWERS",
            Self::All => "ALL",
        }
    }
}

impl fmt::Display for NotifyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review options for one upload. Empty fields leave the server default.
///
/// List fields accept comma-separated entries (`"a@x,b@y"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GerritOptions {
    pub publish_comments: bool,
    pub message: Option<String>,
    pub reviewers: Vec<String>,
    pub cc: Vec<String>,
    pub notify: Option<NotifyMode>,
    pub notify_to: Vec<String>,
    pub notify_cc: Vec<String>,
    pub notify_bcc: Vec<String>,
    pub topic: Option<String>,
    pub labels: Vec<String>,
}

/// Options as `(key, value)` pairs in wire order.
type OptionPairs = Vec<(&'static str, Option<String>)>;

impl GerritOptions {
    /// Check that `branch` and the options can be carried by a review ref.
    ///
    /// Values are held to the rules of `git check-ref-format`, then the
    /// whole encoded ref is checked the same way.
    ///
    /// # Errors
    ///
    /// Returns `GerritError::InvalidOptionValue` for a branch containing `%`,
    /// a topic containing `,`, or anything git would refuse as a ref name.
    pub fn validate(&self, branch: &str) -> GgResult<()> {
        let invalid = |key: &str, value: &str, reason| GerritError::InvalidOptionValue {
            key: key.to_string(),
            value: value.to_string(),
            reason,
        };

        if branch.contains('%') {
            return Err(invalid("branch", branch, "'%' starts the option list").into());
        }
        if let Some(topic) = self.topic.as_deref().filter(|t| t.contains(',')) {
            return Err(invalid("topic", topic, "',' separates options").into());
        }

        let mut values = vec![("branch", branch)];
        values.extend(self.topic.as_deref().map(|topic| ("topic", topic)));
        for (key, entries) in [
            ("r", &self.reviewers),
            ("cc", &self.cc),
            ("notify-to", &self.notify_to),
            ("notify-cc", &self.notify_cc),
            ("notify-bcc", &self.notify_bcc),
            ("l", &self.labels),
        ] {
            values.extend(entries.iter().map(|entry| (key, entry.as_str())));
        }
        for (key, value) in values {
            ref_safe(value).map_err(|reason| invalid(key, value, reason))?;
        }

        let reference = encode(branch, self);
        check_ref_format(&reference).map_err(|reason| invalid("ref", &reference, reason))?;
        Ok(())
    }

    fn pairs(&self) -> OptionPairs {
        let publish = if self.publish_comments {
            "publish-comments"
        } else {
            "no-publish-comments"
        };
        let mut pairs = vec![(publish, None)];

        if let Some(message) = &self.message {
            pairs.push(("m", Some(message.clone())));
        }
        push_list(&mut pairs, "r", &self.reviewers);
        push_list(&mut pairs, "cc", &self.cc);
        if let Some(notify) = self.notify {
            pairs.push(("notify", Some(notify.as_str().to_string())));
        }
        push_list(&mut pairs, "notify-to", &self.notify_to);
        push_list(&mut pairs, "notify-cc", &self.notify_cc);
        push_list(&mut pairs, "notify-bcc", &self.notify_bcc);
        if let Some(topic) = &self.topic {
            pairs.push(("topic", Some(topic.clone())));
        }
        push_list(&mut pairs, "l", &self.labels);
        pairs
    }

    /// The option map [`decode`] produces for the ref [`encode`] builds.
    #[must_use]
    pub fn to_option_map(&self) -> OptionMap {
        let mut map = OptionMap::new();
        for (key, value) in self.pairs() {
            map.entry(key.to_string()).or_default().push(value);
        }
        map
    }
}

fn push_list(pairs: &mut OptionPairs, key: &'static str, entries: &[String]) {
    pairs.extend(
        entries
            .iter()
            .flat_map(|entry| entry.split(','))
            .filter(|piece| !piece.is_empty())
            .map(|piece| (key, Some(piece.to_string()))),
    );
}

/// Characters and sequences git refuses anywhere in a ref name.
fn ref_safe(value: &str) -> Result<(), &'static str> {
    if value.chars().any(|c| c.is_ascii_control()) {
        return Err("control characters are not allowed in a ref");
    }
    if let Some(c) = value
        .chars()
        .find(|c| matches!(c, ' ' | '~' | '^' | ':' | '?' | '*' | '[' | '\\'))
    {
        return Err(match c {
            ' ' => "spaces are not allowed in a ref",
            _ => "'~', '^', ':', '?', '*', '[' and '\\' are not allowed in a ref",
        });
    }
    if value.contains("..") {
        return Err("'..' is not allowed in a ref");
    }
    if value.contains("@{") {
        return Err("'@{' is not allowed in a ref");
    }
    Ok(())
}

/// The component rules of `git check-ref-format` on a full ref name.
fn check_ref_format(reference: &str) -> Result<(), &'static str> {
    ref_safe(reference)?;
    if reference == "@" {
        return Err("'@' alone is not a ref");
    }
    if reference.ends_with('.') {
        return Err("a ref cannot end with '.'");
    }
    if reference.starts_with('/') || reference.ends_with('/') || reference.contains("//") {
        return Err("empty path component in ref");
    }
    for component in reference.split('/') {
        if component.starts_with('.') {
            return Err("a ref component cannot start with '.'");
        }
        if component.ends_with(".lock") {
            return Err("a ref component cannot end with '.lock'");
        }
    }
    Ok(())
}

/// Decoded options: key to values in encounter order.
///
/// `None` is a bare `key`, distinct from `key=` (`Some("")`).
pub type OptionMap = BTreeMap<String, Vec<Option<String>>>;

/// A review ref split into its base ref and options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GerritRef {
    pub base: String,
    pub options: OptionMap,
}

impl GerritRef {
    /// Target branch of a `refs/for/` base.
    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        self.base.strip_prefix(REVIEW_PREFIX)
    }

    /// Values recorded for `key`, empty if absent.
    #[must_use]
    pub fn values(&self, key: &str) -> &[Option<String>] {
        self.options.get(key).map_or(&[][..], Vec::as_slice)
    }

    /// First decoded message (`m` or `message`).
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        ["m", "message"]
            .iter()
            .find_map(|key| self.values(key).first()?.as_deref())
    }
}

/// Build the push ref for `branch` with `options`.
///
/// Call [`GerritOptions::validate`] first; this function does not reject
/// anything.
#[must_use]
pub fn encode(branch: &str, options: &GerritOptions) -> String {
    let mut out = format!("{REVIEW_PREFIX}{branch}");
    for (i, (key, value)) in options.pairs().into_iter().enumerate() {
        out.push(if i == 0 { '%' } else { ',' });
        out.push_str(key);
        if let Some(value) = value {
            out.push('=');
            if key == "m" {
                out.push_str(&escape_message(&value));
            } else {
                out.push_str(&value);
            }
        }
    }
    out
}

/// Split a ref into base and options.
///
/// # Errors
///
/// Returns `GerritError::MalformedMessage` if an `m`/`message` value has a
/// bad percent escape or does not decode to UTF-8.
pub fn decode(reference: &str) -> GgResult<GerritRef> {
    let Some((base, suffix)) = reference.split_once('%') else {
        return Ok(GerritRef {
            base: reference.to_string(),
            options: OptionMap::new(),
        });
    };

    let mut options = OptionMap::new();
    for segment in suffix.split(',').filter(|s| !s.is_empty()) {
        let (key, value) = match segment.split_once('=') {
            Some((key, value)) if key == "m" || key == "message" => {
                (key, Some(unescape_message(key, value)?))
            }
            Some((key, value)) => (key, Some(value.to_string())),
            None => (segment, None),
        };
        options.entry(key.to_string()).or_default().push(value);
    }

    Ok(GerritRef {
        base: base.to_string(),
        options,
    })
}
