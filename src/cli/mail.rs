// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `mail` command.
//!
//! ```text
//! gg mail -R alice@example.com -m "Rebased on main"
//!   -> git push -- origin <hash>:refs/for/main%no-publish-comments,m=Rebased+on+main,r=alice@example.com
//! ```

use clap::{ArgAction, Args};

use crate::config::types::GerritConfig;
use crate::gerrit::{GerritOptions, NotifyMode};

/// Arguments for the `mail` command.
#[derive(Debug, Clone, Args)]
pub struct MailArgs {
    /// Source revision.
    #[arg(short = 'r', long = "rev", value_name = "REV", default_value = "HEAD")]
    pub rev: String,

    /// Destination branch; defaults to the upstream of the source branch.
    #[arg(short = 'd', long = "dest", value_name = "BRANCH")]
    pub dest_branch: Option<String>,

    /// Message shown on the new patch set.
    #[arg(short = 'm', long = "message", value_name = "MSG")]
    pub message: Option<String>,

    /// Reviewer (repeatable, or comma-separated).
    #[arg(short = 'R', long = "reviewer", value_name = "ADDR", action = ArgAction::Append)]
    pub reviewers: Vec<String>,

    /// Address to CC (repeatable, or comma-separated).
    #[arg(long = "cc", value_name = "ADDR", action = ArgAction::Append)]
    pub cc: Vec<String>,

    /// Who gets notified.
    #[arg(long = "notify", value_name = "MODE", ignore_case = true)]
    pub notify: Option<NotifyMode>,

    /// Extra address to notify.
    #[arg(long = "notify-to", value_name = "ADDR", action = ArgAction::Append)]
    pub notify_to: Vec<String>,

    /// Extra address to notify as CC.
    #[arg(long = "notify-cc", value_name = "ADDR", action = ArgAction::Append)]
    pub notify_cc: Vec<String>,

    /// Extra address to notify as BCC.
    #[arg(long = "notify-bcc", value_name = "ADDR", action = ArgAction::Append)]
    pub notify_bcc: Vec<String>,

    /// Topic for the change.
    #[arg(long = "topic", value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Label to apply, such as Code-Review+1.
    #[arg(long = "label", value_name = "LABEL", action = ArgAction::Append)]
    pub labels: Vec<String>,

    /// Publish draft comments.
    #[arg(long = "publish-comments")]
    pub publish_comments: bool,

    /// Destination repository (remote name or URL).
    #[arg(value_name = "DST")]
    pub destination: Option<String>,
}

impl MailArgs {
    /// Review options: configured reviewers and cc first, then the flags.
    #[must_use]
    pub fn to_options(&self, defaults: &GerritConfig) -> GerritOptions {
        let concat = |configured: &[String], given: &[String]| -> Vec<String> {
            configured.iter().chain(given).cloned().collect()
        };
        GerritOptions {
            publish_comments: self.publish_comments || defaults.publish_comments,
            message: self.message.clone(),
            reviewers: concat(&defaults.reviewers, &self.reviewers),
            cc: concat(&defaults.cc, &self.cc),
            notify: self.notify.or(defaults.notify),
            notify_to: self.notify_to.clone(),
            notify_cc: self.notify_cc.clone(),
            notify_bcc: self.notify_bcc.clone(),
            topic: self.topic.clone(),
            labels: self.labels.clone(),
        }
    }
}
