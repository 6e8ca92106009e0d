// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                           push / mail / commit / status
//!                +----------+----------+
//!                           v
//!     ,-------------,-------------,--------------,
//!     |   remote    |   gerrit    |    status    |
//!     | resolve +   | refs/for/   | parse, read, |
//!     | ls-remote   | codec       | select       |
//!     '------+------'-------------'------+-------'
//!            |                           |
//!            v                           v
//!     ,---------------------------------------,
//!     |  git   GitQuery (gix | shell),        |
//!     |        GitTool, revisions             |
//!     '---------------------------------------'
//!   +-----------------------------------------+
//!   |  foundation   config, error, logging    |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod gerrit;
pub mod git;
pub mod logging;
pub mod remote;
pub mod status;
