// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Push destinations.
//!
//! ```text
//! resolve_destination      branch.X.pushRemote > remote.pushDefault
//!                          > branch.X.remote > origin
//! resolve_destination_ref  -d REF | source ref
//! listing_target           remote.X.pushurl | remote argument
//! ref_exists               git ls-remote --quiet --refs -- <target> <ref>
//! ```

pub mod resolve;
pub mod verify;


pub use resolve::{listing_target, resolve_destination, resolve_destination_ref};
pub use verify::{ref_exists, scan_listing};
