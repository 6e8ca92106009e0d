// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader, LOCAL_CONFIG_FILE};
use crate::gerrit::NotifyMode;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::WARN);
    assert_eq!(config.global.file_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_file, None);
    assert_eq!(config.git.path, None);
    assert!(!config.push.create);
    assert!(config.gerrit.reviewers.is_empty());
    assert_eq!(config.gerrit.notify, None);
    assert!(!config.gerrit.publish_comments);
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
output_log_level = 4
log_file = "gg.log"

[git]
path = "/usr/local/bin/git"

[push]
create = true

[gerrit]
reviewers = ["alice@example.com", "bob@example.com"]
notify = "OWNER_REVIEWERS"
publish_comments = true
"#;

    let config = Config::parse(toml).expect("valid config");
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_file, Some(PathBuf::from("gg.log")));
    assert_eq!(config.git.path, Some(PathBuf::from("/usr/local/bin/git")));
    assert!(config.push.create);
    assert_eq!(
        config.gerrit.reviewers,
        ["alice@example.com", "bob@example.com"]
    );
    assert!(config.gerrit.cc.is_empty());
    assert_eq!(config.gerrit.notify, Some(NotifyMode::OwnerReviewers));
    assert!(config.gerrit.publish_comments);
}

#[test]
fn test_deny_unknown_fields() {
    assert!(Config::parse("[push]\nforce = true\n").is_err());
    assert!(Config::parse("[paths]\nprefix = \"/x\"\n").is_err());
}

#[test]
fn test_invalid_values_rejected() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
    assert!(Config::parse("[gerrit]\nnotify = \"EVERYONE\"\n").is_err());
    assert!(Config::parse("[gerrit]\nreviewers = [\"a@x\", \"\"]\n").is_err());
    assert!(Config::parse("[git]\npath = \"\"\n").is_err());
}

#[test]
fn test_config_loader_tracks_files() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let present = temp.path().join("present.toml");
    std::fs::write(&present, "[push]\ncreate = true\n").expect("write");

    let loader = ConfigLoader::new()
        .add_toml_file_optional(temp.path().join("absent.toml"))
        .add_toml_file_optional(&present)
        .add_toml_str("[gerrit]\npublish_comments = true\n");

    let formatted: Vec<String> = loader
        .format_loaded_files()
        .iter()
        .map(|line| line.replace(&temp.path().display().to_string(), "<tmp>"))
        .collect();
    insta::assert_snapshot!(formatted.join("\n"), @r"
    1. [optional] <tmp>/present.toml
    2. [string] <string>
    ");

    let config = loader.build().expect("build");
    assert!(config.push.create);
    assert!(config.gerrit.publish_comments);
}

#[test]
fn test_config_loader_missing_required_file() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let result = ConfigLoader::new()
        .add_toml_file(temp.path().join("missing.toml"))
        .build();
    assert!(result.is_err());
}

#[test]
fn test_config_loader_layered_sources() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::write(
        temp.path().join(LOCAL_CONFIG_FILE),
        "[gerrit]\nreviewers = [\"local@example.com\"]\nnotify = \"NONE\"\n",
    )
    .expect("write local");
    let team = temp.path().join("team.toml");
    std::fs::write(&team, "[gerrit]\nnotify = \"ALL\"\n").expect("write team");

    let config = Config::standard_loader(temp.path(), &[team])
        .set("push.create", true)
        .build()
        .expect("build");

    // team.toml replaces notify but leaves reviewers from gg.toml.
    assert_eq!(config.gerrit.reviewers, ["local@example.com"]);
    assert_eq!(config.gerrit.notify, Some(NotifyMode::All));
    assert!(config.push.create);
}

#[test]
fn test_override_beats_file() {
    let config = ConfigLoader::new()
        .add_toml_str("[global]\noutput_log_level = 1\n")
        .set("global.output_log_level", 5_i64)
        .build()
        .expect("build");
    assert_eq!(config.global.output_log_level, LogLevel::TRACE);
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: the variable names are unique to this test.
    unsafe {
        std::env::set_var("GGTEST_PUSH__CREATE", "true");
        std::env::set_var("GGTEST_GERRIT__NOTIFY", "OWNER");
        std::env::set_var("GGTEST_GERRIT__REVIEWERS", "a@example.com,b@example.com");
    }

    let result = ConfigLoader::new().with_env_prefix("GGTEST").build();

    // SAFETY: see above.
    unsafe {
        std::env::remove_var("GGTEST_PUSH__CREATE");
        std::env::remove_var("GGTEST_GERRIT__NOTIFY");
        std::env::remove_var("GGTEST_GERRIT__REVIEWERS");
    }

    let config = result.expect("build");
    assert!(config.push.create);
    assert_eq!(config.gerrit.notify, Some(NotifyMode::Owner));
    assert_eq!(
        config.gerrit.reviewers,
        ["a@example.com", "b@example.com"]
    );
}
