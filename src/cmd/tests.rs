// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::GitSession;
use super::commit::plan_commit;
use super::mail::plan_mail;
use super::push::{PushPlan, plan_push, verify_destination};
use super::status::{status_args, write_status};
use crate::cli::commit::CommitArgs;
use crate::cli::mail::MailArgs;
use crate::cli::push::PushArgs;
use crate::error::{CommitError, GerritError, GgError, PushError};
use crate::gerrit::GerritOptions;
use crate::git::backend::ShellBackend;
use crate::git::tool::GitTool;

fn have_git() -> bool {
    which::which("git").is_ok()
}

fn tool(dir: &Path) -> GitTool {
    GitTool::new("git", dir)
        .with_env("GIT_CONFIG_NOSYSTEM", "1")
        .with_env("GIT_CONFIG_GLOBAL", "/dev/null")
        .with_env("GIT_AUTHOR_NAME", "Test")
        .with_env("GIT_AUTHOR_EMAIL", "test@example.com")
        .with_env("GIT_COMMITTER_NAME", "Test")
        .with_env("GIT_COMMITTER_EMAIL", "test@example.com")
}

/// Work tree on `main` with one commit, plus a bare `origin` that has it.
fn repo_with_origin() -> (TempDir, GitTool) {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let work = temp.path().join("work");
    let origin = temp.path().join("origin.git");
    fs::create_dir(&work).expect("mkdir");

    let git = tool(&work);
    git.output(&["init", "--quiet"]).expect("init");
    git.output(&["symbolic-ref", "HEAD", "refs/heads/main"])
        .expect("symbolic-ref");
    fs::write(work.join("a.txt"), "one\n").expect("write");
    git.output(&["add", "a.txt"]).expect("add");
    git.output(&["commit", "--quiet", "-m", "first"]).expect("commit");

    git.output(&["init", "--quiet", "--bare", origin.to_str().expect("utf-8")])
        .expect("init bare");
    git.output(&["remote", "add", "origin", origin.to_str().expect("utf-8")])
        .expect("remote add");
    git.output(&["push", "--quiet", "origin", "main"]).expect("push");
    (temp, git)
}

fn push_args(rev: &str) -> PushArgs {
    PushArgs {
        rev: rev.to_string(),
        dest_ref: None,
        create: false,
        force: false,
        destination: None,
    }
}

fn mail_args() -> MailArgs {
    MailArgs {
        rev: "HEAD".to_string(),
        dest_branch: None,
        message: None,
        reviewers: Vec::new(),
        cc: Vec::new(),
        notify: None,
        notify_to: Vec::new(),
        notify_cc: Vec::new(),
        notify_bcc: Vec::new(),
        topic: None,
        labels: Vec::new(),
        publish_comments: false,
        destination: None,
    }
}

fn commit_args(files: &[&str]) -> CommitArgs {
    CommitArgs {
        amend: false,
        message: None,
        files: files.iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn test_push_plan_arguments() {
    let plan = PushPlan {
        repository: "origin".to_string(),
        commit: "8E1F1A9C0B2D3E4F5A6B7C8D9E0F1A2B3C4D5E6F".parse().unwrap(),
        dest_ref: "refs/heads/main".to_string(),
        force: true,
    };
    insta::assert_snapshot!(
        GitTool::command_line(&plan.git_args()),
        @"git push --force -- origin 8e1f1a9c0b2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f:refs/heads/main"
    );
}

#[test]
fn test_plan_push_infers_origin_and_branch() {
    if !have_git() {
        return;
    }
    let (_temp, git) = repo_with_origin();
    let session = GitSession::new(git.clone(), true);
    let query = session.query();

    let plan = plan_push(&git, query.as_ref(), &push_args("HEAD")).unwrap();
    let head = git.output(&["rev-parse", "HEAD"]).unwrap();
    assert_eq!(plan.repository, "origin");
    assert_eq!(plan.dest_ref, "refs/heads/main");
    assert_eq!(plan.commit.as_str(), head);
    verify_destination(&git, query.as_ref(), &plan).unwrap();
}

#[test]
fn test_plan_push_detached_needs_destination_ref() {
    if !have_git() {
        return;
    }
    let (_temp, git) = repo_with_origin();
    let query = ShellBackend::new(git.clone());
    let head = git.output(&["rev-parse", "HEAD"]).unwrap();

    let err = plan_push(&git, &query, &push_args(&head)).unwrap_err();
    assert!(matches!(
        err,
        GgError::Push(ref inner) if matches!(**inner, PushError::AmbiguousDestination)
    ));

    let mut args = push_args(&head);
    args.dest_ref = Some("release".to_string());
    let plan = plan_push(&git, &query, &args).unwrap();
    assert_eq!(plan.dest_ref, "refs/heads/release");
}

#[test]
fn test_verify_destination_reports_missing_ref() {
    if !have_git() {
        return;
    }
    let (_temp, git) = repo_with_origin();
    let query = ShellBackend::new(git.clone());
    let mut args = push_args("HEAD");
    args.dest_ref = Some("topic".to_string());
    let plan = plan_push(&git, &query, &args).unwrap();

    let err = verify_destination(&git, &query, &plan).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"remote origin does not have ref refs/heads/topic; pass --create to create it"
    );
}

#[test]
fn test_plan_mail_uses_upstream_branch() {
    if !have_git() {
        return;
    }
    let (_temp, git) = repo_with_origin();
    git.output(&["config", "branch.main.merge", "refs/heads/main"])
        .unwrap();
    let query = ShellBackend::new(git.clone());
    let options = GerritOptions {
        reviewers: vec!["a@example.com".to_string()],
        message: Some("second try".to_string()),
        ..GerritOptions::default()
    };

    let plan = plan_mail(&git, &query, &mail_args(), &options).unwrap();
    assert_eq!(plan.repository, "origin");
    assert_eq!(
        plan.review_ref,
        "refs/for/main%no-publish-comments,m=second+try,r=a@example.com"
    );
    assert_eq!(plan.git_args()[..3], ["push", "--", "origin"]);
}

#[test]
fn test_plan_mail_without_upstream() {
    if !have_git() {
        return;
    }
    let (_temp, git) = repo_with_origin();
    let query = ShellBackend::new(git.clone());

    let err = plan_mail(&git, &query, &mail_args(), &GerritOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        GgError::Push(ref inner) if matches!(**inner, PushError::AmbiguousDestination)
    ));

    let mut args = mail_args();
    args.dest_branch = Some("refs/heads/stable".to_string());
    let plan = plan_mail(&git, &query, &args, &GerritOptions::default()).unwrap();
    assert_eq!(plan.review_ref, "refs/for/stable%no-publish-comments");
}

#[test]
fn test_plan_mail_rejects_unencodable_branch() {
    if !have_git() {
        return;
    }
    let (_temp, git) = repo_with_origin();
    let query = ShellBackend::new(git.clone());
    let mut args = mail_args();
    args.dest_branch = Some("100%".to_string());

    let err = plan_mail(&git, &query, &args, &GerritOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        GgError::Gerrit(ref inner) if matches!(**inner, GerritError::InvalidOptionValue { .. })
    ));
}

#[test]
fn test_plan_commit_explicit_files() {
    let git = tool(Path::new("."));
    let mut args = commit_args(&["a.txt", "dir/b.txt"]);
    args.amend = true;
    args.message = Some("fix it".to_string());

    let commit = plan_commit(&git, &args).unwrap();
    insta::assert_snapshot!(
        GitTool::command_line(&commit),
        @r#"git commit --amend "--message=fix it" -- a.txt dir/b.txt"#
    );
}

#[test]
fn test_plan_commit_infers_changes() {
    if !have_git() {
        return;
    }
    let (temp, git) = repo_with_origin();
    let work = temp.path().join("work");
    fs::write(work.join("a.txt"), "two\n").unwrap();
    fs::write(work.join("new.txt"), "new\n").unwrap();
    fs::write(work.join("untracked.txt"), "?\n").unwrap();
    git.output(&["add", "new.txt"]).unwrap();

    let commit = plan_commit(&git, &commit_args(&[])).unwrap();
    assert_eq!(commit, ["commit", "--", ":/:a.txt", ":/:new.txt"]);
}

#[test]
fn test_plan_commit_nothing_changed() {
    if !have_git() {
        return;
    }
    let (temp, git) = repo_with_origin();
    fs::remove_file(temp.path().join("work").join("a.txt")).unwrap();

    let err = plan_commit(&git, &commit_args(&[])).unwrap_err();
    assert!(matches!(
        err,
        GgError::Commit(ref inner) if **inner == CommitError::NothingChanged { missing: 1 }
    ));
    insta::assert_snapshot!(err.to_string(), @"nothing changed (1 missing file; see 'gg status')");
}

#[test]
fn test_status_args_with_files() {
    assert_eq!(
        status_args(&["x".to_string()]),
        ["status", "--porcelain=v1", "-z", "-unormal", "--", "x"]
    );
    assert_eq!(status_args(&[]).len(), 4);
}

#[test]
fn test_write_status_lines() {
    if !have_git() {
        return;
    }
    let (temp, git) = repo_with_origin();
    let work = temp.path().join("work");
    fs::write(work.join("a.txt"), "two\n").unwrap();
    fs::write(work.join("b.txt"), "b\n").unwrap();

    let mut out = Vec::new();
    let count = write_status(&git, &[], &mut out).unwrap();
    assert_eq!(count, 2);
    insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r"
    M a.txt
    ? b.txt
    ");
}

#[test]
fn test_session_execute_runs_git() {
    if !have_git() {
        return;
    }
    let (_temp, git) = repo_with_origin();
    let session = GitSession::new(git.clone(), false);
    session.execute(&["config", "gg.test", "yes"]).unwrap();
    assert_eq!(
        git.query(&["config", "--get", "gg.test"]).unwrap().as_deref(),
        Some("yes")
    );

    let dry = GitSession::new(git.clone(), true);
    dry.execute(&["config", "gg.test", "no"]).unwrap();
    assert_eq!(
        git.query(&["config", "--get", "gg.test"]).unwrap().as_deref(),
        Some("yes")
    );
}
