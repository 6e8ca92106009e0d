// gg-rs: Workflow-oriented front end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::BufRead;
use std::path::Path;

use crate::error::{GgError, GitError};
use crate::git::revision::{CommitHash, resolve_revision};
use crate::git::tool::GitTool;
use tempfile::TempDir;

fn have_git() -> bool {
    which::which("git").is_ok()
}

/// Repository with one commit on `main`, created through [`GitTool`].
fn repo_with_commit() -> (TempDir, GitTool) {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let git = GitTool::new("git", temp.path())
        .with_env("GIT_AUTHOR_NAME", "Test")
        .with_env("GIT_AUTHOR_EMAIL", "test@example.com")
        .with_env("GIT_COMMITTER_NAME", "Test")
        .with_env("GIT_COMMITTER_EMAIL", "test@example.com");
    git.output(&["init", "--quiet"]).expect("init");
    git.output(&["symbolic-ref", "HEAD", "refs/heads/main"])
        .expect("symbolic-ref");
    git.output(&["commit", "--quiet", "--allow-empty", "-m", "first"])
        .expect("commit");
    (temp, git)
}

#[test]
fn test_command_line_quotes_whitespace() {
    let line = GitTool::command_line(&["commit", "-m", "fix the thing", "--", ""]);
    insta::assert_snapshot!(line, @r#"git commit -m "fix the thing" -- """#);
}

#[test]
fn test_output_failure_carries_stderr() {
    if !have_git() {
        return;
    }
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let git = GitTool::new("git", temp.path());
    let err = git
        .output(&["rev-parse", "--git-dir"])
        .expect_err("not a repository");
    let GgError::Git(inner) = err else {
        panic!("unexpected error: {err}");
    };
    let GitError::CommandFailed { command, message } = *inner else {
        panic!("unexpected git error");
    };
    assert_eq!(command, "git rev-parse --git-dir");
    assert!(message.contains("not a git repository"), "{message}");
}

#[test]
fn test_query_maps_exit_one_to_none() {
    if !have_git() {
        return;
    }
    let (_temp, git) = repo_with_commit();
    assert_eq!(git.query(&["config", "--get", "gg.missing"]).expect("query"), None);

    git.output(&["config", "gg.present", "yes"]).expect("config");
    assert_eq!(
        git.query(&["config", "--get", "gg.present"])
            .expect("query")
            .as_deref(),
        Some("yes")
    );
}

#[test]
fn test_start_streams_stdout() {
    if !have_git() {
        return;
    }
    let (_temp, git) = repo_with_commit();
    let mut process = git
        .start(&["for-each-ref", "--format=%(refname)"])
        .expect("start");
    let refs: Vec<String> = process
        .stdout()
        .lines()
        .collect::<Result<_, _>>()
        .expect("read");
    process.wait().expect("wait");
    assert_eq!(refs, ["refs/heads/main"]);
}

#[test]
fn test_start_failure_reported_on_wait() {
    if !have_git() {
        return;
    }
    let (_temp, git) = repo_with_commit();
    let process = git.start(&["show", "does-not-exist"]).expect("start");
    assert!(process.wait().is_err());
}

#[test]
fn test_start_survives_large_stderr() {
    if which::which("sh").is_err() {
        return;
    }
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    // More stderr than a pipe buffer holds, written before any stdout.
    let mut process = GitTool::new("sh", temp.path())
        .start(&["-c", "head -c 200000 /dev/zero | tr '\\0' x >&2; echo done"])
        .expect("start");
    let mut line = String::new();
    process.stdout().read_line(&mut line).expect("read");
    assert_eq!(line, "done\n");

    let (status, stderr) = process.finish().expect("finish");
    assert!(status.success());
    assert_eq!(stderr.len(), 200_000);
    assert!(stderr.bytes().all(|b| b == b'x'));
}

#[test]
fn test_dropping_running_process_is_quiet() {
    if !have_git() {
        return;
    }
    let (_temp, git) = repo_with_commit();
    // cat-file --batch waits on stdin, which is /dev/null, so it exits; the
    // drop path must not hang either way.
    let process = git.start(&["cat-file", "--batch"]).expect("start");
    drop(process);
}

#[test]
fn test_commit_hash_parsing() {
    let upper = "0123456789ABCDEF0123456789ABCDEF01234567";
    let hash: CommitHash = upper.parse().expect("valid hash");
    assert_eq!(hash.as_str(), "0123456789abcdef0123456789abcdef01234567");

    assert!("0123".parse::<CommitHash>().is_err());
    assert!(
        "g123456789abcdef0123456789abcdef01234567"
            .parse::<CommitHash>()
            .is_err()
    );
}

#[test]
fn test_resolve_branch_revision() {
    if !have_git() {
        return;
    }
    let (_temp, git) = repo_with_commit();
    let rev = resolve_revision(&git, "HEAD").expect("resolve HEAD");
    assert_eq!(rev.ref_name(), Some("refs/heads/main"));
    assert_eq!(rev.branch(), Some("main"));

    let by_hash = resolve_revision(&git, rev.commit().as_str()).expect("resolve hash");
    assert_eq!(by_hash.commit(), rev.commit());
    assert_eq!(by_hash.ref_name(), None);
    assert_eq!(by_hash.branch(), None);
}

#[test]
fn test_resolve_tag_is_not_a_branch() {
    if !have_git() {
        return;
    }
    let (_temp, git) = repo_with_commit();
    git.output(&["tag", "v1"]).expect("tag");
    let rev = resolve_revision(&git, "v1").expect("resolve tag");
    assert_eq!(rev.ref_name(), Some("refs/tags/v1"));
    assert_eq!(rev.branch(), None);
}

#[test]
fn test_resolve_unknown_revision() {
    if !have_git() {
        return;
    }
    let (_temp, git) = repo_with_commit();
    let err = resolve_revision(&git, "no-such-branch").expect_err("unknown");
    insta::assert_snapshot!(err.to_string(), @r#"git error: unknown revision "no-such-branch""#);
}

#[test]
fn test_git_tool_dir_is_kept() {
    let git = GitTool::new("git", "/tmp");
    let sub = git.with_dir("/tmp/sub");
    assert_eq!(git.dir(), Path::new("/tmp"));
    assert_eq!(sub.dir(), Path::new("/tmp/sub"));
    assert_eq!(sub.exe(), Path::new("git"));
}
