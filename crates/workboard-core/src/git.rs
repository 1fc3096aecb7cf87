use crate::error::{BoardError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Current branch name, or `None` outside a repository, on a detached
/// HEAD, or when git itself is missing. Callers fall through to the next
/// feature-resolution strategy.
pub fn current_branch(root: &Path) -> Option<String> {
    if which::which("git").is_err() {
        return None;
    }
    let output = Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .current_dir(root)
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if branch.is_empty() || branch == "HEAD" {
        return None;
    }
    Some(branch)
}

/// True when the working tree has no unstaged and no staged changes.
/// A directory that is not a repository counts as not clean, matching
/// `git diff`'s nonzero exit there.
pub fn work_tree_clean(root: &Path) -> Result<bool> {
    if which::which("git").is_err() {
        return Err(BoardError::GitNotFound);
    }
    let unstaged = diff_quiet(root, &[])?;
    let staged = diff_quiet(root, &["--cached"])?;
    Ok(unstaged && staged)
}

fn diff_quiet(root: &Path, extra: &[&str]) -> Result<bool> {
    let status = Command::new("git")
        .arg("diff")
        .args(extra)
        .args(["--quiet", "--exit-code"])
        .current_dir(root)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    Ok(status.success())
}
