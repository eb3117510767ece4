//! Version-control collaborator for branch enumeration.
//!
//! All commands are read-only except the fetch, and every failure
//! degrades to an empty listing — numbering must keep working in repos
//! with no remote, no git binary, or no network.

use crate::report::Reporter;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What the number resolver needs from version control.
pub trait BranchSource {
    /// Best-effort refresh of remote branch knowledge. Failure is
    /// reported as a warning, never an error.
    fn refresh(&self, reporter: &dyn Reporter);

    /// Output of `git branch -a`, or empty when unavailable.
    fn branch_listing(&self) -> String;

    /// Output of `git ls-remote --heads <remote>`, or empty when
    /// unavailable.
    fn remote_heads(&self) -> String;
}

/// Subprocess-backed [`BranchSource`] running the real `git` binary.
pub struct GitRunner {
    root: PathBuf,
    remote: String,
}

impl GitRunner {
    pub fn new(root: &Path, remote: impl Into<String>) -> Self {
        Self {
            root: root.to_path_buf(),
            remote: remote.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Option<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl BranchSource for GitRunner {
    fn refresh(&self, reporter: &dyn Reporter) {
        if self.run(&["fetch", "--all", "--prune"]).is_none() {
            reporter.warning(
                "Unable to refresh remote branch information; proceeding with existing data.",
            );
        }
    }

    fn branch_listing(&self) -> String {
        self.run(&["branch", "-a"]).unwrap_or_default()
    }

    fn remote_heads(&self) -> String {
        self.run(&["ls-remote", "--heads", &self.remote])
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RecordingReporter;
    use tempfile::TempDir;

    #[test]
    fn listing_outside_a_repo_is_empty() {
        let dir = TempDir::new().unwrap();
        let git = GitRunner::new(dir.path(), "origin");
        assert_eq!(git.branch_listing(), "");
        assert_eq!(git.remote_heads(), "");
    }

    #[test]
    fn refresh_outside_a_repo_warns() {
        let dir = TempDir::new().unwrap();
        let git = GitRunner::new(dir.path(), "origin");
        let reporter = RecordingReporter::new();
        git.refresh(&reporter);
        assert_eq!(reporter.warnings().len(), 1);
        assert!(reporter.errors().is_empty());
    }
}
