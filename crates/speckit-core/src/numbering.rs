//! Computes the next free feature number for a short name.
//!
//! Three independent sources of truth are scanned for `<number>-<slug>`
//! identifiers: local branches, remote heads, and the on-disk `specs/`
//! tree. A source that cannot be read contributes nothing — worst case
//! numbering restarts at 1 for a slug it cannot see evidence of.

use crate::git::BranchSource;
use crate::paths;
use crate::report::Reporter;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;

fn id_pattern(short_name: &str) -> Regex {
    Regex::new(&format!(r"^(\d+)-{}$", regex::escape(short_name))).unwrap()
}

/// Numbers from a `git branch -a` listing. Leading `*`/whitespace
/// markers and `remotes/<remote>/` prefixes are stripped before
/// matching.
pub fn branch_numbers(listing: &str, short_name: &str) -> BTreeSet<u32> {
    let pattern = id_pattern(short_name);
    let mut numbers = BTreeSet::new();
    for line in listing.lines() {
        let cleaned = line.trim().trim_start_matches(['*', ' ']);
        let cleaned = match cleaned
            .strip_prefix("remotes/")
            .and_then(|rest| rest.split_once('/'))
        {
            Some((remote, branch)) if !remote.is_empty() => branch,
            _ => cleaned,
        };
        if cleaned.is_empty() {
            continue;
        }
        if let Some(caps) = pattern.captures(cleaned) {
            if let Ok(n) = caps[1].parse() {
                numbers.insert(n);
            }
        }
    }
    numbers
}

/// Numbers from a `git ls-remote --heads` listing, matching the branch
/// suffix of each ref.
pub fn remote_numbers(listing: &str, short_name: &str) -> BTreeSet<u32> {
    let pattern = id_pattern(short_name);
    let mut numbers = BTreeSet::new();
    for line in listing.lines() {
        let mut parts = line.split_whitespace();
        let (Some(_oid), Some(r#ref)) = (parts.next(), parts.next()) else {
            continue;
        };
        let branch = r#ref.strip_prefix("refs/heads/").unwrap_or(r#ref);
        if let Some(caps) = pattern.captures(branch) {
            if let Ok(n) = caps[1].parse() {
                numbers.insert(n);
            }
        }
    }
    numbers
}

/// Numbers from subdirectory names directly under the specs root.
/// A missing directory contributes nothing.
pub fn spec_dir_numbers(specs_dir: &Path, short_name: &str) -> BTreeSet<u32> {
    let pattern = id_pattern(short_name);
    let mut numbers = BTreeSet::new();
    let Ok(entries) = std::fs::read_dir(specs_dir) else {
        return numbers;
    };
    for entry in entries.flatten() {
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if let Some(caps) = pattern.captures(&name) {
            if let Ok(n) = caps[1].parse() {
                numbers.insert(n);
            }
        }
    }
    numbers
}

/// Resolve the next free number for `short_name`: one more than the
/// maximum observed across all sources, or 1 when none exist.
pub fn next_feature_number(
    git: &dyn BranchSource,
    root: &Path,
    short_name: &str,
    reporter: &dyn Reporter,
) -> u32 {
    git.refresh(reporter);

    let mut numbers = branch_numbers(&git.branch_listing(), short_name);
    numbers.extend(remote_numbers(&git.remote_heads(), short_name));
    numbers.extend(spec_dir_numbers(&paths::specs_dir(root), short_name));

    numbers.iter().next_back().copied().unwrap_or(0) + 1
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
