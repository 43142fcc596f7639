//! Branch decoder - parses `git branch [-a]` listings
//!
//! Local refs and their `remotes/origin/<name>` counterparts merge into a
//! single record per bare name; naive per-line parsing would list every
//! tracked branch twice.

use serde::Serialize;

/// One branch, unified across its local and remote refs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branch {
    /// Bare name with any remote prefix stripped
    pub name: String,
    /// Display label: the raw ref text (local label preferred when both exist)
    pub branch: String,
    /// The local ref is the current HEAD
    pub selected: bool,
    /// A local ref with this name exists
    pub local: bool,
    /// A remote-tracking ref with this name exists
    pub remote: bool,
}

/// Decode a branch listing into unified records
///
/// Symbolic HEAD pointer lines (`origin/HEAD -> origin/main`) are skipped.
/// When `include_remotes` is false, remote-tracking lines are ignored
/// entirely.
#[must_use]
pub fn decode(listing: &str, include_remotes: bool) -> Vec<Branch> {
    let mut branches: Vec<Branch> = Vec::new();

    for line in listing.lines() {
        let line = line.trim();
        if line.is_empty() || line.contains("->") {
            continue;
        }

        let selected = line.starts_with("* ");
        // "+ " marks a branch checked out in another worktree
        let label = line
            .strip_prefix("* ")
            .or_else(|| line.strip_prefix("+ "))
            .unwrap_or(line)
            .trim();
        // "(HEAD detached at abc123)" is a state, not a branch
        if label.starts_with('(') {
            continue;
        }

        let (name, is_remote) = label.strip_prefix("remotes/").map_or_else(
            || (label.to_string(), false),
            |rest| {
                // "remotes/<remote>/<name>" - drop the remote component
                let name = rest.split_once('/').map_or(rest, |(_, n)| n);
                (name.to_string(), true)
            },
        );

        if is_remote && !include_remotes {
            continue;
        }

        if let Some(existing) = branches.iter_mut().find(|b| b.name == name) {
            if is_remote {
                existing.remote = true;
            } else {
                existing.local = true;
                existing.selected = existing.selected || selected;
                // Prefer the local ref's display label
                existing.branch = label.to_string();
            }
            continue;
        }

        branches.push(Branch {
            name,
            branch: label.to_string(),
            selected: selected && !is_remote,
            local: !is_remote,
            remote: is_remote,
        });
    }

    branches
}
