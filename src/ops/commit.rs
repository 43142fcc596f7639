//! Commit verb

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::output::Outcome;
use crate::reduce;
use crate::selection;
use crate::{lock, status::FileStatus};

use super::GitOps;

impl GitOps<'_> {
    /// Commit the selected paths with `message`
    ///
    /// The selection is resolved to one repository, fully-selected folders
    /// are folded into folder arguments, the reduced paths are staged, and
    /// the message goes to `git commit` over stdin.
    pub fn commit(&self, paths: &[PathBuf], message: &str) -> Result<Outcome> {
        if message.trim().is_empty() {
            return Err(Error::EmptyMessage);
        }

        let resolved = selection::resolve(self.runner, paths)?;
        lock::ensure_unlocked(&resolved.root, self.prompt)?;

        self.progress.set_label("Reading status");
        let changed = self.status(&resolved.root)?;
        if changed.is_empty() {
            return Ok(Outcome::new("Nothing to commit", "The working tree is clean."));
        }

        let selected = Self::selected_changed(&resolved, &changed);
        if selected.is_empty() {
            return Err(Error::EmptySelection);
        }

        let all: Vec<String> = changed.iter().map(|s| s.file.clone()).collect();
        let reduced = reduce::reduce(&selected, &all);

        self.progress.set_label("Staging");
        let mut add_args = vec!["add", "-A", "--"];
        add_args.extend(reduced.iter().map(String::as_str));
        self.runner.run(&resolved.root, &add_args, None)?;

        self.progress.set_label("Committing");
        // The pathspec keeps files someone staged earlier out of this commit
        let quiet = if self.config.verbose { "" } else { "--quiet" };
        let mut commit_args = vec!["commit", "-F", "-", quiet, "--"];
        commit_args.extend(reduced.iter().map(String::as_str));
        let result = self.runner.run(&resolved.root, &commit_args, Some(message))?;

        Ok(Outcome::new(
            format!("Committed {} path(s)", reduced.len()),
            result.display(self.config.verbose),
        ))
    }

    /// Files from `changed` that carry a staged (index-side) change
    #[must_use]
    pub fn staged_of(changed: &[FileStatus]) -> Vec<&FileStatus> {
        changed.iter().filter(|s| s.added).collect()
    }
}
