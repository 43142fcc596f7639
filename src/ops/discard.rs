//! Discard verb - destructive, confirmation-gated

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::output::Outcome;
use crate::reduce;
use crate::selection::{self, walk_files};
use crate::{lock, status::FileStatus};

use super::GitOps;

impl GitOps<'_> {
    /// Discard changes to the selected paths
    ///
    /// Tracked modifications are checked out from the index; untracked
    /// files are cleaned. The user confirms first, with a count of what
    /// will actually be touched; declining cancels with no side effects.
    pub fn discard(&self, paths: &[PathBuf]) -> Result<Outcome> {
        let resolved = selection::resolve(self.runner, paths)?;
        lock::ensure_unlocked(&resolved.root, self.prompt)?;

        self.progress.set_label("Reading status");
        let changed = self.status(&resolved.root)?;
        let selected = Self::selected_changed(&resolved, &changed);
        if selected.is_empty() {
            return Err(Error::EmptySelection);
        }

        let picked: Vec<&FileStatus> = changed
            .iter()
            .filter(|s| selected.iter().any(|f| f == &s.file))
            .collect();
        let tracked: Vec<String> =
            picked.iter().filter(|s| !s.untracked).map(|s| s.file.clone()).collect();
        let untracked: Vec<String> =
            picked.iter().filter(|s| s.untracked).map(|s| s.file.clone()).collect();

        let total = tracked.len() + Self::untracked_file_count(&resolved.root, &untracked);
        let confirmed = self.prompt.confirm(
            &format!("Discard changes to {total} file(s)?"),
            "This cannot be undone.",
        );
        if !confirmed {
            return Ok(Outcome::new("Canceled", "No files were changed."));
        }

        let all: Vec<String> = changed.iter().map(|s| s.file.clone()).collect();
        if !tracked.is_empty() {
            self.progress.set_label("Reverting tracked files");
            let reduced = reduce::reduce(&tracked, &all);
            let mut args = vec!["checkout", "--"];
            args.extend(reduced.iter().map(String::as_str));
            self.runner.run(&resolved.root, &args, None)?;
        }
        if !untracked.is_empty() {
            self.progress.set_label("Removing untracked files");
            let reduced = reduce::reduce(&untracked, &all);
            let mut args = vec!["clean", "-fd", "--"];
            args.extend(reduced.iter().map(String::as_str));
            self.runner.run(&resolved.root, &args, None)?;
        }

        Ok(Outcome::new(
            format!("Discarded changes to {total} file(s)"),
            String::new(),
        ))
    }

    /// Count the files an untracked selection actually covers
    ///
    /// git reports a whole untracked directory as one `?? dir/` entry; the
    /// confirmation should count the files underneath it.
    fn untracked_file_count(root: &std::path::Path, untracked: &[String]) -> usize {
        untracked
            .iter()
            .map(|entry| {
                if entry.ends_with('/') {
                    walk_files(&root.join(entry)).map_or(1, |files| files.len())
                } else {
                    1
                }
            })
            .sum()
    }

    /// Discard everything in the repository containing `cwd`
    pub fn discard_all(&self, cwd: &std::path::Path) -> Result<Outcome> {
        let root = self.repo_root(cwd)?;
        self.discard(&[root])
    }
}
