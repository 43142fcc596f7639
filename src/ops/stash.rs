//! Stash verbs

use std::path::Path;

use crate::error::Result;
use crate::lock;
use crate::output::Outcome;

use super::GitOps;

impl GitOps<'_> {
    /// Stash the working tree, optionally with a message
    ///
    /// The `-m` flag and its value are empty placeholders when no message
    /// was given; the runner elides them.
    pub fn stash_save(&self, cwd: &Path, message: Option<&str>) -> Result<Outcome> {
        let root = self.repo_root(cwd)?;
        lock::ensure_unlocked(&root, self.prompt)?;
        let (flag, text) = message.map_or(("", ""), |m| ("-m", m));
        let result = self.runner.run(&root, &["stash", "push", flag, text], None)?;
        Ok(Outcome::new("Stashed", result.display(self.config.verbose)))
    }

    /// Apply and drop the most recent stash entry
    pub fn stash_pop(&self, cwd: &Path) -> Result<Outcome> {
        let root = self.repo_root(cwd)?;
        lock::ensure_unlocked(&root, self.prompt)?;
        let result = self.runner.run(&root, &["stash", "pop"], None)?;
        Ok(Outcome::new("Popped stash", result.display(self.config.verbose)))
    }

    /// Apply stash entry `index` without dropping it
    pub fn stash_apply(&self, cwd: &Path, index: usize) -> Result<Outcome> {
        let root = self.repo_root(cwd)?;
        lock::ensure_unlocked(&root, self.prompt)?;
        let entry = format!("stash@{{{index}}}");
        let result = self.runner.run(&root, &["stash", "apply", &entry], None)?;
        Ok(Outcome::new(
            format!("Applied {entry}"),
            result.display(self.config.verbose),
        ))
    }

    /// Drop stash entry `index`
    pub fn stash_drop(&self, cwd: &Path, index: usize) -> Result<Outcome> {
        let entry = format!("stash@{{{index}}}");
        let result = self.runner.run(cwd, &["stash", "drop", &entry], None)?;
        Ok(Outcome::new(
            format!("Dropped {entry}"),
            result.display(self.config.verbose),
        ))
    }

    /// Stash entries, newest first, as raw listing lines
    pub fn stash_list(&self, cwd: &Path) -> Result<Vec<String>> {
        let result = self.runner.run(cwd, &["stash", "list"], None)?;
        Ok(result.output.lines().map(str::to_string).filter(|l| !l.is_empty()).collect())
    }
}
