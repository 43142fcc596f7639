//! Branch and merge verbs

use std::path::Path;

use crate::branch::{self, Branch};
use crate::error::Result;
use crate::lock;
use crate::output::Outcome;

use super::GitOps;

impl GitOps<'_> {
    /// Unified branch listing for the repository containing `cwd`
    pub fn branches(&self, cwd: &Path, include_remotes: bool) -> Result<Vec<Branch>> {
        let all = if include_remotes { "-a" } else { "" };
        let result = self.runner.run(cwd, &["branch", all, "--no-color"], None)?;
        Ok(branch::decode(&result.output, include_remotes))
    }

    /// Create `name` from the current HEAD and switch to it
    pub fn create_branch(&self, cwd: &Path, name: &str) -> Result<Outcome> {
        let root = self.repo_root(cwd)?;
        lock::ensure_unlocked(&root, self.prompt)?;
        let result = self.runner.run(&root, &["checkout", "-b", name], None)?;
        Ok(Outcome::new(
            format!("Created branch {name}"),
            result.display(self.config.verbose),
        ))
    }

    /// Delete `name`; `force` uses `-D` and drops unmerged work
    pub fn delete_branch(&self, cwd: &Path, name: &str, force: bool) -> Result<Outcome> {
        let flag = if force { "-D" } else { "-d" };
        let result = self.runner.run(cwd, &["branch", flag, name], None)?;
        Ok(Outcome::new(
            format!("Deleted branch {name}"),
            result.display(self.config.verbose),
        ))
    }

    /// Switch the working tree to `name`
    pub fn switch_branch(&self, cwd: &Path, name: &str) -> Result<Outcome> {
        let root = self.repo_root(cwd)?;
        lock::ensure_unlocked(&root, self.prompt)?;
        self.progress.set_label(&format!("Checking out {name}"));
        let result = self.runner.run(&root, &["checkout", name], None)?;
        Ok(Outcome::new(
            format!("Switched to {name}"),
            result.display(self.config.verbose),
        ))
    }

    /// Merge `target` into the current branch
    pub fn merge(&self, cwd: &Path, target: &str) -> Result<Outcome> {
        let root = self.repo_root(cwd)?;
        lock::ensure_unlocked(&root, self.prompt)?;
        self.progress.set_label(&format!("Merging {target}"));
        let result = self.runner.run(&root, &["merge", target], None)?;
        Ok(Outcome::new(
            format!("Merged {target}"),
            result.display(self.config.verbose),
        ))
    }
}
