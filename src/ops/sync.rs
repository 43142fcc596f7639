//! Remote synchronization verbs

use std::path::{Path, PathBuf};
use std::thread;

use crate::error::Result;
use crate::lock;
use crate::output::{FetchSummary, Outcome};

use super::GitOps;

impl GitOps<'_> {
    /// Fetch from the default remote
    pub fn fetch(&self, cwd: &Path) -> Result<Outcome> {
        self.progress.set_label("Fetching");
        let result = self.runner.run(cwd, &["fetch", "--prune"], None)?;
        Ok(Outcome::new("Fetched", result.display(self.config.verbose)))
    }

    /// Pull the current branch
    pub fn pull(&self, cwd: &Path) -> Result<Outcome> {
        let root = self.repo_root(cwd)?;
        lock::ensure_unlocked(&root, self.prompt)?;
        self.progress.set_label("Pulling");
        let result = self.runner.run(&root, &["pull"], None)?;
        Ok(Outcome::new("Pulled", result.display(self.config.verbose)))
    }

    /// Push the current branch
    pub fn push(&self, cwd: &Path) -> Result<Outcome> {
        self.progress.set_label("Pushing");
        let result = self.runner.run(cwd, &["push"], None)?;
        Ok(Outcome::new("Pushed", result.display(self.config.verbose)))
    }

    /// Fetch every root in parallel, aggregating instead of halting
    ///
    /// One fetch per root; a failing root counts as failed and the rest
    /// keep going. Reads of independent repositories are safe to overlap -
    /// git serializes its own internal state.
    pub fn fetch_all(&self, roots: &[PathBuf]) -> FetchSummary {
        let runner = self.runner;
        let mut summary = FetchSummary::default();
        thread::scope(|scope| {
            let handles: Vec<_> = roots
                .iter()
                .map(|root| {
                    scope.spawn(move || {
                        runner
                            .try_run(root, &["fetch", "--prune"], None)
                            .is_ok_and(|r| r.ok)
                    })
                })
                .collect();
            for handle in handles {
                if handle.join().is_ok_and(|ok| ok) {
                    summary.succeeded += 1;
                } else {
                    summary.failed += 1;
                }
            }
        });
        summary
    }
}
