//! Multi-step workflow tests
//!
//! Each test walks a realistic editor workflow end to end: select files,
//! run a verb, verify what git actually recorded.

use assert_cmd::cargo;
use predicates::prelude::*;

use crate::common::TempGitRepo;

fn gitrig() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("gitrig"))
}

fn current_branch(repo: &TempGitRepo) -> String {
    let out = repo.git(&["branch", "--show-current"]);
    String::from_utf8_lossy(&out.stdout).trim().to_string()
}

// =============================================================================
// PATH-SCOPED COMMITS
// =============================================================================

/// Selecting a file plus a fully-changed folder commits exactly that
/// subset and leaves everything else modified.
#[test]
fn commit_of_file_and_folder_leaves_the_rest_untouched() {
    let repo = TempGitRepo::new();
    repo.commit_files(
        &[
            ("a.txt", "one"),
            ("dir/b.txt", "b1"),
            ("dir/c.txt", "c1"),
            ("other.txt", "o1"),
        ],
        "init",
    );

    // Modify everything
    repo.write_file("a.txt", "two");
    repo.write_file("dir/b.txt", "b2");
    repo.write_file("dir/c.txt", "c2");
    repo.write_file("other.txt", "o2");

    gitrig()
        .args(["commit", "a.txt", "dir", "-m", "scoped commit"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Committed"));

    // Only other.txt is still dirty
    let porcelain = repo.porcelain();
    assert!(porcelain.contains("other.txt"), "porcelain: {porcelain}");
    assert!(!porcelain.contains("a.txt"));
    assert!(!porcelain.contains("dir/"));
}

/// Selecting only one file of a folder commits that file alone.
#[test]
fn commit_of_a_partial_folder_selection_stays_file_scoped() {
    let repo = TempGitRepo::new();
    repo.commit_files(&[("dir/b.txt", "b1"), ("dir/c.txt", "c1")], "init");

    repo.write_file("dir/b.txt", "b2");
    repo.write_file("dir/c.txt", "c2");

    gitrig()
        .args(["commit", "dir/b.txt", "-m", "just b"])
        .current_dir(repo.path())
        .assert()
        .success();

    let porcelain = repo.porcelain();
    assert!(porcelain.contains("dir/c.txt"), "porcelain: {porcelain}");
    assert!(!porcelain.contains("dir/b.txt"));
}

/// An untracked file inside the selection is picked up by the commit.
#[test]
fn commit_includes_untracked_files_under_a_selected_folder() {
    let repo = TempGitRepo::new();
    repo.commit_files(&[("dir/b.txt", "b1")], "init");

    repo.write_file("dir/new.txt", "fresh");

    gitrig()
        .args(["commit", "dir", "-m", "add new file"])
        .current_dir(repo.path())
        .assert()
        .success();

    assert_eq!(repo.porcelain().trim(), "");
    let show = repo.git(&["show", "--stat", "HEAD"]);
    assert!(String::from_utf8_lossy(&show.stdout).contains("dir/new.txt"));
}

// =============================================================================
// REPOSITORY SAFETY BOUNDARY
// =============================================================================

/// A selection spanning two repositories is refused outright.
#[test]
fn commit_across_repositories_is_refused() {
    let repo_a = TempGitRepo::new();
    let repo_b = TempGitRepo::new();
    repo_a.commit_files(&[("a.txt", "one")], "init");
    repo_b.commit_files(&[("b.txt", "one")], "init");
    repo_a.write_file("a.txt", "two");
    repo_b.write_file("b.txt", "two");

    let a = repo_a.path().join("a.txt");
    let b = repo_b.path().join("b.txt");

    gitrig()
        .args(["commit", a.to_str().unwrap(), b.to_str().unwrap(), "-m", "nope"])
        .current_dir(repo_a.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in the same repository"));

    // Neither repository was touched
    assert!(repo_a.porcelain().contains("a.txt"));
    assert!(repo_b.porcelain().contains("b.txt"));
}

// =============================================================================
// BRANCH AND MERGE WORKFLOW
// =============================================================================

#[test]
fn feature_branch_commit_merges_back() {
    let repo = TempGitRepo::new();
    repo.commit_files(&[("a.txt", "base")], "init");
    let base = current_branch(&repo);

    gitrig()
        .args(["branch", "new", "feature"])
        .current_dir(repo.path())
        .assert()
        .success();

    repo.write_file("feature.txt", "work");
    gitrig()
        .args(["commit", "-m", "feature work"])
        .current_dir(repo.path())
        .assert()
        .success();

    gitrig()
        .args(["branch", "switch", &base])
        .current_dir(repo.path())
        .assert()
        .success();
    assert!(!repo.path().join("feature.txt").exists());

    gitrig()
        .args(["merge", "feature"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged feature"));
    assert!(repo.path().join("feature.txt").exists());
}
