//! Tests for the command runner
//!
//! Argument elision and display formatting are pure; the process-spawning
//! paths run the real git binary inside tempdirs.

use gitrig::config::EngineConfig;
use gitrig::error::Error;
use gitrig::runner::{CommandRunner, GitProcess, effective_args};
use tempfile::TempDir;

// =============================================================================
// Argument elision
// =============================================================================

#[test]
fn empty_placeholder_arguments_are_elided() {
    assert_eq!(effective_args(&["commit", "", "-F", "-", ""]), vec!["commit", "-F", "-"]);
    assert_eq!(effective_args(&["", ""]), Vec::<&str>::new());
    assert_eq!(effective_args(&["status"]), vec!["status"]);
}

// =============================================================================
// Process execution
// =============================================================================

#[test]
fn successful_command_captures_trimmed_output() {
    let dir = TempDir::new().unwrap();
    let runner = GitProcess::new(&EngineConfig::default());

    let result = runner.run(dir.path(), &["version", ""], None).unwrap();
    assert!(result.ok);
    assert_eq!(result.code, 0);
    assert!(result.output.starts_with("git version"));
    assert!(!result.output.ends_with('\n'));
    // The placeholder never reached the process
    assert_eq!(result.command, "git version");
}

#[test]
fn non_zero_exit_becomes_a_process_error() {
    let dir = TempDir::new().unwrap();
    let runner = GitProcess::new(&EngineConfig::default());

    // Not a repository, so rev-parse fails and explains itself on stderr
    let err = runner.run(dir.path(), &["rev-parse", "--show-toplevel"], None).unwrap_err();
    match err {
        Error::Process { code, output } => {
            assert_ne!(code, 0);
            assert!(!output.is_empty());
        }
        other => panic!("expected Process, got {other:?}"),
    }
}

#[test]
fn try_run_reports_failure_without_an_error() {
    let dir = TempDir::new().unwrap();
    let runner = GitProcess::new(&EngineConfig::default());

    let result = runner.try_run(dir.path(), &["rev-parse", "--show-toplevel"], None).unwrap();
    assert!(!result.ok);
    assert_ne!(result.code, 0);
}

#[test]
fn stdin_is_written_and_closed() {
    let dir = TempDir::new().unwrap();
    let runner = GitProcess::new(&EngineConfig::default());

    // hash-object reads stdin to EOF; the well-known empty-blob hash proves
    // the stream was closed rather than left hanging
    let result = runner.run(dir.path(), &["hash-object", "--stdin"], Some("")).unwrap();
    assert_eq!(result.output, "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391");
}

#[test]
fn display_prepends_the_command_line_only_in_verbose_mode() {
    let dir = TempDir::new().unwrap();
    let runner = GitProcess::new(&EngineConfig::default());

    let result = runner.run(dir.path(), &["version"], None).unwrap();
    assert!(result.display(true).starts_with("> git version\n"));
    assert_eq!(result.display(false), result.output);
}
