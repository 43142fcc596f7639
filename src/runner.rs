//! Command runner - spawns the git executable and captures its output
//!
//! One OS process per call. The working directory and inherited environment
//! pass through unchanged; arguments are always a vector, never a shell
//! string, so filenames and messages cannot inject.
//!
//! Callers build argument templates declaratively, using empty strings as
//! placeholders for conditional flags; the runner elides them before
//! spawning.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::EngineConfig;
use crate::error::{Error, Result};

/// Captured result of one git invocation
///
/// Created per invocation and consumed immediately; never retained.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Combined stdout+stderr, trailing whitespace trimmed
    pub output: String,
    /// Whether the process exited with status zero
    pub ok: bool,
    /// The raw exit code (-1 if terminated by signal)
    pub code: i32,
    /// The rendered command line, for display only - never re-parsed
    pub command: String,
}

impl CommandResult {
    /// Output for user display
    ///
    /// In verbose mode the invoked command line is prepended; decoders
    /// always read [`CommandResult::output`] directly.
    #[must_use]
    pub fn display(&self, verbose: bool) -> String {
        if verbose {
            format!("> {}\n{}", self.command, self.output)
        } else {
            self.output.clone()
        }
    }
}

/// Drop empty-string placeholder arguments from a declarative template
#[must_use]
pub fn effective_args<'a>(args: &[&'a str]) -> Vec<&'a str> {
    args.iter().copied().filter(|a| !a.is_empty()).collect()
}

/// Abstraction over git process execution
///
/// The seam between the engine and the outside world: production code uses
/// [`GitProcess`]; tests substitute an in-memory implementation that replays
/// canned results.
pub trait CommandRunner: Send + Sync {
    /// Run git in `cwd`, allowing a non-zero exit
    ///
    /// Non-zero exits are reported through `ok = false`, not as errors.
    /// Failing to spawn or to read output at all is still an error.
    fn try_run(&self, cwd: &Path, args: &[&str], stdin: Option<&str>) -> Result<CommandResult>;

    /// Run git in `cwd`, treating a non-zero exit as [`Error::Process`]
    fn run(&self, cwd: &Path, args: &[&str], stdin: Option<&str>) -> Result<CommandResult> {
        let result = self.try_run(cwd, args, stdin)?;
        if result.ok {
            Ok(result)
        } else {
            Err(Error::Process {
                code: result.code,
                output: result.output,
            })
        }
    }
}

/// Production runner that spawns the configured git binary
#[derive(Debug, Clone)]
pub struct GitProcess {
    binary: String,
}

impl GitProcess {
    /// Create a runner from the engine configuration
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            binary: config.git_binary.clone(),
        }
    }
}

impl CommandRunner for GitProcess {
    fn try_run(&self, cwd: &Path, args: &[&str], stdin: Option<&str>) -> Result<CommandResult> {
        let args = effective_args(args);
        log::debug!("{} {} (cwd: {})", self.binary, args.join(" "), cwd.display());

        let mut child = Command::new(&self.binary)
            .current_dir(cwd)
            .args(&args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Write then close before waiting: commands that read a commit
        // message from stdin hang until the stream is closed.
        if let Some(input) = stdin {
            if let Some(mut handle) = child.stdin.take() {
                handle.write_all(input.as_bytes())?;
            }
        }

        let out = child.wait_with_output()?;

        let mut output = String::from_utf8(out.stdout).map_err(|_| Error::NonUtf8Output)?;
        let stderr = String::from_utf8(out.stderr).map_err(|_| Error::NonUtf8Output)?;
        if !stderr.is_empty() {
            if !output.is_empty() && !output.ends_with('\n') {
                output.push('\n');
            }
            output.push_str(&stderr);
        }
        let output = output.trim_end().to_string();

        Ok(CommandResult {
            output,
            ok: out.status.success(),
            code: out.status.code().unwrap_or(-1),
            command: format!("{} {}", self.binary, args.join(" ")),
        })
    }
}
