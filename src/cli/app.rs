//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use gitrig::config::EngineConfig;
use gitrig::interact::{AssumeYes, LogProgress, Prompt};
use gitrig::ops::GitOps;
use gitrig::output::OutputMode;
use gitrig::runner::GitProcess;

use super::{TerminalPrompt, commands};

/// gitrig - path-scoped git operations for editors and terminals
#[derive(Parser, Debug)]
#[command(
    name = "gitrig",
    version,
    about = "Path-scoped git operations with safe lock recovery",
    long_about = "Run git verbs against arbitrary subsets of files.\n\n\
                  Selections are consolidated to one repository, fully-selected\n\
                  folders collapse into folder arguments, and a stale index lock\n\
                  is detected and recovered with confirmation."
)]
pub struct Cli {
    /// Echo each git command line into the displayed output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Answer yes to every confirmation (scripting mode)
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Path to the git executable
    #[arg(long, global = true, default_value = "git")]
    pub git_bin: String,

    /// Verb to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level verbs
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show decoded working-tree status
    Status {
        /// Limit to these paths (default: repository of the current directory)
        paths: Vec<PathBuf>,
    },

    /// Commit selected paths
    Commit {
        /// Paths to commit (default: everything changed)
        paths: Vec<PathBuf>,

        /// Commit message
        #[arg(short, long)]
        message: String,
    },

    /// Discard changes to selected paths (destructive)
    Discard {
        /// Paths to discard (default: everything changed)
        paths: Vec<PathBuf>,
    },

    /// List or manage branches
    Branch {
        /// Branch action (default: list)
        #[command(subcommand)]
        action: Option<BranchAction>,

        /// Include remote-tracking branches in the listing
        #[arg(short, long)]
        all: bool,
    },

    /// Merge a branch into the current one
    Merge {
        /// Branch to merge
        target: String,
    },

    /// Stash operations
    Stash {
        /// Stash action (default: list)
        #[command(subcommand)]
        action: Option<StashAction>,
    },

    /// Fetch from the default remote
    Fetch {
        /// Fetch these repository roots in parallel instead of the current one
        #[arg(long, value_name = "ROOT")]
        all_roots: Vec<PathBuf>,
    },

    /// Pull the current branch
    Pull,

    /// Push the current branch
    Push,
}

/// Branch management actions
#[derive(Subcommand, Debug)]
pub enum BranchAction {
    /// Create a branch from HEAD and switch to it
    New {
        /// Branch name
        name: String,
    },

    /// Delete a branch
    Delete {
        /// Branch name
        name: String,

        /// Delete even if unmerged
        #[arg(short, long)]
        force: bool,
    },

    /// Switch to a branch
    Switch {
        /// Branch name
        name: String,
    },
}

/// Stash actions
#[derive(Subcommand, Debug)]
pub enum StashAction {
    /// Stash the working tree
    Save {
        /// Stash message
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Apply and drop the most recent stash
    Pop,

    /// Apply a stash entry without dropping it
    Apply {
        /// Stash index
        index: usize,
    },

    /// Drop a stash entry
    Drop {
        /// Stash index
        index: usize,
    },

    /// List stash entries
    List,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let mode = if cli.json { OutputMode::Json } else { OutputMode::Human };

    let config = EngineConfig {
        git_binary: cli.git_bin.clone(),
        verbose: cli.verbose,
    };
    let runner = GitProcess::new(&config);
    let terminal = TerminalPrompt;
    let scripted = AssumeYes;
    let prompt: &dyn Prompt = if cli.yes { &scripted } else { &terminal };
    let progress = LogProgress;
    let ops = GitOps::new(&config, &runner, prompt, &progress);

    let cwd = std::env::current_dir()?;

    match cli.command {
        Command::Status { paths } => commands::status::show(&ops, &cwd, &paths, mode),
        Command::Commit { paths, message } => {
            commands::commit::commit(&ops, &cwd, &paths, &message, mode)
        }
        Command::Discard { paths } => commands::discard::discard(&ops, &cwd, &paths, mode),
        Command::Branch { action, all } => commands::branch::branch(&ops, &cwd, action, all, mode),
        Command::Merge { target } => commands::merge::merge(&ops, &cwd, &target, mode),
        Command::Stash { action } => commands::stash::stash(&ops, &cwd, action, mode),
        Command::Fetch { all_roots } => commands::sync::fetch(&ops, &cwd, &all_roots, mode),
        Command::Pull => commands::sync::pull(&ops, &cwd, mode),
        Command::Push => commands::sync::push(&ops, &cwd, mode),
    }
}
