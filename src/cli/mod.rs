//! CLI surface
//!
//! Parsing, prompt wiring, and per-subcommand rendering live here; all
//! repository behavior lives in the `gitrig` library.

pub mod app;
pub mod commands;

use std::io::{self, BufRead, Write};

use colored::Colorize;
use gitrig::interact::Prompt;

pub use app::run;

/// Prompt that asks on the terminal and reads a y/N answer
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str, detail: &str) -> bool {
        println!("{}", message.yellow().bold());
        if !detail.is_empty() {
            println!("{detail}");
        }
        print!("Continue? [y/N] ");
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }
}
