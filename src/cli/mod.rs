//! Command-line interface implementation
//!
//! This module provides the CLI entry point and hands the roll off to
//! [`roll`] for the actual work.

mod roll;

use clap::Parser;
use std::process::ExitCode;

pub use roll::{roll_to, RollError};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// d6 - Roll six-sided dice and print them as pixel art
#[derive(Parser, Debug)]
#[command(name = "d6")]
#[command(about = "Roll one to ten six-sided dice and print their faces as text pixel art")]
#[command(version)]
pub struct Cli {
    /// Number of dice to roll (1-10, default: 1).
    /// Parsed leniently: text without leading digits counts as 0.
    #[arg(allow_negative_numbers = true)]
    pub count: Option<String>,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_INVALID_ARGS)
            } else {
                ExitCode::from(EXIT_SUCCESS)
            };
        }
    };

    roll::run_roll(cli.count.as_deref())
}
