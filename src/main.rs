//! d6 - Command-line tool for rolling dice and printing them as pixel art

use std::process::ExitCode;

use pipdice::cli;

fn main() -> ExitCode {
    env_logger::init();
    cli::run()
}
