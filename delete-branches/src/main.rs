mod app;
mod branches;
mod cli;
mod console;
mod delete;
mod error;
mod git;
mod pipeline;
mod prompt;
#[cfg(test)]
mod testing;
mod tui;
mod ui;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::console::Console;
use crate::error::CleanupError;
use crate::git::GitBackend;
use crate::prompt::TerminalPrompter;

const LOG_ENV: &str = "DELETE_BRANCHES_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.wants_version() {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    init_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", console::prefixed(&format!("{err:#}")));
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), CleanupError> {
    if !cli.ignored.is_empty() {
        debug!(args = ?cli.ignored, "ignoring extra arguments");
    }

    let backend = GitBackend::open(cli.repo_path())?;
    let mut prompter = TerminalPrompter;

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut console = Console::new(&mut stdout, &mut stderr);

    pipeline::run(&backend, &mut prompter, &mut console)
}
