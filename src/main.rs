//! # checklist
//!
//! A single-screen terminal checklist: add short tasks, tick them off, rename
//! them in place and delete them after a confirmation.
//!
//! ## Quick Start
//!
//! ```bash
//! # Open the checklist
//! checklist
//!
//! # Start with a couple of tasks already on the list
//! checklist --task "Buy milk" --task "Walk the dog"
//! ```
//!
//! ## Layout
//!
//! - `task` / `store`: the task list and the validated transitions over it.
//!   Adding a task whose title already exists is rejected.
//! - `session`: per-item edit mode and unsaved drafts.
//! - `home`: the screen's state container, plus the confirm/notify ports in
//!   `prompt`.
//! - `tui`: rendering and key handling.
//!
//! Tasks are kept in memory only; nothing is written to disk apart from the
//! log files (`~/.checklist/logs` by default).

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod home;
pub mod logging;
pub mod prompt;
pub mod session;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod utils;
}

use cli::Cli;
use cmd::*;
use home::Home;

fn start_logging(cli: &Cli) {
    if !cli.wants_file_logging() {
        return;
    }
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| logging::default_log_level().to_string());
    let log_dir = cli.resolved_log_dir();
    if let Err(e) = logging::init_logging(&level, &log_dir) {
        eprintln!("Failed to start logging: {e}");
        std::process::exit(1);
    }
}

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Completions { shell }) => cmd_completions(*shell),
        Some(Commands::Ui) | None => {
            start_logging(&cli);
            cmd_ui(Home::new(), &cli.tasks)
        }
    }
}
