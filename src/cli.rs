use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Single-screen terminal checklist.
/// Tasks live in memory for the length of the session only.
#[derive(Parser, Debug)]
#[command(name = "checklist", version, about = "Terminal checklist: add, rename, complete and delete tasks")]
pub struct Cli {
    /// Log level: trace | debug | info | warn | error.
    #[arg(long, global = true, env = "CHECKLIST_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for log files (default: ~/.checklist/logs).
    #[arg(long, global = true, env = "CHECKLIST_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Disable file logging.
    #[arg(long, global = true)]
    pub no_log: bool,

    /// Task to start with. May be repeated.
    #[arg(long = "task", global = true)]
    pub tasks: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Whether this invocation should start file logging.
    ///
    /// Only the interactive screen logs; `completions` writes to stdout and
    /// must not touch the log directory.
    pub fn wants_file_logging(&self) -> bool {
        !self.no_log && matches!(self.command, None | Some(Commands::Ui))
    }

    /// Absolute log directory, falling back to `$HOME/.checklist/logs`.
    pub fn resolved_log_dir(&self) -> PathBuf {
        let dir = self.log_dir.clone().unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".checklist").join("logs")
        });
        std::path::absolute(&dir).unwrap_or(dir)
    }
}
