//! Command implementations for the CLI interface.

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};
use log::warn;

use crate::cli::Cli;
use crate::home::{AddOutcome, Home};
use crate::prompt::Notice;
use crate::store::IdSource;
use crate::tui::run::run_tui;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the checklist screen (default).
    Ui,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Add the `--task` titles to `home`, in order.
///
/// Returns the titles that were skipped, each with the reason.
pub fn seed_tasks<I: IdSource>(home: &mut Home<I>, titles: &[String]) -> Vec<(String, String)> {
    let mut skipped = Vec::new();
    for title in titles {
        let mut notices: Vec<Notice> = Vec::new();
        match home.add(title, &mut notices) {
            AddOutcome::Added(_) => {}
            AddOutcome::Duplicate => {
                let reason = notices
                    .pop()
                    .map(|n| n.body)
                    .unwrap_or_else(|| "duplicate title".to_string());
                skipped.push((title.clone(), reason));
            }
            AddOutcome::Blank => skipped.push((title.clone(), "title is blank".to_string())),
            AddOutcome::Exhausted => skipped.push((title.clone(), "no task ids left".to_string())),
        }
    }
    if !skipped.is_empty() {
        warn!("event=seed module=cmd status=partial skipped={}", skipped.len());
    }
    skipped
}

/// Launch the terminal user interface.
pub fn cmd_ui<I: IdSource>(mut home: Home<I>, titles: &[String]) {
    for (title, reason) in seed_tasks(&mut home, titles) {
        eprintln!("Skipping task '{title}': {reason}");
    }
    if let Err(e) = run_tui(home) {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

/// Print shell completions to stdout.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{SequentialIds, TaskStore};

    #[test]
    fn test_seed_tasks_skips_duplicates_and_blanks() {
        let mut home = Home::with_store(TaskStore::with_ids(SequentialIds::new()));
        let titles: Vec<String> = ["A", "B", "A", "  "].iter().map(|s| s.to_string()).collect();
        let skipped = seed_tasks(&mut home, &titles);

        let kept: Vec<&str> = home.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(kept, vec!["A", "B"]);
        assert_eq!(skipped.len(), 2);
        assert_eq!(skipped[0].0, "A");
        assert!(skipped[0].1.contains("same name"));
        assert_eq!(skipped[1].1, "title is blank");
    }
}
