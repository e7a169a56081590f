use crate::{ActionStatus, RenameAction, RenameReport};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, MAIN_SEPARATOR};
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonAction {
    dir: String,
    from: String,
    to: Option<String>,
    status: String,
    reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonReport {
    renamed: usize,
    unchanged: usize,
    skipped: usize,
    failed: usize,
    actions: Vec<JsonAction>,
}

pub fn print_heading(root: &Path, colored_output: bool) {
    if colored_output {
        println!("Reading files in \"{}\"", root.display().to_string().yellow());
    } else {
        println!("Reading files in \"{}\"", root.display());
    }
}

pub fn print_dry_run_notice(colored_output: bool) {
    if colored_output {
        println!(
            "{}",
            "Running in dry-run mode, no files will be renamed".yellow()
        );
    } else {
        println!("Running in dry-run mode, no files will be renamed");
    }
}

pub fn print_action(action: &RenameAction, colored_output: bool) {
    let prefix = format!("{}{}", action.dir.display(), MAIN_SEPARATOR);

    match &action.status {
        ActionStatus::Renamed | ActionStatus::DryRun => {
            let verb = if matches!(action.status, ActionStatus::DryRun) {
                "Would rename:"
            } else {
                "Renamed:"
            };
            let new_name = action.new_name.as_deref().unwrap_or("");

            if colored_output {
                println!(
                    "{} \"{}{}\" -> \"{}\"",
                    verb,
                    prefix.yellow(),
                    action.old_name.red(),
                    new_name.green()
                );
            } else {
                println!(
                    "{} \"{}{}\" -> \"{}\"",
                    verb, prefix, action.old_name, new_name
                );
            }
        }
        ActionStatus::Unchanged => {}
        ActionStatus::Skipped(reason) => {
            if colored_output {
                eprintln!(
                    "{} \"{}{}\": {}",
                    "Skipped:".yellow().bold(),
                    prefix,
                    action.old_name,
                    reason
                );
            } else {
                eprintln!("Skipped: \"{}{}\": {}", prefix, action.old_name, reason);
            }
        }
        ActionStatus::Failed(reason) => {
            if colored_output {
                eprintln!(
                    "{} \"{}{}\": {}",
                    "Failed to rename:".red().bold(),
                    prefix,
                    action.old_name,
                    reason
                );
            } else {
                eprintln!(
                    "Failed to rename: \"{}{}\": {}",
                    prefix, action.old_name, reason
                );
            }
        }
    }
}

pub fn print_summary(report: &RenameReport, dry_run: bool, colored_output: bool) {
    println!();

    let file_word = if report.renamed == 1 { "file" } else { "files" };
    let verb = if dry_run { "would be renamed" } else { "renamed" };
    let mut line = format!("{} {} {}", report.renamed, file_word, verb);
    if report.unchanged > 0 {
        line.push_str(&format!(", {} already in the target case", report.unchanged));
    }
    if report.skipped > 0 {
        line.push_str(&format!(", {} skipped", report.skipped));
    }

    if report.failed == 0 {
        if colored_output {
            println!("{} {}", "✓".green().bold(), line);
        } else {
            println!("✓ {}", line);
        }
    } else {
        let failure_word = if report.failed == 1 {
            "failure"
        } else {
            "failures"
        };
        if colored_output {
            println!(
                "{} {} ({} {})",
                "✗".red().bold(),
                line,
                report.failed.to_string().red().bold(),
                failure_word
            );
        } else {
            println!("✗ {} ({} {})", line, report.failed, failure_word);
        }
    }
}

pub fn print_json_report(report: &RenameReport) {
    let actions: Vec<JsonAction> = report
        .actions
        .iter()
        .map(|action| {
            let (status, reason) = match &action.status {
                ActionStatus::Renamed => ("renamed", None),
                ActionStatus::DryRun => ("dry-run", None),
                ActionStatus::Unchanged => ("unchanged", None),
                ActionStatus::Skipped(reason) => ("skipped", Some(reason.clone())),
                ActionStatus::Failed(reason) => ("failed", Some(reason.clone())),
            };

            JsonAction {
                dir: action.dir.display().to_string(),
                from: action.old_name.clone(),
                to: action.new_name.clone(),
                status: status.to_string(),
                reason,
            }
        })
        .collect();

    let output = JsonReport {
        renamed: report.renamed,
        unchanged: report.unchanged,
        skipped: report.skipped,
        failed: report.failed,
        actions,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
