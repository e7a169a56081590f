pub mod case;
pub mod cli;
pub mod config;
pub mod renamer;

pub use case::{render, tokenize, CaseStyle, EmptyNameError};
pub use config::Config;
pub use renamer::Renamer;

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionStatus {
    Renamed,
    DryRun,
    Unchanged,
    Skipped(String),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct RenameAction {
    pub dir: PathBuf,
    pub old_name: String,
    pub new_name: Option<String>,
    pub status: ActionStatus,
}

#[derive(Debug, Clone, Default)]
pub struct RenameReport {
    pub renamed: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: usize,
    pub actions: Vec<RenameAction>,
}

impl RenameReport {
    pub fn add(&mut self, action: RenameAction) {
        match &action.status {
            ActionStatus::Renamed | ActionStatus::DryRun => self.renamed += 1,
            ActionStatus::Unchanged => self.unchanged += 1,
            ActionStatus::Skipped(_) => self.skipped += 1,
            ActionStatus::Failed(_) => self.failed += 1,
        }
        self.actions.push(action);
    }
}
