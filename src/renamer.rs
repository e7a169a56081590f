use crate::case::{render, tokenize, CaseStyle};
use crate::cli::output::{self, OutputFormat};
use crate::{ActionStatus, Config, RenameAction, RenameReport};
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

pub struct Renamer {
    style: CaseStyle,
    keep_upper: bool,
    max_depth: usize,
    dry_run: bool,
}

impl Renamer {
    pub fn new(style: CaseStyle, config: &Config, dry_run: bool) -> Self {
        Self {
            style,
            keep_upper: config.keep_upper,
            max_depth: config.depth,
            dry_run,
        }
    }

    /// Process a file or directory root and report every per-file outcome.
    pub fn run(&self, root: &Path, colored: bool, format: &OutputFormat) -> Result<RenameReport> {
        // Absolutize first so a relative root like "." is never mistaken
        // for a hidden entry.
        let root = root
            .canonicalize()
            .with_context(|| format!("Failed to resolve path: {}", root.display()))?;

        let metadata = fs::metadata(&root)
            .with_context(|| format!("Failed to stat path: {}", root.display()))?;

        let mut report = RenameReport::default();

        if metadata.is_dir() {
            if matches!(format, OutputFormat::Text) {
                output::print_heading(&root, colored);
            }
            self.walk(&root, colored, format, &mut report);
        } else {
            // An explicitly named file is processed even if hidden.
            let action = self.rename_file(&root);
            if matches!(format, OutputFormat::Text) {
                output::print_action(&action, colored);
            }
            report.add(action);
        }

        Ok(report)
    }

    fn walk(&self, root: &Path, colored: bool, format: &OutputFormat, report: &mut RenameReport) {
        // The root itself is exempt from the hidden check so that an
        // explicitly named dot-directory is still processed.
        let walker = WalkDir::new(root)
            .max_depth(self.max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    // A broken entry aborts that subtree only, not the walk.
                    eprintln!("Warning: {}", err);
                    report.failed += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let action = self.rename_file(entry.path());
            if matches!(format, OutputFormat::Text) {
                output::print_action(&action, colored);
            }
            report.add(action);
        }
    }

    fn rename_file(&self, path: &Path) -> RenameAction {
        let dir = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();

        let file_name = match path.file_name().and_then(OsStr::to_str) {
            Some(name) => name.to_string(),
            None => {
                return RenameAction {
                    dir,
                    old_name: path.display().to_string(),
                    new_name: None,
                    status: ActionStatus::Skipped("file name is not valid UTF-8".to_string()),
                }
            }
        };

        let (stem, ext) = split_stem(&file_name);
        let tokens = tokenize(stem, self.keep_upper);

        let new_stem = match render(&tokens, self.style) {
            Ok(new_stem) => new_stem,
            Err(err) => {
                return RenameAction {
                    dir,
                    old_name: file_name,
                    new_name: None,
                    status: ActionStatus::Skipped(err.to_string()),
                }
            }
        };
        let new_name = format!("{}{}", new_stem, ext);

        if new_name == file_name {
            return RenameAction {
                dir,
                old_name: file_name,
                new_name: Some(new_name),
                status: ActionStatus::Unchanged,
            };
        }

        if self.dry_run {
            return RenameAction {
                dir,
                old_name: file_name,
                new_name: Some(new_name),
                status: ActionStatus::DryRun,
            };
        }

        let target = dir.join(&new_name);
        // On a case-insensitive filesystem a case-only rename makes the
        // target resolve to the source itself; only a different existing
        // entry is a collision.
        let target_occupied = target.exists()
            && fs::canonicalize(&target)
                .map(|existing| existing != path)
                .unwrap_or(true);
        if target_occupied {
            return RenameAction {
                dir,
                old_name: file_name,
                new_name: Some(new_name),
                status: ActionStatus::Failed("target name already exists".to_string()),
            };
        }

        let status = match fs::rename(path, &target) {
            Ok(()) => ActionStatus::Renamed,
            Err(err) => ActionStatus::Failed(err.to_string()),
        };

        RenameAction {
            dir,
            old_name: file_name,
            new_name: Some(new_name),
            status,
        }
    }
}

/// Split a file name into stem and extension, the extension keeping its dot.
/// A name with no dot, or whose only dot is leading, is all stem.
fn split_stem(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(index) if index > 0 => (&name[..index], &name[index..]),
        _ => (name, ""),
    }
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
