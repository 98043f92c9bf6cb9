use std::path::Path;
use tracing::{info, warn};

use crate::locate::{SkillLocation, is_symlink};

/// Remove a skill directory. Symlinks are unlinked and their target is left alone.
pub fn remove_skill_path(path: &Path) -> std::io::Result<()> {
    if is_symlink(path) {
        // Directory symlinks on Windows need remove_dir.
        std::fs::remove_file(path).or_else(|_| std::fs::remove_dir(path))
    } else {
        std::fs::remove_dir_all(path)
    }
}

/// Number of files below `dir`. Symlinks to files count; symlinked
/// directories are not descended into.
pub fn count_files(dir: &Path) -> usize {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return 0;
    };
    entries
        .flatten()
        .map(|entry| match entry.file_type() {
            Ok(ft) if ft.is_dir() => count_files(&entry.path()),
            Ok(_) if entry.path().is_file() => 1,
            _ => 0,
        })
        .sum()
}

/// Result of deleting one location.
#[derive(Debug, Clone)]
pub struct DeleteOutcome {
    pub location: SkillLocation,
    /// `None` on success, otherwise the failure message.
    pub error: Option<String>,
}

impl DeleteOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcomes for a batch of deletions, in request order.
#[derive(Debug, Clone, Default)]
pub struct DeleteSummary {
    pub outcomes: Vec<DeleteOutcome>,
}

impl DeleteSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded() == self.total()
    }
}

/// Delete every location, continuing past failures.
pub fn delete_locations(locations: &[SkillLocation]) -> DeleteSummary {
    let outcomes = locations
        .iter()
        .map(|location| {
            let error = match remove_skill_path(&location.path) {
                Ok(()) => {
                    info!(agent = %location.agent_id, path = ?location.path, "deleted skill");
                    None
                }
                Err(e) => {
                    warn!(agent = %location.agent_id, path = ?location.path, error = %e, "failed to delete skill");
                    Some(e.to_string())
                }
            };
            DeleteOutcome {
                location: location.clone(),
                error,
            }
        })
        .collect();
    DeleteSummary { outcomes }
}
