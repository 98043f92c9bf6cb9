use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::roots::SearchRoots;

/// Where an agent keeps skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillScope {
    /// User-level directory under the home directory.
    Global,
    /// Directory relative to the current project.
    Project,
}

impl SkillScope {
    /// Search order when no scope is requested: global first.
    pub const ALL: [SkillScope; 2] = [SkillScope::Global, SkillScope::Project];
}

impl fmt::Display for SkillScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillScope::Global => f.write_str("global"),
            SkillScope::Project => f.write_str("project"),
        }
    }
}

/// Directory conventions for one AI coding agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDefinition {
    /// Stable identifier, e.g. "claude-code".
    pub id: String,
    /// Human-readable name, e.g. "Claude Code".
    pub display_name: String,
    /// Project-level skills directory, relative to the working directory.
    pub project_dir: String,
    /// Global skills directory, usually `~`-relative.
    pub global_dir: String,
    /// Paths whose existence means the agent is installed.
    #[serde(default)]
    pub detect_paths: Vec<String>,
}

impl AgentDefinition {
    pub fn project_skills_dir(&self, roots: &SearchRoots) -> PathBuf {
        roots.cwd.join(&self.project_dir)
    }

    pub fn global_skills_dir(&self, roots: &SearchRoots) -> PathBuf {
        roots.expand(&self.global_dir)
    }

    pub fn skills_dir(&self, scope: SkillScope, roots: &SearchRoots) -> PathBuf {
        match scope {
            SkillScope::Global => self.global_skills_dir(roots),
            SkillScope::Project => self.project_skills_dir(roots),
        }
    }

    /// True if any detect path exists.
    pub fn is_installed(&self, roots: &SearchRoots) -> bool {
        self.detect_paths.iter().any(|p| roots.expand(p).exists())
    }
}
