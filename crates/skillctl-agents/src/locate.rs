use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::definition::{AgentDefinition, SkillScope};
use crate::registry::{AgentRegistry, CLAUDE_CODE};
use crate::roots::SearchRoots;

/// A skill found on disk for a specific agent and scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillLocation {
    pub agent_id: String,
    pub display_name: String,
    pub scope: SkillScope,
    pub path: PathBuf,
    pub is_symlink: bool,
}

/// True if `path` is a symlink (dangling or not).
pub fn is_symlink(path: &Path) -> bool {
    std::fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}

/// A path holds a skill if it exists and either contains `SKILL.md` or is a
/// symlink to somewhere that exists.
pub fn holds_skill(path: &Path) -> bool {
    path.exists() && (path.join("SKILL.md").exists() || is_symlink(path))
}

/// Reject names that would resolve outside the skills directory.
pub fn validate_skill_name(name: &str) -> skillctl_core::Result<()> {
    let mut components = Path::new(name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(std::path::Component::Normal(_)), None)
    );
    if name.is_empty() || name.contains(['/', '\\']) || !single_normal {
        return Err(skillctl_core::SkillctlError::InvalidSkillName(name.to_string()));
    }
    Ok(())
}

/// Resolves skill names to locations using a registry and search roots.
pub struct SkillLocator<'a> {
    registry: &'a AgentRegistry,
    roots: &'a SearchRoots,
}

impl<'a> SkillLocator<'a> {
    pub fn new(registry: &'a AgentRegistry, roots: &'a SearchRoots) -> Self {
        Self { registry, roots }
    }

    /// Look in Claude Code's global then project directory (or only `scope`).
    /// The first match wins.
    pub fn find_default(&self, name: &str, scope: Option<SkillScope>) -> Option<SkillLocation> {
        let agent = self.registry.get(CLAUDE_CODE)?;
        SkillScope::ALL
            .into_iter()
            .filter(|s| scope.is_none_or(|wanted| wanted == *s))
            .find_map(|s| self.probe(agent, s, name))
    }

    /// Every location of `name` among the given agents, in both scopes.
    /// Unknown ids are skipped; a directory shared by several agents is
    /// reported once, under the first agent that claims it.
    pub fn find_in_agents<'i, I>(&self, name: &str, ids: I) -> Vec<SkillLocation>
    where
        I: IntoIterator<Item = &'i str>,
    {
        let mut seen = HashSet::new();
        let mut found = Vec::new();

        for id in ids {
            let Some(agent) = self.registry.get(id) else {
                debug!(agent = id, "skipping unknown agent");
                continue;
            };
            for scope in SkillScope::ALL {
                if let Some(location) = self.probe(agent, scope, name) {
                    let key = std::fs::canonicalize(&location.path)
                        .unwrap_or_else(|_| location.path.clone());
                    if seen.insert(key) {
                        found.push(location);
                    }
                }
            }
        }

        found
    }

    /// `find_in_agents` over every installed agent.
    pub fn find_in_installed(&self, name: &str) -> Vec<SkillLocation> {
        let installed: Vec<&str> = self
            .registry
            .detect_installed(self.roots)
            .into_iter()
            .map(|a| a.id.as_str())
            .collect();
        self.find_in_agents(name, installed)
    }

    fn probe(&self, agent: &AgentDefinition, scope: SkillScope, name: &str) -> Option<SkillLocation> {
        let path = agent.skills_dir(scope, self.roots).join(name);
        if !holds_skill(&path) {
            return None;
        }
        debug!(agent = %agent.id, %scope, ?path, "found skill");
        Some(SkillLocation {
            agent_id: agent.id.clone(),
            display_name: agent.display_name.clone(),
            scope,
            is_symlink: is_symlink(&path),
            path,
        })
    }
}
