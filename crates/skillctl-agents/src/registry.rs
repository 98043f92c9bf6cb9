use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::builtin::builtin_agents;
use crate::definition::{AgentDefinition, SkillScope};
use crate::roots::SearchRoots;

/// Agent whose scopes are searched when no agent is named.
pub const CLAUDE_CODE: &str = "claude-code";

/// The agent registry: agent id → directory conventions.
///
/// Starts from the built-in table; custom agents registered later replace a
/// built-in entry with the same id. Iteration is always ordered by id.
pub struct AgentRegistry {
    agents: BTreeMap<String, AgentDefinition>,
}

impl AgentRegistry {
    /// Create a registry holding the built-in agents.
    pub fn new() -> Self {
        let mut registry = Self::new_empty();
        for def in builtin_agents() {
            registry.agents.insert(def.id.clone(), def);
        }
        registry
    }

    /// Create an empty registry (for tests).
    pub fn new_empty() -> Self {
        Self {
            agents: BTreeMap::new(),
        }
    }

    /// Register an agent definition. Returns the definition it replaced, if any.
    pub fn register(&mut self, def: AgentDefinition) -> Option<AgentDefinition> {
        let replaced = self.agents.insert(def.id.clone(), def);
        if let Some(ref old) = replaced {
            info!(agent = %old.id, "agent definition overridden");
        }
        replaced
    }

    /// Get an agent by id.
    pub fn get(&self, id: &str) -> Option<&AgentDefinition> {
        self.agents.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.agents.contains_key(id)
    }

    /// Get an agent by id, or an error listing every valid id.
    pub fn resolve(&self, id: &str) -> skillctl_core::Result<&AgentDefinition> {
        self.get(id).ok_or_else(|| skillctl_core::SkillctlError::UnknownAgent {
            id: id.to_string(),
            valid: self.ids().join(", "),
        })
    }

    /// List all agents, ordered by id.
    pub fn list(&self) -> Vec<&AgentDefinition> {
        self.agents.values().collect()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.agents.keys().map(String::as_str).collect()
    }

    pub fn count(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn project_skills_dir(&self, id: &str, roots: &SearchRoots) -> Option<PathBuf> {
        self.get(id).map(|a| a.project_skills_dir(roots))
    }

    pub fn global_skills_dir(&self, id: &str, roots: &SearchRoots) -> Option<PathBuf> {
        self.get(id).map(|a| a.global_skills_dir(roots))
    }

    pub fn skills_dir(&self, id: &str, scope: SkillScope, roots: &SearchRoots) -> Option<PathBuf> {
        self.get(id).map(|a| a.skills_dir(scope, roots))
    }

    /// Agents with at least one detect path present on disk.
    pub fn detect_installed(&self, roots: &SearchRoots) -> Vec<&AgentDefinition> {
        let installed: Vec<_> = self
            .agents
            .values()
            .filter(|a| a.is_installed(roots))
            .collect();
        debug!(count = installed.len(), "detected installed agents");
        installed
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
