use console::style;
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, info};

use skillctl_agents::{
    AgentRegistry, SearchRoots, SkillLocation, SkillLocator, SkillScope, count_files,
    delete_locations, is_symlink, remove_skill_path, validate_skill_name,
};
use skillctl_config::SkillctlConfig;
use skillctl_core::SkillctlError;

use super::{ScopeArg, SkillAction, build_registry};

/// Asks the user a yes/no question.
pub(crate) trait Confirmer {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Interactive prompt on the terminal. Defaults to "no".
pub(crate) struct TerminalConfirm;

impl Confirmer for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        use dialoguer::{Confirm, theme::ColorfulTheme};

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

pub(crate) fn cmd_skill(config: &SkillctlConfig, action: SkillAction) -> skillctl_core::Result<ExitCode> {
    let registry = build_registry(config);
    let roots = SearchRoots::from_env()?;
    let ops = SkillOps {
        registry: &registry,
        roots: &roots,
        confirm_delete: config.skills.confirm_delete,
    };
    let mut out = std::io::stdout().lock();
    let mut confirmer = TerminalConfirm;

    let ok = match action {
        SkillAction::Delete {
            name,
            scope,
            agents,
            all_agents,
            force,
        } => {
            if all_agents || !agents.is_empty() {
                ops.delete_agents(&mut out, &mut confirmer, &name, &agents, force)?
            } else {
                ops.delete_default(&mut out, &mut confirmer, &name, scope, force)?
            }
        }
        SkillAction::Find {
            name,
            agents,
            all_agents,
        } => ops.find(&mut out, &name, &agents, all_agents)?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Claude Code's scopes are called "user" and "project" on the command line.
fn claude_scope_label(scope: SkillScope) -> &'static str {
    match scope {
        SkillScope::Global => "user",
        SkillScope::Project => "project",
    }
}

fn location_line(location: &SkillLocation) -> String {
    format!(
        "  - {} ({}) [{}]: {}",
        location.display_name,
        location.agent_id,
        location.scope,
        location.path.display()
    )
}

pub(crate) struct SkillOps<'a> {
    pub registry: &'a AgentRegistry,
    pub roots: &'a SearchRoots,
    pub confirm_delete: bool,
}

impl SkillOps<'_> {
    fn locator(&self) -> SkillLocator<'_> {
        SkillLocator::new(self.registry, self.roots)
    }

    /// Resolve every id up front so a typo fails before anything is touched.
    fn check_agents(&self, agents: &[String]) -> skillctl_core::Result<()> {
        for id in agents {
            self.registry.resolve(id)?;
        }
        Ok(())
    }

    /// Delete from Claude Code's user or project scope, then report copies
    /// that remain in other installed agents.
    pub fn delete_default(
        &self,
        out: &mut dyn Write,
        confirmer: &mut dyn Confirmer,
        name: &str,
        scope: Option<ScopeArg>,
        force: bool,
    ) -> skillctl_core::Result<bool> {
        validate_skill_name(name)?;
        let scope = scope.map(SkillScope::from);

        let Some(location) = self.locator().find_default(name, scope) else {
            let searched = match scope {
                Some(s) => format!("{} scope", claude_scope_label(s)),
                None => "user or project scope".to_string(),
            };
            return Err(SkillctlError::SkillNotFound {
                name: name.to_string(),
                searched,
            });
        };
        let scope_label = claude_scope_label(location.scope);

        writeln!(out, "Found skill '{name}' at: {}", location.path.display())?;
        writeln!(out, "Scope: {scope_label}")?;
        if location.is_symlink {
            let target = std::fs::canonicalize(&location.path).unwrap_or_else(|_| location.path.clone());
            writeln!(out, "Type: symlink -> {}", target.display())?;
        }

        if !force && self.confirm_delete {
            if !location.is_symlink {
                writeln!(out, "Contains {} file(s)", count_files(&location.path))?;
            }
            writeln!(out)?;
            if !confirmer.confirm("Delete this skill?") {
                writeln!(out, "Cancelled.")?;
                return Ok(false);
            }
        }

        remove_skill_path(&location.path).map_err(|e| SkillctlError::Delete {
            path: location.path.display().to_string(),
            reason: e.to_string(),
        })?;
        info!(skill = name, scope = scope_label, "deleted skill");
        writeln!(out, "Deleted skill '{name}' from {scope_label} scope.")?;

        let remaining = self.locator().find_in_installed(name);
        if !remaining.is_empty() {
            writeln!(out)?;
            writeln!(
                out,
                "{} '{name}' still exists in {} other location(s):",
                style("Warning:").yellow(),
                remaining.len()
            )?;
            for location in &remaining {
                writeln!(out, "{}", location_line(location))?;
            }
            writeln!(out, "Use --all-agents to delete from all agents.")?;
        }

        Ok(true)
    }

    /// Delete from the named agents, or from every installed agent when
    /// `agents` is empty. Returns true only if every location was removed.
    pub fn delete_agents(
        &self,
        out: &mut dyn Write,
        confirmer: &mut dyn Confirmer,
        name: &str,
        agents: &[String],
        force: bool,
    ) -> skillctl_core::Result<bool> {
        validate_skill_name(name)?;
        self.check_agents(agents)?;

        let locations = self.collect(name, agents)?;

        writeln!(out, "Found '{name}' in {} location(s):", locations.len())?;
        for location in &locations {
            let link = if location.is_symlink { " (symlink)" } else { "" };
            writeln!(out, "{}{link}", location_line(location))?;
        }

        if !force && self.confirm_delete {
            writeln!(out)?;
            let prompt = format!("Delete from all {} location(s)?", locations.len());
            if !confirmer.confirm(&prompt) {
                writeln!(out, "Cancelled.")?;
                return Ok(false);
            }
        }

        let summary = delete_locations(&locations);

        writeln!(out, "\n=== DELETE RESULTS ===\n")?;
        for outcome in &summary.outcomes {
            let location = &outcome.location;
            let status = if outcome.succeeded() {
                style("[OK]").green()
            } else {
                style("[FAILED]").red()
            };
            writeln!(out, "{status} {} ({})", location.display_name, location.agent_id)?;
            let message = outcome.error.as_deref().unwrap_or("Deleted");
            writeln!(out, "      {message}: {}", location.path.display())?;
            writeln!(out)?;
        }
        writeln!(
            out,
            "Deleted from {}/{} location(s).",
            summary.succeeded(),
            summary.total()
        )?;

        Ok(summary.all_succeeded())
    }

    /// List every location of a skill without deleting anything.
    pub fn find(
        &self,
        out: &mut dyn Write,
        name: &str,
        agents: &[String],
        all_agents: bool,
    ) -> skillctl_core::Result<bool> {
        validate_skill_name(name)?;
        self.check_agents(agents)?;

        let locations = if all_agents || !agents.is_empty() {
            self.collect(name, agents)?
        } else {
            let locator = self.locator();
            let mut found: Vec<SkillLocation> = locator.find_default(name, None).into_iter().collect();
            for extra in locator.find_in_installed(name) {
                if !found.iter().any(|l| l.path == extra.path) {
                    found.push(extra);
                }
            }
            if found.is_empty() {
                return Err(SkillctlError::SkillNotFound {
                    name: name.to_string(),
                    searched: "any detected agent".to_string(),
                });
            }
            found
        };

        writeln!(out, "Found '{name}' in {} location(s):", locations.len())?;
        for location in &locations {
            if is_symlink(&location.path) {
                let target = std::fs::canonicalize(&location.path).unwrap_or_else(|_| location.path.clone());
                writeln!(out, "{} -> {}", location_line(location), target.display())?;
            } else {
                writeln!(out, "{}", location_line(location))?;
            }
        }
        Ok(true)
    }

    /// Locations for the named agents, or all installed agents if none named.
    fn collect(&self, name: &str, agents: &[String]) -> skillctl_core::Result<Vec<SkillLocation>> {
        let locator = self.locator();
        let (locations, searched) = if agents.is_empty() {
            (locator.find_in_installed(name), "any detected agent".to_string())
        } else {
            (
                locator.find_in_agents(name, agents.iter().map(String::as_str)),
                agents.join(", "),
            )
        };
        debug!(skill = name, count = locations.len(), "collected skill locations");

        if locations.is_empty() {
            return Err(SkillctlError::SkillNotFound {
                name: name.to_string(),
                searched,
            });
        }
        Ok(locations)
    }
}
