use std::io::Write;
use std::process::ExitCode;

use skillctl_agents::{AgentDefinition, AgentRegistry, SearchRoots};
use skillctl_config::SkillctlConfig;

use super::{AgentAction, build_registry};

pub(crate) fn cmd_agents(config: &SkillctlConfig, action: AgentAction) -> skillctl_core::Result<ExitCode> {
    let registry = build_registry(config);
    let roots = SearchRoots::from_env()?;
    let mut out = std::io::stdout().lock();

    match action {
        AgentAction::List { json } => list(&mut out, &registry, json)?,
        AgentAction::Show { id } => show(&mut out, &registry, &roots, &id)?,
        AgentAction::Detect => detect(&mut out, &registry, &roots)?,
    }
    Ok(ExitCode::SUCCESS)
}

fn list(out: &mut dyn Write, registry: &AgentRegistry, json: bool) -> skillctl_core::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&registry.list())?)?;
        return Ok(());
    }

    writeln!(out, "{:<16} {:<18} {:<24} GLOBAL", "ID", "NAME", "PROJECT")?;
    for agent in registry.list() {
        writeln!(
            out,
            "{:<16} {:<18} {:<24} {}",
            agent.id, agent.display_name, agent.project_dir, agent.global_dir
        )?;
    }
    writeln!(out, "\n{} agent(s)", registry.count())?;
    Ok(())
}

fn show(out: &mut dyn Write, registry: &AgentRegistry, roots: &SearchRoots, id: &str) -> skillctl_core::Result<()> {
    let agent = registry.resolve(id)?;
    writeln!(out, "{} ({})", agent.display_name, agent.id)?;
    writeln!(out, "   Project skills: {}", agent.project_skills_dir(roots).display())?;
    writeln!(out, "   Global skills:  {}", agent.global_skills_dir(roots).display())?;
    writeln!(out, "   Installed:      {}", if agent.is_installed(roots) { "yes" } else { "no" })?;
    for path in &agent.detect_paths {
        writeln!(out, "   Detect path:    {}", roots.expand(path).display())?;
    }
    Ok(())
}

fn detect(out: &mut dyn Write, registry: &AgentRegistry, roots: &SearchRoots) -> skillctl_core::Result<()> {
    let installed: Vec<&AgentDefinition> = registry.detect_installed(roots);
    if installed.is_empty() {
        writeln!(out, "No supported agents detected.")?;
        return Ok(());
    }
    writeln!(out, "Detected {} agent(s):", installed.len())?;
    for agent in installed {
        writeln!(out, "  - {} ({})", agent.display_name, agent.id)?;
    }
    Ok(())
}
