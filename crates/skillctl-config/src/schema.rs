use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration, parsed from `skillctl.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillctlConfig {
    pub logging: LoggingConfig,
    pub skills: SkillsConfig,
    /// Extra agents merged into the registry, keyed by agent id.
    pub agents: BTreeMap<String, CustomAgentConfig>,
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    pub level: String,
    /// Output format: "pretty", "json", or "compact".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

// ── Skills ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    /// Ask before deleting a skill. `--force` skips the prompt either way.
    pub confirm_delete: bool,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            confirm_delete: true,
        }
    }
}

// ── Custom agents ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomAgentConfig {
    pub display_name: String,
    /// Skills directory relative to the project root.
    pub project_dir: String,
    /// User-level skills directory; `~` expands to the home directory.
    pub global_dir: String,
    /// Paths whose existence marks the agent as installed.
    pub detect_paths: Vec<String>,
}

// ── Validation ─────────────────────────────────────────────────

/// A config validation finding.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.severity {
            WarningSeverity::Error => "❌",
            WarningSeverity::Warning => "⚠️ ",
            WarningSeverity::Info => "💡",
        };
        write!(f, "{} {}: {}", icon, self.field, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, "\n   ↳ {}", h)?;
        }
        Ok(())
    }
}

impl SkillctlConfig {
    /// Validate the config and return a list of warnings/errors.
    /// Returns `Err` with all messages joined if any severity is Error.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, String> {
        let mut warnings = Vec::new();

        // ── Logging level ───
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.level".into(),
                message: format!("unknown log level '{}'", self.logging.level),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", valid_levels.join(", "))),
            });
        }

        // ── Logging format ───
        let valid_formats = ["pretty", "json", "compact"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.format".into(),
                message: format!("unknown log format '{}'", self.logging.format),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", valid_formats.join(", "))),
            });
        }

        // ── Skills ───
        if !self.skills.confirm_delete {
            warnings.push(ConfigWarning {
                field: "skills.confirm_delete".into(),
                message: "skills are deleted without confirmation".into(),
                severity: WarningSeverity::Info,
                hint: None,
            });
        }

        // ── Custom agents ───
        for (id, agent) in &self.agents {
            let field = |name: &str| format!("agents.{id}.{name}");

            if id.trim().is_empty() || id.contains(char::is_whitespace) {
                warnings.push(ConfigWarning {
                    field: format!("agents.{id}"),
                    message: "agent id must be non-empty and contain no whitespace".into(),
                    severity: WarningSeverity::Error,
                    hint: Some("Use a slug such as 'my-agent'".into()),
                });
            }
            if agent.display_name.trim().is_empty() {
                warnings.push(ConfigWarning {
                    field: field("display_name"),
                    message: "display name is empty".into(),
                    severity: WarningSeverity::Error,
                    hint: None,
                });
            }
            if agent.project_dir.trim().is_empty() {
                warnings.push(ConfigWarning {
                    field: field("project_dir"),
                    message: "project skills directory is empty".into(),
                    severity: WarningSeverity::Error,
                    hint: Some("Set to e.g. '.my-agent/skills'".into()),
                });
            }
            if agent.global_dir.trim().is_empty() {
                warnings.push(ConfigWarning {
                    field: field("global_dir"),
                    message: "global skills directory is empty".into(),
                    severity: WarningSeverity::Error,
                    hint: Some("Set to e.g. '~/.my-agent/skills'".into()),
                });
            }
            if agent.detect_paths.is_empty() {
                warnings.push(ConfigWarning {
                    field: field("detect_paths"),
                    message: "no detect paths; agent will never be reported as installed".into(),
                    severity: WarningSeverity::Warning,
                    hint: Some("Add the agent's config directory, e.g. '~/.my-agent'".into()),
                });
            }
        }

        // Check for hard errors
        let errors: Vec<String> = warnings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Error)
            .map(|w| format!("{}: {}", w.field, w.message))
            .collect();

        if !errors.is_empty() {
            return Err(format!("Configuration errors:\n  • {}", errors.join("\n  • ")));
        }

        Ok(warnings)
    }
}
