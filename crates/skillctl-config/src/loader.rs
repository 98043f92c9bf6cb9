use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::schema::{ConfigWarning, SkillctlConfig};

/// Loads the skillctl configuration.
///
/// Loading usually happens before logging is set up, so non-fatal findings
/// are kept on the loader for the caller to report.
pub struct ConfigLoader {
    config: SkillctlConfig,
    config_path: PathBuf,
    warnings: Vec<ConfigWarning>,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > SKILLCTL_CONFIG env > ~/.skillctl/skillctl.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("SKILLCTL_CONFIG") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".skillctl")
            .join("skillctl.toml")
    }

    /// Load the config from disk, falling back to defaults when the file is absent.
    pub fn load(path: Option<&Path>) -> skillctl_core::Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            let raw = std::fs::read_to_string(&config_path)?;
            Self::parse(&raw, &config_path)?
        } else {
            info!(?config_path, "config file not found, using defaults");
            SkillctlConfig::default()
        };

        // Apply environment variable overrides
        let config = Self::apply_env_overrides(config);

        // Errors abort the load; everything else is kept for the caller
        let warnings = config.validate().map_err(skillctl_core::SkillctlError::Config)?;

        Ok(Self {
            config,
            config_path,
            warnings,
        })
    }

    /// Parse TOML content; `origin` is only used in the error message.
    pub fn parse(raw: &str, origin: &Path) -> skillctl_core::Result<SkillctlConfig> {
        toml::from_str::<SkillctlConfig>(raw).map_err(|e| {
            skillctl_core::SkillctlError::Config(format!(
                "failed to parse {}: {}",
                origin.display(),
                e
            ))
        })
    }

    /// Get a snapshot of the current config.
    pub fn get(&self) -> SkillctlConfig {
        self.config.clone()
    }

    /// Non-fatal validation findings (warnings and info).
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Path the config was resolved to (it may not exist).
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Apply env var overrides (SKILLCTL_LOG_LEVEL, SKILLCTL_LOG_FORMAT, SKILLCTL_CONFIRM_DELETE).
    fn apply_env_overrides(config: SkillctlConfig) -> SkillctlConfig {
        Self::apply_overrides(config, |key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable source.
    pub fn apply_overrides(
        mut config: SkillctlConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> SkillctlConfig {
        if let Some(v) = lookup("SKILLCTL_LOG_LEVEL") {
            config.logging.level = v;
        }
        if let Some(v) = lookup("SKILLCTL_LOG_FORMAT") {
            config.logging.format = v;
        }
        if let Some(v) = lookup("SKILLCTL_CONFIRM_DELETE") {
            match v.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => config.skills.confirm_delete = true,
                "0" | "false" | "no" => config.skills.confirm_delete = false,
                other => warn!(value = other, "ignoring invalid SKILLCTL_CONFIRM_DELETE"),
            }
        }
        config
    }
}
