#[cfg(test)]
mod tests {
    use skillctl_config::ConfigLoader;
    use skillctl_config::schema::*;
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::Path;

    // ── Default tests ──────────────────────────────────────────

    #[test]
    fn test_skillctl_config_defaults() {
        let config = SkillctlConfig::default();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.skills.confirm_delete);
        assert!(config.agents.is_empty());
    }

    #[test]
    fn test_defaults_validate_cleanly() {
        let warnings = SkillctlConfig::default().validate().unwrap();
        assert!(warnings.is_empty());
    }

    // ── TOML tests ─────────────────────────────────────────────

    #[test]
    fn test_config_toml_roundtrip() {
        let config = SkillctlConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let restored: SkillctlConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(restored.logging.level, config.logging.level);
        assert_eq!(restored.skills.confirm_delete, config.skills.confirm_delete);
    }

    #[test]
    fn test_partial_toml_applies_defaults() {
        let toml_str = r#"
[skills]
confirm_delete = false
"#;
        let config: SkillctlConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.skills.confirm_delete);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_custom_agent_deserialize() {
        let toml_str = r#"
[agents.inhouse]
display_name = "In-House"
project_dir = ".inhouse/skills"
global_dir = "~/.inhouse/skills"
detect_paths = ["~/.inhouse"]
"#;
        let config: SkillctlConfig = toml::from_str(toml_str).unwrap();
        let agent = &config.agents["inhouse"];
        assert_eq!(agent.display_name, "In-House");
        assert_eq!(agent.detect_paths, vec!["~/.inhouse".to_string()]);
        assert!(config.validate().unwrap().is_empty());
    }

    // ── Validation tests ───────────────────────────────────────

    #[test]
    fn test_unknown_log_level_is_warning() {
        let mut config = SkillctlConfig::default();
        config.logging.level = "loud".into();
        config.logging.format = "xml".into();
        let warnings = config.validate().unwrap();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.severity == WarningSeverity::Warning));
        assert_eq!(warnings[0].field, "logging.level");
    }

    #[test]
    fn test_incomplete_custom_agent_is_error() {
        let mut config = SkillctlConfig::default();
        config.agents.insert(
            "broken".into(),
            CustomAgentConfig {
                display_name: "Broken".into(),
                ..Default::default()
            },
        );
        let err = config.validate().unwrap_err();
        assert!(err.contains("agents.broken.project_dir"));
        assert!(err.contains("agents.broken.global_dir"));
        assert!(!err.contains("detect_paths"));
    }

    #[test]
    fn test_confirm_delete_off_is_info() {
        let mut config = SkillctlConfig::default();
        config.skills.confirm_delete = false;
        let warnings = config.validate().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, WarningSeverity::Info);
    }

    #[test]
    fn test_warning_display() {
        let w = ConfigWarning {
            field: "logging.level".into(),
            message: "unknown log level 'loud'".into(),
            severity: WarningSeverity::Warning,
            hint: Some("Valid values: trace".into()),
        };
        let text = w.to_string();
        assert!(text.contains("logging.level: unknown log level 'loud'"));
        assert!(text.contains("↳ Valid values: trace"));
    }

    // ── Overrides ──────────────────────────────────────────────

    #[test]
    fn test_overrides_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("SKILLCTL_LOG_LEVEL", "debug"),
            ("SKILLCTL_LOG_FORMAT", "json"),
            ("SKILLCTL_CONFIRM_DELETE", "no"),
        ]);
        let config = ConfigLoader::apply_overrides(SkillctlConfig::default(), |k| {
            vars.get(k).map(|v| v.to_string())
        });
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert!(!config.skills.confirm_delete);
    }

    #[test]
    fn test_invalid_confirm_override_is_ignored() {
        let config = ConfigLoader::apply_overrides(SkillctlConfig::default(), |k| {
            (k == "SKILLCTL_CONFIRM_DELETE").then(|| "maybe".to_string())
        });
        assert!(config.skills.confirm_delete);
    }

    // ── ConfigLoader tests ─────────────────────────────────────

    #[test]
    fn test_config_loader_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("skillctl.toml");
        let mut f = std::fs::File::create(&config_path).unwrap();
        writeln!(
            f,
            r#"
[logging]
format = "compact"

[agents.inhouse]
display_name = "In-House"
project_dir = ".inhouse/skills"
global_dir = "~/.inhouse/skills"
detect_paths = ["~/.inhouse"]
"#
        )
        .unwrap();

        let loader = ConfigLoader::load(Some(config_path.as_path())).unwrap();
        let config = loader.get();
        assert_eq!(config.logging.format, "compact");
        assert!(config.agents.contains_key("inhouse"));
        assert_eq!(loader.path(), config_path.as_path());
    }

    #[test]
    fn test_config_loader_keeps_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("skillctl.toml");
        std::fs::write(&config_path, "[logging]\nformat = \"xml\"\n").unwrap();

        let loader = ConfigLoader::load(Some(config_path.as_path())).unwrap();
        let format_warning = loader
            .warnings()
            .iter()
            .find(|w| w.field == "logging.format")
            .expect("unknown format should be reported");
        assert_eq!(format_warning.severity, WarningSeverity::Warning);
        assert!(format_warning.message.contains("xml"));
    }

    #[test]
    fn test_config_loader_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let loader = ConfigLoader::load(Some(missing.as_path())).unwrap();
        assert!(loader.get().agents.is_empty());
    }

    #[test]
    fn test_config_loader_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("skillctl.toml");
        std::fs::write(&config_path, "[logging\nlevel = ").unwrap();
        let err = ConfigLoader::load(Some(config_path.as_path())).err().unwrap();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_config_loader_rejects_invalid_agent() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("skillctl.toml");
        std::fs::write(&config_path, "[agents.half]\ndisplay_name = \"Half\"\n").unwrap();
        let err = ConfigLoader::load(Some(config_path.as_path())).err().unwrap();
        assert!(err.to_string().contains("Configuration errors"));
    }

    #[test]
    fn test_resolve_path_prefers_explicit() {
        let explicit = Path::new("/tmp/custom.toml");
        assert_eq!(ConfigLoader::resolve_path(Some(explicit)), explicit);
    }

    // ── JSON roundtrip ─────────────────────────────────────────

    #[test]
    fn test_config_json_roundtrip() {
        let config = SkillctlConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: SkillctlConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.logging.format, config.logging.format);
    }
}
