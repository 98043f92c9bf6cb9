use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

use crate::issue::{HookIssue, HooksReport};
use crate::validate::validate_hooks_config;

/// Validate the settings file at `path`.
///
/// Loading problems (missing file, unreadable file, malformed JSON, non-object
/// document) produce a single input issue. An empty or whitespace-only file
/// means "no configuration" and is valid.
pub fn validate_file(path: impl AsRef<Path>) -> HooksReport {
    let path = path.as_ref();
    info!(?path, "validating hooks configuration");

    if !path.exists() {
        return HooksReport::from(vec![HookIssue::input(format!(
            "File not found: {}",
            path.display()
        ))]);
    }

    match std::fs::read_to_string(path) {
        Ok(content) => validate_str(&content),
        Err(e) => HooksReport::from(vec![HookIssue::input(format!("Could not read file: {e}"))]),
    }
}

/// Validate settings content that is already in memory.
pub fn validate_str(content: &str) -> HooksReport {
    if content.trim().is_empty() {
        debug!("settings content is empty, nothing to validate");
        return HooksReport::default();
    }

    match serde_json::from_str::<Value>(content) {
        Ok(doc) => validate_value(&doc),
        Err(e) => HooksReport::from(vec![HookIssue::input(format!("Invalid JSON: {e}"))]),
    }
}

/// Validate an already parsed settings document.
pub fn validate_value(doc: &Value) -> HooksReport {
    let Some(config) = doc.as_object() else {
        return HooksReport::from(vec![HookIssue::input("Configuration must be a JSON object")]);
    };
    let report = HooksReport::from(validate_hooks_config(config));
    debug!(issues = report.len(), "hooks validation finished");
    report
}
