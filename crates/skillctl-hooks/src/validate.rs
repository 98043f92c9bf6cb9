use serde_json::{Map, Value};
use tracing::debug;

use crate::event::{HookEvent, HookType};
use crate::issue::HookIssue;

/// Check a matcher pattern. `"*"` and `""` match everything and are never compiled.
///
/// Patterns compile with the `regex` crate, which has no look-around or
/// backreferences. A matcher such as `^(?!Bash).*` is therefore reported as
/// invalid even though backtracking engines accept it.
pub fn validate_pattern(pattern: &str) -> Result<(), String> {
    if pattern == "*" || pattern.is_empty() {
        return Ok(());
    }
    regex::Regex::new(pattern).map(|_| ()).map_err(|e| e.to_string())
}

/// Validate one hook object found at `path` under `event`.
pub fn validate_hook_spec(spec: &Map<String, Value>, event: HookEvent, path: &str) -> Vec<HookIssue> {
    let mut issues = Vec::new();
    let mut push = |message: String| {
        issues.push(HookIssue::schema(Some(event.as_str()), path, message));
    };

    // Nothing else can be checked without knowing the type.
    let Some(raw_type) = spec.get("type") else {
        push("missing required field 'type'".into());
        return issues;
    };
    let Some(hook_type) = raw_type.as_str().and_then(HookType::parse) else {
        push(format!(
            "invalid type '{}', must be one of: {}",
            display_value(raw_type),
            HookType::ALL.map(HookType::as_str).join(", ")
        ));
        return issues;
    };

    if hook_type == HookType::Prompt && !event.supports_prompt() {
        push(format!("prompt hooks not supported for event '{event}'"));
    }

    let field = hook_type.payload_field();
    match spec.get(field) {
        None => push(format!("type '{hook_type}' requires '{field}' field")),
        Some(Value::String(s)) if is_blank(s) => push(format!("'{field}' cannot be empty")),
        Some(Value::String(_)) => {}
        Some(_) => push(format!("'{field}' must be a string")),
    }

    if let Some(timeout) = spec.get("timeout") {
        match timeout {
            Value::Number(n) => {
                if !n.as_f64().is_some_and(|t| t > 0.0) {
                    push("'timeout' must be positive".into());
                }
            }
            _ => push("'timeout' must be a number".into()),
        }
    }

    if spec.get("once").is_some_and(|once| !once.is_boolean()) {
        push("'once' must be a boolean".into());
    }

    issues
}

/// Validate the entry at `hooks.<event>[<index>]`.
pub fn validate_matcher_entry(entry: &Map<String, Value>, event: HookEvent, index: usize) -> Vec<HookIssue> {
    let mut issues = Vec::new();
    let path = format!("hooks.{event}[{index}]");
    let issue = |path: String, message: String| HookIssue::schema(Some(event.as_str()), path, message);

    if event.supports_matcher() {
        if let Some(matcher) = entry.get("matcher") {
            match matcher.as_str() {
                None => issues.push(issue(format!("{path}.matcher"), "must be a string".into())),
                Some(pattern) => {
                    if let Err(e) = validate_pattern(pattern) {
                        issues.push(issue(
                            format!("{path}.matcher"),
                            format!("invalid regex pattern '{pattern}': {e}"),
                        ));
                    }
                }
            }
        }
    }

    let hooks = match entry.get("hooks") {
        None => {
            issues.push(issue(path, "missing required field 'hooks'".into()));
            return issues;
        }
        Some(Value::Array(hooks)) => hooks,
        Some(_) => {
            issues.push(issue(format!("{path}.hooks"), "must be an array".into()));
            return issues;
        }
    };

    if hooks.is_empty() {
        issues.push(issue(format!("{path}.hooks"), "array cannot be empty".into()));
        return issues;
    }

    for (i, hook) in hooks.iter().enumerate() {
        let hook_path = format!("{path}.hooks[{i}]");
        match hook.as_object() {
            Some(spec) => issues.extend(validate_hook_spec(spec, event, &hook_path)),
            None => issues.push(issue(hook_path, "must be an object".into())),
        }
    }

    issues
}

/// Validate the `hooks` section of a settings document. A document without
/// `hooks` is valid.
pub fn validate_hooks_config(config: &Map<String, Value>) -> Vec<HookIssue> {
    let Some(hooks) = config.get("hooks") else {
        debug!("no hooks configured");
        return Vec::new();
    };
    let Some(hooks) = hooks.as_object() else {
        return vec![HookIssue::schema(None, "hooks", "must be an object")];
    };

    let mut issues = Vec::new();
    for (name, entries) in hooks {
        let path = format!("hooks.{name}");
        let Ok(event) = name.parse::<HookEvent>() else {
            issues.push(HookIssue::schema(
                None,
                path,
                format!(
                    "invalid event name, must be one of: {}",
                    HookEvent::sorted_names().join(", ")
                ),
            ));
            continue;
        };

        let Some(entries) = entries.as_array() else {
            issues.push(HookIssue::schema(Some(name.as_str()), path, "must be an array"));
            continue;
        };

        debug!(event = %event, entries = entries.len(), "validating hook event");
        for (i, entry) in entries.iter().enumerate() {
            match entry.as_object() {
                Some(entry) => issues.extend(validate_matcher_entry(entry, event, i)),
                None => issues.push(HookIssue::schema(
                    Some(name.as_str()),
                    format!("{path}[{i}]"),
                    "must be an object",
                )),
            }
        }
    }

    issues
}

/// Strings are shown bare, everything else as JSON text.
/// Blank after stripping whitespace, counting the ASCII information
/// separators (U+001C..U+001F) as whitespace too.
fn is_blank(s: &str) -> bool {
    s.chars().all(|c| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn messages(issues: &[HookIssue]) -> Vec<String> {
        issues.iter().map(ToString::to_string).collect()
    }

    // ── Patterns ───────────────────────────────────────────────

    #[test]
    fn wildcard_sentinels_are_valid() {
        assert!(validate_pattern("*").is_ok());
        assert!(validate_pattern("").is_ok());
    }

    #[test]
    fn regular_patterns_compile() {
        assert!(validate_pattern("Bash").is_ok());
        assert!(validate_pattern("Edit|Write").is_ok());
        assert!(validate_pattern("mcp__.*__write.*").is_ok());
    }

    #[test]
    fn broken_pattern_returns_engine_message() {
        let err = validate_pattern("[").unwrap_err();
        let expected = regex::Regex::new("[").unwrap_err().to_string();
        assert_eq!(err, expected);
    }

    #[test]
    fn look_around_is_not_supported() {
        let err = validate_pattern("^(?!Bash).*").unwrap_err();
        assert!(err.contains("look-around"), "{err}");
    }

    // ── Hook specs ─────────────────────────────────────────────

    #[test]
    fn separator_only_command_is_empty() {
        for blank in ["", "  \t\n", "\u{1f}", "\u{1c}\u{a0}\u{2003}"] {
            let spec = object(json!({"type": "command", "command": blank}));
            let issues = validate_hook_spec(&spec, HookEvent::Stop, "p");
            assert_eq!(messages(&issues), vec!["p: 'command' cannot be empty"], "{blank:?}");
        }
        let spec = object(json!({"type": "command", "command": "\u{1f}x"}));
        assert!(validate_hook_spec(&spec, HookEvent::Stop, "p").is_empty());
    }

    #[test]
    fn missing_type_short_circuits() {
        let spec = object(json!({"command": "", "timeout": "x", "once": 1}));
        let issues = validate_hook_spec(&spec, HookEvent::PreToolUse, "p");
        assert_eq!(messages(&issues), vec!["p: missing required field 'type'"]);
    }

    #[test]
    fn invalid_type_short_circuits() {
        let spec = object(json!({"type": "script", "timeout": -1}));
        let issues = validate_hook_spec(&spec, HookEvent::Stop, "p");
        assert_eq!(
            messages(&issues),
            vec!["p: invalid type 'script', must be one of: command, prompt"]
        );
    }

    #[test]
    fn non_string_type_is_invalid() {
        let spec = object(json!({"type": 5}));
        let issues = validate_hook_spec(&spec, HookEvent::Stop, "p");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.starts_with("invalid type '5'"));
    }

    #[test]
    fn command_field_reports_only_first_failure() {
        let missing = object(json!({"type": "command"}));
        let wrong = object(json!({"type": "command", "command": ["ls"]}));
        let blank = object(json!({"type": "command", "command": "   "}));
        let event = HookEvent::PostToolUse;
        assert_eq!(
            messages(&validate_hook_spec(&missing, event, "p")),
            vec!["p: type 'command' requires 'command' field"]
        );
        assert_eq!(
            messages(&validate_hook_spec(&wrong, event, "p")),
            vec!["p: 'command' must be a string"]
        );
        assert_eq!(
            messages(&validate_hook_spec(&blank, event, "p")),
            vec!["p: 'command' cannot be empty"]
        );
    }

    #[test]
    fn prompt_on_unsupported_event_keeps_checking() {
        let spec = object(json!({"type": "prompt"}));
        let issues = validate_hook_spec(&spec, HookEvent::PostToolUse, "p");
        assert_eq!(
            messages(&issues),
            vec![
                "p: prompt hooks not supported for event 'PostToolUse'",
                "p: type 'prompt' requires 'prompt' field",
            ]
        );
    }

    #[test]
    fn prompt_on_supported_event_is_valid() {
        let spec = object(json!({"type": "prompt", "prompt": "Is the task complete?"}));
        assert!(validate_hook_spec(&spec, HookEvent::Stop, "p").is_empty());
    }

    #[test]
    fn timeout_checks() {
        let event = HookEvent::PreToolUse;
        let negative = object(json!({"type": "command", "command": "x", "timeout": -5}));
        let zero = object(json!({"type": "command", "command": "x", "timeout": 0}));
        let string = object(json!({"type": "command", "command": "x", "timeout": "5"}));
        let boolean = object(json!({"type": "command", "command": "x", "timeout": true}));
        let float = object(json!({"type": "command", "command": "x", "timeout": 0.5}));
        assert_eq!(messages(&validate_hook_spec(&negative, event, "p")), vec!["p: 'timeout' must be positive"]);
        assert_eq!(messages(&validate_hook_spec(&zero, event, "p")), vec!["p: 'timeout' must be positive"]);
        assert_eq!(messages(&validate_hook_spec(&string, event, "p")), vec!["p: 'timeout' must be a number"]);
        assert_eq!(messages(&validate_hook_spec(&boolean, event, "p")), vec!["p: 'timeout' must be a number"]);
        assert!(validate_hook_spec(&float, event, "p").is_empty());
    }

    #[test]
    fn once_must_be_boolean() {
        let event = HookEvent::SessionStart;
        let bad = object(json!({"type": "command", "command": "x", "once": "yes"}));
        let good = object(json!({"type": "command", "command": "x", "once": true}));
        assert_eq!(messages(&validate_hook_spec(&bad, event, "p")), vec!["p: 'once' must be a boolean"]);
        assert!(validate_hook_spec(&good, event, "p").is_empty());
    }

    #[test]
    fn independent_checks_accumulate() {
        let spec = object(json!({"type": "command", "command": "", "timeout": "1", "once": 0}));
        let issues = validate_hook_spec(&spec, HookEvent::PreToolUse, "p");
        assert_eq!(
            messages(&issues),
            vec![
                "p: 'command' cannot be empty",
                "p: 'timeout' must be a number",
                "p: 'once' must be a boolean",
            ]
        );
    }

    // ── Matcher entries ────────────────────────────────────────

    #[test]
    fn matcher_checked_only_for_matcher_events() {
        let entry = object(json!({"matcher": "[", "hooks": [{"type": "command", "command": "x"}]}));
        assert_eq!(validate_matcher_entry(&entry, HookEvent::PreToolUse, 0).len(), 1);
        assert!(validate_matcher_entry(&entry, HookEvent::Stop, 0).is_empty());
    }

    #[test]
    fn non_string_matcher() {
        let entry = object(json!({"matcher": 3, "hooks": [{"type": "command", "command": "x"}]}));
        let issues = validate_matcher_entry(&entry, HookEvent::Notification, 2);
        assert_eq!(messages(&issues), vec!["hooks.Notification[2].matcher: must be a string"]);
    }

    #[test]
    fn hooks_field_shape_errors_stop_the_entry() {
        let event = HookEvent::UserPromptSubmit;
        let missing = object(json!({}));
        let not_array = object(json!({"hooks": {}}));
        let empty = object(json!({"hooks": []}));
        assert_eq!(
            messages(&validate_matcher_entry(&missing, event, 0)),
            vec!["hooks.UserPromptSubmit[0]: missing required field 'hooks'"]
        );
        assert_eq!(
            messages(&validate_matcher_entry(&not_array, event, 0)),
            vec!["hooks.UserPromptSubmit[0].hooks: must be an array"]
        );
        assert_eq!(
            messages(&validate_matcher_entry(&empty, event, 0)),
            vec!["hooks.UserPromptSubmit[0].hooks: array cannot be empty"]
        );
    }

    #[test]
    fn matcher_error_reported_alongside_missing_hooks() {
        let entry = object(json!({"matcher": "("}));
        let issues = validate_matcher_entry(&entry, HookEvent::PreToolUse, 0);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].path, "hooks.PreToolUse[0].matcher");
        assert_eq!(issues[1].message, "missing required field 'hooks'");
    }

    #[test]
    fn non_object_hook_is_skipped() {
        let entry = object(json!({"hooks": ["echo", {"type": "command"}]}));
        let issues = validate_matcher_entry(&entry, HookEvent::Stop, 1);
        assert_eq!(
            messages(&issues),
            vec![
                "hooks.Stop[1].hooks[0]: must be an object",
                "hooks.Stop[1].hooks[1]: type 'command' requires 'command' field",
            ]
        );
    }

    // ── Whole config ───────────────────────────────────────────

    #[test]
    fn no_hooks_key_is_valid() {
        let config = object(json!({"permissions": {"allow": []}}));
        assert!(validate_hooks_config(&config).is_empty());
    }

    #[test]
    fn hooks_must_be_object() {
        let config = object(json!({"hooks": []}));
        assert_eq!(messages(&validate_hooks_config(&config)), vec!["hooks: must be an object"]);
    }

    #[test]
    fn unknown_event_entries_are_not_inspected() {
        let config = object(json!({"hooks": {"Bogus": [{"hooks": []}]}}));
        let issues = validate_hooks_config(&config);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "hooks.Bogus");
        assert!(issues[0].event.is_none());
        for name in HookEvent::sorted_names() {
            assert!(issues[0].message.contains(name));
        }
    }

    #[test]
    fn event_value_must_be_array() {
        let config = object(json!({"hooks": {"Stop": {"hooks": []}}}));
        assert_eq!(messages(&validate_hooks_config(&config)), vec!["hooks.Stop: must be an array"]);
    }

    #[test]
    fn non_object_entry() {
        let config = object(json!({"hooks": {"Stop": ["nope"]}}));
        assert_eq!(messages(&validate_hooks_config(&config)), vec!["hooks.Stop[0]: must be an object"]);
    }

    #[test]
    fn issues_follow_document_order() {
        let config = object(json!({
            "hooks": {
                "Stop": [{"hooks": []}],
                "Bogus": [],
                "PreToolUse": [{"hooks": [{"type": "prompt"}]}, "x"]
            }
        }));
        let paths: Vec<_> = validate_hooks_config(&config).into_iter().map(|i| i.path).collect();
        assert_eq!(
            paths,
            vec![
                "hooks.Stop[0].hooks",
                "hooks.Bogus",
                "hooks.PreToolUse[0].hooks[0]",
                "hooks.PreToolUse[1]",
            ]
        );
    }
}
