use serde::Serialize;
use std::fmt;

/// Whether a problem stopped validation early or was collected alongside others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// The file could not be loaded as a JSON object; nothing else was checked.
    Input,
    /// A schema violation inside an otherwise readable document.
    Schema,
}

/// A single validation problem, located by a dotted path such as
/// `hooks.PreToolUse[0].hooks[1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookIssue {
    pub kind: IssueKind,
    /// Event the problem belongs to, when it was found under a known event key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Location in the document. Empty for input-level problems.
    pub path: String,
    pub message: String,
}

impl HookIssue {
    pub fn input(message: impl Into<String>) -> Self {
        Self {
            kind: IssueKind::Input,
            event: None,
            path: String::new(),
            message: message.into(),
        }
    }

    pub fn schema(event: Option<&str>, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: IssueKind::Schema,
            event: event.map(str::to_string),
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for HookIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Outcome of validating one settings document. Valid iff there are no issues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HooksReport {
    pub issues: Vec<HookIssue>,
}

impl HooksReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Rendered messages in report order.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

impl From<Vec<HookIssue>> for HooksReport {
    fn from(issues: Vec<HookIssue>) -> Self {
        Self { issues }
    }
}
