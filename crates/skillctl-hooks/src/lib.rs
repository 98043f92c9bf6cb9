//! # skillctl-hooks
//!
//! Validation for the `hooks` section of an agent settings file. The checker
//! walks the JSON document and collects every problem it finds instead of
//! stopping at the first one, so a single run shows the user everything that
//! needs fixing.
//!
//! ## Settings format
//!
//! ```json
//! {
//!   "hooks": {
//!     "PreToolUse": [
//!       {
//!         "matcher": "Bash",
//!         "hooks": [{ "type": "command", "command": "echo hi", "timeout": 30 }]
//!       }
//!     ]
//!   }
//! }
//! ```
//!
//! ## Usage
//!
//! ```
//! let report = skillctl_hooks::validate_str(r#"{"hooks": {"Bogus": []}}"#);
//! assert!(!report.is_valid());
//! assert!(report.issues[0].to_string().starts_with("hooks.Bogus: invalid event name"));
//! ```

pub mod event;
pub mod file;
pub mod issue;
pub mod validate;

pub use event::{HookEvent, HookType, UnknownEvent};
pub use file::{validate_file, validate_str, validate_value};
pub use issue::{HookIssue, HooksReport, IssueKind};
pub use validate::{validate_hook_spec, validate_hooks_config, validate_matcher_entry, validate_pattern};
