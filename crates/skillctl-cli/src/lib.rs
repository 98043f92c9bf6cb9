//! # skillctl-cli
//!
//! Command-line interface for skillctl.
//!
//! ## Commands
//!
//! - `skillctl hooks validate <file>` — Validate the hooks section of a settings file
//! - `skillctl skill delete <name>` — Delete a skill from one or more agents
//! - `skillctl skill find <name>` — Show where a skill is installed
//! - `skillctl agents list|show|detect` — Inspect the agent registry
//! - `skillctl config` — Show the effective configuration
//!
//! The `validate-hooks` binary exposes hooks validation as a single command
//! through [`ValidateHooksCli`].

pub mod commands;
pub mod validate_hooks;

pub use commands::Cli;
pub use validate_hooks::ValidateHooksCli;
