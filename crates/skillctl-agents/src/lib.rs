//! # skillctl-agents
//!
//! Knows where each AI coding agent keeps its skills. A skill is a directory
//! holding a `SKILL.md` file (or a symlink to such a directory) that lives in
//! either a project-level directory relative to the working directory or a
//! global directory under the user's home.
//!
//! ## Layers
//!
//! 1. [`AgentRegistry`] maps agent ids to their directory conventions. It starts
//!    from the built-in table and accepts custom agents from config.
//! 2. [`SkillLocator`] resolves a skill name to concrete locations, either in
//!    Claude Code's own scopes or across a set of agents.
//! 3. [`remove`] deletes located skills, unlinking symlinks instead of
//!    following them.
//!
//! All path resolution goes through [`SearchRoots`], so nothing here reads the
//! real home directory unless asked to.

pub mod builtin;
pub mod definition;
pub mod locate;
pub mod registry;
pub mod remove;
pub mod roots;

pub use definition::{AgentDefinition, SkillScope};
pub use locate::{SkillLocation, SkillLocator, holds_skill, is_symlink, validate_skill_name};
pub use registry::{AgentRegistry, CLAUDE_CODE};
pub use remove::{DeleteOutcome, DeleteSummary, count_files, delete_locations, remove_skill_path};
pub use roots::SearchRoots;
