use thiserror::Error;

/// Unified error type for every skillctl crate.
#[derive(Error, Debug)]
pub enum SkillctlError {
    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    // ── Agent registry errors ──────────────────────────────────
    #[error("unknown agent '{id}' (valid agents: {valid})")]
    UnknownAgent { id: String, valid: String },

    // ── Skill errors ───────────────────────────────────────────
    #[error("invalid skill name '{0}': must be a single directory name")]
    InvalidSkillName(String),

    #[error("skill '{name}' not found in {searched}")]
    SkillNotFound { name: String, searched: String },

    #[error("failed to delete {path}: {reason}")]
    Delete { path: String, reason: String },

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SkillctlError>;
