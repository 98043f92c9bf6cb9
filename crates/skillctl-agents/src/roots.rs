use anyhow::Context;
use std::path::{Path, PathBuf};

/// The two directories agent paths are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoots {
    pub home: PathBuf,
    pub cwd: PathBuf,
}

impl SearchRoots {
    pub fn new(home: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            cwd: cwd.into(),
        }
    }

    /// Use the user's home directory and the process working directory.
    pub fn from_env() -> skillctl_core::Result<Self> {
        let home = dirs::home_dir().context("cannot determine home directory")?;
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        Ok(Self { home, cwd })
    }

    /// Expand `~` and `~/...` against `home`; other relative paths resolve
    /// against `cwd`, absolute paths are returned unchanged.
    pub fn expand(&self, raw: &str) -> PathBuf {
        if raw == "~" {
            return self.home.clone();
        }
        if let Some(rest) = raw.strip_prefix("~/") {
            return self.home.join(rest);
        }
        let path = Path::new(raw);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
