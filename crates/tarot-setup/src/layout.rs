//! Where things live inside the host's home directory.

use std::path::PathBuf;

use crate::SKILL_NAME;

/// Paths of an OpenClaw-style host rooted at a home directory.
#[derive(Debug, Clone)]
pub struct HostLayout {
    root: PathBuf,
}

impl HostLayout {
    /// Layout rooted at `home`.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { root: home.into() }
    }

    /// Layout rooted at `$HOME`, if set.
    pub fn from_env() -> Option<Self> {
        std::env::var_os("HOME").map(Self::new)
    }

    /// `~/.openclaw`
    pub fn host_dir(&self) -> PathBuf {
        self.root.join(".openclaw")
    }

    /// `~/.openclaw/openclaw.json`
    pub fn config_path(&self) -> PathBuf {
        self.host_dir().join("openclaw.json")
    }

    /// `~/.openclaw/skills`
    pub fn skills_dir(&self) -> PathBuf {
        self.host_dir().join("skills")
    }

    /// `~/.openclaw/skills/clavtarot`
    pub fn skill_dir(&self) -> PathBuf {
        self.skills_dir().join(SKILL_NAME)
    }

    /// `~/.openclaw/workspace`
    pub fn workspace_dir(&self) -> PathBuf {
        self.host_dir().join("workspace")
    }

    /// `~/.openclaw/workspace/SOUL.md`
    pub fn soul_path(&self) -> PathBuf {
        self.workspace_dir().join("SOUL.md")
    }

    /// `~/.openclaw/workspace/IDENTITY.md`
    pub fn identity_path(&self) -> PathBuf {
        self.workspace_dir().join("IDENTITY.md")
    }
}
