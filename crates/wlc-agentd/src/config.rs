use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use wlc_core::config::ControllerConfig;
use wlc_observe::LoggerConfig;

/// Environment variable naming the config file when no argument is given.
pub const CONFIG_PATH_ENV: &str = "WLC_AGENTD_CONFIG";

/// Agent configuration file (json).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub logger: LoggerConfig,
    pub controller: ControllerConfig,
}

impl AgentConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Load from the first CLI argument, then [`CONFIG_PATH_ENV`], else defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::args()
            .nth(1)
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok());

        match path {
            Some(p) => Self::from_file(Path::new(&p)),
            None => Ok(Self::default()),
        }
    }
}
