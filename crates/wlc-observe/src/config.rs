use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::{LoggerFormat, LoggerLevel};

/// Logger configuration, usually embedded in the agent config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// Filter expression, e.g. `"info"` or `"wlc_core=debug,info"`.
    pub level: LoggerLevel,
    /// Print the event target (module path).
    pub with_targets: bool,
    /// Colorize text output. Ignored when stdout is not a terminal, and for json.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Whether ANSI colors end up in the text output.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config: LoggerConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config.format, LoggerFormat::Text);
        assert_eq!(config.level.as_str(), "info");
        assert!(config.with_targets);
        assert!(config.use_color);
    }

    #[test]
    fn partial_object_keeps_other_defaults() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"format": "json", "level": "wlc_core=debug,warn"}"#).unwrap();

        assert_eq!(config.format, LoggerFormat::Json);
        assert_eq!(config.level.as_str(), "wlc_core=debug,warn");
        assert!(config.with_targets);
    }

    #[test]
    fn invalid_level_fails_deserialization() {
        let res = serde_json::from_str::<LoggerConfig>(r#"{"level": "wlc_core=loud"}"#);

        assert!(res.is_err());
    }

    #[test]
    fn color_disabled_by_config_stays_disabled() {
        let config = LoggerConfig {
            use_color: false,
            ..Default::default()
        };

        assert!(!config.should_use_color());
    }
}
