use anyhow::Context;
use camino::{
    Utf8Path,
    Utf8PathBuf,
};
use serde::Deserialize;
use std::collections::HashMap;
use tic_tac_toe::SearchOptions;

fn default_pruning() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    first_move: FirstMove,

    #[serde(default)]
    search: SearchConfig,

    #[serde(default)]
    log: LogConfig,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

/// Who moves first in a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstMove {
    #[default]
    Human,
    Computer,
}

#[derive(Deserialize, Debug)]
pub struct SearchConfig {
    #[serde(default = "default_pruning")]
    pruning: bool,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pruning: default_pruning(),
            extra: HashMap::new(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct LogConfig {
    dir: Option<Utf8PathBuf>,

    #[serde(default = "default_log_level")]
    level: String,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: None,
            level: default_log_level(),
            extra: HashMap::new(),
        }
    }
}

impl Config {
    pub fn first_move(&self) -> FirstMove {
        self.first_move
    }

    pub fn search(&self) -> &SearchConfig {
        &self.search
    }

    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    /// Load a config from a path
    pub fn load_from_path(path: &Utf8Path) -> anyhow::Result<Self> {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from '{}'", path))
            .and_then(|s| Self::load_from_str(&s))
    }

    /// Load a config from a str
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("failed to parse config")
    }

    /// Validate a config
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut errors = Vec::new();

        let unknown_keys = self
            .extra
            .keys()
            .cloned()
            .chain(self.search.extra.keys().map(|key| format!("search.{key}")))
            .chain(self.log.extra.keys().map(|key| format!("log.{key}")));
        for key in unknown_keys {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::UnknownKey(key),
            });
        }

        if let Err(e) = self
            .log
            .level
            .parse::<tracing_subscriber::filter::Directive>()
        {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::InvalidLogLevel {
                    level: self.log.level.clone(),
                    reason: e.to_string(),
                },
            });
        }

        if let Some(dir) = self.log.dir.as_deref() {
            if dir.is_file() {
                errors.push(ValidationMessage {
                    severity: Severity::Error,
                    error: ValidationError::LogDirIsFile(dir.to_path_buf()),
                });
            }
        }

        errors
    }
}

impl SearchConfig {
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Get the engine options
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            pruning: self.pruning,
        }
    }
}

impl LogConfig {
    pub fn dir(&self) -> Option<&Utf8Path> {
        self.dir.as_deref()
    }

    pub fn level(&self) -> &str {
        &self.level
    }
}

#[derive(Debug)]
pub struct ValidationMessage {
    severity: Severity,
    error: ValidationError,
}

impl ValidationMessage {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown key `{0}`")]
    UnknownKey(String),

    #[error("invalid log level `{level}`: {reason}")]
    InvalidLogLevel { level: String, reason: String },

    #[error("log dir `{0}` is a file")]
    LogDirIsFile(Utf8PathBuf),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::load_from_str("").expect("failed to parse empty config");
        assert_eq!(config.first_move(), FirstMove::Human);
        assert!(config.search().pruning());
        assert_eq!(config.log().level(), "warn");
        assert!(config.log().dir().is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn parse() {
        let config = Config::load_from_str(
            r#"
first_move = "computer"

[search]
pruning = false

[log]
dir = "./logs"
level = "oxo=debug"
"#,
        )
        .expect("failed to parse config");

        assert_eq!(config.first_move(), FirstMove::Computer);
        assert_eq!(config.search().options(), SearchOptions { pruning: false });
        assert_eq!(config.log().dir(), Some(Utf8Path::new("./logs")));
        assert_eq!(config.log().level(), "oxo=debug");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn validate() {
        let config = Config::load_from_str(
            r#"
colour = "blue"

[search]
depth = 3

[log]
level = "oxo=loud"
"#,
        )
        .expect("failed to parse config");

        let messages = config.validate();
        let warnings = messages
            .iter()
            .filter(|message| message.severity() == Severity::Warn)
            .count();
        assert_eq!(warnings, 2);

        let errors: Vec<_> = messages
            .iter()
            .filter(|message| message.severity() == Severity::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0].error(),
            ValidationError::InvalidLogLevel { .. }
        ));
    }

    #[test]
    fn invalid_first_move() {
        assert!(Config::load_from_str("first_move = \"nobody\"").is_err());
    }
}
