use anyhow::Context;
use noughts_crosses::{
    InvalidStrError,
    Symbol,
};
use serde::Deserialize;
use std::{
    collections::HashMap,
    path::{
        Path,
        PathBuf,
    },
};
use tracing_subscriber::filter::{
    Directive,
    ParseError as DirectiveParseError,
};

fn default_human() -> String {
    "X".to_string()
}

fn default_log_directives() -> Vec<String> {
    vec!["warn".to_string()]
}

#[derive(Deserialize, Debug)]
pub struct Config {
    /// The symbol the human plays
    #[serde(default = "default_human")]
    human: String,

    /// Whether to print the score of each computer move
    #[serde(default)]
    show_scores: bool,

    #[serde(default)]
    log: LogConfig,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

#[derive(Deserialize, Debug)]
pub struct LogConfig {
    /// tracing filter directives, like `info` or `oxo=debug`
    #[serde(default = "default_log_directives")]
    directives: Vec<String>,

    /// A file to also write logs to
    file: Option<PathBuf>,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl Config {
    /// Get the symbol the human plays
    pub fn human(&self) -> Result<Symbol, InvalidStrError> {
        self.human.parse()
    }

    pub fn show_scores(&self) -> bool {
        self.show_scores
    }

    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    /// Load a config from a path
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from '{}'", path.display()))
            .and_then(|text| Self::load_from_str(&text))
    }

    /// Load a config from a str
    pub fn load_from_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("Failed to parse config")
    }

    /// Validate a config
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut errors = Vec::new();

        if let Err(e) = self.human() {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::InvalidHuman(e),
            });
        }

        for directive in self.log.directives.iter() {
            if let Err(e) = directive.parse::<Directive>() {
                errors.push(ValidationMessage {
                    severity: Severity::Error,
                    error: ValidationError::InvalidLogDirective {
                        directive: directive.clone(),
                        error: e,
                    },
                });
            }
        }

        if let Some(dir) = self.log.file.as_deref().and_then(Path::parent) {
            if !dir.as_os_str().is_empty() && !dir.is_dir() {
                errors.push(ValidationMessage {
                    severity: Severity::Warn,
                    error: ValidationError::MissingLogDir(dir.to_path_buf()),
                });
            }
        }

        let unknown_keys = self
            .extra
            .keys()
            .cloned()
            .chain(self.log.extra.keys().map(|key| format!("log.{key}")));
        for key in unknown_keys {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::UnknownKey(key),
            });
        }

        errors
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            human: default_human(),
            show_scores: false,
            log: LogConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl LogConfig {
    pub fn directives(&self) -> &[String] {
        &self.directives
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directives: default_log_directives(),
            file: None,
            extra: HashMap::new(),
        }
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
    #[error("Invalid Human Symbol")]
    InvalidHuman(#[source] InvalidStrError),

    #[error("Invalid Log Directive '{directive}'")]
    InvalidLogDirective {
        directive: String,
        #[source]
        error: DirectiveParseError,
    },

    #[error("Missing Log Directory '{}'", .0.display())]
    MissingLogDir(PathBuf),

    #[error("Unknown Key '{0}'")]
    UnknownKey(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}
