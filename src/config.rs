use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the configuration inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Editor behavior settings
    #[serde(default)]
    pub editor: EditorConfig,
}

/// Editor behavior configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Columns per tab stop
    #[serde(default = "default_tab_stop")]
    pub tab_stop: usize,

    /// Quit requests needed to leave with unsaved changes
    #[serde(default = "default_quit_confirmations")]
    pub quit_confirmations: u32,

    /// Maximum number of bytes a single paste may insert
    #[serde(default = "default_paste_limit")]
    pub paste_limit: usize,

    /// Seconds a status message stays visible
    #[serde(default = "default_status_timeout")]
    pub status_timeout_secs: u64,

    /// Show line numbers in the gutter
    #[serde(default = "default_true")]
    pub line_numbers: bool,
}

fn default_tab_stop() -> usize {
    4
}

fn default_quit_confirmations() -> u32 {
    3
}

fn default_paste_limit() -> usize {
    10_000
}

fn default_status_timeout() -> u64 {
    5
}

fn default_true() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: default_tab_stop(),
            quit_confirmations: default_quit_confirmations(),
            paste_limit: default_paste_limit(),
            status_timeout_secs: default_status_timeout(),
            line_numbers: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    ///
    /// Missing fields fall back to their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Load `config.json` from `dir`, or the defaults if there is none
    ///
    /// A file that exists but cannot be read or parsed is an error; a missing
    /// file is not.
    pub fn load_or_default(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let config = Self::load_from_file(&path)?;
        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.editor.tab_stop == 0 {
            return Err(ConfigError::ValidationError(
                "tab_stop must be greater than 0".to_string(),
            ));
        }

        if self.editor.paste_limit == 0 {
            return Err(ConfigError::ValidationError(
                "paste_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Default configuration directory, e.g. `~/.config/qtedit` on Linux
///
/// Only the binary should call this; everything else receives the directory
/// as a parameter.
#[cfg(feature = "runtime")]
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("qtedit"))
}

/// Resolve the config file to read: an explicit path wins over the default directory
pub fn resolve_config(explicit: Option<&Path>, dir: Option<PathBuf>) -> Result<Config, ConfigError> {
    let config = match (explicit, dir) {
        (Some(path), _) => Config::load_from_file(path)?,
        (None, Some(dir)) => return Config::load_or_default(&dir),
        (None, None) => Config::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
