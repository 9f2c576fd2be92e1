//! Print configuration
//!
//! Controls which parts of a dump are emitted and how much of each field's
//! memory is shown. Can be loaded from a TOML file; missing keys fall back to
//! the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Rendering options for a dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintConfig {
    /// Show the base address in the header (default: true)
    #[serde(default = "default_true")]
    pub show_address: bool,
    /// Prefix each field with its byte offset (default: true)
    #[serde(default = "default_true")]
    pub show_offset: bool,
    /// Emit a hex dump of each field's bytes (default: true)
    #[serde(default = "default_true")]
    pub show_hex_memory: bool,
    /// Byte arrays longer than this are never treated as text (default: 512)
    #[serde(default = "default_string_max_len")]
    pub string_max_len: usize,
    /// Bytes shown per field hex dump (default: 16)
    #[serde(default = "default_hex_bytes")]
    pub hex_bytes: usize,
    /// Spaces per nesting level (default: 2)
    #[serde(default = "default_indent_spaces")]
    pub indent_spaces: usize,
    /// Deepest nesting level rendered (default: 32)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_true() -> bool {
    true
}
fn default_string_max_len() -> usize {
    512
}
fn default_hex_bytes() -> usize {
    16
}
fn default_indent_spaces() -> usize {
    2
}
fn default_max_depth() -> usize {
    32
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            show_address: default_true(),
            show_offset: default_true(),
            show_hex_memory: default_true(),
            string_max_len: default_string_max_len(),
            hex_bytes: default_hex_bytes(),
            indent_spaces: default_indent_spaces(),
            max_depth: default_max_depth(),
        }
    }
}

/// Failure to load or store a [`PrintConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl PrintConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a config, falling back to defaults if the file is missing or invalid.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("using default print config ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write this config as TOML, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
