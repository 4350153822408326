use crate::errors::{AppError, AppResult};
use crate::input::InputFormat;
use crate::table::{DEFAULT_MARGIN, Table};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Rendering defaults, read from `~/.tableify/tableify.conf` (YAML).
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_margin")]
    pub margin: usize,
    #[serde(default = "default_split_line")]
    pub split_line: bool,
    #[serde(default)]
    pub empty_text: String,
    #[serde(default = "default_input")]
    pub default_input: InputFormat,
}

fn default_margin() -> usize {
    DEFAULT_MARGIN
}
fn default_split_line() -> bool {
    true
}
fn default_input() -> InputFormat {
    InputFormat::Csv
}

impl Default for Config {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            split_line: default_split_line(),
            empty_text: String::new(),
            default_input: default_input(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tableify")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tableify.conf")
    }

    /// `custom` (with `~/` expanded) or the standard config file.
    pub fn resolve(custom: Option<&str>) -> PathBuf {
        custom.map(expand_tilde).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(custom: Option<&str>) -> AppResult<Self> {
        let path = Self::resolve(custom);
        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write this configuration as YAML, creating parent directories.
    pub fn save(&self, custom: Option<&str>) -> AppResult<PathBuf> {
        let path = Self::resolve(custom);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(&path, yaml)?;
        Ok(path)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Copy the rendering defaults onto a table.
    pub fn apply(&self, table: &mut Table) {
        table.margin = self.margin;
        table.split_line = self.split_line;
        table.empty_text = self.empty_text.clone();
    }
}
