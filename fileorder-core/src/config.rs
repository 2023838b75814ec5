use crate::convention::Convention;
use crate::filter::SiblingFilter;
use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = ".fileorder.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Append a timestamped line per rename to this file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_log: Option<PathBuf>,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Fallbacks for folders whose names carry no numbering yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultsConfig {
    /// Text between the prefix number and the title. May be several characters
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Prefix numbers are zero-padded to this length, i.e. 001 instead of 1
    #[serde(default)]
    pub prefix_min_length: usize,

    /// Number given to the first item
    #[serde(default)]
    pub starting_index: u64,

    /// Regex of file and folder names to leave out, e.g. `^index\.md$`
    #[serde(default)]
    pub ignore_pattern: String,

    /// In a folder named `Notes`, leave out `Notes.md`
    #[serde(default)]
    pub ignore_folder_file: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            prefix_min_length: 0,
            starting_index: 0,
            ignore_pattern: String::new(),
            ignore_folder_file: false,
        }
    }
}

fn default_delimiter() -> String {
    " ".to_string()
}

impl DefaultsConfig {
    /// Convention used for a sibling set that has none of its own.
    pub fn convention(&self) -> Convention {
        Convention::new(
            self.delimiter.clone(),
            self.prefix_min_length,
            self.starting_index,
        )
    }
}

impl Config {
    /// Load `<dir>/.fileorder.toml` if it exists, else `fallback` if given and
    /// present, else the defaults.
    pub fn discover(dir: &Path, fallback: Option<&Path>) -> Result<Self> {
        let local = dir.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::load_from_path(&local);
        }
        if let Some(path) = fallback.filter(|p| p.is_file()) {
            return Self::load_from_path(path);
        }
        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build the filter described by `ignore_pattern` and `ignore_folder_file`.
    pub fn sibling_filter(&self) -> Result<SiblingFilter> {
        let ignore = if self.defaults.ignore_pattern.is_empty() {
            None
        } else {
            Some(Regex::new(&self.defaults.ignore_pattern).with_context(|| {
                format!("invalid ignore pattern '{}'", self.defaults.ignore_pattern)
            })?)
        };
        Ok(SiblingFilter::new(ignore, self.defaults.ignore_folder_file))
    }
}
