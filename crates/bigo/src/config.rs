//! Configuration management for bigo
//!
//! Handles loading complexity ceilings, output defaults and ignore patterns
//! from JSON configuration files.

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{BigoError, ComplexityClass, Result, SourceLanguage};

const CONFIG_PATHS: [&str; 3] = [".bigo.json", "bigo.json", ".bigo/config.json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  #[default]
  Pretty,
  Json,
  Compact,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
  /// Language used when neither the command line nor the file extension decides
  #[serde(default)]
  pub default_language: SourceLanguage,
  #[serde(default)]
  pub format: OutputFormat,
  /// Highest acceptable time complexity
  #[serde(default)]
  pub max_time: Option<ComplexityClass>,
  /// Highest acceptable space complexity
  #[serde(default)]
  pub max_space: Option<ComplexityClass>,
  /// Paths to skip while walking directories (glob patterns)
  #[serde(default = "default_ignore")]
  pub ignore: Vec<String>,
}

fn default_ignore() -> Vec<String> {
  ["target/**", "node_modules/**", "build/**", "dist/**", ".git/**"].iter().map(|p| p.to_string()).collect()
}

impl Default for Config {
  fn default() -> Self {
    Self {
      default_language: SourceLanguage::default(),
      format: OutputFormat::default(),
      max_time: None,
      max_space: None,
      ignore: default_ignore(),
    }
  }
}

impl Config {
  /// Load configuration from a file
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content =
      std::fs::read_to_string(path).map_err(|source| BigoError::Read { path: path.to_path_buf(), source })?;
    let config: Config = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
  }

  /// Load configuration from the working directory, the user config directory, or defaults
  pub fn load() -> Result<Self> {
    match Self::discover(Path::new(".")) {
      Some(path) => Self::load_from_file(path),
      None => Ok(Config::default()),
    }
  }

  /// First existing config file under `dir`, then the user-level file
  pub fn discover(dir: &Path) -> Option<PathBuf> {
    CONFIG_PATHS
      .iter()
      .map(|candidate| dir.join(candidate))
      .chain(Self::user_config_path())
      .find(|path| path.is_file())
  }

  pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bigo").join("config.json"))
  }

  /// Save configuration to a file
  pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
    let content = serde_json::to_string_pretty(self)?;
    std::fs::write(path, content)?;
    Ok(())
  }

  /// Compile the ignore patterns
  pub fn ignore_set(&self) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in &self.ignore {
      let glob = Glob::new(pattern)
        .map_err(|e| BigoError::IgnorePattern { pattern: pattern.clone(), message: e.to_string() })?;
      builder.add(glob);
    }
    builder.build().map_err(|e| BigoError::IgnorePattern { pattern: self.ignore.join(", "), message: e.to_string() })
  }

  /// Check if a path should be skipped
  pub fn should_ignore(&self, ignore_set: &GlobSet, path: &Path) -> bool {
    let relative = path.strip_prefix(".").unwrap_or(path);
    ignore_set.is_match(relative)
  }
}
