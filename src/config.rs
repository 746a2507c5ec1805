//! `.tagcheck.toml` configuration
//!
//! Configuration is optional. The file is looked up in the starting
//! directory and its ancestors, stopping at the repository root (a
//! directory containing `.git`). The nearest file wins.
//!
//! ```toml
//! [check]
//! default_target = "Frontend/Vue"
//! void_tags = ["img", "br", "hr", "input", "meta", "link"]
//! extensions = ["md"]
//! exclude = ["node_modules/**"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::{DEFAULT_VOID_TAGS, TagScanner};
use crate::discovery::DiscoveryOptions;

/// Configuration filename
pub const CONFIG_FILE: &str = ".tagcheck.toml";

/// Path checked when no target is given on the command line
pub const DEFAULT_TARGET: &str = "Frontend/Vue";

/// Errors that can occur when loading or writing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or written
    #[error("cannot access config file {}: {source}", .path.display())]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying parse error
        source: toml::de::Error,
    },

    /// Config could not be serialized
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// `init` would overwrite an existing file
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// An exclude pattern is not a valid glob
    #[error("invalid exclude pattern {pattern:?}: {source}")]
    InvalidExclude {
        /// The offending pattern
        pattern: String,
        /// Underlying glob error
        source: glob::PatternError,
    },
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Settings for the check command
    #[serde(default)]
    pub check: CheckConfig,
}

/// Settings for the check command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Path checked when no target is given
    pub default_target: PathBuf,

    /// Start tags that never need an end tag
    pub void_tags: Vec<String>,

    /// File extensions treated as Markdown (without the dot)
    pub extensions: Vec<String>,

    /// Glob patterns, relative to the target directory, to skip
    pub exclude: Vec<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            default_target: PathBuf::from(DEFAULT_TARGET),
            void_tags: DEFAULT_VOID_TAGS.iter().map(ToString::to_string).collect(),
            extensions: vec!["md".to_string()],
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Load a config file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the nearest config file above `start`, or defaults if none exists
    pub fn discover(start: &Path) -> Result<Self, ConfigError> {
        match find_config_file(start) {
            Some(path) => {
                log::debug!("using config {}", path.display());
                Self::load_file(&path)
            },
            None => Ok(Self::default()),
        }
    }

    /// Load `explicit` if given, otherwise discover from `start`
    pub fn resolve(explicit: Option<&Path>, start: &Path) -> Result<Self, ConfigError> {
        explicit.map_or_else(|| Self::discover(start), Self::load_file)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the default config into `dir`
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    pub fn write_default(dir: &Path, force: bool) -> Result<PathBuf, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists(path));
        }

        let content = Self::default().to_toml()?;
        fs::write(&path, content).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

impl CheckConfig {
    /// Scanner honoring the configured void tags
    #[must_use]
    pub fn scanner(&self) -> TagScanner {
        TagScanner::with_void_tags(&self.void_tags)
    }

    /// Discovery options for the configured extensions and excludes
    pub fn discovery_options(&self) -> Result<DiscoveryOptions, ConfigError> {
        let exclude = self
            .exclude
            .iter()
            .map(|pattern| {
                glob::Pattern::new(pattern).map_err(|source| ConfigError::InvalidExclude {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DiscoveryOptions {
            extensions: self.extensions.clone(),
            exclude,
        })
    }
}

/// Find the nearest config file from `from` up to the repository root
#[must_use]
pub fn find_config_file(from: &Path) -> Option<PathBuf> {
    let mut current = from.to_path_buf();

    if current.is_file() {
        current = current.parent().unwrap_or(from).to_path_buf();
    }

    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }

        // Stop at repo root (.git) or filesystem root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Find the nearest ancestor of `from` containing `.git`
#[must_use]
pub fn find_repo_root(from: &Path) -> Option<PathBuf> {
    from.ancestors().find(|dir| dir.join(".git").exists()).map(Path::to_path_buf)
}

/// Directory that a relative `default_target` is resolved against
///
/// This is the directory holding the config file in use. Without one it is
/// the repository root, or `start` outside a repository.
#[must_use]
pub fn base_dir(explicit: Option<&Path>, start: &Path) -> PathBuf {
    let config_file = explicit.map(Path::to_path_buf).or_else(|| find_config_file(start));

    config_file
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .or_else(|| find_repo_root(start))
        .unwrap_or_else(|| start.to_path_buf())
}
