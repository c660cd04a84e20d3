//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `PLANET_CRS_*` environment variables, then command-line overrides
//! applied by the binary through the `with_*` builders.

use crate::app::services::crs_registry::Page;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CORPUS_PATH, DEFAULT_LOG_LEVEL, DEFAULT_PAGE_LIMIT,
    ENV_CORPUS_PATH, ENV_PARALLEL, ENV_WORKERS, MAX_PAGE_LIMIT,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// WKT corpus to load
    pub corpus_path: PathBuf,

    /// Number of concurrent classification tasks when parsing in parallel
    pub workers: usize,

    /// Classify blocks on the blocking pool instead of sequentially
    pub parallel: bool,

    /// Page size used when a query gives no limit
    pub default_page_limit: usize,

    /// Largest page size a query may request
    pub max_page_limit: usize,

    /// Log level of the binary when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            workers: num_cpus::get(),
            parallel: false,
            default_page_limit: DEFAULT_PAGE_LIMIT,
            max_page_limit: MAX_PAGE_LIMIT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Load configuration from a TOML file
    ///
    /// Keys missing from the file keep their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: RegistryConfig = toml::from_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Per-user config file location, e.g. `~/.config/planet-crs-registry/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Resolve configuration from file and environment
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// read when present and defaults are used otherwise.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path().filter(|path| path.exists()) {
                Some(path) => Self::from_file(path)?,
                None => Self::default(),
            },
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `PLANET_CRS_*` overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_env_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using `lookup` as the environment
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_CORPUS_PATH) {
            debug!("{} overrides corpus path: {}", ENV_CORPUS_PATH, path);
            self.corpus_path = PathBuf::from(path);
        }

        if let Some(value) = lookup(ENV_WORKERS) {
            self.workers = value.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_WORKERS, value
                ))
            })?;
        }

        if let Some(value) = lookup(ENV_PARALLEL) {
            self.parallel = parse_flag(&value).ok_or_else(|| {
                Error::configuration(format!(
                    "{} must be true or false, got '{}'",
                    ENV_PARALLEL, value
                ))
            })?;
        }

        Ok(())
    }

    /// Check the configuration for values the registry cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::configuration("workers must be at least 1"));
        }
        if self.default_page_limit == 0 || self.max_page_limit == 0 {
            return Err(Error::configuration("page limits must be at least 1"));
        }
        if self.default_page_limit > self.max_page_limit {
            return Err(Error::configuration(format!(
                "default_page_limit {} exceeds max_page_limit {}",
                self.default_page_limit, self.max_page_limit
            )));
        }
        Ok(())
    }

    /// Build a query page, falling back to the default limit
    pub fn page(&self, offset: usize, limit: Option<usize>) -> Result<Page> {
        Page::bounded(
            offset,
            limit.unwrap_or(self.default_page_limit),
            self.max_page_limit,
        )
    }

    /// Set the corpus path
    pub fn with_corpus_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.corpus_path = path.into();
        self
    }

    /// Create configuration with custom worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Enable parallel classification
    pub fn with_parallel(mut self) -> Self {
        self.parallel = true;
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
