use crate::error::ConfigError;
use crate::fetcher::{FetchOptions, ReposFailurePolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_base: String,
    pub user_agent: String,
    /// Repositories requested in the single listing call.
    pub per_page: u8,
    /// Repositories shown before the show-all toggle.
    pub display_limit: usize,
    pub timeout_secs: Option<u64>,
    /// Treat a failed repository listing as a failed search.
    pub strict_repos: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: concat!("ghprofile/", env!("CARGO_PKG_VERSION")).to_string(),
            per_page: 100,
            display_limit: 6,
            timeout_secs: None,
            strict_repos: false,
        }
    }
}

impl Config {
    /// Loads the config from its default location, falling back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(write_err)
    }

    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let home = std::env::var_os("HOME").ok_or(ConfigError::NoHome)?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("ghprofile")
            .join("config.json"))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            per_page: self.per_page,
            on_repos_failure: if self.strict_repos {
                ReposFailurePolicy::Fail
            } else {
                ReposFailurePolicy::Empty
            },
        }
    }
}
