//! Shell configuration.
//!
//! The configuration is read from an optional TOML file, then individual
//! keys can be overridden from the environment:
//!
//! ```toml
//! app-title = "Demo-TT"
//! api-root = "http://localhost:8080/demo-tt/"
//! navigation = "custom"
//! ```
//!
//! | Key          | Environment          | Default                          |
//! |--------------|----------------------|----------------------------------|
//! | `app-title`  | `PORTICO_APP_TITLE`  | `Demo-TT`                        |
//! | `api-root`   | `PORTICO_API_ROOT`   | `http://localhost:8080/demo-tt/` |
//! | `navigation` | `PORTICO_NAVIGATION` | unset (application default)      |

use portico_core::{API_ROOT, APP_TITLE, ShellAttributes};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding `app-title`.
pub const ENV_APP_TITLE: &str = "PORTICO_APP_TITLE";
/// Environment variable overriding `api-root`.
pub const ENV_API_ROOT: &str = "PORTICO_API_ROOT";
/// Environment variable overriding `navigation`.
pub const ENV_NAVIGATION: &str = "PORTICO_NAVIGATION";

const DEFAULT_APP_TITLE: &str = "Demo-TT";
const DEFAULT_API_ROOT: &str = "http://localhost:8080/demo-tt/";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has unexpected keys.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configured navigation names no known implementation.
    #[error("unknown navigation `{0}`")]
    UnknownNavigation(String),
}

/// Settings the composition root forwards to the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ShellConfig {
    /// Application title.
    pub app_title: String,
    /// Base address of the host's backend.
    pub api_root: String,
    /// Name of the navigation implementation to select.
    pub navigation: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_title: DEFAULT_APP_TITLE.to_string(),
            api_root: DEFAULT_API_ROOT.to_string(),
            navigation: None,
        }
    }
}

impl ShellConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Apply overrides found through `lookup`.
    ///
    /// `lookup` receives the environment variable names above. Empty values
    /// are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());
        if let Some(title) = lookup(ENV_APP_TITLE) {
            self.app_title = title;
        }
        if let Some(root) = lookup(ENV_API_ROOT) {
            self.api_root = root;
        }
        if let Some(navigation) = lookup(ENV_NAVIGATION) {
            debug!(%navigation, "navigation overridden from environment");
            self.navigation = Some(navigation);
        }
        self
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// The configured navigation name, if any.
    pub fn navigation(&self) -> Option<&str> {
        self.navigation.as_deref()
    }

    /// The attributes forwarded to the entry component.
    pub fn attributes(&self) -> ShellAttributes {
        ShellAttributes::new()
            .with(APP_TITLE, self.app_title.as_str())
            .with(API_ROOT, self.api_root.as_str())
    }
}
