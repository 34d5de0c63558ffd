//! Configuration management for tfaudit
//!
//! Settings are merged from several sources, highest precedence first:
//! 1. CLI flags (applied by the binary on top of the loaded config)
//! 2. Environment variables (`TFAUDIT_` prefix, `__` between sections)
//! 3. ~/.config/tfaudit/config.toml, or an explicitly chosen file
//! 4. Built-in defaults
//!
//! ```toml
//! [api]
//! endpoint = "https://app.terraform.io/api/v2/organization/audit-trail"
//! token = "..."
//!
//! [query]
//! since_days = 7
//! ```

use serde::{Deserialize, Serialize};

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main tfaudit configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfauditConfig {
    pub api: ApiConfig,
    pub query: QueryConfig,
}

/// Where to fetch from and how to authenticate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: tfaudit::DEFAULT_ENDPOINT.to_string(),
            token: None,
        }
    }
}

/// Default look-back window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub since_days: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            since_days: tfaudit::window::DEFAULT_SINCE_DAYS,
        }
    }
}

impl TfauditConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        ConfigLoader::new().load()
    }

    /// Checks values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.api.endpoint.trim();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::ValidationError(format!(
                "api.endpoint must be an http(s) URL, got {:?}",
                self.api.endpoint
            )));
        }
        Ok(())
    }

    /// Token to use when none is given on the command line.
    ///
    /// Empty strings count as unset.
    pub fn token(&self) -> Option<&str> {
        self.api.token.as_deref().filter(|token| !token.is_empty())
    }
}
