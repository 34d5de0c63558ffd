//! XDG directory discovery

use crate::ConfigError;
use directories::ProjectDirs;
use std::path::PathBuf;

/// XDG-compliant paths for tfaudit
pub struct Paths {
    project_dirs: Option<ProjectDirs>,
}

impl Paths {
    /// Create a new Paths instance with XDG discovery
    pub fn new() -> Self {
        Self {
            project_dirs: ProjectDirs::from("io", "tfaudit", "tfaudit"),
        }
    }

    /// Get user config directory (~/.config/tfaudit/)
    pub fn user_config_dir(&self) -> Result<PathBuf, ConfigError> {
        self.project_dirs
            .as_ref()
            .map(|p| p.config_dir().to_path_buf())
            .ok_or_else(|| {
                ConfigError::XdgError("Failed to determine user config directory".to_string())
            })
    }

    /// Get user config file path (~/.config/tfaudit/config.toml)
    pub fn user_config_file(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.user_config_dir()?.join("config.toml"))
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}
