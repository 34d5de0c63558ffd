//! Configuration loader with multi-source merging

use crate::{ConfigError, Paths, TfauditConfig};
use std::path::{Path, PathBuf};

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    config_file: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a loader that reads the user config file and `TFAUDIT_*`
    pub fn new() -> Self {
        Self {
            config_file: None,
            env_prefix: "TFAUDIT".to_string(),
        }
    }

    /// Read this file instead of the user config file
    pub fn with_config_file(mut self, file: impl AsRef<Path>) -> Self {
        self.config_file = Some(file.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix (default: "TFAUDIT")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<TfauditConfig, ConfigError> {
        let mut builder = config::Config::builder();

        // 1. Built-in defaults
        let defaults = TfauditConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. Config file: explicit, or ~/.config/tfaudit/config.toml
        let file = match self.config_file {
            Some(file) => Some(file),
            None => Paths::new().user_config_file().ok(),
        };
        if let Some(file) = file.filter(|f| f.exists()) {
            builder = builder.add_source(
                config::File::from(file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 3. Environment variables (TFAUDIT_API__TOKEN, ...)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: TfauditConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    // Environment variables are exercised by the CLI integration tests, which
    // can set them per child process. Here a prefix nothing uses keeps the
    // loader away from the real environment.
    fn loader() -> ConfigLoader {
        ConfigLoader::new().with_env_prefix("TFAUDIT_LOADER_TEST")
    }

    #[test]
    fn test_load_defaults_when_file_missing() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = loader()
            .with_config_file(temp_dir.path().join("absent.toml"))
            .load()
            .expect("Failed to load config");

        assert_eq!(config, TfauditConfig::default());
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let file = temp_dir.path().join("config.toml");

        fs::write(
            &file,
            r#"
[api]
endpoint = "https://tfe.example.com/api/v2/organization/audit-trail"
token = "from-file"

[query]
since_days = 7
"#,
        )
        .expect("Failed to write config");

        let config = loader()
            .with_config_file(&file)
            .load()
            .expect("Failed to load config");

        assert_eq!(
            config.api.endpoint,
            "https://tfe.example.com/api/v2/organization/audit-trail"
        );
        assert_eq!(config.token(), Some("from-file"));
        assert_eq!(config.query.since_days, 7);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let file = temp_dir.path().join("config.toml");
        fs::write(&file, "[query]\nsince_days = 3\n").expect("Failed to write config");

        let config = loader()
            .with_config_file(&file)
            .load()
            .expect("Failed to load config");

        assert_eq!(config.api, crate::ApiConfig::default());
        assert_eq!(config.query.since_days, 3);
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let file = temp_dir.path().join("config.toml");
        fs::write(&file, "[api]\nendpoint = \"app.terraform.io\"\n")
            .expect("Failed to write config");

        let err = loader().with_config_file(&file).load().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let file = temp_dir.path().join("config.toml");
        fs::write(&file, "[query]\nsince_days = \"soon\"\n").expect("Failed to write config");

        let err = loader().with_config_file(&file).load().unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
