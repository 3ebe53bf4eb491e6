//! Configuration loading service.
//!
//! Reads `config.toml` from the app config directory, creating it with
//! defaults on first run so users have a file to edit.

use std::path::PathBuf;

use pulse_core::config::AppConfig;
use pulse_core::error::Result;

use crate::paths::PulsePaths;

/// Loads and saves the application configuration.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a service reading the standard config path.
    pub fn new(paths: &PulsePaths) -> Result<Self> {
        Ok(Self {
            path: paths.config_file()?,
        })
    }

    /// Creates a service at an explicit path (tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the configuration, writing the default file if none exists.
    ///
    /// A malformed file is an error: unlike the session blob, config is
    /// user-edited and silently resetting it would destroy their changes.
    pub async fn load(&self) -> Result<AppConfig> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                let config: AppConfig = toml::from_str(&content)?;
                Ok(config)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let config = AppConfig::default();
                self.save(&config).await?;
                tracing::info!("Created default config at {:?}", self.path);
                Ok(config)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Saves the configuration.
    pub async fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let toml_string = toml::to_string_pretty(config)?;
        tokio::fs::write(&self.path, toml_string.as_bytes()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::config::{AuthMode, DataSourceMode};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_creates_default_file_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let service = ConfigService::with_path(path.clone());

        let config = service.load().await.unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_load_reads_saved_config() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        let config = AppConfig {
            auth_mode: AuthMode::Remote,
            data_source: DataSourceMode::Fixture,
            fixture_latency_ms: 0,
            auth_latency_ms: 0,
        };
        service.save(&config).await.unwrap();

        assert_eq!(service.load().await.unwrap(), config);
    }

    #[tokio::test]
    async fn test_malformed_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "auth_mode = 42").unwrap();

        let service = ConfigService::with_path(path);
        assert!(service.load().await.unwrap_err().is_serialization());
    }
}
