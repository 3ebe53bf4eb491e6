//! Application configuration.
//!
//! Selects which implementations back the authentication and data-access
//! seams. Defaults are the development stubs; the "remote" modes are
//! reserved for a real backend and are rejected at bootstrap until one
//! exists, so the always-succeed stub cannot silently reach a deployed
//! build.

use serde::{Deserialize, Serialize};

/// Which [`Authenticator`](crate::auth::Authenticator) backs sign-up/sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Always-succeed development stub with simulated latency.
    #[default]
    Stub,
    /// Real credential verification against a backend (not yet available).
    Remote,
}

/// Which [`DataSource`](crate::dashboard::DataSource) backs the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSourceMode {
    /// In-memory fixtures with simulated latency.
    #[default]
    Fixture,
    /// Real network client (not yet available).
    Remote,
}

/// Application configuration, loaded from `config.toml`.
///
/// Missing fields fall back to defaults, so a partially written file stays
/// loadable across versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub auth_mode: AuthMode,
    pub data_source: DataSourceMode,
    /// Simulated latency for fixture reads, in milliseconds.
    pub fixture_latency_ms: u64,
    /// Simulated latency for stub sign-up/sign-in, in milliseconds.
    pub auth_latency_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_mode: AuthMode::default(),
            data_source: DataSourceMode::default(),
            fixture_latency_ms: 300,
            auth_latency_ms: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.auth_mode, AuthMode::Stub);
        assert_eq!(config.data_source, DataSourceMode::Fixture);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: AppConfig = toml::from_str("auth_mode = \"remote\"").unwrap();
        assert_eq!(config.auth_mode, AuthMode::Remote);
        assert_eq!(config.data_source, DataSourceMode::Fixture);
        assert_eq!(config.fixture_latency_ms, 300);
    }

    #[test]
    fn test_round_trip() {
        let config = AppConfig {
            auth_mode: AuthMode::Stub,
            data_source: DataSourceMode::Remote,
            fixture_latency_ms: 0,
            auth_latency_ms: 5,
        };
        let toml_string = toml::to_string_pretty(&config).unwrap();
        let back: AppConfig = toml::from_str(&toml_string).unwrap();
        assert_eq!(back, config);
    }
}
