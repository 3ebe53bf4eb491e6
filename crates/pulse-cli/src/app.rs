//! Composition root.
//!
//! Builds the concrete authenticator, data source and session repository
//! according to the loaded configuration, wires the use cases, and
//! rehydrates the persisted session before handing control to any command.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, bail};
use pulse_application::{DashboardUseCase, SessionUseCase};
use pulse_core::auth::Authenticator;
use pulse_core::config::{AuthMode, DataSourceMode};
use pulse_core::dashboard::DataSource;
use pulse_infrastructure::{
    ConfigService, FileSessionRepository, FixtureDataSource, PulsePaths, StubAuthenticator,
};

/// Shared dependencies handed to every command.
pub struct AppContext {
    pub session_usecase: Arc<SessionUseCase>,
    pub dashboard_usecase: Arc<DashboardUseCase>,
}

pub async fn bootstrap(base_dir: Option<PathBuf>) -> Result<AppContext> {
    let paths = PulsePaths::new(base_dir);
    let config = ConfigService::new(&paths)?.load().await?;
    tracing::debug!("[Bootstrap] Loaded config: {:?}", config);

    let authenticator: Arc<dyn Authenticator> = match config.auth_mode {
        AuthMode::Stub => Arc::new(StubAuthenticator::new(Duration::from_millis(
            config.auth_latency_ms,
        ))),
        AuthMode::Remote => {
            // Refuse to start rather than fall back to the stub.
            bail!(
                "auth_mode = \"remote\" is configured but no remote verifier \
                 is available yet; set auth_mode = \"stub\" for local use"
            );
        }
    };

    let data_source: Arc<dyn DataSource> = match config.data_source {
        DataSourceMode::Fixture => Arc::new(FixtureDataSource::new(Duration::from_millis(
            config.fixture_latency_ms,
        ))),
        DataSourceMode::Remote => {
            bail!(
                "data_source = \"remote\" is configured but no backend client \
                 is available yet; set data_source = \"fixture\" for local use"
            );
        }
    };

    let repository = Arc::new(FileSessionRepository::new(&paths)?);
    let session_usecase = Arc::new(SessionUseCase::new(authenticator, repository));

    // Restore any persisted session before a command can observe the
    // unauthenticated state.
    session_usecase.rehydrate().await?;

    Ok(AppContext {
        session_usecase,
        dashboard_usecase: Arc::new(DashboardUseCase::new(data_source)),
    })
}
