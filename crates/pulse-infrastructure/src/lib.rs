//! Infrastructure layer for DevPulse.
//!
//! Concrete implementations of the core seams: the file-backed session
//! repository, the fixture data source, the stub authenticator, config
//! loading, and path management.

pub mod config_service;
pub mod fixture_data_source;
pub mod paths;
pub mod session_repository;
pub mod stub_authenticator;

pub use config_service::ConfigService;
pub use fixture_data_source::FixtureDataSource;
pub use paths::PulsePaths;
pub use session_repository::FileSessionRepository;
pub use stub_authenticator::StubAuthenticator;
