pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod session;

// Re-export common error type
pub use error::PulseError;
