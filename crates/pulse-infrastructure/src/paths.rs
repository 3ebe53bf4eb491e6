//! Unified path management for DevPulse files.
//!
//! All persisted state (the session blob, the config file) lives under one
//! application config directory, resolved via the `dirs` crate. This
//! ensures consistency across platforms (Linux, macOS, Windows).

use std::path::PathBuf;

use pulse_core::error::{PulseError, Result};

/// Name of the persisted session blob.
///
/// Exactly one name is used for both the write and delete paths; keeping it
/// here is what guarantees sign-out removes the same file sign-in wrote.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Name of the application configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Unified path management for DevPulse.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/devpulse/          # Config directory
/// ├── config.toml              # Application configuration
/// └── session.json             # Persisted session blob
/// ```
pub struct PulsePaths {
    base_dir: Option<PathBuf>,
}

impl PulsePaths {
    /// Creates a path resolver.
    ///
    /// `base_dir` overrides the platform config directory; pass `None` for
    /// the default (`~/.config/devpulse` on Linux). Tests pass a temp dir.
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    /// Returns the DevPulse configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base_dir {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join("devpulse"))
            .ok_or_else(|| PulseError::config("Cannot determine config directory"))
    }

    /// Returns the path to the persisted session blob.
    pub fn session_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(SESSION_FILE_NAME))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }
}

impl Default for PulsePaths {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_base_dir() {
        let paths = PulsePaths::new(Some(PathBuf::from("/tmp/devpulse-test")));
        assert_eq!(
            paths.session_file().unwrap(),
            PathBuf::from("/tmp/devpulse-test/session.json")
        );
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/devpulse-test/config.toml")
        );
    }

    #[test]
    fn test_session_and_config_share_a_directory() {
        let paths = PulsePaths::new(Some(PathBuf::from("/tmp/devpulse-test")));
        assert_eq!(
            paths.session_file().unwrap().parent(),
            paths.config_file().unwrap().parent()
        );
    }
}
