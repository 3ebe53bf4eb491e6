//! File-backed session repository implementation.
//!
//! Persists the single session blob as pretty-printed JSON. Writes are
//! atomic via a temporary file and rename; a malformed blob on load is
//! discarded and treated as "no session".

use std::path::PathBuf;

use async_trait::async_trait;
use pulse_core::error::Result;
use pulse_core::session::{Session, SessionRepository};

use crate::paths::PulsePaths;

/// Stores the session as one JSON file under the app config directory.
///
/// The same `path` field serves load, save, and clear, so sign-out always
/// removes exactly the file sign-up/sign-in wrote.
pub struct FileSessionRepository {
    path: PathBuf,
}

impl FileSessionRepository {
    /// Creates a repository at the standard session path.
    pub fn new(paths: &PulsePaths) -> Result<Self> {
        Ok(Self {
            path: paths.session_file()?,
        })
    }

    /// Creates a repository at an explicit path (tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file this repository reads and writes.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| format!(".{}.tmp", name.to_string_lossy()))
            .unwrap_or_else(|| ".session.tmp".to_string());
        match self.path.parent() {
            Some(parent) => parent.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}

#[async_trait]
impl SessionRepository for FileSessionRepository {
    async fn load(&self) -> Result<Option<Session>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<Session>(&content) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                // Corrupt local data is not actionable by the user; drop it
                // and start unauthenticated.
                tracing::warn!(
                    "Discarding malformed session blob at {:?}: {}",
                    self.path,
                    err
                );
                let _ = tokio::fs::remove_file(&self.path).await;
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(session)?;

        // Write to a sibling temp file, then rename for atomicity.
        let tmp_path = self.temp_path();
        tokio::fs::write(&tmp_path, json.as_bytes()).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        tracing::debug!("Persisted session {} to {:?}", session.id, self.path);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
