//! Session repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::session::model::Session;

/// Repository for the single persisted session blob.
///
/// Implementations own one storage location and use it for every operation;
/// `clear` must remove exactly what `save` wrote.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Loads the persisted session, if any.
    ///
    /// A missing or malformed blob is "no session", never an error: the
    /// caller falls back to the unauthenticated state.
    async fn load(&self) -> Result<Option<Session>>;

    /// Persists the session, replacing any previous one.
    async fn save(&self, session: &Session) -> Result<()>;

    /// Removes the persisted session. A no-op if none exists.
    async fn clear(&self) -> Result<()>;
}
