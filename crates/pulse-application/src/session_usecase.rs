//! Session lifecycle use case.
//!
//! Owns the single in-memory session and keeps it consistent with the
//! persisted copy on every mutation (write-through). Constructed once by
//! the composition root; consumers receive it as a shared dependency, not
//! a module-level singleton.

use std::sync::Arc;

use pulse_core::auth::Authenticator;
use pulse_core::error::Result;
use pulse_core::session::{Session, SessionRepository};
use tokio::sync::Mutex;

/// Tracks the currently authenticated identity.
///
/// Invariant: at most one active session at a time, and the persisted blob
/// always matches the in-memory value after every operation. A failed
/// sign-up/sign-in never disturbs a previously active session.
pub struct SessionUseCase {
    authenticator: Arc<dyn Authenticator>,
    repository: Arc<dyn SessionRepository>,
    current: Mutex<Option<Session>>,
}

impl SessionUseCase {
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        repository: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            authenticator,
            repository,
            current: Mutex::new(None),
        }
    }

    /// Restores the persisted session, if any.
    ///
    /// Called by the composition root before any consumer runs, so there is
    /// no window where a signed-in user appears unauthenticated. A missing
    /// or malformed blob yields the unauthenticated state, never an error.
    pub async fn rehydrate(&self) -> Result<Option<Session>> {
        let session = self.repository.load().await?;
        if let Some(session) = &session {
            tracing::info!("[Session] Restored session for '{}'", session.username);
        }
        *self.current.lock().await = session.clone();
        Ok(session)
    }

    /// Registers a new identity and makes it the current session.
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<Session> {
        let session = self.authenticator.sign_up(name, email, password).await?;
        self.activate(session).await
    }

    /// Authenticates existing credentials and makes the result current.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let session = self.authenticator.sign_in(email, password).await?;
        self.activate(session).await
    }

    /// Clears the current session and its persisted copy.
    ///
    /// The persisted copy goes first; if removal fails, the in-memory
    /// session is left intact so the two never diverge.
    pub async fn sign_out(&self) -> Result<()> {
        let mut current = self.current.lock().await;
        self.repository.clear().await?;
        if let Some(session) = current.take() {
            tracing::info!("[Session] Signed out '{}'", session.username);
        }
        Ok(())
    }

    /// Returns a copy of the current session, if any.
    pub async fn current_session(&self) -> Option<Session> {
        self.current.lock().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.lock().await.is_some()
    }

    /// Persists and activates a freshly minted session.
    ///
    /// Persist-then-activate: if the write fails, the previous session (or
    /// unauthenticated state) remains in force.
    async fn activate(&self, session: Session) -> Result<Session> {
        let mut current = self.current.lock().await;
        self.repository.save(&session).await?;
        *current = Some(session.clone());
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pulse_core::PulseError;
    use pulse_core::session::normalize_username;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Authenticator double that mints deterministic sessions.
    struct FixedAuthenticator;

    #[async_trait]
    impl Authenticator for FixedAuthenticator {
        async fn sign_up(&self, name: &str, email: &str, _password: &str) -> Result<Session> {
            Ok(Session::new("id-1", name, email, normalize_username(name)))
        }

        async fn sign_in(&self, email: &str, _password: &str) -> Result<Session> {
            let local = email.split('@').next().unwrap_or(email);
            Ok(Session::new("id-2", local, email, local))
        }
    }

    /// Repository double whose save path can be made to fail.
    #[derive(Default)]
    struct FlakyRepository {
        stored: Mutex<Option<Session>>,
        fail_save: AtomicBool,
    }

    #[async_trait]
    impl SessionRepository for FlakyRepository {
        async fn load(&self) -> Result<Option<Session>> {
            Ok(self.stored.lock().await.clone())
        }

        async fn save(&self, session: &Session) -> Result<()> {
            if self.fail_save.load(Ordering::SeqCst) {
                return Err(PulseError::io("disk full"));
            }
            *self.stored.lock().await = Some(session.clone());
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            *self.stored.lock().await = None;
            Ok(())
        }
    }

    fn usecase_with(repository: Arc<FlakyRepository>) -> SessionUseCase {
        SessionUseCase::new(Arc::new(FixedAuthenticator), repository)
    }

    #[tokio::test]
    async fn test_sign_up_activates_and_persists() {
        let repository = Arc::new(FlakyRepository::default());
        let usecase = usecase_with(repository.clone());

        let session = usecase.sign_up("Ada Lovelace", "ada@example.com", "pw").await.unwrap();
        assert_eq!(session.username, "ada_lovelace");
        assert!(usecase.is_authenticated().await);
        assert_eq!(repository.load().await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn test_failed_sign_in_keeps_previous_session() {
        let repository = Arc::new(FlakyRepository::default());
        let usecase = usecase_with(repository.clone());

        let original = usecase.sign_up("Ada Lovelace", "ada@example.com", "pw").await.unwrap();

        repository.fail_save.store(true, Ordering::SeqCst);
        let err = usecase.sign_in("grace@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, PulseError::Io { .. }));

        // In-memory and persisted state both still hold the original.
        assert_eq!(usecase.current_session().await, Some(original.clone()));
        assert_eq!(repository.load().await.unwrap(), Some(original));
    }

    #[tokio::test]
    async fn test_sign_out_clears_both_copies() {
        let repository = Arc::new(FlakyRepository::default());
        let usecase = usecase_with(repository.clone());

        usecase.sign_up("Ada Lovelace", "ada@example.com", "pw").await.unwrap();
        usecase.sign_out().await.unwrap();

        assert!(!usecase.is_authenticated().await);
        assert_eq!(repository.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_rehydrate_restores_persisted_session() {
        let repository = Arc::new(FlakyRepository::default());
        let first = usecase_with(repository.clone());
        first.sign_in("grace@example.com", "pw").await.unwrap();

        // A fresh use case over the same repository models a restart.
        let second = usecase_with(repository);
        assert!(!second.is_authenticated().await);
        let restored = second.rehydrate().await.unwrap();
        assert_eq!(restored.map(|s| s.username), Some("grace".to_string()));
        assert!(second.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_rehydrate_with_nothing_persisted_stays_unauthenticated() {
        let usecase = usecase_with(Arc::new(FlakyRepository::default()));
        assert_eq!(usecase.rehydrate().await.unwrap(), None);
        assert!(!usecase.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_sign_in_replaces_existing_session() {
        let repository = Arc::new(FlakyRepository::default());
        let usecase = usecase_with(repository.clone());

        usecase.sign_up("Ada Lovelace", "ada@example.com", "pw").await.unwrap();
        let replacement = usecase.sign_in("grace@example.com", "pw").await.unwrap();

        // Exactly one session: the latest one, in memory and on disk.
        assert_eq!(usecase.current_session().await, Some(replacement.clone()));
        assert_eq!(repository.load().await.unwrap(), Some(replacement));
    }
}
