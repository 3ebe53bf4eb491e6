//! Authentication capability.
//!
//! This module defines the seam between the session lifecycle and whatever
//! actually verifies credentials. The development build uses an
//! always-succeed stub (see `pulse-infrastructure`); a production build is
//! expected to plug in a real verifier behind the same trait, selected by
//! configuration so the stub cannot silently ship.

use async_trait::async_trait;

use crate::error::Result;
use crate::session::Session;

/// Verifies credentials and mints sessions.
///
/// Implementations must not persist anything; persistence is the session
/// repository's concern and is coordinated by the session use case.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Registers a new identity and returns its session.
    ///
    /// The returned session carries a freshly generated opaque id and a
    /// username derived from `name` via
    /// [`normalize_username`](crate::session::normalize_username).
    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<Session>;

    /// Authenticates existing credentials and returns a session derived
    /// from the email's local part.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;
}
