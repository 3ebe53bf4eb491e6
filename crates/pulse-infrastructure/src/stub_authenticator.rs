//! Always-succeed development authenticator.
//!
//! Accepts any non-empty credentials and simulates a network round trip
//! with a configurable delay. Never wired in when `auth_mode = "remote"`;
//! the composition root refuses to start rather than fall back to this.

use std::time::Duration;

use async_trait::async_trait;
use pulse_core::auth::Authenticator;
use pulse_core::error::{PulseError, Result};
use pulse_core::session::{Session, normalize_username};
use uuid::Uuid;

/// Development [`Authenticator`] that performs no real verification.
pub struct StubAuthenticator {
    latency: Duration,
}

impl StubAuthenticator {
    /// Creates a stub with the given simulated latency.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Creates a stub with no simulated latency (tests).
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    async fn simulate_round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for StubAuthenticator {
    fn default() -> Self {
        // Roughly what a real sign-in round trip costs.
        Self::new(Duration::from_millis(1000))
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PulseError::auth(format!("{} must not be empty", field)));
    }
    Ok(())
}

#[async_trait]
impl Authenticator for StubAuthenticator {
    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<Session> {
        require_non_empty("name", name)?;
        require_non_empty("email", email)?;
        require_non_empty("password", password)?;

        self.simulate_round_trip().await;

        let session = Session::new(
            Uuid::new_v4().to_string(),
            name,
            email,
            normalize_username(name),
        );
        tracing::info!("[Auth] Signed up '{}' as '{}'", name, session.username);
        Ok(session)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        require_non_empty("email", email)?;
        require_non_empty("password", password)?;

        let local_part = match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => local,
            _ => {
                return Err(PulseError::auth(format!(
                    "'{}' is not a plausible email address",
                    email
                )));
            }
        };

        self.simulate_round_trip().await;

        // The local part doubles as display name and username.
        let session = Session::new(Uuid::new_v4().to_string(), local_part, email, local_part);
        tracing::info!("[Auth] Signed in '{}'", session.username);
        Ok(session)
    }
}
