//! Session domain model.
//!
//! Represents the currently signed-in user. At most one session exists at a
//! time; it is persisted as a JSON blob and rehydrated at startup.

use serde::{Deserialize, Serialize};

/// The locally persisted record identifying the currently signed-in user.
///
/// Sessions are value objects: created by sign-up/sign-in, destroyed by
/// sign-out, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque session identifier (UUID format)
    pub id: String,
    /// Display name as entered at sign-up
    pub name: String,
    pub email: String,
    /// Handle derived from the display name (see [`normalize_username`])
    pub username: String,
}

impl Session {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            username: username.into(),
        }
    }
}

/// Derives a username from a display name: lower-cased, with each run of
/// whitespace collapsed to a single underscore.
///
/// # Examples
///
/// ```
/// use pulse_core::session::normalize_username;
///
/// assert_eq!(normalize_username("Ada Lovelace"), "ada_lovelace");
/// ```
pub fn normalize_username(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
