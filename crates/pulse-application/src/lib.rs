//! Application layer for DevPulse.
//!
//! This crate provides use case implementations that coordinate between
//! domain and infrastructure layers: the session lifecycle and the
//! all-or-nothing view loads.

pub mod dashboard_usecase;
pub mod session_usecase;

pub use dashboard_usecase::{DashboardUseCase, DashboardView, ProfileView};
pub use session_usecase::SessionUseCase;
