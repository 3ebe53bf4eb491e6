//! Data access facade trait.

use async_trait::async_trait;

use crate::dashboard::model::{
    ActivityEntry, ActivityRecord, DashboardStats, Insight, LogAck, Skill, UserProfile,
};
use crate::error::Result;

/// The single asynchronous data-access interface consumed by all views.
///
/// This is the seam where a real backend (REST/GraphQL/RPC) can be
/// substituted without touching consumers; the development build wires in
/// an in-memory fixture implementation.
///
/// All reads are idempotent: repeated calls with the same arguments return
/// equivalent data absent external mutation. Only [`log_activity`] has an
/// observable side effect. Callers must tolerate arbitrary latency and
/// handle failures uniformly (a failed read fails the whole view).
///
/// [`log_activity`]: DataSource::log_activity
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Returns the profile for a username or id.
    ///
    /// Fails with [`PulseError::NotFound`](crate::PulseError::NotFound) when
    /// no such identity exists.
    async fn get_user(&self, username_or_id: &str) -> Result<UserProfile>;

    /// Returns the aggregate activity snapshot.
    async fn get_dashboard_stats(&self) -> Result<DashboardStats>;

    /// Returns daily activity counts in chronological order.
    ///
    /// `Some(days)` returns at most the `days` most recent entries, order
    /// preserved; `None` returns the full retained history.
    async fn get_activity_data(&self, days: Option<usize>) -> Result<Vec<ActivityEntry>>;

    /// Returns the tracked skills (unordered).
    async fn get_skills(&self) -> Result<Vec<Skill>>;

    /// Returns the current insight cards (unordered).
    async fn get_insights(&self) -> Result<Vec<Insight>>;

    /// Submits an activity record and acknowledges receipt.
    ///
    /// No read-after-write consistency is guaranteed: the acknowledged
    /// activity may not appear in subsequently fetched stats.
    async fn log_activity(&self, record: &ActivityRecord) -> Result<LogAck>;
}
