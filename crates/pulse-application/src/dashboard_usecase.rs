//! Dashboard and profile view use cases.
//!
//! Each view load issues its facade reads concurrently and joins them
//! all-or-nothing: if any one read fails, the whole load fails and the
//! caller shows a single error state, never a partially populated view.

use std::sync::Arc;

use pulse_core::dashboard::{
    ActivityEntry, ActivityRecord, DashboardStats, DataSource, Insight, LogAck, Skill,
    UserProfile,
};
use pulse_core::error::Result;
use serde::Serialize;

/// Days of activity shown on the dashboard chart.
const DASHBOARD_ACTIVITY_DAYS: usize = 7;

/// Everything the dashboard renders, loaded in one join.
///
/// Stats are passed through exactly as fetched; no derived recomputation
/// happens on this side of the facade.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub activity: Vec<ActivityEntry>,
    pub skills: Vec<Skill>,
    pub insights: Vec<Insight>,
}

/// Everything the profile view renders for one username.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub user: UserProfile,
    pub skills: Vec<Skill>,
    pub activity: Vec<ActivityEntry>,
}

/// Read-side use case over the data-access facade.
pub struct DashboardUseCase {
    data_source: Arc<dyn DataSource>,
}

impl DashboardUseCase {
    pub fn new(data_source: Arc<dyn DataSource>) -> Self {
        Self { data_source }
    }

    /// Loads the dashboard: stats, a 7-day activity window, skills and
    /// insights, fetched concurrently and joined all-or-nothing.
    pub async fn load_dashboard(&self) -> Result<DashboardView> {
        self.load_dashboard_with_window(Some(DASHBOARD_ACTIVITY_DAYS))
            .await
    }

    /// Loads the dashboard with an explicit activity window.
    ///
    /// `None` charts the full retained history.
    pub async fn load_dashboard_with_window(
        &self,
        days: Option<usize>,
    ) -> Result<DashboardView> {
        let (stats, activity, skills, insights) = tokio::try_join!(
            self.data_source.get_dashboard_stats(),
            self.data_source.get_activity_data(days),
            self.data_source.get_skills(),
            self.data_source.get_insights(),
        )?;

        Ok(DashboardView {
            stats,
            activity,
            skills,
            insights,
        })
    }

    /// Loads the profile view for a username (or id), joining the profile
    /// record with skills and full activity history.
    pub async fn load_profile(&self, username_or_id: &str) -> Result<ProfileView> {
        let (user, skills, activity) = tokio::try_join!(
            self.data_source.get_user(username_or_id),
            self.data_source.get_skills(),
            self.data_source.get_activity_data(None),
        )?;

        Ok(ProfileView {
            user,
            skills,
            activity,
        })
    }

    /// Submits an activity record through the facade's write path.
    pub async fn log_activity(&self, record: &ActivityRecord) -> Result<LogAck> {
        self.data_source.log_activity(record).await
    }
}
