//! In-memory fixture implementation of the data-access facade.
//!
//! Stands in for the real backend during development and in tests. Every
//! read sleeps for a configurable simulated latency, then clones from the
//! seeded fixtures. Writes are acknowledged but not persisted, so no
//! read-after-write consistency exists here.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use pulse_core::dashboard::{
    ActivityEntry, ActivityRecord, DashboardStats, DataSource, Insight, InsightKind, LogAck,
    Skill, UserProfile,
};
use pulse_core::error::{PulseError, Result};

/// Fixture-backed [`DataSource`].
pub struct FixtureDataSource {
    profile: UserProfile,
    stats: DashboardStats,
    activity: Vec<ActivityEntry>,
    skills: Vec<Skill>,
    insights: Vec<Insight>,
    latency: Duration,
}

fn fixture_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

impl FixtureDataSource {
    /// Creates a fixture source with the given simulated latency.
    pub fn new(latency: Duration) -> Self {
        Self {
            profile: UserProfile {
                id: "1".to_string(),
                username: "devpulse_user".to_string(),
                email: "user@example.com".to_string(),
                avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=devpulse".to_string(),
                bio: "Passionate developer & lifelong learner".to_string(),
                join_date: fixture_date(2024, 1, 15),
            },
            stats: DashboardStats {
                total_activities: 156,
                current_streak: 12,
                longest_streak: 34,
                consistency_rate: 87,
                skills_learned: 8,
            },
            activity: vec![
                ActivityEntry { date: fixture_date(2024, 1, 10), count: 5 },
                ActivityEntry { date: fixture_date(2024, 1, 11), count: 8 },
                ActivityEntry { date: fixture_date(2024, 1, 12), count: 6 },
                ActivityEntry { date: fixture_date(2024, 1, 13), count: 9 },
                ActivityEntry { date: fixture_date(2024, 1, 14), count: 7 },
                ActivityEntry { date: fixture_date(2024, 1, 15), count: 4 },
                ActivityEntry { date: fixture_date(2024, 1, 16), count: 8 },
            ],
            skills: vec![
                Skill::new("React", 90, "Frontend"),
                Skill::new("TypeScript", 85, "Language"),
                Skill::new("Node.js", 80, "Backend"),
                Skill::new("CSS", 88, "Frontend"),
                Skill::new("Database Design", 75, "Backend"),
                Skill::new("DevOps", 70, "Tools"),
            ],
            insights: vec![
                Insight {
                    id: "1".to_string(),
                    title: "Amazing Streak!".to_string(),
                    description: "You've maintained a 12-day learning streak. Keep it up!"
                        .to_string(),
                    kind: InsightKind::Achievement,
                    icon: "🔥".to_string(),
                    timestamp: fixture_date(2024, 1, 16),
                },
                Insight {
                    id: "2".to_string(),
                    title: "Focus on Weak Areas".to_string(),
                    description: "Consider spending more time on DevOps concepts this week."
                        .to_string(),
                    kind: InsightKind::Tip,
                    icon: "💡".to_string(),
                    timestamp: fixture_date(2024, 1, 16),
                },
                Insight {
                    id: "3".to_string(),
                    title: "Milestone Reached!".to_string(),
                    description: "You've completed 150+ learning activities. You're on fire! 🚀"
                        .to_string(),
                    kind: InsightKind::Milestone,
                    icon: "🎯".to_string(),
                    timestamp: fixture_date(2024, 1, 15),
                },
            ],
            latency,
        }
    }

    /// Creates a fixture source with no simulated latency (tests).
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    async fn simulate_round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for FixtureDataSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}

#[async_trait]
impl DataSource for FixtureDataSource {
    async fn get_user(&self, username_or_id: &str) -> Result<UserProfile> {
        self.simulate_round_trip().await;

        let query = username_or_id.trim();
        if query.is_empty() {
            return Err(PulseError::not_found("user", username_or_id));
        }

        if query == self.profile.id || query == self.profile.username {
            return Ok(self.profile.clone());
        }

        // The fixture knows only one user; serve the seeded profile under
        // the requested username so any profile view has data to render.
        let mut profile = self.profile.clone();
        profile.username = query.to_string();
        Ok(profile)
    }

    async fn get_dashboard_stats(&self) -> Result<DashboardStats> {
        self.simulate_round_trip().await;
        Ok(self.stats)
    }

    async fn get_activity_data(&self, days: Option<usize>) -> Result<Vec<ActivityEntry>> {
        self.simulate_round_trip().await;
        let entries = match days {
            Some(days) => {
                let start = self.activity.len().saturating_sub(days);
                self.activity[start..].to_vec()
            }
            None => self.activity.clone(),
        };
        Ok(entries)
    }

    async fn get_skills(&self) -> Result<Vec<Skill>> {
        self.simulate_round_trip().await;
        Ok(self.skills.clone())
    }

    async fn get_insights(&self) -> Result<Vec<Insight>> {
        self.simulate_round_trip().await;
        Ok(self.insights.clone())
    }

    async fn log_activity(&self, record: &ActivityRecord) -> Result<LogAck> {
        self.simulate_round_trip().await;
        tracing::debug!(
            "Acknowledged activity on {} (count: {}), not persisted by the fixture",
            record.date,
            record.count
        );
        Ok(LogAck { success: true })
    }
}
