//! Dashboard domain models.
//!
//! All of these are value objects: fetched fresh on each load, held only in
//! transient view state, never mutated in place. Serde renames follow the
//! camelCase shape of the external JSON representation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A public user profile, fetched by username or id.
///
/// Distinct from [`Session`](crate::session::Session): any username's
/// profile can be displayed regardless of who is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Avatar image URL
    pub avatar: String,
    pub bio: String,
    pub join_date: NaiveDate,
}

/// Aggregate snapshot of a user's learning activity.
///
/// Immutable once fetched; views render these numbers as-is, with no
/// client-side recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_activities: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Percentage in 0..=100
    pub consistency_rate: u32,
    pub skills_learned: u32,
}

/// One day's activity count. Sequences of these are chronological and the
/// order is significant for charting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub date: NaiveDate,
    pub count: u32,
}

/// A tracked skill with a 0-100 proficiency level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: String,
}

impl Skill {
    /// Creates a skill, clamping `level` into the 0-100 range.
    pub fn new(name: impl Into<String>, level: u8, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: level.min(100),
            category: category.into(),
        }
    }
}

/// Classification of an insight card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Achievement,
    Tip,
    Milestone,
}

/// An informational card shown on the dashboard.
///
/// Insights are independent of each other and have no lifecycle beyond
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub icon: String,
    pub timestamp: NaiveDate,
}

/// A single activity submission sent through the facade's write path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub date: NaiveDate,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Acknowledgement of an activity submission.
///
/// Receipt only: the backend makes no guarantee the activity is reflected
/// in subsequently read stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogAck {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_is_clamped() {
        let skill = Skill::new("Rust", 140, "Language");
        assert_eq!(skill.level, 100);
        let skill = Skill::new("CSS", 88, "Frontend");
        assert_eq!(skill.level, 88);
    }

    #[test]
    fn test_profile_serializes_with_camel_case_join_date() {
        let profile = UserProfile {
            id: "1".to_string(),
            username: "devpulse_user".to_string(),
            email: "user@example.com".to_string(),
            avatar: "https://example.com/a.svg".to_string(),
            bio: "hi".to_string(),
            join_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["joinDate"], "2024-01-15");
    }

    #[test]
    fn test_insight_kind_serializes_as_type_tag() {
        let insight = Insight {
            id: "1".to_string(),
            title: "Milestone Reached!".to_string(),
            description: "150+ activities".to_string(),
            kind: InsightKind::Milestone,
            icon: "🎯".to_string(),
            timestamp: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        let json = serde_json::to_value(&insight).unwrap();
        assert_eq!(json["type"], "milestone");
    }
}
