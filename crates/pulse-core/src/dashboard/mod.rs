//! Dashboard domain module.
//!
//! Value objects for the learning dashboard (stats, activity history,
//! skills, insights, profiles) and the asynchronous data-access facade
//! every view reads through.

mod data_source;
mod model;

// Re-export public API
pub use data_source::DataSource;
pub use model::{
    ActivityEntry, ActivityRecord, DashboardStats, Insight, InsightKind, LogAck, Skill,
    UserProfile,
};
