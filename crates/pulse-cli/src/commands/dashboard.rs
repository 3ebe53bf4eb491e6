//! Dashboard, profile and activity-log commands.

use anyhow::Result;
use chrono::NaiveDate;
use pulse_application::{DashboardView, ProfileView};
use pulse_core::dashboard::{ActivityEntry, ActivityRecord, InsightKind, Skill};

use crate::app::AppContext;

fn render_activity(entries: &[ActivityEntry]) {
    for entry in entries {
        println!("  {}  {:>3}  {}", entry.date, entry.count, "#".repeat(entry.count as usize));
    }
}

fn render_skills(skills: &[Skill]) {
    for skill in skills {
        let filled = (skill.level as usize) / 5;
        println!(
            "  {:<16} [{:<20}] {:>3}%  ({})",
            skill.name,
            "=".repeat(filled),
            skill.level,
            skill.category
        );
    }
}

fn render_dashboard(view: &DashboardView) {
    println!("Total Activities: {}", view.stats.total_activities);
    println!("Current Streak:   {}", view.stats.current_streak);
    println!("Longest Streak:   {}", view.stats.longest_streak);
    println!("Consistency:      {}%", view.stats.consistency_rate);
    println!("Skills Learned:   {}", view.stats.skills_learned);

    println!("\nActivity");
    render_activity(&view.activity);

    println!("\nSkills");
    render_skills(&view.skills);

    println!("\nInsights");
    for insight in &view.insights {
        let tag = match insight.kind {
            InsightKind::Achievement => "achievement",
            InsightKind::Tip => "tip",
            InsightKind::Milestone => "milestone",
        };
        println!("  {} {} [{}]", insight.icon, insight.title, tag);
        println!("     {}", insight.description);
    }
}

fn render_profile(view: &ProfileView) {
    println!("@{} <{}>", view.user.username, view.user.email);
    println!("{}", view.user.bio);
    println!("Joined {}", view.user.join_date);

    println!("\nSkills");
    render_skills(&view.skills);

    println!("\nActivity");
    render_activity(&view.activity);
}

pub async fn show_dashboard(
    context: &AppContext,
    days: Option<usize>,
    json: bool,
) -> Result<()> {
    // One all-or-nothing load; a failure prints a single error and renders
    // nothing partial.
    let view = match days {
        Some(_) => {
            context
                .dashboard_usecase
                .load_dashboard_with_window(days)
                .await?
        }
        None => context.dashboard_usecase.load_dashboard().await?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render_dashboard(&view);
    }
    Ok(())
}

pub async fn show_profile(context: &AppContext, username: &str, json: bool) -> Result<()> {
    let view = context.dashboard_usecase.load_profile(username).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render_profile(&view);
    }
    Ok(())
}

pub async fn log_activity(
    context: &AppContext,
    date: Option<NaiveDate>,
    count: u32,
    note: Option<String>,
) -> Result<()> {
    let record = ActivityRecord {
        date: date.unwrap_or_else(|| chrono::Local::now().date_naive()),
        count,
        note,
    };

    let ack = context.dashboard_usecase.log_activity(&record).await?;
    if ack.success {
        println!("Logged {} activit{} on {}.", record.count, if record.count == 1 { "y" } else { "ies" }, record.date);
    } else {
        println!("Activity was not accepted.");
    }
    Ok(())
}
