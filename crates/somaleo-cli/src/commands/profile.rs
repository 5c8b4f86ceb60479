//! Student profile display.

use anyhow::Result;
use colored::Colorize;
use somaleo_core::profile::load_profile;

use super::{app_context, tutor_client};

pub async fn show() -> Result<()> {
    let ctx = app_context()?;
    let client = tutor_client(&ctx).await?;

    let (profile, degraded) = load_profile(&client).await;
    if degraded {
        println!("{}", "Tutor service unreachable - showing default profile.".yellow());
    }

    println!("{}", profile.name.bold());
    println!("  {} - {}", profile.role, profile.class);
    println!("  {}", profile.email.bright_black());
    println!("  {}", profile.phone.bright_black());
    println!("  {}", profile.location.bright_black());
    println!("  Enrolled: {}", profile.enrollment_date);
    println!("  Favorite subjects: {}", profile.favorite_subjects.join(", "));
    println!("  {}", profile.bio);
    println!(
        "  Lessons: {}  Average score: {}  Streak: {}",
        profile.stats.completed_lessons, profile.stats.average_score, profile.stats.streak
    );

    Ok(())
}
