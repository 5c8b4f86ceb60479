//! Catalog listings.

use anyhow::Result;
use colored::Colorize;
use somaleo_core::catalog::Catalog;
use somaleo_core::fallback;
use somaleo_core::session::TutorBackend;

use super::{app_context, tutor_client};

pub async fn subjects() -> Result<()> {
    let ctx = app_context()?;
    let client = tutor_client(&ctx).await?;
    let catalog = Catalog::load(&client).await;

    print_advisory(catalog.degraded);
    for subject in &catalog.subjects {
        println!("  {} ({})", subject.name, subject.code.bright_black());
    }

    Ok(())
}

pub async fn competencies() -> Result<()> {
    let ctx = app_context()?;
    let client = tutor_client(&ctx).await?;
    let catalog = Catalog::load(&client).await;

    print_advisory(catalog.degraded);
    for competency in &catalog.competencies {
        println!(
            "  {} - {}",
            competency.name,
            competency.description.bright_black()
        );
    }

    Ok(())
}

pub async fn recent(limit: usize) -> Result<()> {
    let ctx = app_context()?;
    let client = tutor_client(&ctx).await?;

    let chats = match client.fetch_recent_chats(limit).await {
        Ok(list) if !list.is_empty() => list,
        Ok(_) => {
            print_advisory(true);
            fallback::default_recent_chats()
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to fetch recent chats, using defaults");
            print_advisory(true);
            fallback::default_recent_chats()
        }
    };

    for chat in chats.iter().take(limit) {
        println!(
            "  {} [{}] {}",
            chat.title,
            chat.subject,
            chat.timestamp.bright_black()
        );
    }

    Ok(())
}

fn print_advisory(degraded: bool) {
    if degraded {
        println!("{}", "Tutor service unreachable - showing built-in data.".yellow());
    }
}
