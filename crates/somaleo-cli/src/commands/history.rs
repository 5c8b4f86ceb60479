//! Cached transcript maintenance.

use anyhow::Result;
use colored::Colorize;
use somaleo_core::session::HistoryCache;
use somaleo_infrastructure::FileHistoryCache;

use super::{app_context, print_message};

pub async fn show() -> Result<()> {
    let ctx = app_context()?;
    let cache = FileHistoryCache::default_session(&ctx.paths)?;

    match cache.load().await? {
        Some(messages) => {
            for message in &messages {
                print_message(message);
            }
        }
        None => println!("{}", "No cached conversation yet.".bright_black()),
    }

    Ok(())
}

pub async fn clear() -> Result<()> {
    let ctx = app_context()?;
    let cache = FileHistoryCache::default_session(&ctx.paths)?;

    cache.clear().await?;
    println!("{}", "Conversation history cleared.".bright_green());

    Ok(())
}
