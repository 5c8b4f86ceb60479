//! CLI subcommand implementations.

pub mod auth;
pub mod catalog;
pub mod chat;
pub mod history;
pub mod profile;

use anyhow::Result;
use colored::Colorize;
use somaleo_core::auth::TokenStore;
use somaleo_core::config::RootConfig;
use somaleo_core::session::{Sender, TutorMessage};
use somaleo_infrastructure::{ConfigService, FileTokenStore, SomaleoPaths};
use somaleo_interaction::TutorApiClient;
use std::sync::Arc;

/// Shared wiring every subcommand starts from.
pub(crate) struct AppContext {
    pub paths: SomaleoPaths,
    pub config: RootConfig,
}

pub(crate) fn app_context() -> Result<AppContext> {
    let paths = SomaleoPaths::default_location()?;
    let config = ConfigService::new(&paths).get_config();
    Ok(AppContext { paths, config })
}

/// Builds a tutor client, attaching the stored session token when present.
pub(crate) async fn tutor_client(ctx: &AppContext) -> Result<TutorApiClient> {
    let token_store = Arc::new(FileTokenStore::new(&ctx.paths)?);
    let mut client = TutorApiClient::new(&ctx.config.api)?;
    if let Ok(Some(token)) = token_store.load().await {
        client = client.with_token(token);
    }
    Ok(client)
}

/// Prints one transcript message, colored by sender.
pub(crate) fn print_message(message: &TutorMessage) {
    let clock = message.timestamp.format("%H:%M");
    match message.sender {
        Sender::User => {
            println!("{} {}", format!("[{clock}] you:").bright_black(), message.content.green());
        }
        Sender::Ai => {
            println!("{} {}", format!("[{clock}] tutor:").bright_black(), message.content.bright_blue());
        }
    }
}
