//! Login/logout against the auth endpoints.

use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;
use somaleo_core::auth::LoginCredentials;
use somaleo_infrastructure::FileTokenStore;
use somaleo_interaction::AuthApiClient;
use std::sync::Arc;

use super::app_context;

pub async fn login(username: String) -> Result<()> {
    let ctx = app_context()?;
    let token_store = Arc::new(FileTokenStore::new(&ctx.paths)?);
    let client = AuthApiClient::new(&ctx.config.api, token_store)?;

    let mut rl = DefaultEditor::new()?;
    let password = rl.readline("password: ")?;

    let response = client
        .login(&LoginCredentials {
            username,
            password: password.trim().to_string(),
        })
        .await?;

    let message = response
        .message
        .unwrap_or_else(|| "Login successful".to_string());
    println!("{}", message.bright_green());

    Ok(())
}

pub async fn logout() -> Result<()> {
    let ctx = app_context()?;
    let token_store = Arc::new(FileTokenStore::new(&ctx.paths)?);
    let client = AuthApiClient::new(&ctx.config.api, token_store)?;

    client.logout().await?;
    println!("{}", "Logged out.".bright_green());

    Ok(())
}
