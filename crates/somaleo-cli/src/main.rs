use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "somaleo")]
#[command(about = "Somaleo CLI - AI tutor for Competency Based Education", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive tutoring chat
    Chat,
    /// Print the cached conversation
    History,
    /// Reset the conversation to the welcome message
    Clear,
    /// List available subjects
    Subjects,
    /// List available competencies
    Competencies,
    /// List recent chats
    Recent {
        /// Maximum number of chats to list
        #[arg(long, default_value_t = 4)]
        limit: usize,
    },
    /// Show the student profile
    Profile,
    /// Log in and store the session token
    Login {
        /// Account username
        username: String,
    },
    /// Log out and discard the session token
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat => commands::chat::run().await?,
        Commands::History => commands::history::show().await?,
        Commands::Clear => commands::history::clear().await?,
        Commands::Subjects => commands::catalog::subjects().await?,
        Commands::Competencies => commands::catalog::competencies().await?,
        Commands::Recent { limit } => commands::catalog::recent(limit).await?,
        Commands::Profile => commands::profile::show().await?,
        Commands::Login { username } => commands::auth::login(username).await?,
        Commands::Logout => commands::auth::logout().await?,
    }

    Ok(())
}
