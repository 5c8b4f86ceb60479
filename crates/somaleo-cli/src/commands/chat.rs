//! Interactive tutoring chat REPL.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use somaleo_core::catalog::Catalog;
use somaleo_core::session::{ChatSession, SendOutcome, TutorBackend};
use somaleo_infrastructure::FileHistoryCache;

use super::{app_context, print_message, tutor_client};

/// CLI helper for rustyline that provides completion, highlighting, and hints
/// for the slash commands.
#[derive(Clone)]
struct ChatHelper {
    commands: Vec<String>,
}

impl ChatHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/clear".to_string(),
                "/subject".to_string(),
                "/subjects".to_string(),
                "/competency".to_string(),
                "/competencies".to_string(),
                "/quit".to_string(),
            ],
        }
    }
}

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for ChatHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for ChatHelper {}

pub async fn run() -> Result<()> {
    let ctx = app_context()?;
    let backend: Arc<dyn TutorBackend> = Arc::new(tutor_client(&ctx).await?);
    let cache = Arc::new(FileHistoryCache::default_session(&ctx.paths)?);

    let catalog = Catalog::load(backend.as_ref()).await;
    let session = ChatSession::new(backend, cache);
    session.set_subject(catalog.initial_subject()).await;
    session.set_competency(catalog.initial_competency()).await;
    session.initialize().await;

    println!("{}", "=== Somaleo AI Tutor ===".bright_magenta().bold());
    println!(
        "{}",
        "Ask a question, or use /subject, /competency, /clear, /quit.".bright_black()
    );
    if catalog.degraded || session.is_degraded().await {
        println!(
            "{}",
            "Tutor service unreachable - using built-in subjects and sample history.".yellow()
        );
    }
    println!();

    for message in session.messages().await {
        print_message(&message);
    }
    println!();

    let helper = ChatHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    loop {
        let prompt = format!(
            "[{} | {}] > ",
            session.selected_subject().await,
            session.selected_competency().await
        );

        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                if let Some(command) = trimmed.strip_prefix('/') {
                    if handle_command(command, &session, &catalog).await {
                        break;
                    }
                    continue;
                }

                match session.send(trimmed).await {
                    SendOutcome::Replied(reply) => print_message(&reply),
                    SendOutcome::Busy => {
                        println!("{}", "Still waiting for the previous answer.".yellow());
                    }
                    SendOutcome::IgnoredEmpty => {}
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Input error: {err}").red());
                break;
            }
        }
    }

    Ok(())
}

/// Handles a slash command; returns true when the REPL should exit.
async fn handle_command(command: &str, session: &ChatSession, catalog: &Catalog) -> bool {
    let (name, argument) = match command.split_once(' ') {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name {
        "quit" | "exit" => {
            println!("{}", "Goodbye!".bright_green());
            return true;
        }
        "clear" => {
            session.clear().await;
            println!("{}", "Conversation cleared.".bright_green());
            for message in session.messages().await {
                print_message(&message);
            }
        }
        "subject" if !argument.is_empty() => {
            session.set_subject(argument).await;
            println!("{}", format!("Subject set to {argument}.").bright_green());
        }
        "competency" if !argument.is_empty() => {
            session.set_competency(argument).await;
            println!("{}", format!("Competency set to {argument}.").bright_green());
        }
        "subjects" => {
            for subject in &catalog.subjects {
                println!("  {} ({})", subject.name, subject.code.bright_black());
            }
        }
        "competencies" => {
            for competency in &catalog.competencies {
                println!("  {} - {}", competency.name, competency.description.bright_black());
            }
        }
        _ => {
            println!("{}", "Unknown command".bright_black());
        }
    }

    false
}
