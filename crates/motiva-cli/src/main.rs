use std::borrow::Cow::{self, Borrowed, Owned};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tokio::time::timeout;

use motiva_core::config::CoachConfig;
use motiva_core::engine::CoachEngine;
use motiva_core::lexicon::{Lexicon, default_lexicon};
use motiva_interaction::prompts::{WELCOME_MESSAGE, coach_prompts};
use motiva_interaction::{KeywordSentimentScorer, OpenAiClient};

/// Command-line options for the coach REPL.
#[derive(Parser)]
#[command(name = "motiva")]
#[command(about = "Motivational interviewing coach with conversation analytics")]
struct Cli {
    /// Completion model (overrides the config file).
    #[arg(long)]
    model: Option<String>,

    /// Path to a JSONL change-talk lexicon replacing the built-in one.
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Path to the config file (default: ~/.config/motiva/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seconds to wait for a coach reply before giving up.
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/save".to_string(),
                "/load".to_string(),
                "/list".to_string(),
                "/reset".to_string(),
                "/export".to_string(),
                "/summary".to_string(),
                "/stats".to_string(),
                "/help".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
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

impl Highlighter for CliHelper {
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

impl Hinter for CliHelper {
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

impl Validator for CliHelper {}

/// The main entry point for the Motiva coach REPL.
///
/// This async function sets up a rustyline-based REPL that:
/// 1. Loads the configuration, lexicon, and completion client
/// 2. Provides command completion for the slash commands
/// 3. Sends each plain message to the coach and prints the reply
/// 4. Displays colored output for user, coach, and analytics lines
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("motiva_core=warn".parse()?)
                .add_directive("motiva_interaction=warn".parse()?),
        )
        .init();

    let cli = Cli::parse();

    // ===== Engine Setup =====
    let config = match &cli.config {
        Some(path) => CoachConfig::load_at_or_default(path),
        None => CoachConfig::load_or_default(),
    };

    // Lexicon precedence: --lexicon flag, then config file, then the preset.
    let lexicon = match cli.lexicon.as_ref().or(config.lexicon_path.as_ref()) {
        Some(path) => Lexicon::load_or_empty(path),
        None => default_lexicon(),
    };

    let mut client =
        OpenAiClient::try_from_env().context("completion client setup failed (set OPENAI_API_KEY)")?;
    if let Some(model) = cli.model.as_ref().or(config.model.as_ref()) {
        client = client.with_model(model.clone());
    }
    if let Some(api_base) = &config.api_base {
        client = client.with_base_url(api_base.clone());
    }

    let mut prompts = coach_prompts();
    if let Some(system_prompt) = &config.system_prompt {
        prompts.system_prompt = system_prompt.clone();
    }

    let mut engine = CoachEngine::new(
        Arc::new(lexicon),
        Arc::new(client),
        Arc::new(KeywordSentimentScorer::new()),
        prompts,
    );

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Motiva Coach ===".bright_magenta().bold());
    println!("{}", WELCOME_MESSAGE.bright_blue());
    println!(
        "{}",
        "Type a message to talk, '/help' for commands, or 'quit' to exit.".bright_black()
    );
    println!();

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                // Handle quit command
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                // Skip empty lines
                if trimmed.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(&line);

                if let Some(command) = trimmed.strip_prefix('/') {
                    handle_command(command, &mut engine, cli.timeout_secs).await;
                    continue;
                }

                // Display user input in green
                println!("{}", format!("> {}", trimmed).green());

                // Wrap the coach call in a timeout
                match timeout(Duration::from_secs(cli.timeout_secs), engine.submit(trimmed)).await {
                    Ok(Ok(outcome)) => {
                        for reply_line in outcome.reply.lines() {
                            println!("{}", reply_line.bright_blue());
                        }
                        if let Some(score) = outcome.analytics.change_talk_score {
                            println!("{}", format!("[change talk: {score:.3}]").bright_black());
                        }
                    }
                    Ok(Err(err)) => {
                        eprintln!("{}", format!("Coach reply failed: {err}").red());
                    }
                    Err(_) => {
                        eprintln!("{}", "Error: Request timed out.".red());
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

/// Dispatches one slash command against the engine, printing the result.
async fn handle_command(command: &str, engine: &mut CoachEngine, timeout_secs: u64) {
    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or("");
    let argument = parts.next();

    match name {
        "save" => {
            let label = engine.save_snapshot().label();
            println!("{}", format!("Chat saved as {label}").green());
        }
        "list" => {
            if engine.snapshots().is_empty() {
                println!("{}", "No saved chats yet.".bright_black());
            } else {
                println!("{}", "Saved chats:".bright_magenta());
                for (index, snapshot) in engine.snapshots().iter().enumerate() {
                    println!(
                        "  [{index}] {} ({} messages)",
                        snapshot.label(),
                        snapshot.messages.len()
                    );
                }
            }
        }
        "load" => match argument.map(str::parse::<usize>) {
            Some(Ok(index)) => match engine.load_snapshot(index) {
                Ok(()) => println!("{}", format!("Loaded chat [{index}].").green()),
                Err(err) => eprintln!("{}", format!("{err}").red()),
            },
            _ => eprintln!("{}", "Usage: /load <index> (see /list)".yellow()),
        },
        "reset" => {
            engine.reset();
            println!("{}", "Started a fresh conversation.".green());
        }
        "export" => {
            let path = argument
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(export_filename()));
            match fs::write(&path, engine.export_transcript()) {
                Ok(()) => {
                    println!(
                        "{}",
                        format!("Transcript written to {}", path.display()).green()
                    );
                }
                Err(err) => eprintln!("{}", format!("Export failed: {err}").red()),
            }
        }
        "summary" => match timeout(Duration::from_secs(timeout_secs), engine.summarize()).await {
            Ok(Ok(summary)) => {
                println!("{}", "Summary:".bright_magenta());
                for line in summary.lines() {
                    println!("{}", line.bright_blue());
                }
            }
            Ok(Err(err)) => eprintln!("{}", format!("Summary failed: {err}").red()),
            Err(_) => eprintln!("{}", "Error: Request timed out.".red()),
        },
        "stats" => print_stats(engine),
        "help" => print_help(),
        other => eprintln!("{}", format!("Unknown command: /{other} (try /help)").yellow()),
    }
}

/// Prints the per-turn scores, sentiment average, and stage breakdown.
fn print_stats(engine: &CoachEngine) {
    let scores = engine.turn_scores();
    if scores.is_empty() {
        println!("{}", "No user turns yet.".bright_black());
        return;
    }

    println!(
        "{}",
        format!("User turns: {}", engine.user_message_count()).bright_magenta()
    );
    let rendered: Vec<String> = scores.iter().map(|score| format!("{score:.3}")).collect();
    println!(
        "{}",
        format!("Turn scores: [{}]", rendered.join(", ")).bright_magenta()
    );

    match engine.running_sentiment() {
        Some(sentiment) => println!(
            "{}",
            format!("Average sentiment: {sentiment:+.2}").bright_magenta()
        ),
        None => println!("{}", "Average sentiment: n/a".bright_black()),
    }

    let breakdown = engine.conversation_breakdown();
    if breakdown.has_evidence() {
        println!(
            "{}",
            format!("Change talk (whole conversation): {:.3}", breakdown.normalized).bright_magenta()
        );
        for (stage, percent) in &breakdown.percentages {
            println!("  {stage:>13}: {percent:.1}%");
        }
    } else {
        println!("{}", "No change-talk matches yet.".bright_black());
    }
}

fn print_help() {
    println!("{}", "Commands:".bright_magenta());
    println!("  /save            Save the current chat in memory");
    println!("  /list            List saved chats");
    println!("  /load <index>    Restore a saved chat");
    println!("  /reset           Start the conversation over");
    println!("  /export [path]   Write the transcript to a text file");
    println!("  /summary         Ask the coach to summarize the conversation");
    println!("  /stats           Show change-talk and sentiment analytics");
    println!("  /help            Show this help");
    println!("  quit             Exit");
}

/// Timestamped default export filename, e.g. `chat_export_20260823_093000.txt`.
fn export_filename() -> String {
    format!(
        "chat_export_{}.txt",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    )
}
