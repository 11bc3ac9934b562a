//! Interactive hypertension assistant for the terminal.
//!
//! This binary provides a REPL interface for asking a Gemini model
//! questions about high blood pressure.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with default settings
//! tensio-chat
//!
//! # Specify a model
//! tensio-chat --model gemini-2.0-flash
//!
//! # Override the system instruction
//! tensio-chat --system "You are a terse blood-pressure coach"
//!
//! # Disable colors (useful for piping output)
//! tensio-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/clear` - Clear conversation history
//! - `/model <name>` - Change the model
//! - `/suggest [n]` - List suggested questions, or send one
//! - `/retry` - Re-send the last unanswered prompt
//! - `/quit` - Exit the application

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use tensio::chat::{
    ChatArgs, ChatCommand, ChatConfig, ChatSession, DEFAULT_SYSTEM_PROMPT, PlainTextRenderer,
    Renderer, SUGGESTED_PROMPTS, help_text, parse_command,
};
use tensio::utils::time::display_rfc3339;
use tensio::{Error, Gemini, KnownModel, Model, Result, Turn, TurnRole};

const GREETING: &str = "Hi! I'm your Hypertension Assistant. I answer questions about high \
blood pressure. All information is AI-generated; always consult your doctor.";

const CONNECT_FAIL: &str =
    "I'm sorry, I cannot connect to the AI service right now. Please try again later \
     (or use /retry).";

const NO_ANSWER: &str =
    "I'm sorry, the AI could not produce a clear answer to that query. Please rephrase \
     your question or try a suggestion (/suggest).";

/// Main entry point for the tensio-chat application.
#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("tensio-chat [OPTIONS]");
    let config = ChatConfig::from(args);
    let use_color = config.use_color;

    let client = Gemini::with_options(None, None, Some(config.timeout))?;
    let mut session = ChatSession::new(client, config);
    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;

    // Flag for interrupt handling while a request is in flight
    let interrupted = Arc::new(AtomicBool::new(false));

    let interrupted_clone = interrupted.clone();
    ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::Relaxed);
    })?;

    println!("Hypertension Assistant (model: {})", session.model());
    println!("{GREETING}");
    println!("Type /help for commands, /quit to exit\n");
    print_suggestions();

    loop {
        // Reset interrupt flag before each input
        interrupted.store(false, Ordering::Relaxed);

        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye! Take care of your blood pressure.");
                            break;
                        }
                        ChatCommand::Clear => {
                            session.reset();
                            renderer.print_info("Conversation cleared.");
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Model(model_name) => {
                            let model = model_name
                                .parse::<KnownModel>()
                                .map(Model::Known)
                                .unwrap_or_else(|_| Model::Custom(model_name.clone()));
                            session.set_model(model);
                            renderer.print_info(&format!("Model changed to: {}", model_name));
                        }
                        ChatCommand::System(prompt) => match prompt {
                            Some(p) => {
                                session.set_system_prompt(p.clone());
                                renderer.print_info(&format!("System instruction set to: {}", p));
                            }
                            None => {
                                session.set_system_prompt(DEFAULT_SYSTEM_PROMPT);
                                renderer.print_info("System instruction restored to default.");
                            }
                        },
                        ChatCommand::MaxTokens(value) => {
                            session.set_max_output_tokens(value);
                            renderer.print_info(&format!("max_tokens set to {value}"));
                        }
                        ChatCommand::Temperature(value) => {
                            session.set_temperature(Some(value));
                            renderer.print_info(&format!("temperature set to {:.2}", value));
                        }
                        ChatCommand::ClearTemperature => {
                            session.set_temperature(None);
                            renderer.print_info("temperature reset to model default");
                        }
                        ChatCommand::Retry => {
                            let outcome = interruptible(session.retry(), &interrupted).await;
                            render_outcome(outcome, &mut renderer);
                        }
                        ChatCommand::History => {
                            print_history(&session);
                        }
                        ChatCommand::Suggestions => {
                            print_suggestions();
                        }
                        ChatCommand::Suggest(index) => {
                            match SUGGESTED_PROMPTS.get(index - 1) {
                                Some(prompt) => {
                                    println!("You asked: {prompt}");
                                    println!("Assistant:");
                                    let outcome =
                                        interruptible(session.ask(prompt), &interrupted).await;
                                    render_outcome(outcome, &mut renderer);
                                }
                                None => renderer.print_error(&format!(
                                    "No such suggestion; pick 1-{}",
                                    SUGGESTED_PROMPTS.len()
                                )),
                            }
                        }
                        ChatCommand::Stats => {
                            print_stats(&session);
                        }
                        ChatCommand::ShowConfig => {
                            print_config(&session);
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Regular message - send to the model
                println!("Assistant:");
                let outcome = interruptible(session.ask(line), &interrupted).await;
                render_outcome(outcome, &mut renderer);
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

/// Races a session future against the Ctrl+C flag.
///
/// Dropping the in-flight future cancels the request; the history is left
/// ending on the unanswered user turn, exactly like a transport failure.
async fn interruptible<F>(future: F, interrupted: &AtomicBool) -> Option<Result<Turn>>
where
    F: Future<Output = Result<Turn>>,
{
    tokio::select! {
        outcome = future => Some(outcome),
        _ = wait_for_flag(interrupted) => None,
    }
}

async fn wait_for_flag(flag: &AtomicBool) {
    while !flag.load(Ordering::Relaxed) {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

fn render_outcome(outcome: Option<Result<Turn>>, renderer: &mut PlainTextRenderer) {
    match outcome {
        Some(Ok(turn)) => renderer.print_reply(&turn.text),
        Some(Err(err)) => render_error(&err, renderer),
        None => renderer.print_interrupted(),
    }
}

fn render_error(err: &Error, renderer: &mut PlainTextRenderer) {
    renderer.print_error(&err.to_string());
    if err.is_validation() {
        // Nothing was sent; the message already says what to fix.
        return;
    }
    if err.is_empty_response() || matches!(err, Error::Serialization { .. }) {
        renderer.print_info(NO_ANSWER);
    } else {
        renderer.print_info(CONNECT_FAIL);
    }
}

fn print_suggestions() {
    println!("    Try asking:");
    for (index, prompt) in SUGGESTED_PROMPTS.iter().enumerate() {
        println!("      {}. {}", index + 1, prompt);
    }
    println!("    (send one with /suggest <n>)\n");
}

fn print_history(session: &ChatSession<Gemini>) {
    if session.history().is_empty() {
        println!("    (no conversation yet)");
        return;
    }
    for turn in session.history() {
        let speaker = match turn.role {
            TurnRole::User => "You",
            TurnRole::Assistant => "Assistant",
        };
        println!(
            "    [{}] {}: {}",
            display_rfc3339(&turn.timestamp),
            speaker,
            turn.text
        );
    }
}

fn print_stats(session: &ChatSession<Gemini>) {
    let stats = session.stats();
    println!("    Session Statistics:");
    println!("      Model: {}", stats.model);
    println!("      Turns: {}", stats.turn_count);
    println!("      Max tokens: {}", stats.max_output_tokens);
    println!("      Temperature: {}", describe_float(stats.temperature));
    println!(
        "      Total tokens: {} in / {} out ({} requests)",
        stats.total_prompt_tokens, stats.total_reply_tokens, stats.total_requests
    );
    if let Some(prompt_tokens) = stats.last_turn_prompt_tokens {
        let reply_tokens = stats.last_turn_reply_tokens.unwrap_or(0);
        println!("      Last turn tokens: {prompt_tokens} in / {reply_tokens} out");
    }
}

fn print_config(session: &ChatSession<Gemini>) {
    let stats = session.stats();
    println!("    Current Configuration:");
    println!("      Model: {}", stats.model);
    println!("      Max tokens: {}", stats.max_output_tokens);
    println!("      Temperature: {}", describe_float(stats.temperature));
    println!("      System instruction: {}", stats.system_prompt);
}

fn describe_float(value: Option<f32>) -> String {
    value
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "default".to_string())
}
