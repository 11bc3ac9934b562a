//! Slash command parsing for the chat application.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing users to control the chat session without sending messages
//! to the API.

/// A parsed chat command.
///
/// These commands control the chat session and are not sent to the API.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Clear the conversation history.
    Clear,

    /// Change the model.
    Model(String),

    /// Set or reset the system instruction.
    /// `None` restores the built-in hypertension instruction.
    System(Option<String>),

    /// Set the maximum tokens per response.
    MaxTokens(u32),

    /// Set the sampling temperature.
    Temperature(f32),

    /// Clear the sampling temperature (use model default).
    ClearTemperature,

    /// Re-send the last unanswered prompt.
    Retry,

    /// Re-render the conversation history.
    History,

    /// List the preset suggested prompts.
    Suggestions,

    /// Send the nth preset suggested prompt (1-based).
    Suggest(usize),

    /// Display help information.
    Help,

    /// Exit the chat application.
    Quit,

    /// Display session statistics (turn count, token totals, etc.).
    Stats,

    /// Show the current configuration.
    ShowConfig,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a valid command,
/// or `None` if it should be treated as a regular message.
///
/// # Examples
///
/// ```
/// # use tensio::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/model gemini-2.0-flash").is_some());
/// assert!(parse_command("What causes hypertension?").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "clear" | "reset" => ChatCommand::Clear,
        "model" => match argument {
            Some(model) => ChatCommand::Model(model.to_string()),
            None => ChatCommand::Invalid("/model requires a model name".to_string()),
        },
        "system" => ChatCommand::System(argument.map(|s| s.to_string())),
        "max_tokens" => match argument {
            Some(arg) => match arg.parse::<u32>() {
                Ok(value) if value > 0 => ChatCommand::MaxTokens(value),
                _ => ChatCommand::Invalid("/max_tokens expects a positive integer".to_string()),
            },
            None => ChatCommand::Invalid("/max_tokens requires a value".to_string()),
        },
        "temperature" => match argument {
            Some(arg) if arg.eq_ignore_ascii_case("clear") => ChatCommand::ClearTemperature,
            Some(arg) => match parse_f32_in_range(arg, 0.0, 2.0) {
                Ok(value) => ChatCommand::Temperature(value),
                Err(err) => ChatCommand::Invalid(format!("/temperature {err}")),
            },
            None => ChatCommand::Invalid("/temperature requires a value".to_string()),
        },
        "retry" => ChatCommand::Retry,
        "history" => ChatCommand::History,
        "suggest" => match argument {
            Some(arg) => match arg.parse::<usize>() {
                Ok(value) if value > 0 => ChatCommand::Suggest(value),
                _ => ChatCommand::Invalid(
                    "/suggest expects a suggestion number, e.g. /suggest 1".to_string(),
                ),
            },
            None => ChatCommand::Suggestions,
        },
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        "stats" | "status" => ChatCommand::Stats,
        "config" => ChatCommand::ShowConfig,
        _ => ChatCommand::Invalid(format!("Unknown command: /{command}")),
    };

    Some(result)
}

fn parse_f32_in_range(arg: &str, min: f32, max: f32) -> Result<f32, String> {
    match arg.parse::<f32>() {
        Ok(value) if (min..=max).contains(&value) => Ok(value),
        Ok(_) => Err(format!("expects a value between {min} and {max}")),
        Err(_) => Err("expects a number".to_string()),
    }
}

/// Returns the help text listing all commands.
pub fn help_text() -> &'static str {
    "Available commands:\n\
     /help               Show this help\n\
     /clear              Clear conversation history\n\
     /model <name>       Change the model\n\
     /system [prompt]    Set the system instruction (no argument restores the default)\n\
     /max_tokens <n>     Set max tokens per response\n\
     /temperature <t>    Set sampling temperature (or 'clear')\n\
     /retry              Re-send the last unanswered prompt\n\
     /history            Re-render the conversation so far\n\
     /suggest [n]        List suggested questions, or send the nth one\n\
     /stats              Show session statistics\n\
     /config             Show current configuration\n\
     /quit               Exit"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_messages_are_not_commands() {
        assert_eq!(parse_command("Hello"), None);
        assert_eq!(parse_command("What causes hypertension?"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse_command("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse_command("/reset"), Some(ChatCommand::Clear));
        assert_eq!(parse_command("/quit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/exit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/help"), Some(ChatCommand::Help));
        assert_eq!(parse_command("/?"), Some(ChatCommand::Help));
        assert_eq!(parse_command("/stats"), Some(ChatCommand::Stats));
        assert_eq!(parse_command("/config"), Some(ChatCommand::ShowConfig));
        assert_eq!(parse_command("/retry"), Some(ChatCommand::Retry));
        assert_eq!(parse_command("/history"), Some(ChatCommand::History));
    }

    #[test]
    fn model_command() {
        assert_eq!(
            parse_command("/model gemini-2.0-flash"),
            Some(ChatCommand::Model("gemini-2.0-flash".to_string()))
        );
        assert!(matches!(
            parse_command("/model"),
            Some(ChatCommand::Invalid(_))
        ));
    }

    #[test]
    fn system_command() {
        assert_eq!(
            parse_command("/system Be terse."),
            Some(ChatCommand::System(Some("Be terse.".to_string())))
        );
        assert_eq!(parse_command("/system"), Some(ChatCommand::System(None)));
    }

    #[test]
    fn max_tokens_command() {
        assert_eq!(
            parse_command("/max_tokens 2048"),
            Some(ChatCommand::MaxTokens(2048))
        );
        assert!(matches!(
            parse_command("/max_tokens zero"),
            Some(ChatCommand::Invalid(_))
        ));
        assert!(matches!(
            parse_command("/max_tokens 0"),
            Some(ChatCommand::Invalid(_))
        ));
    }

    #[test]
    fn temperature_command() {
        assert_eq!(
            parse_command("/temperature 0.7"),
            Some(ChatCommand::Temperature(0.7))
        );
        assert_eq!(
            parse_command("/temperature clear"),
            Some(ChatCommand::ClearTemperature)
        );
        assert!(matches!(
            parse_command("/temperature 9.5"),
            Some(ChatCommand::Invalid(_))
        ));
        assert!(matches!(
            parse_command("/temperature"),
            Some(ChatCommand::Invalid(_))
        ));
    }

    #[test]
    fn suggest_command() {
        assert_eq!(parse_command("/suggest"), Some(ChatCommand::Suggestions));
        assert_eq!(parse_command("/suggest 2"), Some(ChatCommand::Suggest(2)));
        assert!(matches!(
            parse_command("/suggest zero"),
            Some(ChatCommand::Invalid(_))
        ));
        assert!(matches!(
            parse_command("/suggest 0"),
            Some(ChatCommand::Invalid(_))
        ));
    }

    #[test]
    fn unknown_command_is_invalid() {
        assert!(matches!(
            parse_command("/frobnicate"),
            Some(ChatCommand::Invalid(_))
        ));
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(parse_command("/QUIT"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/Clear"), Some(ChatCommand::Clear));
    }
}
