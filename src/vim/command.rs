use thiserror::Error;

/// Commands typed after `:` in the application wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Back,
    /// 1-based step number
    Goto(usize),
    Submit,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Expected a step number, got {0:?}")]
    BadStep(String),
}

pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("").to_lowercase();
    let arg = parts.next().map(|s| s.trim().to_string());

    match cmd.as_str() {
        "next" | "n" => Ok(Command::Next),
        "back" | "prev" | "previous" | "b" => Ok(Command::Back),
        "goto" | "g" | "step" => {
            let arg = arg.unwrap_or_default();
            match arg.parse::<usize>() {
                Ok(n) if n > 0 => Ok(Command::Goto(n)),
                _ => Err(CommandError::BadStep(arg)),
            }
        }
        "submit" | "send" => Ok(Command::Submit),
        "help" | "h" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" | "cancel" => Ok(Command::Quit),
        "" => Err(CommandError::Unknown("empty command".to_string())),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
