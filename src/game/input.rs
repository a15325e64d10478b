//! Parser for the typed command line.
//!
//! Accepts `a`-`d`, `quit`, and lifeline names, case-insensitively.

use super::lifeline::Lifeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Answer with option index 0..=3.
    Answer(usize),
    Lifeline(Lifeline),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("empty input")]
    Empty,
    #[error("unrecognised input: {0}")]
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(InputError::Empty);
        }

        let command = input.to_lowercase();
        match command.as_str() {
            "a" => Ok(Command::Answer(0)),
            "b" => Ok(Command::Answer(1)),
            "c" => Ok(Command::Answer(2)),
            "d" => Ok(Command::Answer(3)),
            "quit" => Ok(Command::Quit),
            "50-50" | "50" | "fifty" => Ok(Command::Lifeline(Lifeline::FiftyFifty)),
            "audience" | "poll" => Ok(Command::Lifeline(Lifeline::AudiencePoll)),
            "flip" => Ok(Command::Lifeline(Lifeline::Flip)),
            _ => Err(InputError::Unknown(input.to_string())),
        }
    }
}
