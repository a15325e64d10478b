use crate::models::{Question, NUM_OPTIONS};

const BUILTIN_DECK: &str = include_str!("questions.json");

/// Number of questions in a full deck, one per ladder rung.
pub const DECK_SIZE: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse question deck: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("deck must contain {expected} questions, found {found}")]
    WrongSize { expected: usize, found: usize },
    #[error("question {number} has correct_index {index}, expected 0..4")]
    BadAnswerIndex { number: usize, index: usize },
}

/// Load the deck compiled into the binary.
pub fn load_builtin_deck() -> Result<Vec<Question>, LoadError> {
    parse_deck(BUILTIN_DECK)
}

pub fn parse_deck(json: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;

    if questions.len() != DECK_SIZE {
        return Err(LoadError::WrongSize {
            expected: DECK_SIZE,
            found: questions.len(),
        });
    }

    if let Some((i, q)) = questions
        .iter()
        .enumerate()
        .find(|(_, q)| q.correct_index >= NUM_OPTIONS)
    {
        return Err(LoadError::BadAnswerIndex {
            number: i + 1,
            index: q.correct_index,
        });
    }

    Ok(questions)
}
