use thiserror::Error;

use super::Card;

/// Errors from parsing a two character card token.
/// Uses `thiserror` to provide readable error messages.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardParseError {
    #[error("Unable to parse value character {0:?}")]
    UnexpectedValueChar(char),
    #[error("Unable to parse suit character {0:?}")]
    UnexpectedSuitChar(char),
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
}

/// Errors from building a hand or ranking one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandError {
    #[error(transparent)]
    Card(#[from] CardParseError),
    #[error("Card already added to hand {0}")]
    DuplicateCard(Card),
    #[error("Ranking a hand needs at least five cards, got {0}")]
    TooFewCards(usize),
}
