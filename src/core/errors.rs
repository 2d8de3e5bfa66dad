use thiserror::Error;

/// This is the error type for the card and deck string
/// grammars. It uses `thiserror` to provide readable error
/// messages. A parse failure is an expected outcome, not a
/// fault; nothing in this library panics on bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unable to parse rank from {0:?}")]
    UnexpectedRank(String),
    #[error("unable to parse suit from {0:?}")]
    UnexpectedSuit(String),
    #[error("card text too short to hold a rank and a suit")]
    TooFewChars,
}
