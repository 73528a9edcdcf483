use thiserror::Error;

/// Why a candidate input was rejected before any generation work began.
///
/// One error kind, three distinguishable causes. Raised by the validators in
/// [`crate::letters`]; never produced mid-generation, and never accompanied
/// by partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// The text reference itself was absent.
    #[error("input must not be null")]
    Null,
    /// The sequence had zero symbols.
    #[error("input must not be empty")]
    Empty,
    /// A symbol is not classified as a letter.
    #[error("input must contain only letters, found {0:?}")]
    NonLetter(char),
}
