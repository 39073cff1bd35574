use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid character {ch:?} in {context}")]
    InvalidCharacter { ch: char, context: &'static str },

    #[error("Empty key: {0}")]
    EmptyKey(&'static str),

    #[error("Empty input: {0}")]
    EmptyInput(&'static str),

    #[error("Invalid key square: {0}")]
    InvalidKeySquare(String),

    #[error("Invalid substitution key: {0}")]
    InvalidSubstitutionKey(String),

    #[error("Invalid digraph stream: {0}")]
    InvalidDigraphStream(String),

    #[error("Invalid shift: {0}. Must be between 0 and 26")]
    ShiftOutOfRange(i64),

    #[error("Unsupported option: {0}")]
    UnsupportedOption(String),
}

impl CipherError {
    /// True for every error caused by malformed text or keys, as opposed
    /// to I/O, serialization or command-line option failures.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            CipherError::InvalidCharacter { .. }
                | CipherError::EmptyKey(_)
                | CipherError::EmptyInput(_)
                | CipherError::InvalidKeySquare(_)
                | CipherError::InvalidSubstitutionKey(_)
                | CipherError::InvalidDigraphStream(_)
                | CipherError::ShiftOutOfRange(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
