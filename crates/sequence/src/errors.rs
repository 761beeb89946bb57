use thiserror::Error;

/// Errors that can occur while building a sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SequenceError {
    pub fn zero_step() -> Self {
        SequenceError::InvalidArgument("range() step argument must not be zero".to_string())
    }
}
