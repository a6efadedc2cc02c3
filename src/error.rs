use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("Invalid argument: {}", summarize(.0))]
    InvalidArgument(Vec<ValidationError>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl SchedError {
    /// Validation problems carried by an `InvalidArgument`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SchedError::InvalidArgument(errors) => errors,
            _ => &[],
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, SchedError>;
