use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuestError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuestError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        QuestError::InvalidInput(message.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, QuestError::InvalidInput(_))
    }
}

pub type QuestResult<T> = Result<T, QuestError>;
