use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedbackError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Connection error: {0}")]
    Connection(String),
}

pub type Result<T> = std::result::Result<T, FeedbackError>;
