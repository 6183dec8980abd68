pub mod client;
pub mod error;
pub mod models;

pub use client::{FeedbackClient, SUGGESTION_LIMIT};
pub use error::FeedbackError;
pub use models::{sample_suggestions, Suggestion, SuggestionRecord};
