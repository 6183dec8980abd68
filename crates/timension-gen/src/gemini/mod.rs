mod client;
mod wire;

pub use client::GeminiClient;
pub use wire::{
    Candidate, CandidateContent, GenerateContentResponse, InlineData, PromptFeedback, ResponsePart,
};
