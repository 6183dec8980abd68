//! Convenience re-exports for application code.

pub use crate::builder::{Timension, TimensionBuilder};

pub use timension_gen::{
    CredentialHost, CredentialStore, EncodedImage, GeminiClient, GenerativeService,
};
pub use timension_types::{
    default_mentors, default_pivots, ConversationTurn, HistoricalFigure, Outcome, PivotEvent,
};
pub use timension_content::{AlternateHistory, NewspaperEdition, TimelineStep};
pub use timension_feedback::{FeedbackClient, Suggestion};
