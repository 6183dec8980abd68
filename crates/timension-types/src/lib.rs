pub mod catalog;
pub mod conversation;
pub mod figures;
pub mod outcome;

pub use catalog::{default_mentors, default_pivots};
pub use conversation::{ConversationTurn, Speaker};
pub use figures::{HistoricalFigure, PivotEvent};
pub use outcome::Outcome;
