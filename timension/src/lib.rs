//! # Timension
//!
//! Orchestration layer for the Timension app: chat with AI-impersonated
//! historical figures, simulate alternate history from a chosen pivot
//! point, and fetch period imagery and trivia for a named location. All
//! intelligence is delegated to the Gemini API; this layer owns prompt
//! construction, response-shape enforcement, and graceful degradation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use timension::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Credential resolved from GEMINI_API_KEY, user-supplied otherwise
//!     let app = Timension::builder().build()?;
//!
//!     if !app.test_connectivity().await {
//!         eprintln!("generative service unreachable");
//!     }
//!
//!     if let Some(edition) = app.daily_edition().await {
//!         println!("{}", edition.headline);
//!     }
//!
//!     let mentor = HistoricalFigure::new("Ada Lovelace", "Victorian London, 1840s");
//!     let reply = app.mentor_reply(&mentor, &[], "Could machines compose music?").await;
//!     println!("{}", reply.value());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`timension-gen`**: Gemini client adapter, credential resolution,
//!   shape-enforced structured output
//! - **`timension-types`**: shared domain records and the
//!   generated-vs-fallback `Outcome` discriminant
//! - **`timension-content`**: content generators with their prompts,
//!   schemas, and fixed fallback values
//! - **`timension-feedback`**: suggestion-box client with a demonstration
//!   fallback dataset
//!
//! Every operation degrades to a value: failures surface as absent
//! results or fixed fallback content, never as errors crossing into the
//! UI layer.

pub mod builder;
pub mod prelude;

pub use builder::{Timension, TimensionBuilder};

pub use timension_gen::{
    AspectRatio, CredentialHost, CredentialStore, EncodedImage, GeminiClient, GenerativeService,
    ImageRequest, Shaping, TextRequest, CREDENTIAL_ENV_VAR,
};

pub use timension_types::{
    default_mentors, default_pivots, ConversationTurn, HistoricalFigure, Outcome, PivotEvent,
    Speaker,
};

pub use timension_content::{
    AlternateHistory, NewspaperEdition, TimelineStep, DEFAULT_FRONT_PAGE_IMAGE,
    NO_CREDENTIAL_REPLY, REQUEST_FAILED_REPLY, TIME_BANDS, TRIVIA_FALLBACK,
};

pub use timension_feedback::{sample_suggestions, FeedbackClient, FeedbackError, Suggestion};
