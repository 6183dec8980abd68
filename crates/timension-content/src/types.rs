use serde::Deserialize;
use timension_gen::EncodedImage;

/// Copy block returned by the daily-edition structured request.
#[derive(Debug, Clone, Deserialize)]
pub struct EditionCopy {
    pub headline: String,
    pub date: String,
    pub content: String,
    pub weather: String,
}

/// A rendered front page: generated copy plus the image the UI shows.
///
/// `image_url` is either a `data:` URI from the image model or the fixed
/// default reference when image generation failed.
#[derive(Debug, Clone)]
pub struct NewspaperEdition {
    pub headline: String,
    pub date: String,
    pub content: String,
    pub weather: String,
    pub image_url: String,
}

/// One narrative step of an alternate-history simulation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimelineStep {
    /// Which fixed time band the step covers.
    pub period: String,
    pub text: String,
}

/// Structured payload returned by the simulation request, before the
/// concept-art image is attached.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineDraft {
    pub steps: Vec<TimelineStep>,
    pub headline: String,
}

/// A complete alternate-history simulation result.
#[derive(Debug, Clone)]
pub struct AlternateHistory {
    pub steps: Vec<TimelineStep>,
    pub headline: String,
    /// Concept art for the new present; omitted silently when image
    /// generation fails.
    pub image: Option<EncodedImage>,
}
