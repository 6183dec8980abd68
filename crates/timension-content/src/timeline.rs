//! Alternate-history simulation from a user-chosen pivot point.

use crate::types::{AlternateHistory, TimelineDraft, TimelineStep};
use serde_json::Value;
use timension_gen::{parse_structured, AspectRatio, GenerativeService, ImageRequest, TextRequest};
use timension_types::{Outcome, PivotEvent};

/// The three fixed time bands every simulation covers, in order.
pub const TIME_BANDS: [&str; 3] = ["Immediate aftermath", "A generation later", "The present day"];

const FALLBACK_HEADLINE: &str = "TEMPORAL LINK SEVERED — SIMULATION UNAVAILABLE";

fn timeline_schema() -> Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "steps": {
                "type": "ARRAY",
                "minItems": 3,
                "maxItems": 3,
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "period": { "type": "STRING", "enum": TIME_BANDS },
                        "text": { "type": "STRING" },
                    },
                    "required": ["period", "text"],
                },
            },
            "headline": { "type": "STRING" },
        },
        "required": ["steps", "headline"],
    })
}

fn simulation_prompt(pivot: &PivotEvent, hypothetical: &str) -> String {
    format!(
        "You are the simulation engine of the Timension device. A traveler has altered history.\n\
Event: {title} ({year}).\n\
What really happened: {reality}\n\
The traveler's change: {hypothetical}\n\n\
Trace the altered timeline in exactly three steps, one per period, in this order: \
\"{band_0}\", \"{band_1}\", \"{band_2}\". Each step is one vivid paragraph of consequences, \
plausible and specific. Finish with \"headline\": the front-page headline of a newspaper \
printed in the altered present day, in capitals.",
        title = pivot.title,
        year = pivot.year,
        reality = pivot.reality,
        hypothetical = hypothetical,
        band_0 = TIME_BANDS[0],
        band_1 = TIME_BANDS[1],
        band_2 = TIME_BANDS[2],
    )
}

fn concept_art_prompt(headline: &str, present_day: &str) -> String {
    format!(
        "Concept art of an alternate present day. Newspaper headline: \"{headline}\". \
Scene: {present_day}. Painterly, cinematic lighting, no text."
    )
}

/// Fixed fallback narrative; its content doubles as the connection
/// diagnostic shown to the user.
fn fallback_timeline() -> AlternateHistory {
    let texts = [
        "The Timension device hums, but the link to the alternate timeline cannot be established. \
The chronicle of the first days after the change remains unwritten.",
        "Decades of consequences stay hidden behind the severed connection. Check that the device \
holds a valid key and that the aether (your network) is reachable.",
        "The altered present cannot be observed. Re-run the simulation once the connection to the \
generative service is restored.",
    ];

    AlternateHistory {
        steps: TIME_BANDS
            .iter()
            .zip(texts)
            .map(|(period, text)| TimelineStep {
                period: period.to_string(),
                text: text.to_string(),
            })
            .collect(),
        headline: FALLBACK_HEADLINE.to_string(),
        image: None,
    }
}

/// Run the simulation. A structured payload without exactly three steps
/// or with an empty headline is nonconforming and falls back; a missing
/// concept-art image is omitted silently.
pub async fn simulate(
    svc: &dyn GenerativeService,
    pivot: &PivotEvent,
    hypothetical: &str,
) -> Outcome<AlternateHistory> {
    let request =
        TextRequest::new(simulation_prompt(pivot, hypothetical)).with_schema(timeline_schema());
    let Some(raw) = svc.generate_text(request).await else {
        return Outcome::Fallback(fallback_timeline());
    };

    let Some(draft) = parse_structured::<TimelineDraft>(&raw) else {
        return Outcome::Fallback(fallback_timeline());
    };
    if draft.steps.len() != TIME_BANDS.len() || draft.headline.trim().is_empty() {
        tracing::warn!(
            steps = draft.steps.len(),
            "simulation payload violated the timeline contract"
        );
        return Outcome::Fallback(fallback_timeline());
    }

    let image_request = ImageRequest::new(concept_art_prompt(
        &draft.headline,
        &draft.steps[TIME_BANDS.len() - 1].text,
    ))
    .with_aspect_ratio(AspectRatio::Landscape);
    let image = svc.generate_image(image_request).await;

    Outcome::Generated(AlternateHistory {
        steps: draft.steps,
        headline: draft.headline,
        image,
    })
}
