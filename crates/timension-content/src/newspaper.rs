//! Daily front page of The Timension Chronicle.

use crate::types::{EditionCopy, NewspaperEdition};
use serde_json::Value;
use timension_gen::{parse_structured, AspectRatio, GenerativeService, ImageRequest, TextRequest};

/// Shown when the companion image cannot be generated.
pub const DEFAULT_FRONT_PAGE_IMAGE: &str = "/assets/chronicle-default.jpg";

const EDITION_PROMPT: &str = "You are the editor-in-chief of The Timension Chronicle, a newspaper \
printed on a different day in history every morning. Pick one notable day from any century, then \
write today's front page as if your presses stand in that moment. Report earnestly, in period \
voice, with no knowledge of anything after that day. Respond with a JSON object: \"headline\" \
(a front-page headline in capitals), \"date\" (the edition date, written out), \"content\" (the \
lead story, two short paragraphs), and \"weather\" (a one-line weather notice of the day).";

fn edition_schema() -> Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "headline": { "type": "STRING" },
            "date": { "type": "STRING" },
            "content": { "type": "STRING" },
            "weather": { "type": "STRING" },
        },
        "required": ["headline", "date", "content", "weather"],
    })
}

fn front_page_image_prompt(headline: &str) -> String {
    format!(
        "Front-page press photograph for a newspaper story headlined \"{headline}\". \
Grainy period plate, sepia toned, dramatic composition, no text or lettering."
    )
}

/// Generate today's edition: structured copy first, then a companion
/// image described by the generated headline. Image failure substitutes
/// the fixed default reference; only a failed copy step yields `None`.
pub async fn daily_edition(svc: &dyn GenerativeService) -> Option<NewspaperEdition> {
    let request = TextRequest::new(EDITION_PROMPT).with_schema(edition_schema());
    let raw = svc.generate_text(request).await?;
    let copy: EditionCopy = parse_structured(&raw)?;

    let image_request = ImageRequest::new(front_page_image_prompt(&copy.headline))
        .with_aspect_ratio(AspectRatio::Landscape);
    let image_url = match svc.generate_image(image_request).await {
        Some(image) => image.as_data_uri(),
        None => {
            tracing::debug!("front page image unavailable, using default");
            DEFAULT_FRONT_PAGE_IMAGE.to_string()
        }
    };

    Some(NewspaperEdition {
        headline: copy.headline,
        date: copy.date,
        content: copy.content,
        weather: copy.weather,
        image_url,
    })
}
