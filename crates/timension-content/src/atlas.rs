//! Location atlas: vintage map, grounded trivia, and historical photos
//! for a named place.

use crate::facts::extract_facts;
use timension_gen::{AspectRatio, EncodedImage, GenerativeService, ImageRequest, TextRequest};
use timension_types::Outcome;

/// Single fallback sentence served when grounded trivia yields nothing
/// usable.
pub const TRIVIA_FALLBACK: &str = "The archives are quiet about this place for now, but every \
town keeps a secret or two worth returning for.";

fn map_prompt(location: &str) -> String {
    format!(
        "Hand-drawn vintage cartographic map of {location} as it looked a century ago. Aged \
parchment, ink hatching, ornate compass rose, decorative sea monsters where fitting."
    )
}

fn trivia_prompt(location: &str) -> String {
    format!(
        "List three surprising historical facts about {location}. One fact per line, each a \
single complete sentence. No introduction and no closing remarks."
    )
}

fn street_photo_prompt(location: &str) -> String {
    format!(
        "Archival black-and-white street photograph of daily life in {location} around the year \
1900. Horse carts, period dress, storefront signage, natural grain."
    )
}

fn landmark_photo_prompt(location: &str) -> String {
    format!(
        "Early photograph of the most famous landmark of {location}, taken on a glass plate \
camera. Slightly faded, vignetted edges."
    )
}

/// One image request; `None` on failure (the UI owns the empty state).
pub async fn vintage_map(svc: &dyn GenerativeService, location: &str) -> Option<EncodedImage> {
    let request = ImageRequest::new(map_prompt(location)).with_aspect_ratio(AspectRatio::Square);
    svc.generate_image(request).await
}

/// Grounded trivia for a location.
///
/// Grounding and schema constraints are mutually exclusive upstream, so
/// the reply is free text post-processed by [`extract_facts`].
pub async fn location_trivia(
    svc: &dyn GenerativeService,
    location: &str,
) -> Outcome<Vec<String>> {
    let request = TextRequest::new(trivia_prompt(location)).grounded();
    let Some(raw) = svc.generate_text(request).await else {
        return Outcome::Fallback(vec![TRIVIA_FALLBACK.to_string()]);
    };

    let facts = extract_facts(&raw);
    if facts.is_empty() {
        tracing::debug!(%location, "trivia reply had no usable lines");
        Outcome::Fallback(vec![TRIVIA_FALLBACK.to_string()])
    } else {
        Outcome::Generated(facts)
    }
}

/// Two photo requests launched together; each settles independently and
/// only the successes are kept. Both failing yields an empty collection,
/// never an error; the caller tells "still loading" from "no photos" by
/// its own loading flag.
pub async fn historical_photos(svc: &dyn GenerativeService, location: &str) -> Vec<EncodedImage> {
    let street = svc.generate_image(
        ImageRequest::new(street_photo_prompt(location)).with_aspect_ratio(AspectRatio::Classic),
    );
    let landmark = svc.generate_image(
        ImageRequest::new(landmark_photo_prompt(location)).with_aspect_ratio(AspectRatio::Classic),
    );

    let (street, landmark) = futures::join!(street, landmark);
    [street, landmark].into_iter().flatten().collect()
}
