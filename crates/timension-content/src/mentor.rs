//! Mentor dialogue: one reply from an AI-impersonated historical figure.

use timension_gen::{GenerativeService, TextRequest};
use timension_types::{ConversationTurn, HistoricalFigure, Outcome, Speaker};

/// Fixed reply when no credential resolves. Part of the observable
/// contract, not incidental copy.
pub const NO_CREDENTIAL_REPLY: &str = "Forgive me, traveler. My voice cannot cross the centuries \
until a key to the aether is provided. Enter one and we shall speak.";

/// Fixed reply when the request itself fails.
pub const REQUEST_FAILED_REPLY: &str = "The connection through time wavers and your words were \
lost on the way. Ask me once more in a moment.";

fn build_prompt(
    figure: &HistoricalFigure,
    history: &[ConversationTurn],
    user_text: &str,
) -> String {
    let mut transcript = String::new();
    for turn in history {
        let tag = match turn.speaker {
            Speaker::User => "Traveler",
            Speaker::Persona => figure.name.as_str(),
        };
        transcript.push_str(tag);
        transcript.push_str(": ");
        transcript.push_str(&turn.text);
        transcript.push('\n');
    }

    format!(
        "You are {name}, speaking from {era}. A traveler from the future has reached you \
through the Timension device.\n\
Rules:\n\
- Stay in character as {name} at all times; never break character or mention being an AI.\n\
- Speak with the vocabulary and worldview of your era; be curious about the traveler's.\n\
- Keep the reply under 120 words.\n\n\
Conversation so far:\n{transcript}Traveler: {user_text}\n{name}:",
        name = figure.name,
        era = figure.era,
        transcript = transcript,
        user_text = user_text,
    )
}

/// Produce the figure's next turn. The two fixed fallback strings are
/// distinguishable by the `Outcome` discriminant as well as by content.
pub async fn mentor_reply(
    svc: &dyn GenerativeService,
    figure: &HistoricalFigure,
    history: &[ConversationTurn],
    user_text: &str,
) -> Outcome<String> {
    if !svc.has_credential() {
        return Outcome::Fallback(NO_CREDENTIAL_REPLY.to_string());
    }

    let request = TextRequest::new(build_prompt(figure, history, user_text));
    match svc.generate_text(request).await {
        Some(reply) => Outcome::Generated(reply.trim().to_string()),
        None => Outcome::Fallback(REQUEST_FAILED_REPLY.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_transcript_and_persona() {
        let figure = HistoricalFigure::new("Ada Lovelace", "Victorian London, 1840s");
        let history = vec![
            ConversationTurn::user("What is a program?"),
            ConversationTurn::persona("A weaving of numbers, much like a loom weaves flowers."),
        ];

        let prompt = build_prompt(&figure, &history, "Could machines compose music?");

        assert!(prompt.contains("You are Ada Lovelace"));
        assert!(prompt.contains("Victorian London, 1840s"));
        assert!(prompt.contains("Traveler: What is a program?"));
        assert!(prompt.contains("Ada Lovelace: A weaving of numbers"));
        assert!(prompt.trim_end().ends_with("Ada Lovelace:"));
    }

    #[test]
    fn test_fallback_strings_differ() {
        assert_ne!(NO_CREDENTIAL_REPLY, REQUEST_FAILED_REPLY);
    }
}
