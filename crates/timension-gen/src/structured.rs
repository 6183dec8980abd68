//! Shape enforcement for structured responses.
//!
//! The upstream service sometimes wraps JSON payloads in Markdown code
//! fences. These helpers are pure so the contract can be tested without
//! any network code.

use serde::de::DeserializeOwned;

/// Strip a surrounding Markdown code fence, if present.
///
/// Handles ```` ```json ```` and bare ```` ``` ```` fences; anything else
/// is returned trimmed but otherwise untouched.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// Decode a structured payload into `T`.
///
/// A payload that fails to parse or does not conform to `T` yields
/// `None`; partial results are never surfaced.
pub fn parse_structured<T: DeserializeOwned>(raw: &str) -> Option<T> {
    match serde_json::from_str(strip_code_fences(raw)) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(error = %e, "structured payload failed to decode");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Headline {
        title: String,
        year: i32,
    }

    #[test]
    fn test_plain_json_passes_through() {
        assert_eq!(strip_code_fences(r#"{"a": 1}"#), r#"{"a": 1}"#);
    }

    #[test]
    fn test_json_fence_stripped() {
        let raw = "```json\n{\"title\": \"Moon landing\", \"year\": 1969}\n```";
        assert_eq!(
            strip_code_fences(raw),
            "{\"title\": \"Moon landing\", \"year\": 1969}"
        );
    }

    #[test]
    fn test_bare_fence_stripped() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_parse_structured_fenced_payload() {
        let raw = "```json\n{\"title\": \"Moon landing\", \"year\": 1969}\n```";
        let parsed: Headline = parse_structured(raw).unwrap();
        assert_eq!(
            parsed,
            Headline {
                title: "Moon landing".to_string(),
                year: 1969
            }
        );
    }

    #[test]
    fn test_parse_structured_rejects_malformed() {
        let parsed: Option<Headline> = parse_structured("not json at all");
        assert_eq!(parsed, None);
    }

    #[test]
    fn test_parse_structured_rejects_nonconforming() {
        // Valid JSON, wrong shape: absent, never a partial value.
        let parsed: Option<Headline> = parse_structured(r#"{"title": "No year"}"#);
        assert_eq!(parsed, None);
    }
}
