//! Post-processing for grounded trivia responses.
//!
//! Grounded requests cannot be schema-constrained, so the free-text reply
//! is cleaned up here: one fact per line, enumeration markers stripped,
//! fragments dropped. Pure functions, tested without any network code.

/// Maximum number of facts surfaced to the UI.
pub const MAX_FACTS: usize = 3;

/// Lines at or below this length (after marker stripping) are discarded
/// as fragments.
pub const MIN_FACT_LEN: usize = 10;

/// Extract up to [`MAX_FACTS`] usable facts from a free-text reply.
pub fn extract_facts(raw: &str) -> Vec<String> {
    raw.lines()
        .map(strip_list_marker)
        .filter(|line| line.len() > MIN_FACT_LEN)
        .take(MAX_FACTS)
        .map(str::to_string)
        .collect()
}

/// Strip a leading enumeration marker ("1. ", "12) ") or bullet ("- ",
/// "* ") from a line.
fn strip_list_marker(line: &str) -> &str {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return rest.trim_start();
    }

    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return rest.trim_start();
        }
    }

    line
}
