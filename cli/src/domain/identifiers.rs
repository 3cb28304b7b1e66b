//! Resource-name extraction and id derivation.
//!
//! Pure string handling for the identifiers threaded through the workflow:
//! the reasoning-engine resource name scraped from the deploy tool's output
//! and the data-store/engine ids derived from the display name.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a full Agent Engine resource name as printed by the deploy tool,
/// e.g. `projects/123456/locations/us-central1/reasoningEngines/987654`.
#[allow(clippy::expect_used)] // pattern is a compile-time constant
static REASONING_ENGINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"projects/[A-Za-z0-9-]+/locations/[a-z0-9-]+/reasoningEngines/[0-9]+")
        .expect("valid regex")
});

/// Scrape the first reasoning-engine resource name from captured tool output.
///
/// Returns `None` when the output contains no recognizable resource name,
/// in which case the caller falls back to the list endpoint.
#[must_use]
pub fn extract_reasoning_engine(transcript: &str) -> Option<String> {
    REASONING_ENGINE_RE
        .find(transcript)
        .map(|m| m.as_str().to_string())
}

/// Derive a resource id from a display name: lowercase, runs of
/// non-alphanumeric characters collapsed to single hyphens, trimmed.
///
/// `"Talk2API Assistant"` becomes `"talk2api-assistant"`. Discovery Engine
/// ids must start with a letter, so a leading digit gets an `a-` prefix.
#[must_use]
pub fn derive_resource_id(display_name: &str) -> String {
    let mut id = String::with_capacity(display_name.len());
    let mut last_hyphen = true; // suppress leading hyphen
    for c in display_name.chars() {
        if c.is_ascii_alphanumeric() {
            id.push(c.to_ascii_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            id.push('-');
            last_hyphen = true;
        }
    }
    while id.ends_with('-') {
        id.pop();
    }
    if id.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        id.insert_str(0, "a-");
    }
    if id.is_empty() {
        id.push_str("agent");
    }
    id
}

// ── Unit tests ───────────────────────────────────────────────────────────────
