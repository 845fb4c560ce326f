//! Presentation rules shared by every newscheck front end.
//!
//! These are deliberately small and pure: the record itself is never
//! modified, all normalization happens on the way to the screen.

/// Maximum length of a history snippet, in characters.
pub const SNIPPET_LEN: usize = 140;

/// Fallback shown for records submitted without a headline.
pub const UNTITLED: &str = "Untitled";

/// Render a `[0, 1]` probability as a fixed-precision percentage.
///
/// Result panels use 2 decimals ("87.34%"), history rows use 1 ("87.3%").
/// The input is trusted to already be a fraction; out-of-range values are
/// scaled like any other.
pub fn probability_pct(probability: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, probability * 100.0)
}

/// Normalize an optional headline for display.
///
/// Absent, empty, or whitespace-only titles render as [`UNTITLED`]; anything
/// else is returned unchanged. The stored record keeps the original value.
pub fn display_title(title: Option<&str>) -> &str {
    match title {
        Some(t) if !t.trim().is_empty() => t,
        _ => UNTITLED,
    }
}

/// Truncate body text to a [`SNIPPET_LEN`]-character preview.
///
/// An ellipsis is appended only when the content is strictly longer than the
/// cap, so content of exactly 140 characters displays unmodified.
pub fn snippet(content: &str) -> String {
    let mut preview: String = content.chars().take(SNIPPET_LEN).collect();
    if content.chars().count() > SNIPPET_LEN {
        preview.push_str("...");
    }
    preview
}
