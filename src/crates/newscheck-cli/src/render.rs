//! Text rendering for prediction results and history listings.
//!
//! The formatting rules themselves (percentages, title fallback, snippets)
//! live in `newscheck_core::display`; this module arranges them into the
//! lines the CLI prints.

use newscheck_client::HealthStatus;
use newscheck_core::display::{display_title, probability_pct, snippet};
use newscheck_history::HistoryEntry;

/// Render a freshly produced (or restored) result panel.
pub fn render_result(entry: &HistoryEntry) -> String {
    let record = &entry.record;
    let mut out = format!(
        "[{}] {}\nModel {} · {}",
        record.label,
        probability_pct(record.probability, 2),
        record.model_version,
        record.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
    );

    if !record.top_tokens.is_empty() {
        out.push_str("\nTop tokens: ");
        out.push_str(&record.top_tokens.join(", "));
    }

    out
}

/// Render one row of the history listing.
pub fn render_history_row(position: usize, entry: &HistoryEntry) -> String {
    let record = &entry.record;
    format!(
        "{:>2}. {}  [{}]\n    {}\n    {} · {}",
        position,
        display_title(Some(entry.title.as_str())),
        record.label,
        snippet(&entry.content),
        probability_pct(record.probability, 1),
        record.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

/// Render the full detail view of one entry.
pub fn render_detail(entry: &HistoryEntry) -> String {
    let record = &entry.record;
    let content = if entry.content.is_empty() {
        "N/A"
    } else {
        entry.content.as_str()
    };

    format!(
        "{}\n[{}] {}\n\n{}\n\nModel version: {}\nCreated at: {}",
        display_title(Some(entry.title.as_str())),
        record.label,
        probability_pct(record.probability, 2),
        content,
        record.model_version,
        record.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

/// Render the service health report.
pub fn render_health(health: &HealthStatus) -> String {
    format!(
        "Status: {}\nModel loaded: {}\nModel version: {}",
        health.status,
        if health.model_loaded { "yes" } else { "no" },
        health.model_version.as_deref().unwrap_or("N/A"),
    )
}
