//! Domain types and presentation helpers for newscheck.
//!
//! This crate defines the [`PredictionRecord`] produced by the news
//! classification service, plus the formatting rules every front end shares
//! (probability percentages, title fallback, content snippets).
//!
//! # Example
//!
//! ```rust,ignore
//! use newscheck_core::{Label, PredictionRecord};
//! use newscheck_core::display::{display_title, probability_pct, snippet};
//!
//! let record: PredictionRecord = serde_json::from_str(body)?;
//! println!(
//!     "{} {} {}",
//!     display_title(record.title.as_deref()),
//!     record.label,
//!     probability_pct(record.probability, 2),
//! );
//! ```

pub mod display;
pub mod types;

// Re-export commonly used types
pub use types::{Label, PredictionRecord};
