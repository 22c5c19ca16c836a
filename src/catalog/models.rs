//! Data model for scraped book records.

use serde::{Deserialize, Serialize};

/// A single book as listed on a catalogue page.
///
/// All four fields are captured verbatim from the page markup; the
/// cleaning pass rewrites them in place afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title from the listing anchor's `title` attribute
    pub title: String,
    /// Display price as printed on the page (e.g. "£51.77")
    pub price: String,
    /// Stock message, whitespace-trimmed (e.g. "In stock")
    pub availability: String,
    /// Star-rating label, "One" through "Five"
    pub rating: String,
}

impl Book {
    /// Creates a new book record.
    pub fn new(
        title: impl Into<String>,
        price: impl Into<String>,
        availability: impl Into<String>,
        rating: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            availability: availability.into(),
            rating: rating.into(),
        }
    }
}
