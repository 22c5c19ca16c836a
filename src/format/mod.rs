//! Output formatting for the scraped book listing (table, JSON).

use crate::catalog::Book;
use crate::config::OutputFormat;

/// Formats book records for console output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats the full record list, one line per book in table mode.
    pub fn format_books(&self, books: &[Book]) -> String {
        if books.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Table => "No books found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_books(books),
            OutputFormat::Table => self.table_books(books),
        }
    }

    // JSON formatting

    fn json_books(&self, books: &[Book]) -> String {
        serde_json::to_string_pretty(books).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_books(&self, books: &[Book]) -> String {
        // Calculate column widths
        let title_width = 50;
        let price_width = 10;
        let avail_width = 20;
        let rating_width = 6;

        let mut lines = Vec::new();

        // Header
        lines.push(format!(
            "{:<title_width$}  {:>price_width$}  {:<avail_width$}  {}",
            "Title", "Price", "Availability", "Rating"
        ));
        lines.push(format!(
            "{:-<title_width$}  {:-<price_width$}  {:-<avail_width$}  {:-<rating_width$}",
            "", "", "", ""
        ));

        // Rows
        for book in books {
            let title = Self::truncate(&book.title, title_width);

            lines.push(format!(
                "{:<title_width$}  {:>price_width$}  {:<avail_width$}  {}",
                title, book.price, book.availability, book.rating
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} books", books.len()));

        lines.join("\n")
    }

    /// Truncates on a character boundary; raw titles may be non-ASCII.
    fn truncate(text: &str, width: usize) -> String {
        if text.chars().count() > width {
            let cut: String = text.chars().take(width - 3).collect();
            format!("{}...", cut)
        } else {
            text.to_string()
        }
    }
}
