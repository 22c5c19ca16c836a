//! HTML parser for catalogue listing pages.

use crate::catalog::models::Book;
use crate::catalog::selectors::listing;
use anyhow::{Context, Result};
use scraper::{ElementRef, Html};
use tracing::{debug, trace};

/// Parser for catalogue HTML pages.
#[derive(Debug, Default)]
pub struct Parser;

impl Parser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a listing page into book records, in page order.
    ///
    /// Every catalogue item must yield all four fields; a missing
    /// sub-element aborts the whole parse rather than skipping the item.
    pub fn parse_listing(&self, html: &str, page: u32) -> Result<Vec<Book>> {
        let document = Html::parse_document(html);

        let mut books = Vec::new();
        for element in document.select(&listing::POD) {
            let book = self.parse_pod(element)?;
            trace!("Parsed book: {} - {}", book.title, book.price);
            books.push(book);
        }

        debug!("Extracted {} books from page {}", books.len(), page);

        Ok(books)
    }

    /// Parses a single catalogue item container.
    fn parse_pod(&self, element: ElementRef) -> Result<Book> {
        let title = element
            .select(&listing::TITLE_LINK)
            .next()
            .and_then(|a| a.value().attr(listing::TITLE_ATTR))
            .map(str::to_string)
            .context("Could not find title link in catalogue item")?;

        let price = element
            .select(&listing::PRICE)
            .next()
            .map(|e| e.text().collect::<String>())
            .with_context(|| format!("No price element for '{}'", title))?;

        let availability = element
            .select(&listing::AVAILABILITY)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string())
            .with_context(|| format!("No availability element for '{}'", title))?;

        // Rating label is the second class token, e.g. "star-rating Three"
        let rating = element
            .select(&listing::RATING)
            .next()
            .and_then(|e| e.value().attr("class"))
            .and_then(|class| class.split_whitespace().nth(1))
            .map(str::to_string)
            .with_context(|| format!("No star-rating label for '{}'", title))?;

        Ok(Book { title, price, availability, rating })
    }
}
