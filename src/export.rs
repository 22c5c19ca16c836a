//! CSV export for scraped records.

use crate::catalog::models::Book;
use anyhow::{Context, Result};
use std::path::Path;

/// Column order of the output file.
const HEADER: [&str; 4] = ["title", "price", "availability", "rating"];

/// Writes all records to `path`, overwriting any existing file.
///
/// The header row is written even when `books` is empty. Any I/O failure
/// propagates; there is no partial-write recovery.
pub fn write_csv(books: &[Book], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;

    writer.write_record(HEADER).context("Failed to write CSV header")?;

    for book in books {
        writer
            .write_record([&book.title, &book.price, &book.availability, &book.rating])
            .with_context(|| format!("Failed to write record for '{}'", book.title))?;
    }

    writer.flush().context("Failed to flush CSV output")?;

    Ok(())
}
