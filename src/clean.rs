//! Field cleaning for scraped records.
//!
//! Listing pages are UTF-8 but show up mis-decoded as Latin-1 in places,
//! leaving artifacts like `Â£` in price strings. Cleaning keeps only 7-bit
//! ASCII, so legitimately non-ASCII title content is destroyed too. Known
//! defect; replace this module with a real UTF-8 pipeline to fix it.

use crate::catalog::models::Book;

/// Strips every character outside the 7-bit ASCII range.
fn strip_non_ascii(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii()).collect()
}

/// Rewrites all four fields of every record to their cleaned form.
///
/// The price field additionally drops the mis-decoded currency artifact
/// before the ASCII pass. Applying this twice is a no-op.
pub fn clean_books(books: &mut [Book]) {
    for book in books {
        book.title = strip_non_ascii(&book.title);
        book.price = strip_non_ascii(&book.price.replace('Â', ""));
        book.availability = strip_non_ascii(&book.availability);
        book.rating = strip_non_ascii(&book.rating);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_non_ascii() {
        assert_eq!(strip_non_ascii("£51.77"), "51.77");
        assert_eq!(strip_non_ascii("plain text"), "plain text");
        assert_eq!(strip_non_ascii(""), "");
    }

    #[test]
    fn test_clean_removes_currency_symbol() {
        let mut books = vec![Book::new("Sharp Objects", "£47.82", "In stock", "Four")];
        clean_books(&mut books);
        assert_eq!(books[0].price, "47.82");
    }

    #[test]
    fn test_clean_removes_misdecoded_artifact() {
        let mut books = vec![Book::new("Soumission", "Â£50.10", "In stock", "One")];
        clean_books(&mut books);
        assert_eq!(books[0].price, "50.10");
    }

    #[test]
    fn test_clean_destroys_non_ascii_titles() {
        let mut books = vec![Book::new("Café Déjà", "£1.00", "In stock", "Two")];
        clean_books(&mut books);
        assert_eq!(books[0].title, "Caf Dj");
    }

    #[test]
    fn test_clean_touches_every_field() {
        let mut books = vec![Book::new("Títle", "Â£9.99", "In stóck", "Fïve")];
        clean_books(&mut books);
        assert_eq!(books[0].title, "Ttle");
        assert_eq!(books[0].price, "9.99");
        assert_eq!(books[0].availability, "In stck");
        assert_eq!(books[0].rating, "Fve");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let mut once = vec![Book::new("Café", "Â£51.77", " In stock ", "Three")];
        clean_books(&mut once);
        let mut twice = once.clone();
        clean_books(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clean_empty_list() {
        let mut books: Vec<Book> = Vec::new();
        clean_books(&mut books);
        assert!(books.is_empty());
    }
}
