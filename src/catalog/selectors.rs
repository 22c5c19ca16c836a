//! CSS selectors for catalogue HTML parsing.
//!
//! This file contains all CSS selectors used for parsing catalogue pages.
//! Update this file when the site changes its HTML structure.
//!
//! **Update process**: When parsing fails, capture HTML sample,
//! update selectors, and add test fixture.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for catalogue listing pages.
pub mod listing {
    use super::*;

    /// Catalogue item container - one per book.
    pub static POD: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("article.product_pod").unwrap());

    /// Title anchor inside the item heading.
    pub static TITLE_LINK: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("h3 a").unwrap());

    /// Attribute on the title anchor holding the untruncated title.
    pub static TITLE_ATTR: &str = "title";

    /// Display price text.
    pub static PRICE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".price_color").unwrap());

    /// Stock availability text.
    pub static AVAILABILITY: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".availability").unwrap());

    /// Star-rating element; the rating label is its second class token
    /// (e.g. `class="star-rating Three"`).
    pub static RATING: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("p.star-rating").unwrap());
}
