//! Terminal charts over the cleaned record set.
//!
//! Renders the price histogram and the rating-frequency bar chart as
//! proportional bar rows on stdout.

use crate::catalog::models::Book;

/// Number of equal-width price buckets.
const PRICE_BINS: usize = 10;

/// Widest bar drawn, in glyphs.
const BAR_WIDTH: usize = 40;

/// Coerces a display price to its numeric value.
///
/// Strips the currency symbol and anything else non-numeric; returns
/// `None` when nothing numeric remains (e.g. "N/A").
pub fn price_value(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse().ok()
}

/// Builds the price histogram, or a notice when no numeric prices exist.
pub fn price_histogram(books: &[Book]) -> String {
    let prices: Vec<f64> = books.iter().filter_map(|b| price_value(&b.price)).collect();

    if prices.is_empty() {
        return "No numeric prices to chart.".to_string();
    }

    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let mut lines = Vec::new();
    lines.push("Price Distribution of Books".to_string());
    lines.push(String::new());

    if span == 0.0 {
        // Every price identical; one bucket holds them all
        lines.push(format!(
            "{:>7.2} - {:>7.2}  {}  {}",
            min,
            max,
            bar(prices.len(), prices.len()),
            prices.len()
        ));
        return lines.join("\n");
    }

    let width = span / PRICE_BINS as f64;
    let mut counts = vec![0usize; PRICE_BINS];
    for price in &prices {
        let mut idx = ((price - min) / width) as usize;
        // The maximum falls on the upper edge; keep it in the last bucket
        if idx >= PRICE_BINS {
            idx = PRICE_BINS - 1;
        }
        counts[idx] += 1;
    }

    let max_count = counts.iter().copied().max().unwrap_or(1);
    for (i, count) in counts.iter().enumerate() {
        let lo = min + width * i as f64;
        let hi = if i + 1 == PRICE_BINS { max } else { lo + width };
        lines.push(format!("{:>7.2} - {:>7.2}  {}  {}", lo, hi, bar(*count, max_count), count));
    }

    lines.join("\n")
}

/// Builds the rating-frequency bar chart, most frequent label first.
pub fn rating_chart(books: &[Book]) -> String {
    if books.is_empty() {
        return "No ratings to chart.".to_string();
    }

    // Tally in first-appearance order; the stable sort keeps that order
    // for labels tied on count
    let mut counts: Vec<(String, usize)> = Vec::new();
    for book in books {
        match counts.iter_mut().find(|(label, _)| *label == book.rating) {
            Some((_, n)) => *n += 1,
            None => counts.push((book.rating.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let max_count = counts.first().map(|(_, n)| *n).unwrap_or(1);
    let label_width = counts.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

    let mut lines = Vec::new();
    lines.push("Rating Distribution of Books".to_string());
    lines.push(String::new());
    for (label, count) in &counts {
        lines.push(format!("{:<label_width$}  {}  {}", label, bar(*count, max_count), count));
    }

    lines.join("\n")
}

/// Prints both charts, separated by a blank line.
pub fn render_charts(books: &[Book]) {
    println!("{}", price_histogram(books));
    println!();
    println!("{}", rating_chart(books));
}

fn bar(count: usize, max_count: usize) -> String {
    if count == 0 {
        return String::new();
    }
    let len = ((count * BAR_WIDTH) / max_count).max(1);
    "█".repeat(len)
}
