//! Scrape command implementation.

use crate::catalog::{Book, CatalogClient, CatalogFetch, Parser};
use crate::chart;
use crate::clean::clean_books;
use crate::config::Config;
use crate::export;
use crate::format::Formatter;
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

/// Executes a full catalogue scrape.
pub struct ScrapeCommand {
    config: Config,
}

impl ScrapeCommand {
    /// Creates a new scrape command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the whole pipeline with the real HTTP client.
    pub async fn execute(&self) -> Result<()> {
        let client = CatalogClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client).await
    }

    /// Runs the pipeline with a provided client (for testing).
    ///
    /// Order: scrape, dump the raw records, clean, write the CSV, render
    /// the charts.
    pub async fn execute_with_client(&self, client: &impl CatalogFetch) -> Result<()> {
        let mut books = self.scrape_all(client).await?;

        // Full field dump of the records as scraped, before cleaning
        let formatter = Formatter::new(self.config.format);
        println!("{}", formatter.format_books(&books));

        clean_books(&mut books);

        export::write_csv(&books, &self.config.output)?;
        println!("Data saved to {}", self.config.output.display());

        if !self.config.no_charts {
            if books.is_empty() {
                println!("No records to chart.");
            } else {
                chart::render_charts(&books);
            }
        }

        Ok(())
    }

    /// Walks the catalogue page by page until it runs out.
    ///
    /// A fetch failure ends pagination without failing the run; a page
    /// with zero items ends it too. A parse failure propagates.
    pub async fn scrape_all(&self, client: &impl CatalogFetch) -> Result<Vec<Book>> {
        let parser = Parser::new();

        let mut all_books: Vec<Book> = Vec::new();
        let mut page: u32 = 1;

        loop {
            if let Some(cap) = self.config.max_pages {
                if page > cap {
                    debug!("Reached page cap of {}", cap);
                    break;
                }
            }

            println!("Scraping page {}...", page);

            let html = match client.fetch_page(page).await {
                Ok(html) => html,
                Err(e) => {
                    warn!("Fetch failed, ending pagination: {}", e);
                    break;
                }
            };

            let books = parser.parse_listing(&html, page)?;
            if books.is_empty() {
                debug!("No books on page {}, stopping", page);
                break;
            }

            all_books.extend(books);
            page += 1;
        }

        info!("Scraped {} books from {} page(s)", all_books.len(), page - 1);

        Ok(all_books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FetchError;
    use crate::config::OutputFormat;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    /// Mock catalogue client for testing.
    ///
    /// Serves canned pages in order; any page past the end fails with a
    /// 404, like the live site does.
    struct MockCatalogClient {
        pages: Vec<String>,
        call_count: Arc<AtomicU32>,
    }

    impl MockCatalogClient {
        fn new(pages: Vec<String>) -> Self {
            Self { pages, call_count: Arc::new(AtomicU32::new(0)) }
        }

        fn call_count(&self) -> u32 {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CatalogFetch for MockCatalogClient {
        async fn fetch_page(&self, page: u32) -> Result<String, FetchError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            let idx = (page - 1) as usize;
            if idx < self.pages.len() {
                Ok(self.pages[idx].clone())
            } else {
                Err(FetchError::Status {
                    url: format!("http://mock/catalogue/page-{}.html", page),
                    status: reqwest::StatusCode::NOT_FOUND,
                })
            }
        }
    }

    fn make_test_config() -> Config {
        Config {
            base_url: "https://books.toscrape.com/".to_string(),
            output: "books.csv".into(),
            max_pages: None,
            no_charts: true,
            timeout_secs: 30,
            format: OutputFormat::Table,
        }
    }

    fn make_listing_html(books: &[(&str, &str, &str)]) -> String {
        let mut html = String::from("<html><body>");
        for (title, price, rating) in books {
            html.push_str(&format!(
                r#"<article class="product_pod">
                    <p class="star-rating {}"></p>
                    <h3><a href="item.html" title="{}">{}</a></h3>
                    <p class="price_color">{}</p>
                    <p class="instock availability">In stock</p>
                </article>"#,
                rating, title, title, price
            ));
        }
        html.push_str("</body></html>");
        html
    }

    fn make_numbered_page(start: usize, count: usize) -> String {
        let titles: Vec<String> = (start..start + count).map(|i| format!("Book {}", i)).collect();
        let entries: Vec<(&str, &str, &str)> =
            titles.iter().map(|t| (t.as_str(), "£10.00", "Three")).collect();
        make_listing_html(&entries)
    }

    #[tokio::test]
    async fn test_scrape_all_stops_on_fetch_failure() {
        // 20 items, then 5 items, then the mock 404s
        let client =
            MockCatalogClient::new(vec![make_numbered_page(0, 20), make_numbered_page(20, 5)]);
        let config = make_test_config();
        let cmd = ScrapeCommand::new(config);

        let books = cmd.scrape_all(&client).await.unwrap();
        assert_eq!(books.len(), 25);
        assert_eq!(client.call_count(), 3);

        // Page order, item order within page
        assert_eq!(books[0].title, "Book 0");
        assert_eq!(books[19].title, "Book 19");
        assert_eq!(books[20].title, "Book 20");
        assert_eq!(books[24].title, "Book 24");
    }

    #[tokio::test]
    async fn test_scrape_all_stops_on_empty_page() {
        let client = MockCatalogClient::new(vec![
            make_numbered_page(0, 3),
            "<html><body></body></html>".to_string(),
            make_numbered_page(99, 1),
        ]);
        let config = make_test_config();
        let cmd = ScrapeCommand::new(config);

        let books = cmd.scrape_all(&client).await.unwrap();
        assert_eq!(books.len(), 3);
        // Page 3 is never requested once page 2 comes back empty
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_scrape_all_first_page_failure_yields_empty_run() {
        let client = MockCatalogClient::new(Vec::new());
        let config = make_test_config();
        let cmd = ScrapeCommand::new(config);

        let books = cmd.scrape_all(&client).await.unwrap();
        assert!(books.is_empty());
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_scrape_all_honors_page_cap() {
        let client = MockCatalogClient::new(vec![
            make_numbered_page(0, 2),
            make_numbered_page(2, 2),
            make_numbered_page(4, 2),
        ]);
        let mut config = make_test_config();
        config.max_pages = Some(2);
        let cmd = ScrapeCommand::new(config);

        let books = cmd.scrape_all(&client).await.unwrap();
        assert_eq!(books.len(), 4);
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_scrape_all_parse_failure_propagates() {
        // Missing price element on the only item
        let bad_page = r#"<html><body><article class="product_pod">
            <p class="star-rating One"></p>
            <h3><a href="x.html" title="Broken">Broken</a></h3>
            <p class="instock availability">In stock</p>
        </article></body></html>"#;

        let client = MockCatalogClient::new(vec![bad_page.to_string()]);
        let config = make_test_config();
        let cmd = ScrapeCommand::new(config);

        let result = cmd.scrape_all(&client).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_execute_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.csv");

        let client = MockCatalogClient::new(vec![make_listing_html(&[
            ("First Book", "Â£12.50", "Five"),
            ("Second Book", "£7.25", "Two"),
        ])]);
        let mut config = make_test_config();
        config.output = path.clone();
        let cmd = ScrapeCommand::new(config);

        cmd.execute_with_client(&client).await.unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        // Fields reach the file cleaned
        assert_eq!(&rows[0][0], "First Book");
        assert_eq!(&rows[0][1], "12.50");
        assert_eq!(&rows[1][1], "7.25");
    }

    #[tokio::test]
    async fn test_execute_empty_run_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.csv");

        let client = MockCatalogClient::new(Vec::new());
        let mut config = make_test_config();
        config.output = path.clone();
        let cmd = ScrapeCommand::new(config);

        cmd.execute_with_client(&client).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim_end(), "title,price,availability,rating");
    }

    #[tokio::test]
    async fn test_execute_unwritable_output_is_fatal() {
        let client = MockCatalogClient::new(vec![make_numbered_page(0, 1)]);
        let mut config = make_test_config();
        config.output = "/no/such/dir/books.csv".into();
        let cmd = ScrapeCommand::new(config);

        let result = cmd.execute_with_client(&client).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_execute_with_charts_enabled() {
        let dir = tempfile::tempdir().unwrap();

        let client = MockCatalogClient::new(vec![make_numbered_page(0, 4)]);
        let mut config = make_test_config();
        config.output = dir.path().join("books.csv");
        config.no_charts = false;
        let cmd = ScrapeCommand::new(config);

        // Chart rendering over a normal record set must not fail the run
        cmd.execute_with_client(&client).await.unwrap();
    }
}
