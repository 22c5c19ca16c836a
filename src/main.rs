//! bookstore-crawler - Paginated book catalogue scraper
//!
//! Walks the catalogue page by page, prints the scraped records, exports
//! them to CSV, and renders summary charts in the terminal.

use anyhow::Result;
use bookstore_crawler::commands::ScrapeCommand;
use bookstore_crawler::config::{Config, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bookstore-crawler",
    version,
    about = "Paginated book catalogue scraper with CSV export and terminal charts"
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Console listing format
    #[arg(short, long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the book catalogue, export CSV, and render charts
    #[command(alias = "s")]
    Scrape {
        /// Catalogue root URL
        #[arg(short, long, env = "BOOKS_BASE_URL")]
        base_url: Option<String>,

        /// CSV destination path
        #[arg(short, long, env = "BOOKS_OUTPUT")]
        output: Option<PathBuf>,

        /// Safety cap on pages fetched (default: unbounded)
        // BOOKS_MAX_PAGES goes through Config::with_env, which ignores
        // invalid values; a clap env binding would reject them instead
        #[arg(long)]
        max_pages: Option<u32>,

        /// Skip chart rendering
        #[arg(long)]
        no_charts: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    config.format = cli.format;

    match cli.command {
        Commands::Scrape { base_url, output, max_pages, no_charts } => {
            if let Some(base_url) = base_url {
                config.base_url = base_url;
            }
            if let Some(output) = output {
                config.output = output;
            }
            if let Some(pages) = max_pages {
                config.max_pages = Some(pages);
            }
            if no_charts {
                config.no_charts = true;
            }

            let cmd = ScrapeCommand::new(config);
            cmd.execute().await?;
        }
    }

    Ok(())
}
