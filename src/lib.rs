//! bookstore-crawler - Paginated book catalogue scraper
//!
//! Walks a paginated book catalogue, extracts structured records, cleans
//! them, exports CSV, and renders summary charts in the terminal.

pub mod catalog;
pub mod chart;
pub mod clean;
pub mod commands;
pub mod config;
pub mod export;
pub mod format;

pub use catalog::models::Book;
pub use config::Config;
