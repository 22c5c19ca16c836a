//! Catalogue-specific modules for HTTP client, parsing, and data models.

pub mod client;
pub mod models;
pub mod parser;
pub mod selectors;

pub use client::{CatalogClient, CatalogFetch, FetchError};
pub use models::Book;
pub use parser::Parser;
