//! # quotelens - Quotes Intelligence Dashboard
//!
//! Explore a quotes/authors dataset from the terminal or over a local HTTP API.
//!
//! quotelens provides:
//! - A read-only two-table data source loaded from CSV
//! - Pure aggregations (tag counts, author rankings, tag histogram)
//! - A keyword-rule interpreter for canned "natural language" analytics requests
//! - Page models for Home, Quotes Explorer, Author Explorer and Analytics
//! - CSV and XLSX exports of the quotes table

pub mod record;
pub mod dataset;
pub mod analytics;
pub mod query;
pub mod views;
pub mod export;
pub mod server;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use record::{AuthorRecord, QuoteRecord};
pub use dataset::{DataPaths, Dataset, LoadError};
pub use analytics::{DashboardSummary, RankEntry, Ranking};
pub use query::{Intent, QueryInterpreter, QueryResult};
pub use export::ExportFormat;

/// Result type alias for quotelens operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for quotelens operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Author not found: {0}")]
    AuthorNotFound(String),

    #[error("Unknown export format: {0}")]
    InvalidFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
