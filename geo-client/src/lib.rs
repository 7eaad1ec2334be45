//! # GEO Client
//!
//! A Rust client library for searching NCBI GEO (Gene Expression Omnibus)
//! dataset metadata through the E-utilities APIs.
//!
//! ## Features
//!
//! - **ESearch Integration**: Keyword search over GEO dataset records
//! - **ESummary Integration**: Multi-field summary metadata with
//!   single-vs-list field normalization
//! - **Async Support**: Built on tokio for async/await support
//! - **Error Handling**: Typed errors for transport, API, and parse failures
//!
//! ## Quick Start
//!
//! ### Searching for Datasets
//!
//! ```no_run
//! use geo_client::{BooleanOperator, DatasetQuery, GeoClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeoClient::new();
//!
//!     let records = DatasetQuery::new()
//!         .keyword("breast")
//!         .keyword("cancer")
//!         .operator(BooleanOperator::And)
//!         .max_results(10)
//!         .search_and_summarize(&client)
//!         .await?;
//!
//!     for record in records {
//!         println!(
//!             "{}: {}",
//!             record.id,
//!             record.display_value("title").unwrap_or_default()
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Working with Records
//!
//! Summary fields are discovered at parse time; a repeated field name (for
//! example several organism taxa) is stored as an ordered list:
//!
//! ```
//! use geo_client::GeoRecord;
//!
//! let mut record = GeoRecord::new("200012345");
//! record.insert_field("taxon", "Homo sapiens");
//! record.insert_field("taxon", "Mus musculus");
//!
//! assert_eq!(
//!     record.display_value("taxon").as_deref(),
//!     Some("Homo sapiens, Mus musculus")
//! );
//! ```

pub mod config;
pub mod error;
pub mod geo;

// Re-export main types for convenience
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{GeoError, Result};
pub use geo::{
    BooleanOperator, DatasetQuery, FieldValue, GeoClient, GeoRecord, DEFAULT_DB,
    DEFAULT_MAX_RESULTS,
};
