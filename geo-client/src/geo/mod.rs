//! GEO dataset search client
//!
//! This module provides functionality to interact with the NCBI E-utilities
//! ESearch and ESummary endpoints for finding GEO dataset records and
//! retrieving their summary metadata.

pub mod client;
pub mod models;
pub mod parser;
pub mod query;
pub(crate) mod responses;

// Re-export public types
pub use client::GeoClient;
pub use models::{FieldValue, GeoRecord};
pub use parser::parse_docsums;
pub use query::{BooleanOperator, DatasetQuery, DEFAULT_DB, DEFAULT_MAX_RESULTS};
