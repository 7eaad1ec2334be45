use std::fmt;

use crate::error::Result;
use crate::geo::client::GeoClient;
use crate::geo::models::GeoRecord;

/// Default E-utilities database: the GEO DataSets collection
pub const DEFAULT_DB: &str = "gds";

/// Default cap on the number of search results
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Boolean operator used to combine search keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BooleanOperator {
    #[default]
    And,
    Or,
}

impl BooleanOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            BooleanOperator::And => "AND",
            BooleanOperator::Or => "OR",
        }
    }
}

impl fmt::Display for BooleanOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builder for GEO dataset search queries
///
/// Collects keywords, the operator that combines them, the target database
/// and the result cap. Immutable once handed to the client.
///
/// # Example
///
/// ```
/// use geo_client::{BooleanOperator, DatasetQuery};
///
/// let query = DatasetQuery::new()
///     .keyword("breast")
///     .keyword("cancer")
///     .operator(BooleanOperator::Or);
///
/// assert_eq!(query.build_term(), "breast OR cancer");
/// ```
#[derive(Debug, Clone)]
pub struct DatasetQuery {
    keywords: Vec<String>,
    operator: BooleanOperator,
    db: String,
    max_results: usize,
}

impl DatasetQuery {
    /// Create an empty query against the default database
    pub fn new() -> Self {
        Self {
            keywords: Vec::new(),
            operator: BooleanOperator::And,
            db: DEFAULT_DB.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Add a single keyword
    pub fn keyword<S: Into<String>>(mut self, keyword: S) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Add multiple keywords, preserving their order
    pub fn keywords<S: AsRef<str>>(mut self, keywords: &[S]) -> Self {
        for keyword in keywords {
            self.keywords.push(keyword.as_ref().to_string());
        }
        self
    }

    /// Set the boolean operator combining the keywords
    pub fn operator(mut self, operator: BooleanOperator) -> Self {
        self.operator = operator;
        self
    }

    /// Set the target E-utilities database
    pub fn db<S: Into<String>>(mut self, db: S) -> Self {
        self.db = db.into();
        self
    }

    /// Set the maximum number of results to request
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Build the search term, joining keywords with the operator
    ///
    /// Keywords are kept verbatim and joined with the operator as the
    /// literal separator: `["a", "b", "c"]` with OR becomes `"a OR b OR c"`.
    pub fn build_term(&self) -> String {
        self.keywords.join(&format!(" {} ", self.operator))
    }

    /// The target database for this query
    pub fn get_db(&self) -> &str {
        &self.db
    }

    /// The result cap for this query
    pub fn get_max_results(&self) -> usize {
        self.max_results
    }

    /// Execute the search, returning matching record identifiers
    pub async fn search(&self, client: &GeoClient) -> Result<Vec<String>> {
        client
            .search_datasets(&self.build_term(), &self.db, self.max_results)
            .await
    }

    /// Execute the search and fetch summary records for every match
    pub async fn search_and_summarize(&self, client: &GeoClient) -> Result<Vec<GeoRecord>> {
        client
            .search_and_summarize(&self.build_term(), &self.db, self.max_results)
            .await
    }
}

impl Default for DatasetQuery {
    fn default() -> Self {
        Self::new()
    }
}
