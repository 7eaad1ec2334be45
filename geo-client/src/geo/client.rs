use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{GeoError, Result};
use crate::geo::models::GeoRecord;
use crate::geo::parser::parse_docsums;
use crate::geo::responses::ESearchResult;

/// Client for searching GEO dataset metadata through NCBI E-utilities
#[derive(Clone)]
pub struct GeoClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl GeoClient {
    /// Create a new client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use geo_client::GeoClient;
    ///
    /// let client = GeoClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use geo_client::{ClientConfig, GeoClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_tool("my-pipeline")
    ///     .with_email("researcher@university.edu");
    ///
    /// let client = GeoClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.effective_user_agent())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            config,
        }
    }

    /// Create a new client around a custom HTTP client and default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use geo_client::GeoClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = GeoClient::with_client(http_client);
    /// ```
    pub fn with_client(client: Client) -> Self {
        let config = ClientConfig::new();
        let base_url = config.effective_base_url().to_string();

        Self {
            client,
            base_url,
            config,
        }
    }

    /// Search a database for records matching a term using the ESearch API
    ///
    /// # Arguments
    ///
    /// * `term` - Composed search term
    /// * `db` - Target E-utilities database (e.g. `"gds"`)
    /// * `retmax` - Maximum number of identifiers to return
    ///
    /// # Returns
    ///
    /// Returns a `Result<Vec<String>>` of matching record identifiers. A
    /// response without an identifier list yields an empty vector.
    ///
    /// # Errors
    ///
    /// * `GeoError::RequestError` - transport failure or timeout
    /// * `GeoError::ApiError` - non-success HTTP status, or an NCBI error
    ///   reported inside a 200 response
    /// * `GeoError::JsonError` - response body is not the expected JSON
    ///
    /// # Example
    ///
    /// ```no_run
    /// use geo_client::GeoClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = GeoClient::new();
    ///     let ids = client.search_datasets("breast AND cancer", "gds", 100).await?;
    ///     println!("Found {} datasets", ids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(term = %term, db = %db, retmax = retmax))]
    pub async fn search_datasets(
        &self,
        term: &str,
        db: &str,
        retmax: usize,
    ) -> Result<Vec<String>> {
        let url = format!(
            "{}/esearch.fcgi?db={}&term={}&retmax={}&retmode=json",
            self.base_url,
            db,
            urlencoding::encode(term),
            retmax
        );

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let json_text = response.text().await?;

        let search_result: ESearchResult = serde_json::from_str(&json_text)?;

        if let Some(error_msg) = &search_result.esearchresult.error {
            return Err(GeoError::ApiError {
                status: 200,
                message: format!("NCBI ESearch API error: {}", error_msg),
            });
        }

        let ids = search_result.esearchresult.idlist;

        let total_count: usize = search_result
            .esearchresult
            .count
            .as_deref()
            .and_then(|c| c.parse().ok())
            .unwrap_or(0);
        if total_count > ids.len() {
            warn!(
                total = total_count,
                returned = ids.len(),
                "More records match than the requested cap"
            );
        }

        info!(results_found = ids.len(), "ESearch completed");
        Ok(ids)
    }

    /// Fetch summary records for a list of identifiers using the ESummary API
    ///
    /// Returns an empty set without issuing a network call when `ids` is
    /// empty. Otherwise the identifiers are sent comma-joined in a single
    /// request and the resulting DocSums are parsed in document order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use geo_client::GeoClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = GeoClient::new();
    ///     let ids = vec!["200012345".to_string(), "200067890".to_string()];
    ///     let records = client.fetch_summaries(&ids, "gds").await?;
    ///     for record in &records {
    ///         println!("{}", record.id);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, ids), fields(ids_count = ids.len(), db = %db))]
    pub async fn fetch_summaries(&self, ids: &[String], db: &str) -> Result<Vec<GeoRecord>> {
        if ids.is_empty() {
            debug!("No identifiers provided, skipping ESummary request");
            return Ok(Vec::new());
        }

        let id_list = ids.join(",");
        let url = format!(
            "{}/esummary.fcgi?db={}&id={}",
            self.base_url, db, id_list
        );

        debug!("Making ESummary API request");
        let response = self.make_request(&url).await?;
        let xml_text = response.text().await?;

        let records = parse_docsums(&xml_text)?;
        info!(
            requested = ids.len(),
            parsed = records.len(),
            "ESummary completed"
        );
        Ok(records)
    }

    /// Search and fetch summary records in a single operation
    ///
    /// Sequential composition of [`search_datasets`](Self::search_datasets)
    /// and [`fetch_summaries`](Self::fetch_summaries); the empty-result
    /// short-circuit of the summary step applies.
    pub async fn search_and_summarize(
        &self,
        term: &str,
        db: &str,
        retmax: usize,
    ) -> Result<Vec<GeoRecord>> {
        let ids = self.search_datasets(term, db, retmax).await?;
        self.fetch_summaries(&ids, db).await
    }

    /// Issue a GET request with the configured identification parameters
    pub(crate) async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        debug!("Making API request to: {}", final_url);
        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(GeoError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}

impl Default for GeoClient {
    fn default() -> Self {
        Self::new()
    }
}
