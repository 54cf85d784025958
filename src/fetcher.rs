//! Fetcher module for the remote sales API
//!
//! This module issues the HTTP GET against the sales endpoint, optionally
//! parameterized by region and year, and parses the JSON array response
//! into typed [`SaleRecord`]s. There is no retry logic: a transport
//! failure or non-2xx status aborts the fetch, and a record with a
//! malformed purchase date fails the whole response (strict parsing at
//! every call site).
//!
//! # Examples
//!
//! ```no_run
//! use salestat::fetcher::SalesApi;
//! use salestat::types::Region;
//!
//! # async fn example() -> salestat::Result<()> {
//! let api = SalesApi::new("https://sales.example.com/products");
//!
//! // Everything the endpoint has
//! let all = api.fetch(None, None).await?;
//!
//! // Narrowed server-side
//! let south_2022 = api.fetch(Some(Region::Sul), Some(2022)).await?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::types::{Region, SaleRecord};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Client for the remote sales API
pub struct SalesApi {
    /// Endpoint URL returning the JSON array of sale records
    endpoint: String,
    /// HTTP client
    client: reqwest::Client,
    /// Whether to show a spinner while fetching
    show_progress: bool,
}

impl SalesApi {
    /// Create a new SalesApi for the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
            show_progress: false,
        }
    }

    /// Enable or disable the fetch spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// The configured endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch sale records, optionally narrowed by region and year
    ///
    /// Both query parameters are always sent; an empty value means "no
    /// filter" server-side, which is how [`Region::Brasil`] and an absent
    /// year are encoded.
    pub async fn fetch(&self, region: Option<Region>, year: Option<i32>) -> Result<Vec<SaleRecord>> {
        let regiao = region.map(|r| r.query_value().to_string()).unwrap_or_default();
        let ano = year.map(|y| y.to_string()).unwrap_or_default();
        let query = [("regiao", regiao.as_str()), ("ano", ano.as_str())];

        debug!("GET {} regiao='{}' ano='{}'", self.endpoint, regiao, ano);

        let progress = if self.show_progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg} [{elapsed_precise}]")
                    .unwrap(),
            );
            pb.set_message("Fetching sale records");
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let records = parse_records(&body);

        if let Some(pb) = progress {
            match &records {
                Ok(records) => pb.finish_with_message(format!("Fetched {} sale records", records.len())),
                Err(_) => pb.finish_with_message("Fetch failed"),
            }
        }

        records
    }
}

/// Parse a JSON array response body into sale records
///
/// Row order of the response is preserved. Any record missing a column or
/// carrying a malformed purchase date fails the whole parse.
pub fn parse_records(body: &str) -> Result<Vec<SaleRecord>> {
    Ok(serde_json::from_str(body)?)
}
