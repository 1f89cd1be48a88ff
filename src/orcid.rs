use anyhow::{Context, Result};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Client for the ORCID public API.
///
/// The base URL is injected so tests can point it at a mock server. Responses
/// are parsed as JSON without inspecting the status code first: ORCID returns
/// a JSON error body for unknown identifiers, and that body surfaces as a
/// schema error downstream rather than a transport error here.
pub struct OrcidClient {
    client: Client,
    base_url: String,
    api_version: String,
}

impl OrcidClient {
    pub fn new(base_url: String, api_version: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url,
            api_version,
        }
    }

    /// Fetch the researcher's works listing (grouped work summaries).
    pub async fn works(&self, researcher_id: &str) -> Result<Value> {
        let url = format!(
            "{}/{}/{}/works",
            self.base_url, self.api_version, researcher_id
        );
        self.get_json(&url).await
    }

    /// Fetch the researcher's full public record.
    pub async fn record(&self, researcher_id: &str) -> Result<Value> {
        let url = format!(
            "{}/{}/{}/record",
            self.base_url, self.api_version, researcher_id
        );
        self.get_json(&url).await
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        response
            .json()
            .await
            .with_context(|| format!("Response from {} was not JSON", url))
    }
}
