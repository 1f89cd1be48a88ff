use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;
use urlencoding::encode;

#[derive(Debug, Deserialize)]
struct CrossrefResponse {
    message: CrossrefWork,
}

#[derive(Debug, Deserialize)]
struct CrossrefWork {
    author: Option<Vec<CrossrefAuthor>>,
}

#[derive(Debug, Deserialize)]
struct CrossrefAuthor {
    given: Option<String>,
    family: Option<String>,
}

/// Client for the Crossref REST API, used to resolve author lists by DOI.
pub struct CrossrefClient {
    client: Client,
    base_url: String,
}

impl CrossrefClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }

    /// Returns Ok(Some(list)) when authors resolve, Ok(None) when the record
    /// cannot supply them, Err only on transport failure.
    pub async fn author_list(&self, doi: &str) -> Result<Option<String>> {
        let url = format!("{}/works/{}", self.base_url, encode(doi));

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Crossref returned {} for {}", status, doi);
            return Ok(None);
        }

        let record: CrossrefResponse = match response.json().await {
            Ok(record) => record,
            Err(e) => {
                warn!("Crossref body for {} was not a work record: {}", doi, e);
                return Ok(None);
            }
        };

        let authors = match record.message.author {
            Some(authors) => authors,
            None => return Ok(None),
        };

        let names: Vec<String> = authors.iter().filter_map(format_author).collect();
        if names.is_empty() {
            return Ok(None);
        }

        Ok(Some(names.join(", ")))
    }
}

/// "Given Family"; entries missing one part contribute the other alone.
fn format_author(author: &CrossrefAuthor) -> Option<String> {
    match (author.given.as_deref(), author.family.as_deref()) {
        (Some(given), Some(family)) => Some(format!("{} {}", given, family)),
        (Some(given), None) => Some(given.to_string()),
        (None, Some(family)) => Some(family.to_string()),
        (None, None) => None,
    }
}
