use serde::{Deserialize, Serialize};

pub mod crossref;
pub mod orcid;
pub mod record;
pub mod works;

/// Sentinel written in place of an author list that could not be resolved.
pub const NO_DATA: &str = "No Data";

/// Strips the resolver prefix from a DOI value, leaving the bare identifier.
pub fn normalize_doi(value: &str) -> String {
    value.replace("https://", "").replace("doi.org/", "")
}

/// One publication attributed to a researcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    pub title: String,
    /// `YYYY-MM-DD HH:MM:SS`, zero-padded so string order is chronological.
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    pub authors: String,
}
