use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

use crate::crossref::CrossrefClient;
use crate::orcid::OrcidClient;
use crate::{Work, NO_DATA};

pub mod extract;
mod output;
pub use output::{write_works, CSV_HEADER};

#[derive(Args)]
pub struct WorksArgs {
    /// Researcher's ORCID iD (NNNN-NNNN-NNNN-NNNN)
    #[arg(short = 'r', long, alias = "researcher_id")]
    pub researcher_id: String,

    /// Output CSV file
    #[arg(short, long)]
    pub out: PathBuf,

    /// ORCID public API base URL
    #[arg(long, default_value = "https://pub.orcid.org")]
    pub orcid_base_url: String,

    /// ORCID API version
    #[arg(long, default_value = "v3.0")]
    pub api_version: String,

    /// Crossref REST API base URL
    #[arg(long, default_value = "https://api.crossref.org")]
    pub crossref_base_url: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "30")]
    pub timeout: u64,
}

pub fn run(args: WorksArgs) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_async(args))
}

pub async fn run_async(args: WorksArgs) -> Result<()> {
    let orcid = OrcidClient::new(args.orcid_base_url, args.api_version, args.timeout);
    let crossref = CrossrefClient::new(args.crossref_base_url, args.timeout);

    let works = collect_works(&orcid, &crossref, &args.researcher_id).await?;
    info!("Collected {} works for {}", works.len(), args.researcher_id);

    let file = File::create(&args.out)
        .with_context(|| format!("Failed to create {}", args.out.display()))?;
    write_works(BufWriter::new(file), &works)?;

    info!("Output: {}", args.out.display());

    Ok(())
}

/// Fetches the works listing, builds one Work per group (one Crossref call
/// per DOI-bearing work), and sorts most recent first. A malformed group
/// aborts the whole collection; only absent doi/journal/authors degrade.
pub async fn collect_works(
    orcid: &OrcidClient,
    crossref: &CrossrefClient,
    researcher_id: &str,
) -> Result<Vec<Work>> {
    let body = orcid.works(researcher_id).await?;
    let groups = body
        .get("group")
        .and_then(Value::as_array)
        .context("works response has no group list")?;

    info!("Fetched {} work groups", groups.len());

    let pb = ProgressBar::new(groups.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let mut works = Vec::with_capacity(groups.len());
    for group in groups {
        let doi = extract::doi(group);
        let title = extract::title(group)?;
        let created_at = extract::created_at(group)?;
        let journal = extract::journal(group);

        let authors = match doi.as_deref() {
            Some(doi) => crossref
                .author_list(doi)
                .await?
                .unwrap_or_else(|| NO_DATA.to_string()),
            None => NO_DATA.to_string(),
        };

        works.push(Work {
            doi,
            title,
            created_at,
            journal,
            authors,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    // Zero-padded fixed-width timestamps, so string order is chronological
    works.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(works)
}
