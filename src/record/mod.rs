use anyhow::Result;
use clap::Args;

use crate::orcid::OrcidClient;

#[derive(Args)]
pub struct RecordArgs {
    /// Researcher's ORCID iD (NNNN-NNNN-NNNN-NNNN)
    pub researcher_id: String,

    /// ORCID public API base URL
    #[arg(long, default_value = "https://pub.orcid.org")]
    pub orcid_base_url: String,

    /// ORCID API version
    #[arg(long, default_value = "v3.0")]
    pub api_version: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "30")]
    pub timeout: u64,
}

pub fn run(args: RecordArgs) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_async(args))
}

pub async fn run_async(args: RecordArgs) -> Result<()> {
    let orcid = OrcidClient::new(args.orcid_base_url, args.api_version, args.timeout);
    let record = orcid.record(&args.researcher_id).await?;

    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
