use anyhow::Result;
use clap::{Parser, Subcommand};
use orcid_works::{record, works};

#[derive(Parser)]
#[command(name = "orcid-works")]
#[command(about = "Collect a researcher's works from ORCID, resolve authors via Crossref, write CSV")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect a researcher's works, enrich authors via Crossref, write a CSV
    Works(works::WorksArgs),
    /// Fetch a researcher's full public record and print it as JSON
    Record(record::RecordArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    match cli.command {
        Commands::Works(args) => works::run(args),
        Commands::Record(args) => record::run(args),
    }
}
