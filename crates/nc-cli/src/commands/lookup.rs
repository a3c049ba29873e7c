//! Fact-check lookup command.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use nc_backend::{CredibilityBackend, HttpBackend};
use nc_core::config::Config;
use nc_core::factcheck;

use crate::output;

#[derive(Args)]
pub struct LookupArgs {
    /// Claim, link, or topic to search for
    pub query: String,

    /// Print the raw JSON response instead of cards
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: LookupArgs, project_dir: &Path) -> Result<()> {
    let query = factcheck::validate_query(&args.query)?;

    let config = Config::load(project_dir)?;
    let backend = HttpBackend::from_config(&config);

    let lookup = backend.lookup_fact_checks(query).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&lookup)?);
    } else {
        output::print_facts(&lookup.facts);
    }

    Ok(())
}
