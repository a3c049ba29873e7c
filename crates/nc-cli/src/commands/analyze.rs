//! Article analysis command.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use nc_backend::{CredibilityBackend, HttpBackend};
use nc_core::article;
use nc_core::config::Config;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Article URL to analyze
    pub url: String,

    /// Print the raw JSON response instead of cards
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs, project_dir: &Path) -> Result<()> {
    let url = article::validate_url(&args.url)?;

    let config = Config::load(project_dir)?;
    let backend = HttpBackend::from_config(&config);

    let result = backend.analyze_article(url.as_str()).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_analysis(&result);
    }

    Ok(())
}
