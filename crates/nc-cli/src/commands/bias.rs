//! Bias check command.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use nc_backend::{CredibilityBackend, HttpBackend};
use nc_core::bias;
use nc_core::config::Config;

use crate::output;

#[derive(Args)]
pub struct BiasArgs {
    /// Headline, excerpt, or article text to check
    pub text: String,

    /// Print the raw JSON response instead of cards
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: BiasArgs, project_dir: &Path) -> Result<()> {
    let text = bias::validate_text(&args.text)?;

    let config = Config::load(project_dir)?;
    let backend = HttpBackend::from_config(&config);

    let result = backend.check_bias(text).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_bias(&result);
    }

    Ok(())
}
