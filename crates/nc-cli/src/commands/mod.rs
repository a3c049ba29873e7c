//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod analyze;
pub mod bias;
pub mod lookup;
pub mod serve;
pub mod verify;

/// NewsCredible - News Credibility Toolkit
#[derive(Parser)]
#[command(name = "newscredible")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Analyze a news article URL
    Analyze(analyze::AnalyzeArgs),

    /// Check text for political or rhetorical bias
    Bias(bias::BiasArgs),

    /// Search published fact-checks for a claim
    Lookup(lookup::LookupArgs),

    /// Verify the authenticity of an image or video file
    Verify(verify::VerifyArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let project_dir = self
            .project
            .unwrap_or_else(|| std::env::current_dir().unwrap());

        match self.command {
            Commands::Serve(args) => serve::execute(args, &project_dir).await,
            Commands::Analyze(args) => analyze::execute(args, &project_dir).await,
            Commands::Bias(args) => bias::execute(args, &project_dir).await,
            Commands::Lookup(args) => lookup::execute(args, &project_dir).await,
            Commands::Verify(args) => verify::execute(args, &project_dir).await,
        }
    }
}
