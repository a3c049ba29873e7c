//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use nc_backend::HttpBackend;
use nc_core::config::Config;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to .newscredible/serve.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, project_dir: &Path) -> Result<()> {
    let config = Config::load(project_dir)?;
    let backend = Arc::new(HttpBackend::from_config(&config));

    println!();
    println!("  {} {}", "NewsCredible".cyan().bold(), "Web Server".bold());
    println!();
    println!("  {}     http://{}:{}", "Home".green(), args.host, args.port);
    println!(
        "  {}    http://{}:{}/article-analyzer",
        "Tools".green(),
        args.host,
        args.port
    );
    println!("  {}  {}", "Backend".green(), config.backend_url);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    nc_web::run_server(backend, &args.host, args.port).await?;

    Ok(())
}
