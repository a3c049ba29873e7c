//! Media verification command.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use nc_backend::{CredibilityBackend, HttpBackend};
use nc_core::config::Config;
use nc_core::media::{self, MediaUpload};

use crate::output;

#[derive(Args)]
pub struct VerifyArgs {
    /// Image or video file to verify
    pub file: PathBuf,

    /// Print the raw JSON response instead of cards
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: VerifyArgs, project_dir: &Path) -> Result<()> {
    let bytes = std::fs::read(&args.file)?;
    let file_name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let upload = MediaUpload {
        content_type: content_type_for(&args.file).to_string(),
        file_name,
        bytes,
    };
    media::validate_upload(&upload)?;

    let config = Config::load(project_dir)?;
    let backend = HttpBackend::from_config(&config);

    let result = backend.verify_media(upload).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_media(&result);
    }

    Ok(())
}

/// Best-effort content type from the file extension; the backend does
/// its own sniffing.
fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        _ => "application/octet-stream",
    }
}
