//! Media verifier domain logic.

pub mod model;

pub use model::{MediaResult, MediaUpload, MediaVerdict};

use crate::error::{NcError, NcResult};

/// Notice shown when no file was submitted.
pub const MISSING_FILE_MESSAGE: &str = "Select an image or video to verify.";

/// Validate the uploaded file before dispatch.
///
/// The form's `accept` filter is advisory only, so the server checks
/// nothing beyond presence: a named, non-empty file part.
pub fn validate_upload(upload: &MediaUpload) -> NcResult<()> {
    if upload.file_name.is_empty() || upload.bytes.is_empty() {
        Err(NcError::validation(MISSING_FILE_MESSAGE))
    } else {
        Ok(())
    }
}
