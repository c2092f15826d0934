/// Local file loader
///
/// Reads a dropped or picked file into memory. Nothing is validated here:
/// any file, of any type and size, is passed on for submission.

use bytes::Bytes;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::state::data::SelectedImage;

/// MIME type used when the extension says nothing
pub const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read `path` into a `SelectedImage::File`
pub async fn load_file(path: PathBuf) -> Result<SelectedImage, LoadError> {
    let bytes: Bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?
        .into();

    let name = file_name(&path);
    let mime = guess_mime(&path);

    info!(file = %name, size = bytes.len(), %mime, "loaded local image");

    Ok(SelectedImage::File { name, bytes, mime })
}

/// File name only, falling back to the full path for odd paths
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Guess a MIME type from the file extension
pub fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_MIME)
        .to_string()
}
