/// Preview generation for chosen images
/// Builds data URLs for local files and decodes downscaled pixels for display
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use iced::widget::image::Handle;

use crate::state::data::PreviewPixels;

/// Build a `data:` URL from a file's MIME type and bytes
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Decode image bytes into display pixels no larger than `max_edge`
///
/// Runs on the blocking pool since decoding large photos is CPU-bound.
pub async fn decode_preview(bytes: Bytes, max_edge: u32) -> Result<PreviewPixels, String> {
    tokio::task::spawn_blocking(move || decode_preview_blocking(&bytes, max_edge))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

/// Blocking version of preview decoding
fn decode_preview_blocking(bytes: &[u8], max_edge: u32) -> Result<PreviewPixels, String> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| format!("Failed to decode image: {}", e))?;

    // Only ever shrink
    let img = if img.width() > max_edge || img.height() > max_edge {
        img.thumbnail(max_edge, max_edge)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(PreviewPixels {
        width,
        height,
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
    })
}
