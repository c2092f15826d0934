/// Shared data structures for the widget state
///
/// Everything here is ephemeral: nothing is persisted and nothing has an
/// identity beyond the current window session.

use bytes::Bytes;
use iced::widget::image::Handle;

/// The image the user chose, as it will be submitted
#[derive(Debug, Clone, PartialEq)]
pub enum SelectedImage {
    /// A local file read into memory (dropped or picked)
    File {
        /// File name only (e.g., "IMG_0042.jpg")
        name: String,
        /// Shared between the upload and the preview decode without copying
        bytes: Bytes,
        /// Guessed from the file name
        mime: String,
    },
    /// A remote image, exactly as typed
    Url(String),
}

/// What the preview pane shows
#[derive(Debug, Clone)]
pub struct Preview {
    /// A `data:` URL for local files, or the URL itself for remote images
    pub source: String,
    pub state: PreviewState,
}

impl Preview {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            state: PreviewState::Loading,
        }
    }
}

/// Progress of the on-screen pixels for a preview
#[derive(Debug, Clone)]
pub enum PreviewState {
    /// Still decoding (or fetching, for URLs)
    Loading,
    Ready(PreviewPixels),
    /// Fetching or decoding failed; submission is unaffected
    Unavailable,
}

/// Downscaled RGBA pixels ready for the image widget
#[derive(Debug, Clone)]
pub struct PreviewPixels {
    pub width: u32,
    pub height: u32,
    pub handle: Handle,
}

/// The two UI phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiPhase {
    #[default]
    Idle,
    /// A request is in flight
    Loading,
}
