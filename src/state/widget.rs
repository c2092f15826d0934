/// Upload widget state machine
///
/// Two phases: `Idle` and `Loading`. Starting a submission moves to
/// `Loading`; every completion, successful or not, moves back to `Idle` and
/// replaces the displayed verdict. Submissions are never queued or
/// deduplicated, so the last completion to arrive is what stays on screen.

use super::data::{Preview, PreviewPixels, PreviewState, SelectedImage, UiPhase};
use crate::analysis::Verdict;
use crate::media::preview::data_url;

/// Identifies one preview so late pixels for a replaced preview are dropped
pub type PreviewId = u64;

#[derive(Debug, Default)]
pub struct UploadWidget {
    phase: UiPhase,
    preview: Option<Preview>,
    preview_id: PreviewId,
    verdict: Option<Verdict>,
    url_input: String,
}

impl UploadWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> UiPhase {
        self.phase
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn set_url_input(&mut self, value: String) {
        self.url_input = value;
    }

    /// The loading region is shown exactly while a request is in flight
    pub fn loading_visible(&self) -> bool {
        self.phase() == UiPhase::Loading
    }

    /// The result region is shown when idle and there is something to show
    pub fn result_visible(&self) -> bool {
        self.phase() == UiPhase::Idle && self.verdict.is_some()
    }

    /// Preview an image and start its submission.
    ///
    /// For files the preview source becomes a data URL of the bytes; for
    /// URLs it is the URL itself. Returns the preview id and the image to
    /// submit.
    pub fn begin(&mut self, image: SelectedImage) -> (PreviewId, SelectedImage) {
        let source = match &image {
            SelectedImage::File { bytes, mime, .. } => data_url(mime, bytes),
            SelectedImage::Url(url) => url.clone(),
        };
        let id = self.show_preview(source);
        self.phase = UiPhase::Loading;
        (id, image)
    }

    /// Preview the typed URL and start its submission.
    ///
    /// An empty input does nothing. The preview source is the URL exactly
    /// as typed.
    pub fn begin_url(&mut self) -> Option<(PreviewId, SelectedImage)> {
        if self.url_input.is_empty() {
            return None;
        }

        Some(self.begin(SelectedImage::Url(self.url_input.clone())))
    }

    /// A request (or the work before it) completed
    pub fn finish(&mut self, verdict: Verdict) {
        self.phase = UiPhase::Idle;
        self.verdict = Some(verdict);
    }

    /// Attach decoded pixels if `id` is still the current preview.
    /// Returns whether they were applied.
    pub fn apply_pixels(&mut self, id: PreviewId, pixels: PreviewPixels) -> bool {
        self.set_preview_state(id, PreviewState::Ready(pixels))
    }

    /// Mark the preview as unavailable if `id` is still the current one.
    /// Returns whether it was marked.
    pub fn preview_failed(&mut self, id: PreviewId) -> bool {
        self.set_preview_state(id, PreviewState::Unavailable)
    }

    fn set_preview_state(&mut self, id: PreviewId, state: PreviewState) -> bool {
        match self.preview.as_mut() {
            Some(preview) if id == self.preview_id => {
                preview.state = state;
                true
            }
            _ => false,
        }
    }

    fn show_preview(&mut self, source: String) -> PreviewId {
        self.preview_id += 1;
        self.preview = Some(Preview::new(source));
        self.preview_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use bytes::Bytes;
    use iced::widget::image::Handle;

    fn jpeg_file() -> SelectedImage {
        SelectedImage::File {
            name: "beach.jpg".into(),
            bytes: Bytes::from_static(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]),
            mime: "image/jpeg".into(),
        }
    }

    fn pixels() -> PreviewPixels {
        PreviewPixels {
            width: 1,
            height: 1,
            handle: Handle::from_rgba(1, 1, vec![0u8, 0, 0, 255]),
        }
    }

    #[test]
    fn test_starts_idle_with_nothing_shown() {
        let widget = UploadWidget::new();
        assert_eq!(widget.phase(), UiPhase::Idle);
        assert!(!widget.loading_visible());
        assert!(!widget.result_visible());
        assert!(widget.preview().is_none());
    }

    #[test]
    fn test_file_preview_is_data_url_of_bytes() {
        let mut widget = UploadWidget::new();
        let (_, submitted) = widget.begin(jpeg_file());

        let source = &widget.preview().unwrap().source;
        let payload = source.strip_prefix("data:image/jpeg;base64,").unwrap();
        assert_eq!(
            STANDARD.decode(payload).unwrap(),
            vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]
        );
        assert_eq!(submitted, jpeg_file());
    }

    #[test]
    fn test_url_preview_is_url_verbatim() {
        let mut widget = UploadWidget::new();
        let url = "https://images.test/Some Photo.PNG?x=1&y=%20";
        widget.set_url_input(url.to_string());

        let (_, submitted) = widget.begin_url().unwrap();

        assert_eq!(widget.preview().unwrap().source, url);
        assert_eq!(submitted, SelectedImage::Url(url.to_string()));
    }

    #[test]
    fn test_empty_url_is_ignored() {
        let mut widget = UploadWidget::new();
        assert!(widget.begin_url().is_none());
        assert_eq!(widget.phase(), UiPhase::Idle);
        assert!(widget.preview().is_none());
    }

    #[test]
    fn test_loading_hides_result_until_success() {
        let mut widget = UploadWidget::new();
        widget.begin(jpeg_file());

        assert!(widget.loading_visible());
        assert!(!widget.result_visible());

        widget.finish(Verdict::Description("A sandy beach at noon.".into()));

        assert!(!widget.loading_visible());
        assert!(widget.result_visible());
        assert_eq!(
            widget.verdict().unwrap().message(),
            "✨ AI DESCRIPTION\n\nA sandy beach at noon."
        );
    }

    #[test]
    fn test_loading_hides_result_until_failure() {
        let mut widget = UploadWidget::new();
        widget.finish(Verdict::Blur(None));
        widget.set_url_input("https://images.test/a.png".into());
        widget.begin_url();

        // The earlier verdict stays hidden while the new request runs
        assert!(widget.loading_visible());
        assert!(!widget.result_visible());

        widget.finish(Verdict::failure());

        assert!(!widget.loading_visible());
        assert!(widget.result_visible());
        assert!(widget.verdict().unwrap().is_error());
    }

    #[test]
    fn test_last_completion_wins() {
        let mut widget = UploadWidget::new();
        widget.begin(jpeg_file());
        widget.set_url_input("https://images.test/a.png".into());
        widget.begin_url();

        widget.finish(Verdict::Description("second request".into()));
        assert!(widget.result_visible());
        widget.finish(Verdict::Blur(Some("first request".into())));

        assert_eq!(widget.verdict(), Some(&Verdict::Blur(Some("first request".into()))));
    }

    #[test]
    fn test_stale_pixels_are_dropped() {
        let mut widget = UploadWidget::new();
        let (first, _) = widget.begin(jpeg_file());
        widget.set_url_input("https://images.test/a.png".into());
        let (second, _) = widget.begin_url().unwrap();

        assert!(!widget.apply_pixels(first, pixels()));
        assert!(matches!(widget.preview().unwrap().state, PreviewState::Loading));

        assert!(widget.apply_pixels(second, pixels()));
        assert!(matches!(widget.preview().unwrap().state, PreviewState::Ready(_)));
    }

    #[test]
    fn test_failed_preview_is_unavailable() {
        let mut widget = UploadWidget::new();
        let (first, _) = widget.begin(jpeg_file());
        widget.set_url_input("https://unreachable.test/missing.png".into());
        let (second, _) = widget.begin_url().unwrap();

        // A late failure for the replaced preview changes nothing
        assert!(!widget.preview_failed(first));
        assert!(matches!(widget.preview().unwrap().state, PreviewState::Loading));

        assert!(widget.preview_failed(second));
        assert!(matches!(widget.preview().unwrap().state, PreviewState::Unavailable));

        // The verdict still arrives and is shown next to the unavailable preview
        widget.finish(Verdict::Error("Failed to fetch URL: 404 Not Found".into()));
        assert!(widget.result_visible());
        assert!(matches!(widget.preview().unwrap().state, PreviewState::Unavailable));
    }

    #[test]
    fn test_failed_preview_before_any_choice() {
        let mut widget = UploadWidget::new();
        assert!(!widget.preview_failed(0));
        assert!(widget.preview().is_none());
    }
}
