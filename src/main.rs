use iced::widget::{column, container, scrollable, text, Column};
use iced::{event, window, Alignment, Element, Event, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use tracing::{error, info, warn};

mod analysis;
mod config;
mod media;
mod state;
mod ui;

use analysis::{AnalysisClient, Verdict};
use config::Settings;
use state::data::{PreviewPixels, SelectedImage};
use state::drop_zone::DropZone;
use state::widget::{PreviewId, UploadWidget};

/// Extensions offered by the file picker's image filter
const IMAGE_EXTENSIONS: [&str; 9] = [
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "avif",
];

/// Main application state
struct BlurCheck {
    settings: Settings,
    /// Client for the analysis endpoint
    client: AnalysisClient,
    /// Preview, phase and displayed verdict
    widget: UploadWidget,
    /// Drag-and-drop highlight and first-file tracking
    drop_zone: DropZone,
    /// File currently being read into memory, if any
    reading: Option<PathBuf>,
}

/// How a local file was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOrigin {
    Dropped,
    Picked,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Files are being dragged over the window
    FileHovered,
    /// The drag left the window without dropping
    FilesHoveredLeft,
    /// A file was dropped on the window (one message per file)
    FileDropped(PathBuf),
    /// User clicked "Choose image"
    PickFile,
    /// A dropped or picked file was read into memory
    FileLoaded(FileOrigin, Result<SelectedImage, String>),
    /// URL text input changed
    UrlChanged(String),
    /// User clicked "Analyze URL" or pressed Enter
    SubmitUrl,
    /// Preview pixels are ready (or failed) for the given preview
    PreviewDecoded(PreviewId, Result<PreviewPixels, String>),
    /// The analysis request finished
    AnalysisComplete(Verdict),
}

impl BlurCheck {
    fn new() -> (Self, Task<Message>) {
        let app = Self::with_settings(Settings::load());
        info!(endpoint = app.client.endpoint(), "blur-check initialized");

        (app, Task::none())
    }

    fn with_settings(settings: Settings) -> Self {
        let client = AnalysisClient::new(settings.endpoint.clone());

        BlurCheck {
            settings,
            client,
            widget: UploadWidget::new(),
            drop_zone: DropZone::new(),
            reading: None,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FileHovered => {
                self.drop_zone.hovered();
                Task::none()
            }
            Message::FilesHoveredLeft => {
                self.drop_zone.left();
                Task::none()
            }
            Message::FileDropped(path) => match self.drop_zone.dropped(path) {
                Some(path) => self.load(path, FileOrigin::Dropped),
                None => Task::none(),
            },
            Message::PickFile => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select an Image to Analyze")
                    .add_filter("Images", &IMAGE_EXTENSIONS)
                    .add_filter("All files", &["*"])
                    .pick_file();

                match file {
                    Some(path) => self.load(path, FileOrigin::Picked),
                    None => Task::none(),
                }
            }
            Message::FileLoaded(origin, Ok(image)) => {
                self.file_read(origin);

                let (id, image) = self.widget.begin(image);
                let max_edge = self.settings.preview_max_edge;
                let preview = match &image {
                    SelectedImage::File { bytes, .. } => Task::perform(
                        media::preview::decode_preview(bytes.clone(), max_edge),
                        move |result| Message::PreviewDecoded(id, result),
                    ),
                    SelectedImage::Url(_) => Task::none(),
                };

                Task::batch([self.submit(image), preview])
            }
            Message::FileLoaded(origin, Err(err)) => {
                self.file_read(origin);
                error!(error = %err, "could not read the chosen file");
                self.widget.finish(Verdict::failure());
                Task::none()
            }
            Message::UrlChanged(value) => {
                self.widget.set_url_input(value);
                Task::none()
            }
            Message::SubmitUrl => {
                let url = self.widget.url_input().to_string();
                let Some((id, image)) = self.widget.begin_url() else {
                    return Task::none();
                };

                let preview = Task::perform(
                    load_remote_preview(self.client.clone(), url, self.settings.preview_max_edge),
                    move |result| Message::PreviewDecoded(id, result),
                );

                Task::batch([self.submit(image), preview])
            }
            Message::PreviewDecoded(id, Ok(pixels)) => {
                if !self.widget.apply_pixels(id, pixels) {
                    info!(preview = id, "discarding pixels for a replaced preview");
                }
                Task::none()
            }
            Message::PreviewDecoded(id, Err(err)) => {
                // The submission carries on regardless
                warn!(preview = id, error = %err, "preview unavailable");
                self.widget.preview_failed(id);
                Task::none()
            }
            Message::AnalysisComplete(verdict) => {
                if verdict.is_error() {
                    warn!(?verdict, "analysis complete with an error");
                } else {
                    info!(?verdict, "analysis complete");
                }
                self.widget.finish(verdict);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content: Column<Message> = column![
            text("Blur Check").size(40),
            text("Find out if a photo is blurred, or get a description of it.").size(16),
            ui::drop_area::view(&self.drop_zone, self.reading.as_deref()),
            ui::drop_area::url_row(self.widget.url_input()),
            ui::preview_pane::view(self.widget.preview()),
            ui::result_panel::view(&self.widget),
        ]
        .spacing(20)
        .padding(40)
        .max_width(720.0)
        .align_x(Alignment::Center);

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Read a local file in the background
    fn load(&mut self, path: PathBuf, origin: FileOrigin) -> Task<Message> {
        info!(path = %path.display(), ?origin, "image chosen");
        self.reading = Some(path.clone());

        Task::perform(
            async move { media::loader::load_file(path).await.map_err(|e| e.to_string()) },
            move |result| Message::FileLoaded(origin, result),
        )
    }

    /// A file read finished; only a dropped file ends the drop gesture
    fn file_read(&mut self, origin: FileOrigin) {
        self.reading = None;
        if origin == FileOrigin::Dropped {
            self.drop_zone.settle();
        }
    }

    /// Send one analysis request
    fn submit(&self, image: SelectedImage) -> Task<Message> {
        Task::perform(self.client.clone().submit(image), Message::AnalysisComplete)
    }
}

/// Fetch a remote image for display, the way an image element loads its source
async fn load_remote_preview(
    client: AnalysisClient,
    url: String,
    max_edge: u32,
) -> Result<PreviewPixels, String> {
    let bytes = client
        .fetch_bytes(&url)
        .await
        .map_err(|e| format!("Failed to fetch preview: {}", e))?;
    media::preview::decode_preview(bytes, max_edge).await
}

fn main() -> iced::Result {
    tracing_subscriber::fmt().with_env_filter("info").init();

    iced::application("Blur Check", BlurCheck::update, BlurCheck::view)
        .subscription(BlurCheck::subscription)
        .theme(BlurCheck::theme)
        .window_size((760.0, 900.0))
        .centered()
        .run_with(BlurCheck::new)
}
