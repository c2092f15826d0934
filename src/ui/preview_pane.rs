use iced::widget::{column, container, image, text, Column};
use iced::{Alignment, Element, Length};

use crate::state::data::{Preview, PreviewState};
use crate::Message;

/// Longest source string shown under the preview
const SOURCE_CAPTION_LEN: usize = 64;

/// Show the chosen image, or nothing before the first choice
pub fn view(preview: Option<&Preview>) -> Element<'_, Message> {
    let Some(preview) = preview else {
        return Column::new().into();
    };

    let picture: Element<'_, Message> = match &preview.state {
        PreviewState::Ready(pixels) => image(pixels.handle.clone())
            .width(Length::Fixed(pixels.width as f32))
            .height(Length::Fixed(pixels.height as f32))
            .into(),
        PreviewState::Loading => text("Loading preview…").size(14).into(),
        PreviewState::Unavailable => text("Preview unavailable").size(14).into(),
    };

    let content = column![picture, text(caption(&preview.source)).size(12)]
        .spacing(8)
        .align_x(Alignment::Center);

    container(content).center_x(Length::Fill).into()
}

/// Data URLs are huge; only show their head
fn caption(source: &str) -> String {
    if source.chars().count() <= SOURCE_CAPTION_LEN {
        source.to_string()
    } else {
        let head: String = source.chars().take(SOURCE_CAPTION_LEN).collect();
        format!("{}…", head)
    }
}
