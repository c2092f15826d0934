/// Input side of the widget: the drop target and the URL row
use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Background, Border, Element, Length, Theme};

use std::path::Path;

use crate::media::loader::file_name;
use crate::state::drop_zone::DropZone;
use crate::Message;

/// The drop target with its "Choose image" button, plus a note while a
/// chosen file is being read
pub fn view<'a>(drop_zone: &DropZone, reading: Option<&Path>) -> Element<'a, Message> {
    let highlighted = drop_zone.is_highlighted();

    let mut content = column![
        text("Drag & drop an image here").size(20),
        text("or").size(14),
        button("Choose image")
            .on_press(Message::PickFile)
            .padding(10),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    if let Some(path) = reading {
        content = content.push(text(format!("Reading {}…", file_name(path))).size(14));
    }

    container(content)
        .width(Length::Fill)
        .padding(40)
        .center_x(Length::Fill)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            let (border_color, background) = if highlighted {
                (palette.primary.strong.color, palette.background.weak.color)
            } else {
                (palette.background.strong.color, palette.background.base.color)
            };

            container::Style {
                background: Some(Background::Color(background)),
                border: Border {
                    color: border_color,
                    width: 2.0,
                    radius: 12.0.into(),
                },
                ..container::Style::default()
            }
        })
        .into()
}

/// Text input and button for analyzing a remote image
pub fn url_row(url_input: &str) -> Element<'_, Message> {
    row![
        text_input("https://example.com/photo.jpg", url_input)
            .on_input(Message::UrlChanged)
            .on_submit(Message::SubmitUrl)
            .padding(10),
        button("Analyze URL")
            .on_press(Message::SubmitUrl)
            .padding(10),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}
