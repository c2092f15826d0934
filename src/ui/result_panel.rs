/// Loading and result regions
///
/// Exactly one of the two is on screen at a time (or neither, before the
/// first submission). The result region is bordered in the verdict's accent.
use iced::widget::{container, text, Column};
use iced::{Background, Border, Element, Length, Theme};

use crate::state::widget::UploadWidget;
use crate::Message;

pub fn view(widget: &UploadWidget) -> Element<'_, Message> {
    if widget.loading_visible() {
        return container(text("Analyzing image…").size(18))
            .center_x(Length::Fill)
            .padding(20)
            .into();
    }

    match widget.verdict() {
        Some(verdict) if widget.result_visible() => {
            let accent = verdict.accent();

            container(text(verdict.message()).size(16))
                .width(Length::Fill)
                .padding(20)
                .style(move |theme: &Theme| container::Style {
                    background: Some(Background::Color(
                        theme.extended_palette().background.weak.color,
                    )),
                    border: Border {
                        color: accent,
                        width: 3.0,
                        radius: 8.0.into(),
                    },
                    ..container::Style::default()
                })
                .into()
        }
        _ => Column::new().into(),
    }
}
