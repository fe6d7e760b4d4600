//! Metadata card for the displayed video

use crate::api::VideoDetail;
use crate::gui::app::Message;
use iced::widget::{column, container, image, row, text};
use iced::{Element, Length};

const DESCRIPTION_PREVIEW_CHARS: usize = 100;

fn field(label: &str, value: impl ToString) -> Element<'static, Message> {
    row![
        text(format!("{}:", label)).size(14),
        text(value.to_string()).size(14),
    ]
    .spacing(6)
    .into()
}

/// Create the video metadata card
pub fn video_card(video: &VideoDetail, thumbnail: Option<&image::Handle>) -> Element<'static, Message> {
    use crate::gui::theme;

    let mut content = column![text(&video.title).size(26)].spacing(10);

    if let Some(preview) = video.description_preview(DESCRIPTION_PREVIEW_CHARS) {
        content = content.push(field("Description", preview));
    }
    if let Some(channel) = video.channel_title() {
        content = content.push(field("Channel Title", channel));
    }
    if let Some(published) = video.published_at {
        content = content.push(field("Published", published.format("%Y-%m-%d")));
    }

    if let Some(default) = video.preferred_thumbnail() {
        let mut thumb = column![text(format!("Thumbnail: {}x{}", default.width, default.height)).size(12)]
            .spacing(6);
        if let Some(handle) = thumbnail {
            let width = if default.width > 0 { default.width as f32 } else { 120.0 };
            thumb = thumb.push(image(handle.clone()).width(Length::Fixed(width)));
        }
        content = content.push(thumb);
    }

    if video.resource_kind().is_some() || video.external_video_id().is_some() {
        content = content.push(
            column![
                text("Resource ID").size(14).style(theme::ACCENT),
                field("Kind", video.resource_kind().unwrap_or("-")),
                field("Video ID", video.external_video_id().unwrap_or("-")),
            ]
            .spacing(4),
        );
    }

    container(content)
        .padding(20)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::CardContainer)))
        .into()
}
