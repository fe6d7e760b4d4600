//! Clickable catalog list

use crate::gui::app::Message;
use crate::viewer::CatalogList;
use iced::widget::{button, column, scrollable, text};
use iced::{Element, Length};

/// Titles in server order; a click emits `CatalogItemPressed(id)`
pub fn video_list(list: &CatalogList) -> Element<'static, Message> {
    use crate::gui::theme;

    let mut content = column![text("Videos").size(22)].spacing(6);

    if let Some(error) = list.error() {
        content = content.push(text(format!("Error: {}", error)).size(14).style(theme::DANGER));
    } else if list.is_loading() {
        content = content.push(text("Loading catalog...").size(14));
    }

    let items = list.videos().iter().fold(column![].spacing(2), |col, video| {
        col.push(
            button(text(&video.title).size(14))
                .on_press(Message::CatalogItemPressed(video.id))
                .width(Length::Fill)
                .padding([6, 8])
                .style(iced::theme::Button::Custom(Box::new(theme::LinkButton))),
        )
    });

    content
        .push(
            scrollable(items)
                .height(Length::Fill)
                .style(iced::theme::Scrollable::Custom(Box::new(theme::ScrollableStyle))),
        )
        .height(Length::Fill)
        .into()
}
