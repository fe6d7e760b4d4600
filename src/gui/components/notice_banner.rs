//! Inline banner for viewer notices

use crate::gui::app::Message;
use crate::viewer::{Notice, NoticeKind};
use iced::widget::{container, row, text};
use iced::{Alignment, Element, Length};

/// Render an info or error notice
pub fn notice_banner(notice: &Notice) -> Element<'static, Message> {
    use crate::gui::theme;

    let (label, color, style) = match notice.kind {
        NoticeKind::Info => ("Info: ", theme::INFO, theme::NoticeContainer::Info),
        NoticeKind::Error => ("Error: ", theme::DANGER, theme::NoticeContainer::Error),
    };

    container(
        row![
            text(label).size(14).style(color),
            text(&notice.text).size(14),
        ]
        .spacing(4)
        .align_items(Alignment::Center),
    )
    .padding([10, 14])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(style)))
    .into()
}
