//! Previous / Next buttons

use crate::gui::app::Message;
use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length};

pub fn nav_controls(offset: u64, can_go_previous: bool, is_loading: bool) -> Element<'static, Message> {
    use crate::gui::theme;

    row![
        button(text("Previous").size(14))
            .on_press_maybe(can_go_previous.then_some(Message::PreviousPressed))
            .padding([10, 20])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
        Space::with_width(Length::Fill),
        text(if is_loading {
            format!("Offset {} (loading...)", offset)
        } else {
            format!("Offset {}", offset)
        })
        .size(12),
        Space::with_width(Length::Fill),
        button(text("Next").size(14))
            .on_press(Message::NextPressed)
            .padding([10, 20])
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
    ]
    .spacing(12)
    .align_items(Alignment::Center)
    .into()
}
