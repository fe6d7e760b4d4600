//! Player control bar

use crate::gui::app::Message;
use iced::widget::{button, column, row, text, Space};
use iced::{Alignment, Element, Length};

/// Play/pause and fullscreen stay disabled until the player reports ready
pub fn player_controls(
    backend: &str,
    ready: bool,
    status: &str,
    has_link: bool,
) -> Element<'static, Message> {
    use crate::gui::theme;

    let buttons = row![
        button(text("Play / Pause").size(14))
            .on_press_maybe(ready.then_some(Message::TogglePlayPause))
            .padding([8, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
        button(text("Fullscreen").size(14))
            .on_press_maybe(ready.then_some(Message::ToggleFullscreen))
            .padding([8, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
        Space::with_width(Length::Fill),
        button(text("Copy link").size(14))
            .on_press_maybe(has_link.then_some(Message::CopyVideoLink))
            .padding([8, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    column![
        text("Watch Video").size(18),
        buttons,
        text(format!("Player: {} - {}", backend, status)).size(12),
        text("Shortcuts: space play/pause, f fullscreen").size(12),
    ]
    .spacing(8)
    .into()
}
