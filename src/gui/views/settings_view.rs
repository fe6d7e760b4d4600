//! Settings view implementation

use crate::gui::app::Message;
use crate::utils::PlayerChoice;
use iced::widget::{button, column, container, pick_list, row, slider, text, text_input, Space};
use iced::{Alignment, Element, Length};

/// Create the settings view
pub fn settings_view(
    api_domain: &str,
    player: PlayerChoice,
    notice_seconds: u8,
    error: Option<&str>,
) -> Element<'static, Message> {
    use crate::gui::theme;

    let mut content = column![
        text("Settings").size(28),
        // Catalog API
        column![
            text("Catalog API").size(14),
            text_input("http://localhost:8080", api_domain)
                .on_input(Message::ApiDomainChanged)
                .on_submit(Message::ApplySettings)
                .padding(10)
                .width(Length::Fill),
        ]
        .spacing(6),
        // Player backend
        column![
            text("Player").size(14),
            pick_list(PlayerChoice::ALL.to_vec(), Some(player), Message::PlayerChoiceChanged)
                .padding([6, 10])
                .width(Length::Fixed(200.0)),
        ]
        .spacing(6),
        // Notice delay
        column![
            row![
                text("Notice duration").size(14),
                Space::with_width(Length::Fill),
                text(format!("{} s", notice_seconds)).size(14),
            ],
            slider(1..=10, notice_seconds, Message::NoticeSecondsChanged)
                .width(Length::Fixed(240.0)),
        ]
        .spacing(6)
        .width(Length::Fixed(240.0)),
        row![
            button(text("Apply").size(14))
                .on_press(Message::ApplySettings)
                .padding([10, 24])
                .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
            button(text("Cancel").size(14))
                .on_press(Message::SwitchToViewer)
                .padding([10, 24])
                .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
        ]
        .spacing(12)
        .align_items(Alignment::Center),
    ]
    .spacing(24);

    if let Some(error) = error {
        content = content.push(text(error).size(13).style(theme::DANGER));
    }

    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::CardContainer)))
        .into()
}
