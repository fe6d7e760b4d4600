//! Viewer page: current video, paging controls, player bar and catalog list

use crate::gui::app::{Message, PlayerPanel};
use crate::gui::components::{nav_controls, notice_banner, player_controls, video_card, video_list};
use crate::viewer::{CatalogList, Viewer};
use iced::widget::{column, container, image, row, scrollable, text};
use iced::{Element, Length};

pub fn viewer_view(
    viewer: &Viewer,
    catalog: &CatalogList,
    thumbnail: Option<&image::Handle>,
    player: &PlayerPanel,
) -> Element<'static, Message> {
    use crate::gui::theme;

    let mut main = column![].spacing(16).width(Length::Fill);

    if let Some(notice) = viewer.notice() {
        main = main.push(notice_banner(notice));
    }

    match viewer.video() {
        Some(video) => {
            main = main.push(video_card(video, thumbnail));
            main = main.push(player_controls(
                player.backend,
                player.ready,
                &player.status,
                video.watch_url().is_some(),
            ));
        }
        None if viewer.is_loading() => {
            main = main.push(text("Loading video...").size(16));
        }
        None => {
            main = main.push(text("No video to display").size(16));
        }
    }

    main = main.push(nav_controls(
        viewer.offset(),
        viewer.can_go_previous(),
        viewer.is_loading(),
    ));

    let list = container(video_list(catalog))
        .padding(16)
        .width(Length::FillPortion(2))
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::CardContainer)));

    row![
        scrollable(main)
            .width(Length::FillPortion(3))
            .height(Length::Fill)
            .style(iced::theme::Scrollable::Custom(Box::new(theme::ScrollableStyle))),
        list,
    ]
    .spacing(20)
    .height(Length::Fill)
    .into()
}
