//! Main GUI application

use crate::api::{CatalogApi, HttpCatalogClient, PageResult, VideoSummary};
use crate::gui::clipboard;
use crate::player::{self, BrowserPlayer, LoadOutcome, PlaybackAdapter};
use crate::utils::config::{AppSettings, PlayerChoice};
use crate::viewer::{CatalogList, Viewer, ViewerEffect};
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::widget::image;
use iced::{Application, Command, Element, Subscription, Theme};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Main application state
pub struct YogatubeApp {
    // Core components
    settings: AppSettings,
    client: Arc<dyn CatalogApi>,
    player: PlaybackAdapter,

    // Viewer page
    viewer: Viewer,
    catalog: CatalogList,
    thumbnail: Option<(i64, image::Handle)>,
    player_status: String,

    // UI State
    current_view: View,
    dark_mode: bool,

    // Settings form
    api_domain_input: String,
    player_choice: PlayerChoice,
    notice_seconds: u8,
    settings_error: Option<String>,
}

/// Application view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Viewer,
    Settings,
}

/// What the player bar needs to render
#[derive(Debug, Clone)]
pub struct PlayerPanel {
    pub backend: &'static str,
    pub ready: bool,
    pub status: String,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Viewer events
    PageLoaded(u64, Result<PageResult, String>),
    NextPressed,
    PreviousPressed,
    SelectVideo(i64),
    NoticeExpired(u64),
    ThumbnailLoaded(i64, Result<Vec<u8>, String>),
    CopyVideoLink,

    // Catalog list events
    CatalogLoaded(Result<Vec<VideoSummary>, String>),
    CatalogItemPressed(i64),

    // Player events
    PlayerLoaded(Result<LoadOutcome, String>),
    PlayerCommandFinished(Result<bool, String>),
    PlayerClosed(Result<(), String>),
    TogglePlayPause,
    ToggleFullscreen,

    // View navigation
    SwitchToViewer,
    SwitchToSettings,
    ToggleDarkMode,

    // Settings
    ApiDomainChanged(String),
    PlayerChoiceChanged(PlayerChoice),
    NoticeSecondsChanged(u8),
    ApplySettings,
}

impl Application for YogatubeApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppSettings;

    fn new(settings: Self::Flags) -> (Self, Command<Message>) {
        let client: Arc<dyn CatalogApi> = Arc::new(HttpCatalogClient::new(&settings.api_domain));
        let (player, player_status) = match player::build_backend(&settings) {
            Ok(backend) => (PlaybackAdapter::new(backend), "Idle".to_string()),
            Err(e) => {
                error!("Failed to initialize player: {}", e);
                (
                    PlaybackAdapter::new(Arc::new(BrowserPlayer::new())),
                    format!("{}; using the browser", e),
                )
            }
        };
        info!(
            "Using catalog at {} with {} player",
            settings.api_domain,
            player.backend_id()
        );

        let mut app = Self {
            client,
            player,
            viewer: Viewer::new(),
            catalog: CatalogList::new(),
            thumbnail: None,
            player_status,
            current_view: View::Viewer,
            dark_mode: settings.dark_mode,
            api_domain_input: settings.api_domain.clone(),
            player_choice: settings.player,
            notice_seconds: notice_seconds(&settings),
            settings_error: None,
            settings,
        };

        let command = app.mount_viewer();
        (app, command)
    }

    fn title(&self) -> String {
        match self.viewer.video() {
            Some(video) => format!("YogaTube - {}", video.title),
            None => String::from("YogaTube"),
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            // Viewer events
            Message::PageLoaded(offset, result) => {
                let effects = self.viewer.page_loaded(offset, result);
                if self.viewer.video().is_none() {
                    self.thumbnail = None;
                }
                self.run_effects(effects)
            }

            Message::NextPressed => {
                let effects = self.viewer.next();
                self.run_effects(effects)
            }

            Message::PreviousPressed => {
                let effects = self.viewer.previous();
                self.run_effects(effects)
            }

            Message::SelectVideo(id) => {
                let effects = self.viewer.select_video(id);
                self.run_effects(effects)
            }

            Message::NoticeExpired(token) => {
                self.viewer.notice_expired(token);
                Command::none()
            }

            Message::ThumbnailLoaded(video_id, result) => {
                match result {
                    Ok(bytes) if self.viewer.video().is_some_and(|v| v.id == video_id) => {
                        self.thumbnail = Some((video_id, image::Handle::from_memory(bytes)));
                    }
                    Ok(_) => debug!("Dropping thumbnail for video {} no longer shown", video_id),
                    Err(e) => warn!("Failed to load thumbnail for video {}: {}", video_id, e),
                }
                Command::none()
            }

            Message::CopyVideoLink => {
                if let Some(url) = self.viewer.video().and_then(|v| v.watch_url()) {
                    match clipboard::set_clipboard_content(&url) {
                        Ok(()) => self.player_status = "Link copied to clipboard".to_string(),
                        Err(e) => self.player_status = e,
                    }
                }
                Command::none()
            }

            // Catalog list events
            Message::CatalogLoaded(result) => {
                self.catalog.loaded(result);
                Command::none()
            }

            Message::CatalogItemPressed(id) => {
                let select: &dyn Fn(i64) -> Message = &Message::SelectVideo;
                match self.catalog.activate(id, Some(select)) {
                    Some(message) => self.update(message),
                    None => Command::none(),
                }
            }

            // Player events
            Message::PlayerLoaded(result) => {
                match result {
                    Ok(LoadOutcome::Queued) => {}
                    Ok(LoadOutcome::Cancelled) => debug!("Player launch cancelled by close"),
                    Ok(outcome) => {
                        debug!("Player load finished: {:?}", outcome);
                        self.player_status = "Ready".to_string();
                    }
                    Err(e) => {
                        error!("Player failed: {}", e);
                        self.player_status = format!("Failed: {}", e);
                    }
                }
                Command::none()
            }

            Message::PlayerCommandFinished(result) => {
                match result {
                    Ok(true) => {}
                    Ok(false) => debug!("Player command ignored: not ready"),
                    Err(e) => {
                        warn!("Player command failed: {}", e);
                        self.player_status = e;
                    }
                }
                Command::none()
            }

            Message::PlayerClosed(result) => {
                if let Err(e) = result {
                    warn!("Failed to close player: {}", e);
                }
                Command::none()
            }

            Message::TogglePlayPause => {
                let player = self.player.clone();
                Command::perform(
                    async move { player.toggle_play_pause().await.map_err(|e| e.to_string()) },
                    Message::PlayerCommandFinished,
                )
            }

            Message::ToggleFullscreen => {
                let player = self.player.clone();
                Command::perform(
                    async move { player.toggle_fullscreen().await.map_err(|e| e.to_string()) },
                    Message::PlayerCommandFinished,
                )
            }

            // View navigation
            Message::SwitchToViewer => {
                if self.current_view == View::Viewer {
                    return Command::none();
                }
                self.current_view = View::Viewer;
                self.settings_error = None;
                self.mount_viewer()
            }

            Message::SwitchToSettings => {
                if self.current_view == View::Settings {
                    return Command::none();
                }
                self.current_view = View::Settings;
                self.api_domain_input = self.settings.api_domain.clone();
                self.player_choice = self.settings.player;
                self.notice_seconds = notice_seconds(&self.settings);
                self.unmount_viewer()
            }

            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                Command::none()
            }

            // Settings
            Message::ApiDomainChanged(domain) => {
                self.api_domain_input = domain;
                self.settings_error = None;
                Command::none()
            }

            Message::PlayerChoiceChanged(choice) => {
                self.player_choice = choice;
                self.settings_error = None;
                Command::none()
            }

            Message::NoticeSecondsChanged(seconds) => {
                self.notice_seconds = seconds;
                Command::none()
            }

            Message::ApplySettings => {
                let domain = self.api_domain_input.trim();
                if !(domain.starts_with("http://") || domain.starts_with("https://")) {
                    self.settings_error =
                        Some("API domain must start with http:// or https://".to_string());
                    return Command::none();
                }

                let candidate = AppSettings {
                    api_domain: domain.to_string(),
                    player: self.player_choice,
                    notice_duration_ms: u64::from(self.notice_seconds) * 1000,
                    dark_mode: self.dark_mode,
                    ..self.settings.clone()
                }
                .normalized();

                let backend = match player::build_backend(&candidate) {
                    Ok(backend) => backend,
                    Err(e) => {
                        self.settings_error = Some(e.to_string());
                        return Command::none();
                    }
                };

                info!("Applying settings: {:?}", candidate);
                let old_player = std::mem::replace(&mut self.player, PlaybackAdapter::new(backend));
                self.client = Arc::new(HttpCatalogClient::new(&candidate.api_domain));
                self.settings = candidate;
                self.player_status = "Idle".to_string();

                let close = Command::perform(
                    async move { old_player.close().await.map_err(|e| e.to_string()) },
                    Message::PlayerClosed,
                );
                Command::batch([close, self.update(Message::SwitchToViewer)])
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        use crate::gui::theme;
        use iced::widget::{button, column, container, row, text, Space};
        use iced::Length;

        let nav_button = |label: &'static str, view: View, message: Message| {
            button(text(label).size(16))
                .style(iced::theme::Button::Custom(Box::new(
                    if self.current_view == view {
                        theme::SidebarButtonStyle::Active
                    } else {
                        theme::SidebarButtonStyle::Inactive
                    },
                )))
                .width(Length::Fill)
                .padding(12)
                .on_press(message)
        };

        // Sidebar
        let sidebar = container(
            column![
                container(text("YogaTube").size(24).style(theme::ACCENT)).padding(20),
                Space::with_height(20),
                nav_button("Viewer", View::Viewer, Message::SwitchToViewer),
                nav_button("Settings", View::Settings, Message::SwitchToSettings),
                Space::with_height(Length::Fill),
                button(
                    text(if self.dark_mode {
                        "Switch to Light Mode"
                    } else {
                        "Switch to Dark Mode"
                    })
                    .size(14)
                )
                .width(Length::Fill)
                .padding(12)
                .on_press(Message::ToggleDarkMode)
                .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
            ]
            .spacing(10)
            .padding(10),
        )
        .width(Length::Fixed(220.0))
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::SidebarContainer)));

        // Main Content Area
        let content = match self.current_view {
            View::Viewer => {
                use crate::gui::views::viewer_view;
                let thumbnail = self
                    .thumbnail
                    .as_ref()
                    .filter(|(id, _)| self.viewer.video().is_some_and(|v| v.id == *id))
                    .map(|(_, handle)| handle);
                viewer_view(&self.viewer, &self.catalog, thumbnail, &self.player_panel())
            }
            View::Settings => {
                use crate::gui::views::settings_view;
                settings_view(
                    &self.api_domain_input,
                    self.player_choice,
                    self.notice_seconds,
                    self.settings_error.as_deref(),
                )
            }
        };

        row![
            sidebar,
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(20)
        ]
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        // Shortcuts only exist while the viewer is mounted
        if self.current_view == View::Viewer {
            keyboard::on_key_press(shortcut)
        } else {
            Subscription::none()
        }
    }

    fn theme(&self) -> Self::Theme {
        crate::gui::theme::for_mode(self.dark_mode)
    }
}

impl YogatubeApp {
    fn player_panel(&self) -> PlayerPanel {
        PlayerPanel {
            backend: self.player.backend_id(),
            ready: self.player.is_ready(),
            status: self.player_status.clone(),
        }
    }

    fn mount_viewer(&mut self) -> Command<Message> {
        let effects = self.viewer.mount();
        let mut commands = vec![self.run_effects(effects)];

        if self.catalog.mount() {
            let client = Arc::clone(&self.client);
            commands.push(Command::perform(
                async move { client.fetch_videos().await.map_err(|e| e.to_string()) },
                Message::CatalogLoaded,
            ));
        }
        Command::batch(commands)
    }

    fn unmount_viewer(&mut self) -> Command<Message> {
        self.viewer.unmount();
        self.catalog.unmount();
        self.thumbnail = None;
        self.player_status = "Idle".to_string();

        let player = self.player.clone();
        Command::perform(
            async move { player.close().await.map_err(|e| e.to_string()) },
            Message::PlayerClosed,
        )
    }

    fn run_effects(&mut self, effects: Vec<ViewerEffect>) -> Command<Message> {
        let commands: Vec<_> = effects
            .into_iter()
            .map(|effect| self.run_effect(effect))
            .collect();
        Command::batch(commands)
    }

    fn run_effect(&mut self, effect: ViewerEffect) -> Command<Message> {
        match effect {
            ViewerEffect::Fetch { offset } => {
                let client = Arc::clone(&self.client);
                Command::perform(
                    async move { client.fetch_video(offset).await.map_err(|e| e.to_string()) },
                    move |result| Message::PageLoaded(offset, result),
                )
            }
            ViewerEffect::ExpireNotice { token } => {
                Command::perform(
                    notice_timer(self.settings.notice_duration(), token),
                    std::convert::identity,
                )
            }
            ViewerEffect::Play { external_id } => {
                if !self.player.is_ready() {
                    self.player_status = format!("Loading {}...", external_id);
                }
                let player = self.player.clone();
                Command::perform(
                    async move { player.load(&external_id).await.map_err(|e| e.to_string()) },
                    Message::PlayerLoaded,
                )
            }
            ViewerEffect::LoadThumbnail { video_id, url } => {
                let client = Arc::clone(&self.client);
                Command::perform(
                    async move { client.fetch_thumbnail(&url).await.map_err(|e| e.to_string()) },
                    move |result| Message::ThumbnailLoaded(video_id, result),
                )
            }
        }
    }
}

/// Resolves to `NoticeExpired(token)` once `delay` has passed
async fn notice_timer(delay: Duration, token: u64) -> Message {
    tokio::time::sleep(delay).await;
    Message::NoticeExpired(token)
}

fn notice_seconds(settings: &AppSettings) -> u8 {
    (settings.notice_duration_ms / 1000).clamp(1, 10) as u8
}

/// `f` toggles fullscreen, space toggles play/pause
fn shortcut(key: Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }
    match key.as_ref() {
        Key::Character("f") => Some(Message::ToggleFullscreen),
        Key::Named(Named::Space) => Some(Message::TogglePlayPause),
        _ => None,
    }
}
