//! Application initialization and main entry point

use crate::gui::YogatubeApp;
use crate::utils::AppSettings;
use anyhow::Result;
use iced::{Application, Settings};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(settings: &AppSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Run the YogaTube window until it is closed
pub fn run(settings: AppSettings) -> Result<()> {
    YogatubeApp::run(Settings {
        window: iced::window::Settings {
            size: iced::Size::new(1100.0, 720.0),
            min_size: Some(iced::Size::new(820.0, 520.0)),
            ..Default::default()
        },
        antialiasing: true,
        ..Settings::with_flags(settings)
    })?;

    Ok(())
}
