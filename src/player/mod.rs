pub mod adapter;
pub mod browser;
pub mod mpv;
pub mod traits;

pub use adapter::{LoadOutcome, PlaybackAdapter};
pub use browser::BrowserPlayer;
pub use mpv::MpvPlayer;
pub use traits::PlayerBackend;

use crate::utils::config::{AppSettings, PlayerChoice};
use anyhow::Result;
use std::sync::Arc;
use tracing::warn;

/// Build the backend selected in `settings`
///
/// `Auto` prefers mpv and falls back to the browser when mpv is missing;
/// an explicit `Mpv` choice without mpv installed is an error.
pub fn build_backend(settings: &AppSettings) -> Result<Arc<dyn PlayerBackend>> {
    let timeout = settings.player_startup_timeout();
    let mpv = || match &settings.mpv_path {
        Some(path) => Ok(MpvPlayer::with_binary(path.clone(), timeout)),
        None => MpvPlayer::new(timeout),
    };

    match settings.player {
        PlayerChoice::Mpv => Ok(Arc::new(mpv()?)),
        PlayerChoice::Browser => Ok(Arc::new(BrowserPlayer::new())),
        PlayerChoice::Auto => match mpv() {
            Ok(player) => Ok(Arc::new(player)),
            Err(e) => {
                warn!("{}; falling back to the browser", e);
                Ok(Arc::new(BrowserPlayer::new()))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_browser_choice() {
        let settings = AppSettings {
            player: PlayerChoice::Browser,
            ..AppSettings::default()
        };
        assert_eq!(build_backend(&settings).unwrap().id(), "browser");
    }

    #[test]
    fn configured_mpv_path_skips_lookup() {
        let settings = AppSettings {
            player: PlayerChoice::Mpv,
            mpv_path: Some("/opt/custom/mpv".into()),
            ..AppSettings::default()
        };
        assert_eq!(build_backend(&settings).unwrap().id(), "mpv");
    }
}
