use crate::api::models::WATCH_URL_BASE;
use crate::player::traits::PlayerBackend;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Mutex;
use tracing::info;

/// Hands videos off to the system browser
///
/// Loading only remembers the video; "play" opens its watch page. The page
/// cannot be controlled afterwards, so fullscreen is unsupported.
#[derive(Default)]
pub struct BrowserPlayer {
    current: Mutex<Option<String>>,
}

impl BrowserPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.current.lock().ok().and_then(|c| c.clone())
    }

    fn remember(&self, video_id: &str) -> Result<()> {
        let mut current = self
            .current
            .lock()
            .map_err(|e| anyhow!("Browser player state poisoned: {}", e))?;
        *current = Some(video_id.to_string());
        Ok(())
    }
}

#[async_trait]
impl PlayerBackend for BrowserPlayer {
    fn id(&self) -> &'static str {
        "browser"
    }

    async fn launch(&self, video_id: &str) -> Result<()> {
        self.remember(video_id)
    }

    async fn cue(&self, video_id: &str) -> Result<()> {
        self.remember(video_id)
    }

    async fn toggle_pause(&self) -> Result<()> {
        let video_id = self
            .current()
            .ok_or_else(|| anyhow!("No video loaded"))?;
        let url = format!("{}{}", WATCH_URL_BASE, video_id);
        info!("Opening {} in the browser", url);
        tokio::task::spawn_blocking(move || open::that(url)).await??;
        Ok(())
    }

    async fn toggle_fullscreen(&self) -> Result<()> {
        Err(anyhow!("{} player does not support fullscreen control", self.id()))
    }
}
