use anyhow::Result;
use async_trait::async_trait;

/// Core trait for all playback backends
///
/// This trait isolates the viewer from the specific player (mpv over IPC,
/// a browser tab, ...). Calls are only made by [`super::PlaybackAdapter`],
/// which guarantees `launch` happens before any other command.
#[async_trait]
pub trait PlayerBackend: Send + Sync {
    /// Returns a unique identifier for this backend (e.g., "mpv", "browser")
    fn id(&self) -> &'static str;

    /// Start the player showing `video_id`, resolving once it accepts commands
    async fn launch(&self, video_id: &str) -> Result<()>;

    /// Replace the current video without starting playback
    async fn cue(&self, video_id: &str) -> Result<()>;

    async fn toggle_pause(&self) -> Result<()>;

    async fn toggle_fullscreen(&self) -> Result<()>;

    /// Stop the player; the default implementation has nothing to release
    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }
}
