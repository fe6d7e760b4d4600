use crate::api::models::{PageResult, VideoSummary};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read access to the video catalog
///
/// The GUI and the headless CLI only talk to this trait, so tests can swap
/// the HTTP client for an in-memory catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /api/v1/videos`, in server order
    async fn fetch_videos(&self) -> Result<Vec<VideoSummary>>;

    /// `GET /api/v1/video?offset={offset}`
    async fn fetch_video(&self, offset: u64) -> Result<PageResult>;

    /// Raw bytes of a thumbnail image
    async fn fetch_thumbnail(&self, url: &str) -> Result<Vec<u8>>;
}
