//! State of the clickable catalog list

use crate::api::VideoSummary;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct CatalogList {
    videos: Vec<VideoSummary>,
    error: Option<String>,
    requested: bool,
    loaded: bool,
}

impl CatalogList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly once, when the listing should be fetched
    pub fn mount(&mut self) -> bool {
        if self.requested {
            return false;
        }
        self.requested = true;
        true
    }

    pub fn unmount(&mut self) {
        *self = Self::default();
    }

    /// Ignored unless a fetch was requested by the current mount
    pub fn loaded(&mut self, result: Result<Vec<VideoSummary>, String>) {
        if !self.requested {
            debug!("Dropping catalog response: list is unmounted");
            return;
        }
        self.loaded = true;
        match result {
            Ok(videos) => {
                info!("Catalog loaded with {} videos", videos.len());
                self.videos = videos;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e);
            }
        }
    }

    /// Titles in server order
    pub fn videos(&self) -> &[VideoSummary] {
        &self.videos
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.requested && !self.loaded
    }

    /// Route a click to `on_select`, or just log it when no handler is wired
    pub fn activate<M>(&self, video_id: i64, on_select: Option<&dyn Fn(i64) -> M>) -> Option<M> {
        match on_select {
            Some(handler) => Some(handler(video_id)),
            None => {
                info!("Clicked video with ID: {}", video_id);
                None
            }
        }
    }
}
