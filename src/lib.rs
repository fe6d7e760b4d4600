//! YogaTube library

pub mod api;
pub mod app;
pub mod gui;
pub mod player;
pub mod utils;
pub mod viewer;

// Re-export main types for easier use
pub use api::{CatalogApi, HttpCatalogClient, PageResult, VideoDetail, VideoSummary};
pub use gui::{Message, View, YogatubeApp};
pub use player::{LoadOutcome, PlaybackAdapter, PlayerBackend};
pub use utils::{AppSettings, PlayerChoice, YogatubeError};
pub use viewer::{CatalogList, Viewer, ViewerEffect};
