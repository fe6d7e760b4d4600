pub mod client;
pub mod models;
pub mod traits;

pub use client::HttpCatalogClient;
pub use models::{PageResult, Thumbnail, VideoDetail, VideoSummary};
pub use traits::CatalogApi;
