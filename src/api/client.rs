//! reqwest-backed catalog client

use crate::api::models::{PageResult, VideoSummary};
use crate::api::traits::CatalogApi;
use crate::utils::error::{Result, YogatubeError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// HTTP client for the catalog REST endpoints
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("Catalog request to {} failed: {}", response.url(), status);
            return Err(YogatubeError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn fetch_videos(&self) -> Result<Vec<VideoSummary>> {
        let url = self.endpoint("videos");
        debug!("Fetching catalog from {}", url);
        self.get_json(self.http.get(url)).await
    }

    async fn fetch_video(&self, offset: u64) -> Result<PageResult> {
        let url = self.endpoint("video");
        debug!("Fetching video at offset {} from {}", offset, url);
        self.get_json(self.http.get(url).query(&[("offset", offset)]))
            .await
    }

    async fn fetch_thumbnail(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Fetching thumbnail {}", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(YogatubeError::HttpStatus(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}
