//! Data structures for catalog records

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Base URL for watching a video on the external site
pub const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

/// Entry of the full catalog listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSummary {
    pub id: i64,
    pub title: String,
}

/// A single thumbnail size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

/// Nested external reference, as emitted by playlist snippets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
}

/// Full record of the video at an offset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetail {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "videoOwnerChannelTitle")]
    pub channel_title: Option<String>,
    #[serde(default)]
    pub thumbnails: Option<BTreeMap<String, Thumbnail>>,
    #[serde(default)]
    pub external_video_id: Option<String>,
    #[serde(default)]
    pub resource_id: Option<ResourceId>,
}

impl VideoDetail {
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    pub fn channel_title(&self) -> Option<&str> {
        non_empty(self.channel_title.as_deref())
    }

    /// External id, flat field first, then `resourceId.videoId`
    pub fn external_video_id(&self) -> Option<&str> {
        non_empty(self.external_video_id.as_deref()).or_else(|| {
            self.resource_id
                .as_ref()
                .and_then(|r| non_empty(r.video_id.as_deref()))
        })
    }

    pub fn resource_kind(&self) -> Option<&str> {
        self.resource_id
            .as_ref()
            .and_then(|r| non_empty(r.kind.as_deref()))
    }

    pub fn watch_url(&self) -> Option<String> {
        self.external_video_id()
            .map(|id| format!("{}{}", WATCH_URL_BASE, id))
    }

    /// Thumbnail for a size label, skipping entries with an empty URL
    pub fn thumbnail(&self, label: &str) -> Option<&Thumbnail> {
        self.thumbnails
            .as_ref()?
            .get(label)
            .filter(|t| !t.url.is_empty())
    }

    /// `default` size, falling back to `medium`
    pub fn preferred_thumbnail(&self) -> Option<&Thumbnail> {
        self.thumbnail("default").or_else(|| self.thumbnail("medium"))
    }

    /// First `max_chars` characters of the description, with `...` when cut
    pub fn description_preview(&self, max_chars: usize) -> Option<String> {
        let description = self.description()?;
        let mut preview: String = description.chars().take(max_chars).collect();
        if description.chars().count() > max_chars {
            preview.push_str("...");
        }
        Some(preview)
    }
}

/// Outcome of a single-video fetch
#[derive(Debug, Clone, PartialEq)]
pub enum PageResult {
    Video(VideoDetail),
    /// Offset is past the end of the catalog
    Exceeded { message: Option<String> },
}

impl<'de> Deserialize<'de> for PageResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ExceededFlag {
            Flag(bool),
            Message(String),
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Exceeded { exceeded: ExceededFlag },
            Video(VideoDetail),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Exceeded {
                exceeded: ExceededFlag::Flag(true),
            } => Ok(PageResult::Exceeded { message: None }),
            Raw::Exceeded {
                exceeded: ExceededFlag::Flag(false),
            } => Err(D::Error::custom("`exceeded` is present but false")),
            Raw::Exceeded {
                exceeded: ExceededFlag::Message(message),
            } => Ok(PageResult::Exceeded {
                message: Some(message).filter(|m| !m.trim().is_empty()),
            }),
            Raw::Video(video) => Ok(PageResult::Video(video)),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }))
}
