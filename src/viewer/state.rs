//! Paging and playback state of the video viewer
//!
//! `Viewer` holds no UI types. Every transition returns the side effects the
//! host has to run (fetches, timers, player loads); the host feeds results
//! back through [`Viewer::page_loaded`] and [`Viewer::notice_expired`].

use crate::api::{PageResult, VideoDetail};
use tracing::{debug, info, warn};

/// Notice shown when the server reports the end of the catalog without a message
pub const DEFAULT_EXCEEDED_NOTICE: &str = "No more videos available";

/// Work requested by a viewer transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEffect {
    /// Request the video at `offset`
    Fetch { offset: u64 },
    /// Clear the notice identified by `token` after the notice delay
    ExpireNotice { token: u64 },
    /// Cue the player with an external video id
    Play { external_id: String },
    /// Load a thumbnail for the displayed video
    LoadThumbnail { video_id: i64, url: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Message banner above the video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    token: u64,
}

#[derive(Debug, Default)]
pub struct Viewer {
    offset: u64,
    video: Option<VideoDetail>,
    notice: Option<Notice>,
    next_token: u64,
    loading: bool,
    mounted: bool,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn video(&self) -> Option<&VideoDetail> {
        self.video.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|n| n.kind == NoticeKind::Error)
            .map(|n| n.text.as_str())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn can_go_previous(&self) -> bool {
        self.offset > 0
    }

    /// First fetch of a freshly shown viewer
    pub fn mount(&mut self) -> Vec<ViewerEffect> {
        self.mounted = true;
        vec![self.fetch()]
    }

    /// Drop all transient state
    pub fn unmount(&mut self) {
        *self = Self::default();
    }

    pub fn next(&mut self) -> Vec<ViewerEffect> {
        self.set_offset(self.offset.saturating_add(1))
    }

    /// Step back one video; a no-op at offset 0
    pub fn previous(&mut self) -> Vec<ViewerEffect> {
        self.set_offset(self.offset.saturating_sub(1))
    }

    /// Jump to the catalog entry `selected_id`, relative to the displayed video
    pub fn select_video(&mut self, selected_id: i64) -> Vec<ViewerEffect> {
        let Some(current) = &self.video else {
            warn!(
                "Ignoring selection of video {}: no video is displayed",
                selected_id
            );
            return Vec::new();
        };
        let target = relative_offset(self.offset, current.id, selected_id);
        debug!(
            "Selected video {} while showing {} at offset {} -> offset {}",
            selected_id, current.id, self.offset, target
        );
        self.set_offset(target)
    }

    /// Apply the response of a fetch issued for `offset`
    pub fn page_loaded(
        &mut self,
        offset: u64,
        result: Result<PageResult, String>,
    ) -> Vec<ViewerEffect> {
        if !self.mounted {
            debug!("Dropping response for offset {}: viewer is unmounted", offset);
            return Vec::new();
        }
        if offset != self.offset {
            debug!(
                "Dropping stale response for offset {} (current {})",
                offset, self.offset
            );
            return Vec::new();
        }
        self.loading = false;

        match result {
            Ok(PageResult::Video(video)) => {
                info!("Showing video {} '{}' at offset {}", video.id, video.title, offset);
                // Errors clear on success; an info notice keeps running its timer.
                if self.error().is_some() {
                    self.notice = None;
                }
                let mut effects = Vec::new();
                if let Some(external_id) = video.external_video_id() {
                    effects.push(ViewerEffect::Play {
                        external_id: external_id.to_string(),
                    });
                }
                if let Some(thumbnail) = video.preferred_thumbnail() {
                    effects.push(ViewerEffect::LoadThumbnail {
                        video_id: video.id,
                        url: thumbnail.url.clone(),
                    });
                }
                self.video = Some(video);
                effects
            }
            Ok(PageResult::Exceeded { message }) => {
                info!("Offset {} is past the end of the catalog", offset);
                let text = message.unwrap_or_else(|| DEFAULT_EXCEEDED_NOTICE.to_string());
                let token = self.show_notice(NoticeKind::Info, text);
                let mut effects = vec![ViewerEffect::ExpireNotice { token }];
                effects.extend(self.set_offset(0));
                effects
            }
            Err(e) => {
                warn!("Fetching offset {} failed: {}", offset, e);
                self.video = None;
                self.show_notice(NoticeKind::Error, e);
                self.set_offset(0)
            }
        }
    }

    /// Timer for a notice fired; newer notices are left alone
    pub fn notice_expired(&mut self, token: u64) {
        if self.notice.as_ref().is_some_and(|n| n.token == token) {
            self.notice = None;
        }
    }

    fn set_offset(&mut self, offset: u64) -> Vec<ViewerEffect> {
        if offset == self.offset {
            return Vec::new();
        }
        self.offset = offset;
        vec![self.fetch()]
    }

    fn fetch(&mut self) -> ViewerEffect {
        self.loading = true;
        ViewerEffect::Fetch {
            offset: self.offset,
        }
    }

    fn show_notice(&mut self, kind: NoticeKind, text: String) -> u64 {
        self.next_token += 1;
        let token = self.next_token;
        self.notice = Some(Notice { kind, text, token });
        token
    }
}

/// `offset + (selected - current)`, clamped at 0
pub fn relative_offset(offset: u64, current_id: i64, selected_id: i64) -> u64 {
    let target = i128::from(offset) + i128::from(selected_id) - i128::from(current_id);
    u64::try_from(target.max(0)).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::ResourceId;

    fn video(id: i64, title: &str) -> VideoDetail {
        VideoDetail {
            id,
            title: title.to_string(),
            published_at: None,
            description: None,
            channel_title: None,
            thumbnails: None,
            external_video_id: None,
            resource_id: Some(ResourceId {
                kind: Some("youtube#video".to_string()),
                video_id: Some(format!("yt{}", id)),
            }),
        }
    }

    fn mounted_with(offset: u64, current: VideoDetail) -> Viewer {
        let mut viewer = Viewer::new();
        viewer.mount();
        viewer.page_loaded(0, Ok(PageResult::Video(video(0, "start"))));
        viewer.offset = offset;
        viewer.video = Some(current);
        viewer
    }

    #[test]
    fn mount_fetches_offset_zero_and_shows_title() {
        let mut viewer = Viewer::new();
        assert_eq!(viewer.mount(), vec![ViewerEffect::Fetch { offset: 0 }]);
        assert!(viewer.is_loading());

        let effects = viewer.page_loaded(0, Ok(PageResult::Video(video(3, "Sun Salutation"))));
        assert_eq!(viewer.video().map(|v| v.title.as_str()), Some("Sun Salutation"));
        assert_eq!(
            effects,
            vec![ViewerEffect::Play {
                external_id: "yt3".to_string()
            }]
        );
        assert!(!viewer.is_loading());
    }

    #[test]
    fn next_increments_by_one_with_one_fetch() {
        let mut viewer = mounted_with(4, video(10, "ten"));
        let effects = viewer.next();
        assert_eq!(viewer.offset(), 5);
        assert_eq!(effects, vec![ViewerEffect::Fetch { offset: 5 }]);
    }

    #[test]
    fn previous_clamps_at_zero() {
        let mut viewer = mounted_with(1, video(10, "ten"));
        assert_eq!(viewer.previous(), vec![ViewerEffect::Fetch { offset: 0 }]);
        assert!(!viewer.can_go_previous());
        assert!(viewer.previous().is_empty());
        assert_eq!(viewer.offset(), 0);
    }

    #[test]
    fn select_uses_relative_offset() {
        let mut viewer = mounted_with(5, video(12, "twelve"));
        let effects = viewer.select_video(9);
        assert_eq!(viewer.offset(), 2);
        assert_eq!(effects, vec![ViewerEffect::Fetch { offset: 2 }]);
    }

    #[test]
    fn select_below_zero_clamps() {
        let mut viewer = mounted_with(1, video(12, "twelve"));
        viewer.select_video(2);
        assert_eq!(viewer.offset(), 0);
    }

    #[test]
    fn select_without_video_is_ignored() {
        let mut viewer = Viewer::new();
        viewer.mount();
        assert!(viewer.select_video(4).is_empty());
        assert_eq!(viewer.offset(), 0);
    }

    #[test]
    fn exceeded_resets_offset_and_shows_timed_notice() {
        let mut viewer = mounted_with(3, video(8, "eight"));
        let effects = viewer.page_loaded(
            3,
            Ok(PageResult::Exceeded {
                message: Some("No more videos available".to_string()),
            }),
        );

        assert_eq!(viewer.offset(), 0);
        let notice = viewer.notice().expect("notice");
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.text, "No more videos available");
        let token = notice.token;
        assert_eq!(
            effects,
            vec![
                ViewerEffect::ExpireNotice { token },
                ViewerEffect::Fetch { offset: 0 }
            ]
        );

        viewer.notice_expired(token);
        assert!(viewer.notice().is_none());
    }

    #[test]
    fn stale_timer_does_not_clear_newer_notice() {
        let mut viewer = mounted_with(2, video(8, "eight"));
        viewer.page_loaded(2, Ok(PageResult::Exceeded { message: None }));
        let first = viewer.notice().unwrap().token;

        viewer.next();
        viewer.page_loaded(1, Ok(PageResult::Exceeded { message: None }));
        let second = viewer.notice().unwrap().token;
        assert_ne!(first, second);

        viewer.notice_expired(first);
        assert_eq!(viewer.notice().map(|n| n.text.as_str()), Some(DEFAULT_EXCEEDED_NOTICE));
    }

    #[test]
    fn failure_clears_video_and_resets_offset() {
        let mut viewer = mounted_with(6, video(20, "twenty"));
        let effects = viewer.page_loaded(6, Err("HTTP error! status: 500".to_string()));

        assert!(viewer.video().is_none());
        assert_eq!(viewer.offset(), 0);
        assert_eq!(viewer.error(), Some("HTTP error! status: 500"));
        assert_eq!(effects, vec![ViewerEffect::Fetch { offset: 0 }]);
    }

    #[test]
    fn failure_at_zero_does_not_refetch() {
        let mut viewer = Viewer::new();
        viewer.mount();
        let effects = viewer.page_loaded(0, Err("Network error".to_string()));
        assert!(effects.is_empty());
        assert!(!viewer.is_loading());
    }

    #[test]
    fn success_clears_error() {
        let mut viewer = Viewer::new();
        viewer.mount();
        viewer.page_loaded(0, Err("boom".to_string()));
        viewer.page_loaded(0, Ok(PageResult::Video(video(1, "one"))));
        assert!(viewer.error().is_none());
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut viewer = mounted_with(0, video(1, "one"));
        viewer.next();
        viewer.next();
        assert!(viewer
            .page_loaded(1, Ok(PageResult::Video(video(2, "two"))))
            .is_empty());
        assert_eq!(viewer.video().map(|v| v.id), Some(1));
        assert!(viewer.is_loading());
    }

    #[test]
    fn unmount_discards_state() {
        let mut viewer = mounted_with(4, video(4, "four"));
        viewer.unmount();
        assert_eq!(viewer.offset(), 0);
        assert!(viewer.video().is_none());
        assert!(!viewer.is_mounted());
    }

    #[test]
    fn responses_after_unmount_are_ignored() {
        let mut viewer = Viewer::new();
        viewer.mount();
        viewer.unmount();

        // Offset 0 matches the reset offset, so only the mount state can reject it
        let effects = viewer.page_loaded(0, Ok(PageResult::Video(video(9, "late"))));
        assert!(effects.is_empty());
        assert!(viewer.video().is_none());

        assert!(viewer.page_loaded(0, Err("boom".to_string())).is_empty());
        assert!(viewer.notice().is_none());
    }

    #[test]
    fn remount_accepts_its_own_responses() {
        let mut viewer = Viewer::new();
        viewer.mount();
        viewer.unmount();
        assert_eq!(viewer.mount(), vec![ViewerEffect::Fetch { offset: 0 }]);
        viewer.page_loaded(0, Ok(PageResult::Video(video(2, "two"))));
        assert_eq!(viewer.video().map(|v| v.id), Some(2));
    }

    #[test]
    fn relative_offset_saturates() {
        assert_eq!(relative_offset(0, 5, 2), 0);
        assert_eq!(relative_offset(10, 3, 7), 14);
        assert_eq!(relative_offset(u64::MAX, 0, 1), u64::MAX);
    }
}
