//! Drives the viewer against an in-memory catalog and a recording player,
//! running effects the way the GUI host does.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use yogatube::api::{CatalogApi, PageResult, VideoDetail, VideoSummary};
use yogatube::player::{LoadOutcome, PlaybackAdapter, PlayerBackend};
use yogatube::viewer::{CatalogList, NoticeKind, Viewer, ViewerEffect};
use yogatube::YogatubeError;

struct MemoryCatalog {
    videos: Vec<VideoDetail>,
    failing_offsets: Vec<u64>,
}

impl MemoryCatalog {
    fn new(ids: &[i64]) -> Self {
        let videos = ids
            .iter()
            .map(|&id| VideoDetail {
                id,
                title: format!("Video {}", id),
                published_at: None,
                description: None,
                channel_title: None,
                thumbnails: None,
                external_video_id: Some(format!("ext{}", id)),
                resource_id: None,
            })
            .collect();
        Self {
            videos,
            failing_offsets: Vec::new(),
        }
    }
}

#[async_trait]
impl CatalogApi for MemoryCatalog {
    async fn fetch_videos(&self) -> yogatube::utils::error::Result<Vec<VideoSummary>> {
        Ok(self
            .videos
            .iter()
            .map(|v| VideoSummary {
                id: v.id,
                title: v.title.clone(),
            })
            .collect())
    }

    async fn fetch_video(&self, offset: u64) -> yogatube::utils::error::Result<PageResult> {
        if self.failing_offsets.contains(&offset) {
            return Err(YogatubeError::HttpStatus(500));
        }
        Ok(match self.videos.get(offset as usize) {
            Some(video) => PageResult::Video(video.clone()),
            None => PageResult::Exceeded { message: None },
        })
    }

    async fn fetch_thumbnail(&self, _url: &str) -> yogatube::utils::error::Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

#[derive(Default)]
struct RecordingPlayer {
    calls: Mutex<Vec<String>>,
    /// While set, `launch` waits for `release`
    gated: AtomicBool,
    release: Notify,
}

impl RecordingPlayer {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlayerBackend for RecordingPlayer {
    fn id(&self) -> &'static str {
        "recording"
    }

    async fn launch(&self, video_id: &str) -> anyhow::Result<()> {
        if self.gated.load(Ordering::SeqCst) {
            self.release.notified().await;
        }
        self.calls.lock().unwrap().push(format!("launch {}", video_id));
        Ok(())
    }

    async fn cue(&self, video_id: &str) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(format!("cue {}", video_id));
        Ok(())
    }

    async fn toggle_pause(&self) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push("pause".to_string());
        Ok(())
    }

    async fn toggle_fullscreen(&self) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push("fullscreen".to_string());
        Ok(())
    }

    async fn shutdown(&self) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push("shutdown".to_string());
        Ok(())
    }
}

struct Host {
    catalog: MemoryCatalog,
    viewer: Viewer,
    player: PlaybackAdapter,
    fetches: Vec<u64>,
    timers: Vec<u64>,
}

impl Host {
    fn new(catalog: MemoryCatalog, backend: Arc<RecordingPlayer>) -> Self {
        Self {
            catalog,
            viewer: Viewer::new(),
            player: PlaybackAdapter::new(backend),
            fetches: Vec::new(),
            timers: Vec::new(),
        }
    }

    /// Run effects until none are left; timers are recorded, not fired
    async fn run(&mut self, mut pending: Vec<ViewerEffect>) {
        while !pending.is_empty() {
            let mut next = Vec::new();
            for effect in pending {
                match effect {
                    ViewerEffect::Fetch { offset } => {
                        self.fetches.push(offset);
                        let result = self
                            .catalog
                            .fetch_video(offset)
                            .await
                            .map_err(|e| e.to_string());
                        next.extend(self.viewer.page_loaded(offset, result));
                    }
                    ViewerEffect::ExpireNotice { token } => self.timers.push(token),
                    ViewerEffect::Play { external_id } => {
                        self.player.load(&external_id).await.expect("player load");
                    }
                    ViewerEffect::LoadThumbnail { .. } => {}
                }
            }
            pending = next;
        }
    }

    fn shown_id(&self) -> Option<i64> {
        self.viewer.video().map(|v| v.id)
    }
}

#[tokio::test]
async fn browse_forward_and_back() {
    let backend = Arc::new(RecordingPlayer::default());
    let mut host = Host::new(MemoryCatalog::new(&[10, 11, 12]), backend.clone());

    let effects = host.viewer.mount();
    host.run(effects).await;
    assert_eq!(host.shown_id(), Some(10));

    let effects = host.viewer.next();
    host.run(effects).await;
    assert_eq!(host.shown_id(), Some(11));
    assert_eq!(host.viewer.offset(), 1);

    let effects = host.viewer.previous();
    host.run(effects).await;
    assert_eq!(host.shown_id(), Some(10));

    // Already at the start: nothing to fetch
    let effects = host.viewer.previous();
    assert!(effects.is_empty());

    assert_eq!(host.fetches, vec![0, 1, 0]);
    assert_eq!(
        backend.calls(),
        vec!["launch ext10", "cue ext11", "cue ext10"]
    );
}

#[tokio::test]
async fn running_past_the_end_wraps_to_the_start() {
    let backend = Arc::new(RecordingPlayer::default());
    let mut host = Host::new(MemoryCatalog::new(&[1, 2]), backend);

    let effects = host.viewer.mount();
    host.run(effects).await;
    let effects = host.viewer.next();
    host.run(effects).await;
    assert_eq!(host.shown_id(), Some(2));

    let effects = host.viewer.next();
    host.run(effects).await;

    assert_eq!(host.fetches, vec![0, 1, 2, 0]);
    assert_eq!(host.viewer.offset(), 0);
    assert_eq!(host.shown_id(), Some(1));
    let notice = host.viewer.notice().expect("exceeded notice");
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(host.timers.len(), 1);
}

#[tokio::test]
async fn selecting_from_the_list_moves_relative_to_the_shown_video() {
    let backend = Arc::new(RecordingPlayer::default());
    let mut host = Host::new(MemoryCatalog::new(&[100, 101, 102, 103, 104]), backend);

    let effects = host.viewer.mount();
    host.run(effects).await;
    let effects = host.viewer.next();
    host.run(effects).await;
    assert_eq!(host.shown_id(), Some(101));

    let mut list = CatalogList::new();
    assert!(list.mount());
    list.loaded(
        host.catalog
            .fetch_videos()
            .await
            .map_err(|e| e.to_string()),
    );
    let picked = list.videos()[3].id;

    let select = |id: i64| id;
    let chosen = list
        .activate(picked, Some(&select as &dyn Fn(i64) -> i64))
        .expect("handler result");
    let effects = host.viewer.select_video(chosen);
    host.run(effects).await;

    assert_eq!(host.viewer.offset(), 3);
    assert_eq!(host.shown_id(), Some(103));
}

#[tokio::test]
async fn failed_fetch_clears_the_video_and_returns_to_zero() {
    let backend = Arc::new(RecordingPlayer::default());
    let mut catalog = MemoryCatalog::new(&[5, 6, 7]);
    catalog.failing_offsets.push(2);
    let mut host = Host::new(catalog, backend);

    let effects = host.viewer.mount();
    host.run(effects).await;
    let effects = host.viewer.next();
    host.run(effects).await;

    let effects = host.viewer.next();
    // Only the failing fetch; the reset to 0 is what runs next
    assert_eq!(effects, vec![ViewerEffect::Fetch { offset: 2 }]);
    let result = host
        .catalog
        .fetch_video(2)
        .await
        .map_err(|e| e.to_string());
    let follow_up = host.viewer.page_loaded(2, result);

    assert!(host.viewer.video().is_none());
    assert_eq!(host.viewer.offset(), 0);
    assert_eq!(host.viewer.error(), Some("HTTP error! status: 500"));
    assert_eq!(follow_up, vec![ViewerEffect::Fetch { offset: 0 }]);

    host.run(follow_up).await;
    assert_eq!(host.shown_id(), Some(5));
    assert!(host.viewer.error().is_none());
}

#[tokio::test]
async fn player_toggles_wait_for_the_first_video() {
    let backend = Arc::new(RecordingPlayer::default());
    let mut host = Host::new(MemoryCatalog::new(&[1]), backend.clone());

    assert!(!host.player.toggle_play_pause().await.expect("toggle"));

    let effects = host.viewer.mount();
    host.run(effects).await;
    assert!(host.player.is_ready());
    assert!(host.player.toggle_play_pause().await.expect("toggle"));
    assert!(host.player.toggle_fullscreen().await.expect("toggle"));
    assert_eq!(
        backend.calls(),
        vec!["launch ext1", "pause", "fullscreen"]
    );

    // Leaving the viewer closes the player and drops its state
    host.player.close().await.expect("close");
    host.viewer.unmount();
    assert!(!host.player.is_ready());
    assert!(host.viewer.video().is_none());
}

#[tokio::test]
async fn fetch_landing_after_unmount_does_not_start_the_player() {
    let backend = Arc::new(RecordingPlayer::default());
    let mut host = Host::new(MemoryCatalog::new(&[1, 2]), backend.clone());

    // Startup fetch still in flight when the user leaves the viewer
    let in_flight = host.viewer.mount();
    host.viewer.unmount();
    host.player.close().await.expect("close");

    host.run(in_flight).await;
    assert_eq!(host.fetches, vec![0]);
    assert!(host.viewer.video().is_none());
    assert!(!host.player.is_ready());
    assert!(backend.calls().is_empty());

    // Coming back starts over from offset 0
    let effects = host.viewer.mount();
    host.run(effects).await;
    assert_eq!(host.shown_id(), Some(1));
    assert_eq!(backend.calls(), vec!["launch ext1"]);
}

#[tokio::test]
async fn closing_during_launch_then_remounting() {
    let backend = Arc::new(RecordingPlayer::default());
    backend.gated.store(true, Ordering::SeqCst);
    let mut host = Host::new(MemoryCatalog::new(&[1, 2]), backend.clone());

    let mount = host.viewer.mount();
    assert_eq!(mount, vec![ViewerEffect::Fetch { offset: 0 }]);
    let result = host
        .catalog
        .fetch_video(0)
        .await
        .map_err(|e| e.to_string());
    let effects = host.viewer.page_loaded(0, result);
    assert_eq!(
        effects,
        vec![ViewerEffect::Play {
            external_id: "ext1".to_string()
        }]
    );

    let launching = {
        let player = host.player.clone();
        tokio::spawn(async move { player.load("ext1").await })
    };
    tokio::task::yield_now().await;

    // Leave the viewer while the player is still starting
    host.viewer.unmount();
    host.player.close().await.expect("close");
    backend.gated.store(false, Ordering::SeqCst);
    backend.release.notify_one();

    let outcome = launching.await.expect("join").expect("load");
    assert_eq!(outcome, LoadOutcome::Cancelled);
    assert!(!host.player.is_ready());
    assert!(!host.player.toggle_play_pause().await.expect("toggle"));

    let effects = host.viewer.mount();
    host.run(effects).await;
    assert_eq!(host.shown_id(), Some(1));
    assert!(host.player.is_ready());
    assert_eq!(
        backend.calls(),
        vec!["shutdown", "launch ext1", "shutdown", "launch ext1"]
    );
}
