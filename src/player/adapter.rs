//! Lazily launched player with an instance-scoped ready signal

use crate::player::traits::PlayerBackend;
use anyhow::{anyhow, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

/// What a [`PlaybackAdapter::load`] call ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The player was started with this video and is now ready
    Launched,
    /// A launch is in flight; the video is cued once it completes
    Queued,
    /// The ready player switched to this video
    Cued,
    /// The adapter was closed while this launch was in flight
    Cancelled,
}

#[derive(Debug)]
enum Stage {
    Idle,
    Launching {
        pending: Option<String>,
        generation: u64,
    },
    Ready { current: String },
}

/// Wraps a [`PlayerBackend`] so commands are no-ops until it is ready
///
/// Cloning is cheap and every clone shares the same player.
#[derive(Clone)]
pub struct PlaybackAdapter {
    backend: Arc<dyn PlayerBackend>,
    stage: Arc<Mutex<Stage>>,
    launches: Arc<AtomicU64>,
    ready_tx: Arc<watch::Sender<bool>>,
    ready_rx: watch::Receiver<bool>,
}

impl std::fmt::Debug for PlaybackAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackAdapter")
            .field("backend", &self.backend.id())
            .field("ready", &self.is_ready())
            .finish()
    }
}

impl PlaybackAdapter {
    pub fn new(backend: Arc<dyn PlayerBackend>) -> Self {
        let (ready_tx, ready_rx) = watch::channel(false);
        Self {
            backend,
            stage: Arc::new(Mutex::new(Stage::Idle)),
            launches: Arc::new(AtomicU64::new(0)),
            ready_tx: Arc::new(ready_tx),
            ready_rx,
        }
    }

    pub fn backend_id(&self) -> &'static str {
        self.backend.id()
    }

    pub fn is_ready(&self) -> bool {
        *self.ready_rx.borrow()
    }

    /// Resolves once the player has signalled ready
    pub async fn wait_ready(&self) -> Result<()> {
        let mut rx = self.ready_rx.clone();
        rx.wait_for(|ready| *ready)
            .await
            .map(|_| ())
            .map_err(|_| anyhow!("Player was dropped before becoming ready"))
    }

    /// Show `video_id`, launching the player on first use
    ///
    /// A launch only becomes ready if no `close` (and no later launch)
    /// happened while it was in flight; otherwise it reports `Cancelled`.
    pub async fn load(&self, video_id: &str) -> Result<LoadOutcome> {
        let generation = {
            let mut stage = self.stage.lock().await;
            match &mut *stage {
                Stage::Idle => {
                    let generation = self.launches.fetch_add(1, Ordering::Relaxed) + 1;
                    *stage = Stage::Launching {
                        pending: None,
                        generation,
                    };
                    generation
                }
                Stage::Launching { pending, .. } => {
                    debug!("Player still launching, queueing {}", video_id);
                    *pending = Some(video_id.to_string());
                    return Ok(LoadOutcome::Queued);
                }
                Stage::Ready { current } => {
                    self.backend.cue(video_id).await?;
                    *current = video_id.to_string();
                    return Ok(LoadOutcome::Cued);
                }
            }
        };

        info!("Launching {} player with {}", self.backend.id(), video_id);
        let launched = self.backend.launch(video_id).await;

        let mut stage = self.stage.lock().await;
        let pending = match &*stage {
            Stage::Launching {
                pending,
                generation: current,
            } if *current == generation => pending.clone(),
            _ => {
                info!("Launch of {} was cancelled by close", video_id);
                // Still idle: stop what this launch brought up, under the lock
                if launched.is_ok() && matches!(*stage, Stage::Idle) {
                    if let Err(e) = self.backend.shutdown().await {
                        warn!("Failed to stop cancelled {} player: {}", self.backend.id(), e);
                    }
                }
                return Ok(LoadOutcome::Cancelled);
            }
        };

        if let Err(e) = launched {
            warn!("{} player failed to launch: {}", self.backend.id(), e);
            *stage = Stage::Idle;
            return Err(e);
        }

        let mut current = video_id.to_string();
        if let Some(pending) = pending {
            if let Err(e) = self.backend.cue(&pending).await {
                warn!("Failed to cue queued video {}: {}", pending, e);
            } else {
                current = pending;
            }
        }
        *stage = Stage::Ready { current };
        drop(stage);

        self.ready_tx.send_replace(true);
        Ok(LoadOutcome::Launched)
    }

    /// Currently loaded external id, once ready
    pub async fn current(&self) -> Option<String> {
        match &*self.stage.lock().await {
            Stage::Ready { current } => Some(current.clone()),
            _ => None,
        }
    }

    /// Returns Ok(false) without touching the player until it is ready
    pub async fn toggle_play_pause(&self) -> Result<bool> {
        if !self.is_ready() {
            debug!("Ignoring play/pause: player not ready");
            return Ok(false);
        }
        self.backend.toggle_pause().await?;
        Ok(true)
    }

    /// Returns Ok(false) without touching the player until it is ready
    pub async fn toggle_fullscreen(&self) -> Result<bool> {
        if !self.is_ready() {
            debug!("Ignoring fullscreen toggle: player not ready");
            return Ok(false);
        }
        self.backend.toggle_fullscreen().await?;
        Ok(true)
    }

    /// Stop the player; the next `load` launches a new one
    pub async fn close(&self) -> Result<()> {
        let mut stage = self.stage.lock().await;
        let was_running = !matches!(*stage, Stage::Idle);
        *stage = Stage::Idle;
        self.ready_tx.send_replace(false);
        drop(stage);

        if was_running {
            info!("Closing {} player", self.backend.id());
            self.backend.shutdown().await?;
        }
        Ok(())
    }
}
