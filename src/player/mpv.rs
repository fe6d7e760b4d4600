//! mpv driven over its JSON IPC socket
//!
//! The player is started idle with `--input-ipc-server`, then every command is
//! a newline-terminated JSON object written to a fresh connection. mpv answers
//! with `{"error": "success", ...}`; asynchronous event lines that arrive
//! before the reply are skipped.

use crate::api::models::WATCH_URL_BASE;
use crate::player::traits::PlayerBackend;
use crate::utils::error::YogatubeError;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

const SOCKET_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct MpvPlayer {
    binary: PathBuf,
    socket: String,
    startup_timeout: Duration,
    child: Mutex<Option<Child>>,
    request_id: AtomicU64,
}

impl MpvPlayer {
    /// Locate mpv and prepare a player with a unique IPC endpoint
    pub fn new(startup_timeout: Duration) -> Result<Self> {
        let binary = find_mpv().ok_or(YogatubeError::PlayerNotFound)?;
        info!("Found mpv at: {}", binary.display());
        Ok(Self::with_binary(binary, startup_timeout))
    }

    pub fn with_binary(binary: impl Into<PathBuf>, startup_timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            socket: ipc_endpoint(),
            startup_timeout,
            child: Mutex::new(None),
            request_id: AtomicU64::new(1),
        }
    }

    pub fn socket(&self) -> &str {
        &self.socket
    }

    async fn command(&self, args: Vec<Value>) -> Result<Value> {
        let request_id = self.request_id.fetch_add(1, Ordering::Relaxed);
        let line = ipc_command(&args, request_id);
        debug!("mpv <- {}", line.trim_end());
        let stream = connect_ipc(&self.socket).await?;
        exchange(stream, &line).await
    }

    async fn wait_for_socket(&self) -> Result<()> {
        let started = Instant::now();
        loop {
            if connect_ipc(&self.socket).await.is_ok() {
                return Ok(());
            }

            match self.child.lock().await.as_mut() {
                Some(child) => {
                    if let Some(status) = child.try_wait()? {
                        return Err(YogatubeError::PlayerError(format!(
                            "mpv exited during startup with {}",
                            status
                        ))
                        .into());
                    }
                }
                // Taken by shutdown
                None => {
                    return Err(YogatubeError::PlayerError(
                        "mpv was stopped during startup".to_string(),
                    )
                    .into());
                }
            }

            if started.elapsed() >= self.startup_timeout {
                return Err(YogatubeError::PlayerError(format!(
                    "mpv IPC socket {} did not appear within {:?}",
                    self.socket, self.startup_timeout
                ))
                .into());
            }
            tokio::time::sleep(SOCKET_POLL_INTERVAL).await;
        }
    }
}

#[async_trait]
impl PlayerBackend for MpvPlayer {
    fn id(&self) -> &'static str {
        "mpv"
    }

    async fn launch(&self, video_id: &str) -> Result<()> {
        let url = format!("{}{}", WATCH_URL_BASE, video_id);
        info!("Launching mpv for {}", url);

        let child = Command::new(&self.binary)
            .args(launch_args(&self.socket, &url))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;
        *self.child.lock().await = Some(child);

        self.wait_for_socket().await
    }

    async fn cue(&self, video_id: &str) -> Result<()> {
        let url = format!("{}{}", WATCH_URL_BASE, video_id);
        self.command(vec![json!("set_property"), json!("pause"), json!(true)])
            .await?;
        self.command(vec![json!("loadfile"), json!(url), json!("replace")])
            .await?;
        Ok(())
    }

    async fn toggle_pause(&self) -> Result<()> {
        self.command(vec![json!("cycle"), json!("pause")]).await?;
        Ok(())
    }

    async fn toggle_fullscreen(&self) -> Result<()> {
        self.command(vec![json!("cycle"), json!("fullscreen")])
            .await?;
        Ok(())
    }

    async fn shutdown(&self) -> Result<()> {
        let Some(mut child) = self.child.lock().await.take() else {
            return Ok(());
        };
        if let Err(e) = self.command(vec![json!("quit")]).await {
            warn!("mpv did not accept quit, killing it: {}", e);
            child.kill().await?;
        } else {
            child.wait().await?;
        }
        #[cfg(unix)]
        {
            let _ = std::fs::remove_file(&self.socket);
        }
        Ok(())
    }
}

/// Start idle and paused, so the first video is cued like every later one
pub fn launch_args(socket: &str, url: &str) -> Vec<String> {
    vec![
        "--idle=yes".to_string(),
        "--force-window=yes".to_string(),
        "--keep-open=yes".to_string(),
        "--pause=yes".to_string(),
        format!("--input-ipc-server={}", socket),
        url.to_string(),
    ]
}

/// Serialize one IPC request line
pub fn ipc_command(args: &[Value], request_id: u64) -> String {
    let mut line = json!({ "command": args, "request_id": request_id }).to_string();
    line.push('\n');
    line
}

/// Write `line` and wait for the matching reply
pub async fn exchange<S>(stream: S, line: &str) -> Result<Value>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (reader, mut writer) = tokio::io::split(stream);
    writer.write_all(line.as_bytes()).await?;
    writer.flush().await?;

    let mut lines = BufReader::new(reader).lines();
    while let Some(reply) = lines.next_line().await? {
        let value: Value = match serde_json::from_str(&reply) {
            Ok(v) => v,
            Err(e) => {
                debug!("Skipping unparseable mpv line {:?}: {}", reply, e);
                continue;
            }
        };
        // Event lines carry "event" and no "error"
        let Some(status) = value.get("error").and_then(Value::as_str) else {
            continue;
        };
        if status == "success" {
            return Ok(value.get("data").cloned().unwrap_or(Value::Null));
        }
        return Err(anyhow!("mpv rejected command: {}", status));
    }
    Err(anyhow!("mpv closed the IPC connection without replying"))
}

#[cfg(unix)]
fn ipc_endpoint() -> String {
    std::env::temp_dir()
        .join(format!("yogatube-mpv-{}.sock", Uuid::new_v4()))
        .to_string_lossy()
        .to_string()
}

#[cfg(windows)]
fn ipc_endpoint() -> String {
    format!(r"\\.\pipe\yogatube-mpv-{}", Uuid::new_v4())
}

#[cfg(unix)]
async fn connect_ipc(endpoint: &str) -> std::io::Result<tokio::net::UnixStream> {
    tokio::net::UnixStream::connect(endpoint).await
}

#[cfg(windows)]
async fn connect_ipc(
    endpoint: &str,
) -> std::io::Result<tokio::net::windows::named_pipe::NamedPipeClient> {
    tokio::net::windows::named_pipe::ClientOptions::new().open(endpoint)
}

// ============================================================
// mpv Detection Functions
// ============================================================

/// Find mpv binary: PATH first, then common installation paths
pub fn find_mpv() -> Option<PathBuf> {
    if let Ok(path) = which::which("mpv") {
        debug!("Using mpv from PATH: {:?}", path);
        return Some(path);
    }

    let common_paths = [
        // macOS Homebrew (Apple Silicon)
        "/opt/homebrew/bin/mpv",
        // macOS Homebrew (Intel)
        "/usr/local/bin/mpv",
        // System
        "/usr/bin/mpv",
        // macOS app bundle
        "/Applications/mpv.app/Contents/MacOS/mpv",
        // Windows (scoop / manual install)
        r"C:\Program Files\mpv\mpv.exe",
    ];

    common_paths
        .iter()
        .map(Path::new)
        .find(|path| path.is_file())
        .map(Path::to_path_buf)
}
