//! Application configuration

use crate::utils::error::Result;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Prefix for environment overrides, e.g. `YOGATUBE_API_DOMAIN`
pub const ENV_PREFIX: &str = "YOGATUBE_";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Base URL of the catalog API
    pub api_domain: String,

    /// Which player backend to drive
    pub player: PlayerChoice,

    /// Explicit mpv binary, skips PATH lookup when set
    pub mpv_path: Option<PathBuf>,

    /// How long informational notices stay visible (milliseconds)
    pub notice_duration_ms: u64,

    /// How long to wait for the player IPC socket (milliseconds)
    pub player_startup_timeout_ms: u64,

    /// Start in dark mode
    pub dark_mode: bool,

    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_domain: "http://localhost:8080".to_string(),
            player: PlayerChoice::Auto,
            mpv_path: None,
            notice_duration_ms: 3000,
            player_startup_timeout_ms: 10_000,
            dark_mode: false,
            log_level: "info".to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from the default config file and environment
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path().as_deref())
    }

    /// Load settings: defaults, then `path` (if it exists), then `YOGATUBE_*` env
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(AppSettings::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        let settings: AppSettings = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        Ok(settings.normalized())
    }

    /// Trim the trailing slash off the domain and enforce sane minimums
    pub fn normalized(mut self) -> Self {
        while self.api_domain.ends_with('/') {
            self.api_domain.pop();
        }
        if self.notice_duration_ms == 0 {
            self.notice_duration_ms = 1000;
        }
        self
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }

    pub fn player_startup_timeout(&self) -> Duration {
        Duration::from_millis(self.player_startup_timeout_ms)
    }
}

/// `<config_dir>/yogatube/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("yogatube").join("config.toml"))
}

/// Player backend options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerChoice {
    /// mpv when installed, otherwise the browser
    Auto,
    Mpv,
    Browser,
}

impl PlayerChoice {
    pub const ALL: [PlayerChoice; 3] = [PlayerChoice::Auto, PlayerChoice::Mpv, PlayerChoice::Browser];

    /// Get string representation for display
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerChoice::Auto => "Automatic",
            PlayerChoice::Mpv => "mpv",
            PlayerChoice::Browser => "Web Browser",
        }
    }
}

impl fmt::Display for PlayerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
