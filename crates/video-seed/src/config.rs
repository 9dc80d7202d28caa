//! Seeding configuration loaded via OrthoConfig.
//!
//! Values come from `--kebab-case` flags, `VIDEO_SEED_*` environment
//! variables, or a configuration file, in OrthoConfig's usual precedence.

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;

use crate::domain::{PairingMode, VideoPolicy};
use crate::error::SeedRunError;

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Configuration values controlling a seeding run.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "VIDEO_SEED")]
pub struct SeedSettings {
    /// Base URL of the service's API, e.g. `http://localhost:5000/api`.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds. No timeout when unset or zero.
    pub timeout_secs: Option<u64>,
    /// Send every offered video instead of only the first.
    #[ortho_config(default = false)]
    pub attach_all_videos: bool,
    /// Pair ids and tokens per user instead of positionally.
    #[ortho_config(default = false)]
    pub pair_by_user: bool,
    /// Seed for reproducible picture assignment.
    pub picture_seed: Option<u64>,
    /// JSON catalogue replacing the built-in fixtures.
    pub fixtures_path: Option<PathBuf>,
    /// Emit logs as JSON lines.
    #[ortho_config(default = false)]
    pub json_logs: bool,
}

impl SeedSettings {
    /// Return the configured base URL, falling back to the local default.
    ///
    /// # Errors
    ///
    /// Returns [`SeedRunError::InvalidBaseUrl`] when the value does not parse
    /// or is not an `http`/`https` URL.
    pub fn base_url(&self) -> Result<Url, SeedRunError> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL).trim();
        let invalid = |message: String| SeedRunError::InvalidBaseUrl {
            value: raw.to_owned(),
            message,
        };
        let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }

    /// Return the request timeout, if one is configured.
    ///
    /// A zero timeout would fail every request, so it disables the limit.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Return the video policy selected by `attach_all_videos`.
    #[must_use]
    pub const fn video_policy(&self) -> VideoPolicy {
        if self.attach_all_videos {
            VideoPolicy::All
        } else {
            VideoPolicy::FirstOnly
        }
    }

    /// Return the pairing mode selected by `pair_by_user`.
    #[must_use]
    pub const fn pairing_mode(&self) -> PairingMode {
        if self.pair_by_user {
            PairingMode::ByUser
        } else {
            PairingMode::Positional
        }
    }
}
