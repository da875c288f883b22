//! Client configuration resolved at build time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";
pub const STATUS_POLL_INTERVAL: Duration = Duration::from_secs(5);
pub const STAGE_POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const NOTICE_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash, e.g. `http://localhost:8000/api`.
    pub api_base: String,
    /// Cadence of the shared work-status poll.
    pub status_poll: Duration,
    /// Cadence of the active stage view's poll.
    pub stage_poll: Duration,
    /// How long a toast stays on screen.
    pub notice_lifetime: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            status_poll: STATUS_POLL_INTERVAL,
            stage_poll: STAGE_POLL_INTERVAL,
            notice_lifetime: NOTICE_LIFETIME,
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment.
    ///
    /// Optional:
    /// - `WORKSHOP_API_BASE`: API root, default `http://localhost:8000/api`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("WORKSHOP_API_BASE"))
    }

    fn with_api_base(raw: Option<&str>) -> Self {
        Self { api_base: normalize_api_base(raw), ..Self::default() }
    }

    /// Absolute URL for an API path such as `/work/status`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

fn normalize_api_base(raw: Option<&str>) -> String {
    let trimmed = raw.unwrap_or_default().trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}
