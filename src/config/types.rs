//! Configuration types for the HR assistant.
//!
//! This module contains the strongly-typed settings structures. Every
//! section has defaults, so a YAML overlay only needs the keys it changes.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Default month label used when the model omits one.
pub const DEFAULT_MONTH: &str = "January 2026";

/// Default sick leave allowance per year, in days.
pub const DEFAULT_SICK_LEAVE_QUOTA: u32 = 10;

/// Default paid leave allowance per year, in days.
pub const DEFAULT_PAID_LEAVE_QUOTA: u32 = 15;

/// Default maximum number of team members returned by a team lookup.
pub const DEFAULT_TEAM_MEMBER_LIMIT: usize = 5;

/// Default OpenAI-compatible endpoint (Groq).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default sampling temperature for both round trips.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// The complete application settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Listener settings.
    pub server: ServerSettings,
    /// Model provider settings.
    pub provider: ProviderSettings,
    /// Business rules applied by the record lookups.
    pub policy: LookupPolicy,
    /// Prebuilt frontend bundle settings.
    pub frontend: FrontendSettings,
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerSettings {
    /// Returns the `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Model provider settings.
///
/// The credential is only ever read from the environment and is redacted
/// from `Debug` output.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// API credential; `None` puts the assistant in "not configured" mode.
    #[serde(skip)]
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API (without `/chat/completions`).
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature for both round trips.
    pub temperature: f32,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: 60,
        }
    }
}

impl ProviderSettings {
    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Business rules for the record lookups.
///
/// The quotas are fixed company policy rather than anything derived from
/// the supplied records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LookupPolicy {
    /// Month label used when a salary or attendance lookup has no month.
    pub default_month: String,
    /// Sick leave allowance in days.
    pub sick_leave_quota: u32,
    /// Paid leave allowance in days.
    pub paid_leave_quota: u32,
    /// Maximum number of colleagues a team lookup returns.
    pub team_member_limit: usize,
}

impl Default for LookupPolicy {
    fn default() -> Self {
        Self {
            default_month: DEFAULT_MONTH.to_string(),
            sick_leave_quota: DEFAULT_SICK_LEAVE_QUOTA,
            paid_leave_quota: DEFAULT_PAID_LEAVE_QUOTA,
            team_member_limit: DEFAULT_TEAM_MEMBER_LIMIT,
        }
    }
}

/// Location of the prebuilt single-page application.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontendSettings {
    /// Directory holding `index.html` and `assets/`.
    pub dist_dir: PathBuf,
}

impl Default for FrontendSettings {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from("dist"),
        }
    }
}
