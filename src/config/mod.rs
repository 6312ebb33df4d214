//! Configuration loading and management for the HR assistant.
//!
//! This module resolves the provider credential, listener, provider options,
//! lookup policy and frontend bundle location from the environment, with an
//! optional YAML overlay.
//!
//! # Example
//!
//! ```no_run
//! use hr_assistant::config::ConfigLoader;
//!
//! let settings = ConfigLoader::from_env().unwrap().into_settings();
//! println!("Listening on {}", settings.server.bind_address());
//! ```

mod loader;
mod types;

pub use loader::{API_KEY_VAR, CONFIG_FILE_VAR, ConfigLoader};
pub use types::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_MONTH, DEFAULT_PAID_LEAVE_QUOTA,
    DEFAULT_SICK_LEAVE_QUOTA, DEFAULT_TEAM_MEMBER_LIMIT, DEFAULT_TEMPERATURE, FrontendSettings,
    LookupPolicy, ProviderSettings, ServerSettings, Settings,
};
