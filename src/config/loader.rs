//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type, which assembles
//! [`Settings`] from an optional YAML file and the process environment.

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{AssistantError, AssistantResult};

use super::types::Settings;

/// Environment variable holding the model provider credential.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Environment variable pointing at an optional YAML settings file.
pub const CONFIG_FILE_VAR: &str = "HR_ASSISTANT_CONFIG";

/// Loads and provides access to application settings.
///
/// Settings are resolved in three layers, later layers winning:
///
/// 1. built-in defaults
/// 2. the YAML file named by `HR_ASSISTANT_CONFIG`, if set
/// 3. individual environment variables
///
/// | Variable | Setting |
/// |---|---|
/// | `GROQ_API_KEY` | provider credential (empty means absent) |
/// | `HOST`, `PORT` | listener |
/// | `LLM_BASE_URL`, `LLM_MODEL`, `LLM_TEMPERATURE`, `LLM_TIMEOUT_SECS` | provider |
/// | `DEFAULT_MONTH`, `SICK_LEAVE_QUOTA`, `PAID_LEAVE_QUOTA`, `TEAM_MEMBER_LIMIT` | lookup policy |
/// | `DIST_DIR` | frontend bundle directory |
///
/// # Example
///
/// ```
/// use hr_assistant::config::ConfigLoader;
///
/// let loader = ConfigLoader::from_lookup(|name| match name {
///     "PORT" => Some("9000".to_string()),
///     _ => None,
/// })
/// .unwrap();
///
/// assert_eq!(loader.settings().server.port, 9000);
/// assert!(loader.settings().provider.api_key.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: Settings,
}

impl ConfigLoader {
    /// Loads settings from the process environment.
    pub fn from_env() -> AssistantResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads settings, reading variables through `lookup`.
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the value of a named variable, or `None`
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `HR_ASSISTANT_CONFIG` names a missing or unparseable file
    /// - a numeric variable does not parse
    /// - the temperature is outside `0.0..=2.0`
    pub fn from_lookup<F>(lookup: F) -> AssistantResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut settings = match var(CONFIG_FILE_VAR) {
            Some(path) => Self::load_yaml(Path::new(&path))?,
            None => Settings::default(),
        };

        settings.provider.api_key = var(API_KEY_VAR);

        if let Some(host) = var("HOST") {
            settings.server.host = host;
        }
        if let Some(port) = parse_var(&var, "PORT")? {
            settings.server.port = port;
        }

        if let Some(base_url) = var("LLM_BASE_URL") {
            settings.provider.base_url = base_url;
        }
        if let Some(model) = var("LLM_MODEL") {
            settings.provider.model = model;
        }
        if let Some(temperature) = parse_var(&var, "LLM_TEMPERATURE")? {
            settings.provider.temperature = temperature;
        }
        if let Some(timeout_secs) = parse_var(&var, "LLM_TIMEOUT_SECS")? {
            settings.provider.timeout_secs = timeout_secs;
        }

        if let Some(month) = var("DEFAULT_MONTH") {
            settings.policy.default_month = month;
        }
        if let Some(quota) = parse_var(&var, "SICK_LEAVE_QUOTA")? {
            settings.policy.sick_leave_quota = quota;
        }
        if let Some(quota) = parse_var(&var, "PAID_LEAVE_QUOTA")? {
            settings.policy.paid_leave_quota = quota;
        }
        if let Some(limit) = parse_var(&var, "TEAM_MEMBER_LIMIT")? {
            settings.policy.team_member_limit = limit;
        }

        if let Some(dist_dir) = var("DIST_DIR") {
            settings.frontend.dist_dir = PathBuf::from(dist_dir);
        }

        Self::validate(&settings)?;

        Ok(Self { settings })
    }

    /// Loads settings from a YAML file only, ignoring the environment.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hr_assistant::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/assistant.yaml")?;
    /// println!("Model: {}", loader.settings().provider.model);
    /// # Ok::<(), hr_assistant::error::AssistantError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> AssistantResult<Self> {
        let settings = Self::load_yaml(path.as_ref())?;
        Self::validate(&settings)?;
        Ok(Self { settings })
    }

    /// Loads and parses a YAML file.
    fn load_yaml(path: &Path) -> AssistantResult<Settings> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AssistantError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| AssistantError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(settings: &Settings) -> AssistantResult<()> {
        let temperature = settings.provider.temperature;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(AssistantError::InvalidSetting {
                name: "temperature".to_string(),
                message: format!("must be between 0.0 and 2.0, got {}", temperature),
            });
        }
        if settings.policy.default_month.trim().is_empty() {
            return Err(AssistantError::InvalidSetting {
                name: "default_month".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Consumes the loader, returning the settings.
    pub fn into_settings(self) -> Settings {
        self.settings
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> AssistantResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| AssistantError::InvalidSetting {
                    name: name.to_string(),
                    message: format!("'{}': {}", raw, e),
                })
        })
        .transpose()
}
