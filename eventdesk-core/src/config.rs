//! Client configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, Map};
use serde::Deserialize;
use url::Url;

use crate::error::{EventDeskError, EventDeskResult};

static DEFAULT_BASE_URL: &str = "https://eventmanagementsystem-backend-4.onrender.com";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Configuration at ~/.config/eventdesk/config.toml, overridable with
/// `EVENTDESK_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Service root; requests go to `{base_url}/events`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. Unset means requests wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl DeskConfig {
    pub fn config_path() -> EventDeskResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventDeskError::Config("Could not determine config directory".into()))?
            .join("eventdesk");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented-out template on first use.
    pub fn load() -> EventDeskResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> EventDeskResult<Self> {
        Self::load_with_env(path, None)
    }

    /// Load `path`, then apply `EVENTDESK_*` variables from `env`
    /// (the process environment when `None`).
    pub fn load_with_env(path: &Path, env: Option<Map<String, String>>) -> EventDeskResult<Self> {
        let config: DeskConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("EVENTDESK")
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .map_err(|e| EventDeskError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventDeskError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Replace the base URL, e.g. from a command-line flag.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> EventDeskResult<Self> {
        self.base_url = base_url.into();
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> EventDeskResult<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            EventDeskError::Config(format!("Invalid base_url '{}': {e}", self.base_url))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(EventDeskError::Config(format!(
                "base_url must be http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventDeskResult<()> {
        let contents = format!(
            "\
# eventdesk configuration

# Root of the events service (requests go to <base_url>/events):
# base_url = \"{}\"

# Give up on a request after this many seconds (default: wait forever):
# timeout_secs = 30
",
            DEFAULT_BASE_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventDeskError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventDeskError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        DeskConfig::create_default_config(&path).unwrap();
        let config = DeskConfig::load_from(&path).unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = \"http://localhost:8080\"\ntimeout_secs = 5\n").unwrap();

        let config = DeskConfig::load_from(&path).unwrap();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[test]
    fn environment_beats_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = \"http://localhost:8080\"\ntimeout_secs = 5\n").unwrap();

        let mut env = Map::new();
        env.insert("EVENTDESK_BASE_URL".to_string(), "http://10.0.0.2:9000".to_string());
        env.insert("EVENTDESK_TIMEOUT_SECS".to_string(), "12".to_string());

        let config = DeskConfig::load_with_env(&path, Some(env)).unwrap();

        assert_eq!(config.base_url, "http://10.0.0.2:9000");
        assert_eq!(config.timeout_secs, Some(12));
    }

    #[test]
    fn invalid_environment_url_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut env = Map::new();
        env.insert("EVENTDESK_BASE_URL".to_string(), "not a url".to_string());

        let err = DeskConfig::load_with_env(&path, Some(env)).unwrap_err();
        assert!(matches!(err, EventDeskError::Config(_)));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = \"ftp://files.example\"\n").unwrap();

        let err = DeskConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, EventDeskError::Config(_)));
    }

    #[test]
    fn with_base_url_validates() {
        assert!(DeskConfig::default().with_base_url("not a url").is_err());

        let config = DeskConfig::default()
            .with_base_url("http://127.0.0.1:3000")
            .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:3000");
    }
}
