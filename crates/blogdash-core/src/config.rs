//! Configuration management for the BlogDash dashboard

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Remote API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Post list configuration
    #[serde(default)]
    pub posts: PostsConfig,

    /// Session persistence configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (ignored in the browser)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Post list configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsConfig {
    /// Number of posts requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

/// Session persistence configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// File holding the persisted session outside the browser
    #[serde(default = "default_session_path")]
    pub path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_base_url() -> String {
    option_env!("BLOGDASH_API_BASE_URL")
        .unwrap_or("http://localhost:5000/api")
        .to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_page_size() -> u32 {
    10
}

fn default_session_path() -> PathBuf {
    PathBuf::from("./blogdash-session.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Environment variable that overrides `api.base_url`, shared with the browser build
pub const BASE_URL_ENV: &str = "BLOGDASH_API_BASE_URL";

impl Config {
    /// Load configuration from an optional `blogdash.*` file in the working
    /// directory and `BLOGDASH_*` environment variables
    ///
    /// Nested keys use a double underscore (`BLOGDASH_POSTS__PAGE_SIZE`);
    /// `BLOGDASH_API_BASE_URL` overrides the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> crate::Result<Self> {
        Self::load_file(None)
    }

    /// Like [`Config::load`], reading `path` instead of `blogdash.*`
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, or the merged
    /// configuration cannot be parsed or validated.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: Option<&std::path::Path>) -> crate::Result<Self> {
        Self::build(
            path,
            Self::environment(),
            std::env::var(BASE_URL_ENV).ok(),
        )
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn environment() -> config::Environment {
        config::Environment::with_prefix("BLOGDASH")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn build(
        path: Option<&std::path::Path>,
        environment: config::Environment,
        base_url: Option<String>,
    ) -> crate::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("blogdash").required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(environment)
            .set_override_option("api.base_url", base_url.filter(|url| !url.is_empty()))
            .and_then(config::ConfigBuilder::<config::builder::DefaultState>::build)
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config.validate()?;
        tracing::debug!(
            base_url = %config.api.base_url,
            page_size = config.posts.page_size,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Reject values the dashboard cannot work with
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field.
    pub fn validate(&self) -> crate::Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(crate::Error::Validation {
                field: "api.base_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.posts.page_size == 0 {
            return Err(crate::Error::Validation {
                field: "posts.page_size".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Base URL without a trailing slash
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::field_reassign_with_default)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert!(!config.api.base_url.is_empty());
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.posts.page_size, 10);
        assert_eq!(
            config.session.path,
            PathBuf::from("./blogdash-session.json")
        );
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "text");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_deserialization() {
        let json_str = r#"{
            "api": {"base_url": "https://blog.example.com/api/"},
            "posts": {}
        }"#;

        let config: Config = serde_json::from_str(json_str).unwrap();

        assert_eq!(config.api.base_url, "https://blog.example.com/api/");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.posts.page_size, 10);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_api_base_url_trims_trailing_slash() {
        let mut config = Config::default();
        config.api.base_url = "https://blog.example.com/api//".to_string();

        assert_eq!(config.api_base_url(), "https://blog.example.com/api");
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let mut config = Config::default();
        config.api.base_url = "   ".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api.base_url"));
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config = Config::default();
        config.posts.page_size = 0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("posts.page_size"));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = Config::load().unwrap();

        assert_eq!(config.posts.page_size, 10);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    fn env(pairs: &[(&str, &str)]) -> config::Environment {
        let vars = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::environment().source(Some(vars))
    }

    #[test]
    fn test_nested_env_vars_reach_sections() {
        let config = Config::build(
            None,
            env(&[
                ("BLOGDASH_API__BASE_URL", "https://blog.example.com/api"),
                ("BLOGDASH_POSTS__PAGE_SIZE", "25"),
                ("BLOGDASH_LOGGING__FORMAT", "json"),
            ]),
            None,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://blog.example.com/api");
        assert_eq!(config.posts.page_size, 25);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_base_url_variable_overrides_everything() {
        let config = Config::build(
            None,
            env(&[("BLOGDASH_API__BASE_URL", "https://nested.example.com/api")]),
            Some("https://flat.example.com/api".to_string()),
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://flat.example.com/api");

        let config = Config::build(None, env(&[]), Some(String::new())).unwrap();
        assert_eq!(config.api.base_url, ApiConfig::default().base_url);
    }

    #[test]
    fn test_load_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        std::fs::write(
            &path,
            "[api]\nbase_url = \"https://file.example.com/api\"\n\n[posts]\npage_size = 5\n",
        )
        .unwrap();

        let config = Config::build(Some(&path), env(&[]), None).unwrap();
        assert_eq!(config.api.base_url, "https://file.example.com/api");
        assert_eq!(config.posts.page_size, 5);

        let missing = dir.path().join("missing.toml");
        assert!(Config::build(Some(&missing), env(&[]), None).is_err());
    }

    #[test]
    fn test_invalid_env_value_is_rejected() {
        let err = Config::build(None, env(&[("BLOGDASH_POSTS__PAGE_SIZE", "0")]), None).unwrap_err();
        assert!(err.to_string().contains("posts.page_size"));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();

        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, config);
    }
}
