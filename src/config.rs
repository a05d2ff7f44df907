use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Url;
use serde::Deserialize;

use crate::types::Credentials;

const DEFAULT_API_BASE_URL: &str = "https://be-recruitment-task.onrender.com";
const DEFAULT_LOOKUP_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api: ApiSection,
    pub lookup: LookupSection,
    pub http: HttpSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// Precedence, lowest first: defaults, `config.toml` (or `POLLUTION_CONFIG`),
    /// `POLLUTION_*` variables, then the plain `API_BASE_URL`-style variables.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("POLLUTION_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut config = Self::load_from_path(&config_path)?;
        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Load from an optional TOML file plus `POLLUTION_*` environment variables.
    pub fn load_from_path(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        let mut builder = config::Config::builder();

        if config_path.exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("POLLUTION")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }

    /// Apply the un-prefixed variables the service has always honoured.
    pub fn apply_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("API_BASE_URL") {
            self.api.base_url = url;
        }
        if let Some(username) = var("API_USERNAME") {
            self.api.username = username;
        }
        if let Some(password) = var("API_PASSWORD") {
            self.api.password = password;
        }
        if let Some(url) = var("WIKIPEDIA_API_URL") {
            self.lookup.base_url = url;
        }
        if let Some(port) = var("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT '{}'", port))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        parse_base_url("api.base_url", &self.api.base_url)?;
        parse_base_url("lookup.base_url", &self.lookup.base_url)?;

        if self.api.username.is_empty() {
            bail!("api.username must be specified");
        }
        if self.http.timeout_secs == 0 {
            bail!("http.timeout_secs must be greater than zero");
        }

        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.api.username.clone(),
            password: self.api.password.clone(),
        }
    }
}

fn parse_base_url(field: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("{} is not a valid URL", field))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("{} must use http or https, got '{}'", field, other),
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Upstream pollution API
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            username: "testuser".to_string(),
            password: "testpass".to_string(),
        }
    }
}

impl std::fmt::Debug for ApiSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSection")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Summary lookup service
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LookupSection {
    pub base_url: String,
}

impl Default for LookupSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LOOKUP_BASE_URL.to_string(),
        }
    }
}

/// Settings shared by every outbound request
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpSection {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl HttpSection {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpSection {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("pollution-enricher/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}
