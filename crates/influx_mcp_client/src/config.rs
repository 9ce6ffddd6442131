//! Connection settings for the InfluxDB HTTP API.

use derive_getters::Getters;
use influx_mcp_error::{ConfigError, InfluxMcpResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};
use typed_builder::TypedBuilder;

/// URL used when none is configured.
pub const DEFAULT_URL: &str = "http://localhost:8086";
/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the InfluxDB base URL.
pub const ENV_URL: &str = "INFLUXDB_URL";
/// Environment variable holding the API token.
pub const ENV_TOKEN: &str = "INFLUXDB_TOKEN";
/// Environment variable holding the default organization.
pub const ENV_ORG: &str = "INFLUXDB_ORG";
/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "INFLUXDB_TIMEOUT_SECS";

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// InfluxDB connection configuration.
///
/// Loaded from a TOML file, from `INFLUXDB_*` environment variables, or
/// both with the environment taking precedence. The file may leave out the
/// token so that it can come from the environment instead; serializing never
/// writes the token back out.
///
/// ```toml
/// url = "http://localhost:8086"
/// token = "my-token"
/// org = "my-org"
/// timeout_secs = 10
/// ```
#[derive(Clone, Deserialize, Serialize, Getters, TypedBuilder)]
pub struct InfluxConfig {
    /// Base URL of the InfluxDB server
    #[serde(default = "default_url")]
    #[builder(default = default_url(), setter(into))]
    url: String,
    /// API token sent as `Authorization: Token …`
    #[serde(default, skip_serializing)]
    #[builder(setter(into))]
    token: String,
    /// Default organization for resources that do not name one
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    org: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    #[builder(default = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

impl InfluxConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when `INFLUXDB_TOKEN` is unset or any value is invalid.
    pub fn from_env() -> InfluxMcpResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    #[instrument(skip(lookup))]
    pub fn from_lookup<F>(lookup: F) -> InfluxMcpResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(ENV_TOKEN)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ConfigError::new(format!("{} is not set", ENV_TOKEN)))?;

        Self::builder().token(token).build().with_overrides(lookup)
    }

    /// Loads configuration from a TOML file.
    ///
    /// The result is not validated, since a missing token is usually
    /// supplied afterwards through [`InfluxConfig::with_overrides`], which
    /// validates the merged configuration.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> InfluxMcpResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        debug!(url = %config.url, "Loaded config file");
        Ok(config)
    }

    /// Replaces fields with any non-empty values found through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> InfluxMcpResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(url) = non_empty(ENV_URL) {
            self.url = url;
        }
        if let Some(token) = non_empty(ENV_TOKEN) {
            self.token = token;
        }
        if let Some(org) = non_empty(ENV_ORG) {
            self.org = Some(org);
        }
        if let Some(timeout) = non_empty(ENV_TIMEOUT_SECS) {
            self.timeout_secs = timeout.parse().map_err(|e| {
                ConfigError::new(format!("{} must be a number of seconds: {}", ENV_TIMEOUT_SECS, e))
            })?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Checks that the configuration can be used to build a client.
    pub fn validate(&self) -> InfluxMcpResult<()> {
        if self.token.trim().is_empty() {
            return Err(ConfigError::new("token must not be empty").into());
        }

        let url = reqwest::Url::parse(&self.url)
            .map_err(|e| ConfigError::new(format!("Invalid url '{}': {}", self.url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::new(format!(
                "Unsupported url scheme '{}', expected http or https",
                url.scheme()
            ))
            .into());
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::new("timeout_secs must be greater than zero").into());
        }

        Ok(())
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl std::fmt::Debug for InfluxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfluxConfig")
            .field("url", &self.url)
            .field("token", &"<redacted>")
            .field("org", &self.org)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
