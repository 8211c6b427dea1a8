//! Configuration types for the beacon frontend

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the backend base URL override
pub const BACKEND_URL_VAR: &str = "BEACON_BACKEND_URL";

/// Environment variable holding the build environment tag
pub const ENVIRONMENT_VAR: &str = "BEACON_ENV";

/// Base URL used when no override is present
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Path of the greeting endpoint
pub const HELLO_PATH: &str = "/api/hello";

/// Path of the server status endpoint
pub const STATUS_PATH: &str = "/api/status";

/// Main configuration structure, loaded from an optional JSON file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend_url: Option<String>,
    /// Per-request timeout, e.g. `"10s"`. The transport default applies when unset.
    #[serde(default, with = "humantime_serde")]
    pub request_timeout: Option<Duration>,
    #[serde(default)]
    pub environment: Option<String>,
}

/// Raw values of the environment overrides, captured once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvOverrides {
    pub backend_url: Option<String>,
    pub environment: Option<String>,
}

impl EnvOverrides {
    /// Read the overrides from the process environment.
    pub fn from_process_env() -> Self {
        Self {
            backend_url: std::env::var(BACKEND_URL_VAR).ok(),
            environment: std::env::var(ENVIRONMENT_VAR).ok(),
        }
    }

    /// Read the overrides baked in at compile time. Used by the browser app,
    /// which has no process environment.
    pub fn from_build_env() -> Self {
        Self {
            backend_url: option_env!("BEACON_BACKEND_URL").map(str::to_string),
            environment: option_env!("BEACON_ENV").map(str::to_string),
        }
    }
}

/// Immutable configuration handed to the orchestrator and the debug panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub request_timeout: Option<Duration>,
    pub environment: String,
    pub env_overrides: EnvOverrides,
}

impl ResolvedConfig {
    /// Resolve the final configuration. Environment overrides win over the
    /// config file, which wins over the built-in defaults.
    pub fn resolve(config: &Config, env: EnvOverrides) -> Self {
        Self::resolve_with_cli(config, env, None)
    }

    /// Like [`ResolvedConfig::resolve`], with a command-line base URL taking
    /// precedence over everything else. `env` is kept as given, so the
    /// snapshot still reports the real environment.
    pub fn resolve_with_cli(config: &Config, env: EnvOverrides, cli_url: Option<&str>) -> Self {
        let raw_url = non_empty(cli_url)
            .or_else(|| non_empty(env.backend_url.as_deref()))
            .or_else(|| non_empty(config.backend_url.as_deref()));
        let environment = non_empty(env.environment.as_deref())
            .or_else(|| non_empty(config.environment.as_deref()))
            .map(str::to_string)
            .unwrap_or_else(|| default_environment().to_string());

        let base_url = normalize_base_url(raw_url);
        tracing::debug!("Resolved backend base URL: {}", base_url);

        Self {
            base_url,
            request_timeout: config.request_timeout,
            environment,
            env_overrides: env,
        }
    }

    pub fn hello_url(&self) -> String {
        format!("{}{}", self.base_url, HELLO_PATH)
    }

    pub fn status_url(&self) -> String {
        format!("{}{}", self.base_url, STATUS_PATH)
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self::resolve(&Config::default(), EnvOverrides::default())
    }
}

/// Normalize a raw base URL: fall back to the default when empty, prepend
/// `https://` when no scheme is present, and drop trailing slashes.
///
/// A value with nothing left after the scheme (`"/"`, `"http://"`) counts as
/// empty.
pub fn normalize_base_url(raw: Option<&str>) -> String {
    let Some(raw) = non_empty(raw) else {
        return DEFAULT_BACKEND_URL.to_string();
    };

    let (scheme, rest) = match raw.split_once("://") {
        Some((scheme, rest)) if !scheme.is_empty() => (scheme, rest),
        Some((_, rest)) => ("https", rest),
        None => ("https", raw),
    };

    let rest = rest.trim_end_matches('/');
    if rest.trim_start_matches('/').is_empty() {
        tracing::debug!("Base URL {:?} has no host, using the default", raw);
        return DEFAULT_BACKEND_URL.to_string();
    }

    format!("{}://{}", scheme, rest)
}

/// Build environment tag used when no override is present
pub fn default_environment() -> &'static str {
    if cfg!(debug_assertions) {
        "development"
    } else {
        "production"
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::BeaconError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
