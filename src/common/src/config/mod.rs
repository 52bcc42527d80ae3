use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

/// File read from the working directory when no `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = "afya.toml";
/// Prefix of environment overrides, nested keys split on `__`.
pub const ENV_PREFIX: &str = "AFYA__";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid GraphQL endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

/// Where and how the `GetMetrics` query is sent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphQlConfig {
    /// Full URL of the GraphQL endpoint
    pub endpoint: String,
    /// Bearer token for the `Authorization` header. No header is sent when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl Default for GraphQlConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            auth_token: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Interval between redraws
    #[serde(with = "humantime_serde")]
    pub render_interval: Duration,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            render_interval: Duration::from_millis(33),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Configuration {
    /// GraphQL transport configuration
    pub graphql: GraphQlConfig,
    /// Terminal UI configuration
    pub tui: TuiConfig,
}

impl Configuration {
    /// Load defaults, then `afya.toml`, then `AFYA__*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment(Path::new(DEFAULT_CONFIG_FILE))
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Like [`Configuration::load`] but reading the given TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        Self::figment(path)
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Configuration::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check that the endpoint is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = &self.graphql.endpoint;
        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            endpoint: endpoint.clone(),
            reason,
        };

        let url = url::Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }

    /// Copy safe to print: the auth token is masked.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.graphql.auth_token.is_some() {
            config.graphql.auth_token = Some("***".to_string());
        }
        config
    }
}
