//! YAML configuration for the gateway process.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::{
    core::{GeckoClient, GeckoError, TtlCache},
    provider::{DEFAULT_FAN_OUT, Provider},
    resolve::SymbolResolver,
};

/// Top-level configuration file layout.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    pub app: AppConfig,
    #[serde(default)]
    pub coingecko: CoingeckoConfig,
}

/// Inbound server and logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Listen address, e.g. `0.0.0.0:8080`.
    pub address: String,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log to this file in addition to stdout.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Upper bound for handling one inbound request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// How long in-flight requests may run after a shutdown signal.
    #[serde(default = "default_shutdown_timeout_secs")]
    pub shutdown_timeout_secs: u64,
}

/// Log line encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable text.
    Text,
}

/// Upstream settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoingeckoConfig {
    pub api: String,
    pub request_timeout_ms: u64,
    pub list_timeout_ms: u64,
    pub connect_timeout_ms: Option<u64>,
    /// Lifetime of resolved symbols; unset keeps them for the life of the process.
    pub cache_ttl_secs: Option<u64>,
    pub cache_sweep_secs: u64,
    pub enrichment_concurrency: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

const fn default_shutdown_timeout_secs() -> u64 {
    15
}

impl AppConfig {
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

impl Default for CoingeckoConfig {
    fn default() -> Self {
        Self {
            api: "https://api.coingecko.com/api/v3".to_string(),
            request_timeout_ms: 1_000,
            list_timeout_ms: 10_000,
            connect_timeout_ms: None,
            cache_ttl_secs: None,
            cache_sweep_secs: 600,
            enrichment_concurrency: DEFAULT_FAN_OUT,
        }
    }
}

impl GatewayConfig {
    /// Read and validate a YAML file.
    ///
    /// # Errors
    ///
    /// [`GeckoError::Config`] if the file cannot be read, is not valid YAML for this
    /// layout, or fails validation.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GeckoError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| GeckoError::Config(format!("can't read {}: {e}", path.display())))?;
        Self::from_yaml_str(&text)
    }

    /// Parse and validate YAML text.
    ///
    /// # Errors
    ///
    /// [`GeckoError::Config`] on malformed YAML or failed validation.
    pub fn from_yaml_str(text: &str) -> Result<Self, GeckoError> {
        let cfg: Self = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), GeckoError> {
        if self.app.address.trim().is_empty() {
            return Err(GeckoError::Config("app.address must not be empty".into()));
        }
        if self.app.request_timeout_secs == 0 {
            return Err(GeckoError::Config(
                "app.request_timeout_secs must be at least 1".into(),
            ));
        }
        self.coingecko.api_url()?;
        if self.coingecko.enrichment_concurrency == 0 {
            return Err(GeckoError::Config(
                "coingecko.enrichment_concurrency must be at least 1".into(),
            ));
        }
        if self.coingecko.cache_sweep_secs == 0 {
            return Err(GeckoError::Config(
                "coingecko.cache_sweep_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl CoingeckoConfig {
    pub fn api_url(&self) -> Result<Url, GeckoError> {
        Url::parse(&self.api)
            .map_err(|e| GeckoError::Config(format!("coingecko.api '{}': {e}", self.api)))
    }

    pub const fn cache_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.cache_sweep_secs)
    }

    /// Build the transport client described by this section.
    ///
    /// # Errors
    ///
    /// Bad base URL or a client that cannot be constructed.
    pub fn build_client(&self) -> Result<GeckoClient, GeckoError> {
        let mut builder = GeckoClient::builder()
            .base_url(self.api_url()?)
            .request_timeout(Duration::from_millis(self.request_timeout_ms))
            .list_timeout(Duration::from_millis(self.list_timeout_ms));
        if let Some(ms) = self.connect_timeout_ms {
            builder = builder.connect_timeout(Duration::from_millis(ms));
        }
        builder.build()
    }

    /// Build client, resolution cache and provider in one go.
    ///
    /// # Errors
    ///
    /// See [`CoingeckoConfig::build_client`].
    pub fn build_provider(&self) -> Result<Provider, GeckoError> {
        let client = self.build_client()?;
        let cache = Arc::new(TtlCache::with_default_ttl(
            self.cache_ttl_secs.map(Duration::from_secs),
        ));
        let resolver = SymbolResolver::with_cache(client.clone(), cache);
        Ok(Provider::with_resolver(client, resolver).fan_out(self.enrichment_concurrency))
    }
}
