//! Public client surface + builder.
//! Defaults (UA, base address, timeouts) live in `constants`.

mod constants;

use crate::core::{GeckoError, net};
use constants::{DEFAULT_BASE_URL, DEFAULT_LIST_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, USER_AGENT};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Thin transport over the upstream REST API.
///
/// Every call is a single request with an explicit timeout. Non-2xx answers become
/// [`GeckoError::Status`]; nothing is retried. Cloning is cheap and shares the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct GeckoClient {
    http: Client,
    base_url: Url,
    request_timeout: Duration,
    list_timeout: Duration,
}

impl Default for GeckoClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl GeckoClient {
    /// Create a new builder.
    pub fn builder() -> GeckoClientBuilder {
        GeckoClientBuilder::default()
    }

    /// The upstream base address endpoint paths are appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Timeout applied to single data fetches.
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Timeout applied to the bulk coin-list fetch.
    pub const fn list_timeout(&self) -> Duration {
        self.list_timeout
    }

    /// Build the URL for `segments` below the base address.
    ///
    /// Segments are percent-encoded individually, so caller-supplied values such as a
    /// contract address cannot escape their position in the path.
    pub fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, GeckoError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GeckoError::Config(format!("base url {} cannot hold a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Issue one request and return the raw body of a 2xx response.
    pub async fn send(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, &str)],
        body: Option<Vec<u8>>,
        timeout: Duration,
    ) -> Result<Vec<u8>, GeckoError> {
        let url = self.endpoint(segments, query)?;
        tracing::debug!(%method, url = %url, ?timeout, "sending upstream request");

        let mut req = self
            .http
            .request(method, url.clone())
            .header("accept", "application/json")
            .timeout(timeout);
        if let Some(b) = body {
            req = req.header("content-type", "application/json").body(b);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::error!(url = %url, "can't send upstream request: {e}");
            GeckoError::Http(e)
        })?;

        net::read_body(resp, &url).await
    }

    /// `GET` the endpoint and decode its JSON body into `T`.
    ///
    /// `endpoint` is a short label used in decode errors and logs.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        segments: &[&str],
        query: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<T, GeckoError> {
        let body = self.send(Method::GET, segments, query, None, timeout).await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(endpoint, "can't decode upstream payload: {e}");
            GeckoError::decode(endpoint, e)
        })
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`GeckoClient`]; unset options fall back to the crate defaults.
#[derive(Default)]
pub struct GeckoClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    request_timeout: Option<Duration>,
    list_timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl GeckoClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the upstream base (e.g., `https://api.coingecko.com/api/v3`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Timeout for single data fetches. Default: 1s.
    #[must_use]
    pub const fn request_timeout(mut self, dur: Duration) -> Self {
        self.request_timeout = Some(dur);
        self
    }

    /// Timeout for the bulk coin-list fetch. Default: 10s.
    #[must_use]
    pub const fn list_timeout(mut self, dur: Duration) -> Self {
        self.list_timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client. Fails on an unparsable default base URL or a TLS setup error.
    pub fn build(self) -> Result<GeckoClient, GeckoError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        let http = httpb.build()?;

        Ok(GeckoClient {
            http,
            base_url,
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            list_timeout: self.list_timeout.unwrap_or(DEFAULT_LIST_TIMEOUT),
        })
    }
}
