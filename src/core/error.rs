use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum GeckoError {
    /// The request could not be sent or timed out before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request URL could not be built from the configured base address.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The upstream answered with a non-2xx status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// The raw response body, kept for diagnostics.
        body: String,
    },

    /// A response body did not match the expected shape for its endpoint.
    #[error("Malformed {endpoint} payload: {source}")]
    Decode {
        /// Short name of the endpoint whose payload failed to decode.
        endpoint: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The symbol does not match any entry of the upstream coin list.
    #[error("No coin found for symbol '{symbol}'")]
    NotFound {
        /// The symbol as supplied by the caller.
        symbol: String,
    },

    /// Caller input was missing or malformed.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The gateway configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a [`GeckoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure, timeout, or non-2xx upstream status.
    Transport,
    /// Malformed upstream payload.
    Decode,
    /// Symbol resolution miss.
    NotFound,
    /// Malformed caller input.
    Validation,
    /// Bad configuration.
    Config,
}

impl GeckoError {
    /// Returns the coarse category of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) | Self::Url(_) | Self::Status { .. } => ErrorKind::Transport,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// True if the request was aborted by one of the client timeouts.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    pub(crate) fn decode(endpoint: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { endpoint, source }
    }
}

impl From<serde_yaml::Error> for GeckoError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Config(format!("invalid YAML: {e}"))
    }
}
