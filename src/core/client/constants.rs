//! Centralized constants for the default upstream and timeouts.

use std::time::Duration;

pub(crate) const USER_AGENT: &str = concat!("gecko-gateway/", env!("CARGO_PKG_VERSION"));

/// Public CoinGecko v3 API base. Endpoint paths are appended to it.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Timeout for a single data fetch.
pub(crate) const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(1);

/// Timeout for the bulk `/coins/list` call, which returns every listed coin.
pub(crate) const DEFAULT_LIST_TIMEOUT: Duration = Duration::from_secs(10);
