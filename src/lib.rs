//! gecko-gateway: aggregating gateway over the CoinGecko market-data API.
//!
//! A [`Provider`] resolves human-readable coin symbols to upstream ids through an
//! owned, expiring cache and merges several upstream calls into one result per
//! operation. The [`gateway`] module exposes the provider over HTTP.

pub mod chart;
pub mod config;
pub mod core;
pub mod gateway;
pub mod info;
pub mod ping;
pub mod provider;
pub mod resolve;
pub mod token;

pub use chart::{ChartPoint, ChartRange, ChartSeries};
pub use config::GatewayConfig;
pub use core::{ErrorKind, GeckoClient, GeckoClientBuilder, GeckoError, TtlCache};
pub use info::{CoinInfo, Enrichment};
pub use ping::Ping;
pub use provider::Provider;
pub use resolve::{ResolvedCoin, SymbolResolver};
pub use token::{DefiToken, TokenImage};
