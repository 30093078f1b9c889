use crate::{
    chart::{self, ChartRange, ChartSeries},
    core::{GeckoClient, GeckoError, TtlCache},
    info::{self, CoinInfo},
    ping::{self, Ping},
    resolve::{ResolvedCoin, SymbolResolver},
    token::{self, DefiToken},
};
use std::sync::Arc;

/// Default number of enrichment calls a single coin-info request may have in flight.
pub const DEFAULT_FAN_OUT: usize = 3;

/// The aggregation entry point: resolves symbols and merges upstream calls into
/// one result per operation.
///
/// A `Provider` owns its resolution cache; share it between request handlers
/// behind an `Arc`.
///
/// # Example
///
/// ```no_run
/// # use gecko_gateway::{GeckoClient, Provider};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = Provider::new(GeckoClient::default());
///
/// let info = provider.coin_info("btc", "usd").await?;
/// println!("{} trades at {}", info.name, info.current_price);
///
/// let chart = provider.coin_chart("btc", "usd", None, None).await?;
/// println!("{} samples over the last day", chart.prices.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Provider {
    client: GeckoClient,
    resolver: SymbolResolver,
    fan_out: usize,
}

impl Provider {
    /// Create a provider with a fresh, never-expiring resolution cache.
    pub fn new(client: GeckoClient) -> Self {
        let resolver = SymbolResolver::new(client.clone());
        Self::with_resolver(client, resolver)
    }

    /// Create a provider around an explicitly constructed resolver.
    pub const fn with_resolver(client: GeckoClient, resolver: SymbolResolver) -> Self {
        Self {
            client,
            resolver,
            fan_out: DEFAULT_FAN_OUT,
        }
    }

    /// Bound the enrichment calls of one coin-info request. `1` runs them one by one.
    #[must_use]
    pub fn fan_out(mut self, limit: usize) -> Self {
        self.fan_out = limit.max(1);
        self
    }

    pub const fn client(&self) -> &GeckoClient {
        &self.client
    }

    pub fn cache(&self) -> &Arc<TtlCache<ResolvedCoin>> {
        self.resolver.cache()
    }

    /// Resolve a symbol without fetching any market data.
    ///
    /// # Errors
    ///
    /// Returns [`GeckoError::NotFound`] if no listed coin matches, or a transport error if
    /// the coin list could not be fetched.
    pub async fn resolve(&self, symbol: &str) -> Result<ResolvedCoin, GeckoError> {
        self.resolver.resolve(symbol).await
    }

    /// Checks that the upstream is reachable.
    ///
    /// # Errors
    ///
    /// Any transport or decode failure.
    #[tracing::instrument(skip(self), err)]
    pub async fn ping(&self) -> Result<Ping, GeckoError> {
        tracing::info!("start ping provider method");
        ping::fetch_ping(&self.client).await
    }

    /// Fetches market info for `symbol` in `currency`, enriched with 24h volume,
    /// market-cap share and description.
    ///
    /// Enrichments are best effort: a failed one leaves its field at zero/empty and is
    /// listed in [`CoinInfo::missing`], but never fails the call.
    ///
    /// # Errors
    ///
    /// Resolution failures and failures of the primary market fetch.
    #[tracing::instrument(skip(self), err)]
    pub async fn coin_info(&self, symbol: &str, currency: &str) -> Result<CoinInfo, GeckoError> {
        tracing::info!("start coin info provider method");
        info::api::fetch_coin_info(&self.client, &self.resolver, symbol, currency, self.fan_out).await
    }

    /// Fetches the price chart of `symbol` between two Unix-second bounds given as text.
    ///
    /// Unparsable, negative or future bounds are replaced: the start with 24 hours ago,
    /// the end with now. See [`ChartRange::normalize`].
    ///
    /// # Errors
    ///
    /// Resolution failures and any failure of the chart fetch.
    pub async fn coin_chart(
        &self,
        symbol: &str,
        currency: &str,
        range_start: Option<&str>,
        range_end: Option<&str>,
    ) -> Result<ChartSeries, GeckoError> {
        let range = ChartRange::normalize(range_start, range_end);
        self.coin_chart_range(symbol, currency, range).await
    }

    /// Fetches the price chart of `symbol` over an already normalised range.
    ///
    /// # Errors
    ///
    /// Resolution failures and any failure of the chart fetch.
    #[tracing::instrument(skip(self), err)]
    pub async fn coin_chart_range(
        &self,
        symbol: &str,
        currency: &str,
        range: ChartRange,
    ) -> Result<ChartSeries, GeckoError> {
        tracing::info!("start coin chart provider method");
        chart::fetch_chart(&self.client, &self.resolver, symbol, currency, range).await
    }

    /// Fetches a token by chain network and contract address. No symbol resolution.
    ///
    /// # Errors
    ///
    /// Any transport or decode failure.
    #[tracing::instrument(skip(self), err)]
    pub async fn defi_token(
        &self,
        network: &str,
        contract_address: &str,
        currency: &str,
    ) -> Result<DefiToken, GeckoError> {
        tracing::info!("start defi token provider method");
        token::fetch_defi_token(&self.client, network, contract_address, currency).await
    }
}
