//! Symbol → upstream coin id resolution backed by a [`TtlCache`].

mod wire;

use serde::Serialize;
use std::sync::Arc;

use crate::core::{GeckoClient, GeckoError, TtlCache};
use wire::CoinListEntry;

/// The upstream identity of a coin, as found for a caller's symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCoin {
    /// Upstream canonical id (e.g. `bitcoin`).
    pub id: String,
    /// Upstream display name (e.g. `Bitcoin`).
    pub name: String,
}

/// Resolves caller symbols to [`ResolvedCoin`]s, caching successful lookups.
///
/// A miss triggers one bulk `/coins/list` fetch. The first list entry whose symbol or
/// name equals the caller's symbol exactly wins; later duplicates are shadowed.
/// Failed lookups are never cached.
#[derive(Debug, Clone)]
pub struct SymbolResolver {
    client: GeckoClient,
    cache: Arc<TtlCache<ResolvedCoin>>,
}

impl SymbolResolver {
    /// Create a resolver with its own never-expiring cache.
    pub fn new(client: GeckoClient) -> Self {
        Self::with_cache(client, Arc::new(TtlCache::new()))
    }

    /// Create a resolver over an existing cache.
    pub const fn with_cache(client: GeckoClient, cache: Arc<TtlCache<ResolvedCoin>>) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &Arc<TtlCache<ResolvedCoin>> {
        &self.cache
    }

    #[tracing::instrument(skip(self), err)]
    pub async fn resolve(&self, symbol: &str) -> Result<ResolvedCoin, GeckoError> {
        if symbol.is_empty() {
            return Err(GeckoError::Validation("symbol must not be empty".into()));
        }
        if let Some(coin) = self.cache.get(symbol).await {
            tracing::debug!(id = %coin.id, "resolved from cache");
            return Ok(coin);
        }

        tracing::info!("fetching coin list from upstream");
        let list: Vec<CoinListEntry> = self
            .client
            .get_json("coins_list", &["coins", "list"], &[], self.client.list_timeout())
            .await?;

        let Some(coin) = first_match(list, symbol) else {
            tracing::error!("no coin id/name found");
            return Err(GeckoError::NotFound {
                symbol: symbol.to_string(),
            });
        };

        tracing::info!(id = %coin.id, name = %coin.name, "adding coin to cache");
        self.cache.insert(symbol, coin.clone()).await;
        Ok(coin)
    }
}

fn first_match(list: Vec<CoinListEntry>, symbol: &str) -> Option<ResolvedCoin> {
    list.into_iter()
        .find(|c| c.symbol == symbol || c.name == symbol)
        .map(|c| ResolvedCoin { id: c.id, name: c.name })
}
