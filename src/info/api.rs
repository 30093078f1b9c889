use futures::{
    StreamExt,
    future::{BoxFuture, FutureExt},
    stream,
};
use std::collections::HashMap;

use super::{
    model::{CoinInfo, Enrichment},
    wire::{CoinDetail, GlobalEnvelope, MarketNode, SimplePrice},
};
use crate::{
    core::{GeckoClient, GeckoError},
    resolve::{ResolvedCoin, SymbolResolver},
};

enum Enriched {
    Volume(f64),
    MarketCapShare(f64),
    Description(HashMap<String, String>),
}

type Outcome = (Enrichment, Result<Enriched, GeckoError>);

pub(crate) async fn fetch_coin_info(
    client: &GeckoClient,
    resolver: &SymbolResolver,
    symbol: &str,
    currency: &str,
    fan_out: usize,
) -> Result<CoinInfo, GeckoError> {
    let coin = resolver.resolve(symbol).await?;

    let mut info = fetch_market(client, &coin, currency).await?;
    info.name.clone_from(&coin.name);

    let id = coin.id.as_str();
    let tasks: Vec<BoxFuture<'_, Outcome>> = vec![
        async move {
            let r = fetch_24h_volume(client, id, currency).await;
            (Enrichment::Volume24h, r.map(Enriched::Volume))
        }
        .boxed(),
        async move {
            let r = fetch_market_cap_share(client, symbol).await;
            (Enrichment::MarketCapShare, r.map(Enriched::MarketCapShare))
        }
        .boxed(),
        async move {
            let r = fetch_description(client, id).await;
            (Enrichment::Description, r.map(Enriched::Description))
        }
        .boxed(),
    ];

    let outcomes: Vec<Outcome> = stream::iter(tasks)
        .buffer_unordered(fan_out.max(1))
        .collect()
        .await;

    for (kind, res) in outcomes {
        match res {
            Ok(Enriched::Volume(v)) => info.volume_24h = v,
            Ok(Enriched::MarketCapShare(p)) => info.market_cap_percentage = p,
            Ok(Enriched::Description(d)) => info.about = d,
            Err(e) => {
                tracing::warn!(%kind, id, "enrichment failed, returning partial info: {e}");
                info.missing.push(kind);
            }
        }
    }
    info.missing.sort_unstable();

    Ok(info)
}

async fn fetch_market(
    client: &GeckoClient,
    coin: &ResolvedCoin,
    currency: &str,
) -> Result<CoinInfo, GeckoError> {
    let markets: Vec<MarketNode> = client
        .get_json(
            "coins_markets",
            &["coins", "markets"],
            &[
                ("vs_currency", currency),
                ("ids", coin.id.as_str()),
                ("order", "market_cap_desc"),
                ("per_page", "100"),
                ("page", "1"),
                ("sparkline", "false"),
            ],
            client.request_timeout(),
        )
        .await?;

    let node = markets.into_iter().next().ok_or_else(|| {
        tracing::error!(id = %coin.id, "coins market response is empty");
        GeckoError::NotFound {
            symbol: coin.id.clone(),
        }
    })?;

    Ok(CoinInfo {
        name: node.name,
        image: node.image,
        current_price: node.current_price,
        price_change_24h: node.price_change_24h,
        price_change_percentage_24h: node.price_change_percentage_24h,
        market_cap: node.market_cap,
        circulating_supply: node.circulating_supply,
        total_supply: node.total_supply,
        max_supply: node.max_supply,
        market_cap_rank: node.market_cap_rank,
        ath: node.ath,
        ..CoinInfo::default()
    })
}

/// 24h volume of `id` in `currency`; zero when the upstream has no such key.
pub(crate) async fn fetch_24h_volume(
    client: &GeckoClient,
    id: &str,
    currency: &str,
) -> Result<f64, GeckoError> {
    let prices: SimplePrice = client
        .get_json(
            "simple_price",
            &["simple", "price"],
            &[
                ("ids", id),
                ("vs_currencies", currency),
                ("include_24hr_vol", "true"),
            ],
            client.request_timeout(),
        )
        .await?;

    let key = format!("{currency}_24h_vol");
    Ok(prices
        .get(id)
        .and_then(|m| m.get(&key))
        .copied()
        .flatten()
        .unwrap_or_default())
}

/// Market-cap share of `symbol` from the global market overview.
pub(crate) async fn fetch_market_cap_share(
    client: &GeckoClient,
    symbol: &str,
) -> Result<f64, GeckoError> {
    let global: GlobalEnvelope = client
        .get_json("global", &["global"], &[], client.request_timeout())
        .await?;

    if let Some(p) = global.data.market_cap_percentage.get(symbol) {
        Ok(*p)
    } else {
        tracing::info!(symbol, "market cap percentage is missing in global data");
        Ok(0.0)
    }
}

/// Localized descriptions of `id`, keyed by language code.
pub(crate) async fn fetch_description(
    client: &GeckoClient,
    id: &str,
) -> Result<HashMap<String, String>, GeckoError> {
    let detail: CoinDetail = client
        .get_json(
            "coin_detail",
            &["coins", id],
            &[
                ("localization", "false"),
                ("tickers", "false"),
                ("market_data", "false"),
                ("community_data", "false"),
                ("developer_data", "false"),
                ("sparkline", "false"),
            ],
            client.request_timeout(),
        )
        .await?;

    Ok(detail
        .description
        .into_iter()
        .filter_map(|(lang, text)| text.map(|t| (lang, t)))
        .collect())
}
