//! Price history over a time window.

mod model;
mod range;

pub use model::{ChartPoint, ChartSeries};
pub use range::{ChartRange, DEFAULT_WINDOW};

use crate::{
    core::{GeckoClient, GeckoError},
    resolve::SymbolResolver,
};

pub(crate) async fn fetch_chart(
    client: &GeckoClient,
    resolver: &SymbolResolver,
    symbol: &str,
    currency: &str,
    range: ChartRange,
) -> Result<ChartSeries, GeckoError> {
    let coin = resolver.resolve(symbol).await?;

    let from = range.from.to_string();
    let to = range.to.to_string();
    let series: ChartSeries = client
        .get_json(
            "market_chart_range",
            &["coins", coin.id.as_str(), "market_chart", "range"],
            &[("vs_currency", currency), ("from", from.as_str()), ("to", to.as_str())],
            client.request_timeout(),
        )
        .await
        .inspect_err(|e| tracing::error!(id = %coin.id, "can't get coin chart: {e}"))?;

    tracing::info!(id = %coin.id, points = series.prices.len(), "get success response");
    Ok(series)
}
