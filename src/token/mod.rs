//! DeFi token lookup by network and contract address.

mod model;
mod wire;

pub use model::{DefiToken, TokenImage};

use crate::core::{GeckoClient, GeckoError};
use wire::ContractCoin;

pub(crate) async fn fetch_defi_token(
    client: &GeckoClient,
    network: &str,
    contract_address: &str,
    currency: &str,
) -> Result<DefiToken, GeckoError> {
    let coin: ContractCoin = client
        .get_json(
            "coin_contract",
            &["coins", network, "contract", contract_address],
            &[],
            client.request_timeout(),
        )
        .await
        .inspect_err(|e| {
            tracing::error!(network, contract_address, "can't get coin info by contract address: {e}");
        })?;

    tracing::info!("get success response");

    let current_price = match coin.market_data.current_price.get(currency).copied().flatten() {
        Some(p) => p,
        None => {
            tracing::info!(network, contract_address, currency, "no price for requested currency");
            0.0
        }
    };

    Ok(DefiToken {
        name: coin.name,
        symbol: coin.symbol,
        image: coin.image,
        current_price,
    })
}
