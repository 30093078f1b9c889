use serde::Deserialize;
use std::collections::HashMap;

use super::model::TokenImage;
use crate::core::wire::null_as_default;

// `/coins/{network}/contract/{address}`
#[derive(Deserialize)]
pub(crate) struct ContractCoin {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) image: TokenImage,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) market_data: MarketData,
}

#[derive(Deserialize, Default)]
pub(crate) struct MarketData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) current_price: HashMap<String, Option<f64>>,
}
