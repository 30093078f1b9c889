use serde::Deserialize;
use std::collections::HashMap;

use crate::core::wire::null_as_default;

// `/coins/markets` array element. Most numeric fields may be null for thin coins.
#[derive(Deserialize)]
pub(crate) struct MarketNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) current_price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) price_change_24h: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) price_change_percentage_24h: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) market_cap: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) circulating_supply: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) total_supply: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) max_supply: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) market_cap_rank: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) ath: f64,
}

// `/simple/price?include_24hr_vol=true`: { "<id>": { "<cur>": .., "<cur>_24h_vol": .. } }
pub(crate) type SimplePrice = HashMap<String, HashMap<String, Option<f64>>>;

#[derive(Deserialize)]
pub(crate) struct GlobalEnvelope {
    pub(crate) data: GlobalData,
}

#[derive(Deserialize)]
pub(crate) struct GlobalData {
    #[serde(default)]
    pub(crate) market_cap_percentage: HashMap<String, f64>,
}

// `/coins/{id}` with every optional section switched off.
#[derive(Deserialize)]
pub(crate) struct CoinDetail {
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) description: HashMap<String, Option<String>>,
}
