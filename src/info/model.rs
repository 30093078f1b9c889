use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Market snapshot of one coin merged with its optional enrichments.
///
/// Currency-denominated fields are in the currency the info was requested in.
/// Enrichment fields stay at their zero value when the enrichment could not be
/// fetched; [`CoinInfo::missing`] tells which ones.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CoinInfo {
    /// Display name, taken from symbol resolution.
    pub name: String,
    /// Image URL.
    pub image: String,
    pub current_price: f64,
    /// Absolute price change over the last 24 hours.
    pub price_change_24h: f64,
    /// Relative price change over the last 24 hours, in percent.
    pub price_change_percentage_24h: f64,
    pub market_cap: f64,
    pub circulating_supply: f64,
    pub total_supply: f64,
    /// Zero for coins without a supply cap.
    pub max_supply: f64,
    pub market_cap_rank: u32,
    /// All-time high price.
    pub ath: f64,

    /// Trading volume over the last 24 hours (enrichment).
    pub volume_24h: f64,
    /// Share of the total crypto market cap, in percent (enrichment).
    pub market_cap_percentage: f64,
    /// Description keyed by language code (enrichment).
    pub about: HashMap<String, String>,

    /// Enrichments that failed while assembling this value, in declaration order.
    #[serde(skip)]
    pub missing: Vec<Enrichment>,
}

impl CoinInfo {
    /// True when every enrichment was fetched.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// A secondary fetch that augments [`CoinInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Enrichment {
    /// 24h volume from `/simple/price`.
    Volume24h,
    /// Market-cap share from `/global`.
    MarketCapShare,
    /// Description from `/coins/{id}`.
    Description,
}

impl fmt::Display for Enrichment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Volume24h => "volume_24h",
            Self::MarketCapShare => "market_cap_percentage",
            Self::Description => "description",
        })
    }
}
