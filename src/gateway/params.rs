use serde::Deserialize;

use crate::core::GeckoError;

/// Currency used when the caller sends no `conversion`.
pub const DEFAULT_CONVERSION: &str = "usd";

fn conversion_or_default(raw: Option<String>) -> String {
    raw.filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_CONVERSION.to_string())
}

fn required(raw: Option<String>, name: &str) -> Result<String, GeckoError> {
    raw.filter(|v| !v.is_empty())
        .ok_or_else(|| GeckoError::Validation(format!("missing required parameter '{name}'")))
}

// ── Raw query strings ────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CoinInfoQuery {
    pub coin: Option<String>,
    pub conversion: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CoinChartQuery {
    pub coin: Option<String>,
    pub conversion: Option<String>,
    #[serde(rename = "rangeStart")]
    pub range_start: Option<String>,
    #[serde(rename = "rangeEnd")]
    pub range_end: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TokenInfoQuery {
    pub network: Option<String>,
    pub address: Option<String>,
    pub conversion: Option<String>,
}

// ── Validated requests ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinInfoRequest {
    pub coin: String,
    pub conversion: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinChartRequest {
    pub coin: String,
    pub conversion: String,
    pub range_start: Option<String>,
    pub range_end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfoRequest {
    pub network: String,
    pub address: String,
    pub conversion: String,
}

impl TryFrom<CoinInfoQuery> for CoinInfoRequest {
    type Error = GeckoError;

    fn try_from(q: CoinInfoQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            coin: required(q.coin, "coin")?,
            conversion: conversion_or_default(q.conversion),
        })
    }
}

impl TryFrom<CoinChartQuery> for CoinChartRequest {
    type Error = GeckoError;

    fn try_from(q: CoinChartQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            coin: required(q.coin, "coin")?,
            conversion: conversion_or_default(q.conversion),
            range_start: q.range_start,
            range_end: q.range_end,
        })
    }
}

impl TryFrom<TokenInfoQuery> for TokenInfoRequest {
    type Error = GeckoError;

    fn try_from(q: TokenInfoQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            network: required(q.network, "network")?,
            address: required(q.address, "address")?,
            conversion: conversion_or_default(q.conversion),
        })
    }
}
