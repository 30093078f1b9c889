use serde::{Deserialize, Serialize};

use crate::core::wire::millis_from_any_number;

/// One `(timestamp_millis, value)` sample; encoded as a two-element JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint(
    #[serde(deserialize_with = "millis_from_any_number")] pub i64,
    pub f64,
);

impl ChartPoint {
    pub const fn timestamp_millis(&self) -> i64 {
        self.0
    }

    pub const fn value(&self) -> f64 {
        self.1
    }
}

/// Time series for one coin over a window, oldest sample first.
///
/// Granularity is chosen by the upstream: 5-minute samples for windows up to a day,
/// hourly up to 90 days, daily beyond.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    pub prices: Vec<ChartPoint>,
    #[serde(default)]
    pub market_caps: Vec<ChartPoint>,
    #[serde(default)]
    pub total_volumes: Vec<ChartPoint>,
}
