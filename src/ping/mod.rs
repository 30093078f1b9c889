use serde::{Deserialize, Serialize};

use crate::core::{GeckoClient, GeckoError};

/// Upstream liveness answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ping {
    #[serde(default)]
    pub gecko_says: String,
}

pub(crate) async fn fetch_ping(client: &GeckoClient) -> Result<Ping, GeckoError> {
    let ping: Ping = client
        .get_json("ping", &["ping"], &[], client.request_timeout())
        .await
        .inspect_err(|e| tracing::error!(base = %client.base_url(), "can't ping upstream: {e}"))?;
    tracing::info!("get success response");
    Ok(ping)
}
