use serde::Deserialize;

/// One element of the `/coins/list` array.
#[derive(Deserialize)]
pub(crate) struct CoinListEntry {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) symbol: String,
    #[serde(default)]
    pub(crate) name: String,
}
