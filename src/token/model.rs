use serde::{Deserialize, Serialize};

/// A token identified by chain network and contract address.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DefiToken {
    pub name: String,
    pub symbol: String,
    pub image: TokenImage,
    /// Price in the requested currency; zero when the upstream has none for it.
    pub current_price: f64,
}

/// Image URLs in three sizes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenImage {
    #[serde(default)]
    pub thumb: String,
    #[serde(default)]
    pub small: String,
    #[serde(default)]
    pub large: String,
}
