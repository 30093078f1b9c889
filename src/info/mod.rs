//! Composite coin info: one market fetch plus best-effort enrichments.

pub(crate) mod api;
mod model;
mod wire;

pub use model::{CoinInfo, Enrichment};
