//! Core components of the `gecko-gateway` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The transport [`GeckoClient`] and its builder.
//! - The primary [`GeckoError`] type.
//! - The generic expiring [`TtlCache`] used for symbol resolution.

/// The transport client (`GeckoClient`), builder, and defaults.
pub mod client;
/// The primary error type (`GeckoError`) for the crate.
pub mod error;
/// Expiring in-memory store.
pub mod cache;
pub(crate) mod net;
pub(crate) mod wire;

pub use cache::TtlCache;
pub use client::{GeckoClient, GeckoClientBuilder};
pub use error::{ErrorKind, GeckoError};
