//! Data-driven content definitions and loaders.
//!
//! This crate houses the static match content and the loaders that read it:
//! - Attack catalogs (data-driven via RON)
//! - Combat rule configuration (data-driven via TOML)
//! - Fighter specs: profile plus loadout (data-driven via TOML)
//! - Saved fighters (JSON records)
//!
//! Content is consumed by the client and handed to fight-core as plain values;
//! the core never performs I/O itself.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub mod store;

#[cfg(feature = "loaders")]
pub use loaders::{AttackLoader, ConfigLoader, FighterLoader, FighterSpec, LoadResult};

#[cfg(feature = "loaders")]
pub use store::{FighterRecord, FighterStore};
