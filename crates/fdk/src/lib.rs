//! Verifiably-fair, reproducible deck shuffling from a public randomness
//! beacon.
//!
//! This facade crate re-exports all public fdk crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, constants, and runtime utilities
//! - [`cards`] — Card model, canonical deck, and text codec
//! - [`shuffle`] — Pure deterministic shuffle derivation
//! - [`beacon`] — Randomness source capability and bounded concurrent cache
//! - [`deal`] — Dealer facade producing verifiable shuffled decks

pub use fdk_core    as core;
pub use fdk_cards   as cards;
pub use fdk_shuffle as shuffle;
pub use fdk_beacon  as beacon;
pub use fdk_deal    as deal;

// Re-export commonly used types at the root
pub use fdk_core::*;
