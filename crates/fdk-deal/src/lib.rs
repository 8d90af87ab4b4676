//! Shuffled-deck facade over the beacon cache and deterministic shuffle.
//!
//! [`Dealer`] answers "give me a shuffled deck for session S, optionally
//! pinned to round R": it resolves a beacon through the shared
//! [`Cache`](fdk_beacon::Cache), derives session randomness, and permutes
//! the canonical deck. The resulting [`Shuffled`] carries the `(round,
//! session)` pair that determined it, so anyone can replay and verify the
//! deal; it is recomputed on every request and never cached.
mod dealer;
mod error;
mod shuffled;

pub use dealer::*;
pub use error::*;
pub use shuffled::*;
