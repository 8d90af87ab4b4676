//! Round-indexed randomness capability and bounded concurrent beacon cache.
//!
//! ## Core Types
//!
//! - [`Source`] — Capability trait supplying verified beacon randomness by
//!   round (round 0 means "latest"). The network client behind it is owned
//!   by surrounding code; the cache only drives `fetch` and `close`.
//! - [`Beacon`] — One immutable `(round, randomness)` publication
//! - [`Cache`] — Thread-safe bounded store of recent beacons with a
//!   background refresh loop, oldest-round eviction, and timed on-demand
//!   fills
//! - [`CacheError`] — Typed failures; nothing in this crate panics the
//!   process for a missing or unreachable beacon
mod beacon;
mod cache;
mod error;
mod source;

pub use beacon::*;
pub use cache::*;
pub use error::*;
pub use source::*;
