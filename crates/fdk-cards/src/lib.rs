//! Card representation, canonical deck, and text codec for fairdeck.
//!
//! ## Core Types
//!
//! - [`Card`] — A single card as a `(Suit, Rank)` tuple encoded in one byte
//! - [`Suit`] — One of the four suits, in canonical deck order
//! - [`Rank`] — One of the thirteen ranks, ace first
//! - [`Deck`] — The ordered 52-card deck in canonical pre-shuffle order
//!
//! ## Text codec
//!
//! Cards round-trip through a two-part token: the full suit name directly
//! followed by the rank token, no separator (`"SpadeA"`, `"Heart10"`).
//! Parsing is case-sensitive and fails with a typed [`CardError`] rather
//! than defaulting.
mod card;
mod deck;
mod error;
mod rank;
mod suit;

pub use card::*;
pub use deck::*;
pub use error::*;
pub use rank::*;
pub use suit::*;
