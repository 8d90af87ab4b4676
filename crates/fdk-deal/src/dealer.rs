use super::error::DealError;
use super::shuffled::Shuffled;
use fdk_beacon::Cache;
use fdk_cards::Deck;
use fdk_core::Round;
use std::sync::Arc;

/// Thin facade turning a session identifier into a verifiable shuffled deck.
///
/// Holds a reference to the shared [`Cache`]; shuffle derivation itself is
/// pure, so a dealer can serve any number of concurrent requests.
pub struct Dealer {
    cache: Arc<Cache>,
}

impl Dealer {
    pub fn new(cache: Arc<Cache>) -> Self {
        Self { cache }
    }
    pub fn cache(&self) -> &Arc<Cache> {
        &self.cache
    }

    /// Deals a shuffled deck for `session`, pinned to `round` when given,
    /// otherwise derived from the latest cached beacon.
    ///
    /// Fails with whatever the beacon step signals; on success the result is
    /// always a full 52-card permutation. The session identifier is treated
    /// as an opaque token generated by the caller — the dealer never
    /// substitutes randomness of its own.
    pub async fn deal(&self, session: &str, round: Option<Round>) -> Result<Shuffled, DealError> {
        let beacon = match round {
            Some(round) => self.cache.by_round(round).await?,
            None => self.cache.latest().await?,
        };
        log::debug!("[dealer] dealing session {} from {}", session, beacon);
        let randomness = fdk_shuffle::extend(&beacon.randomness, session.as_bytes());
        let cards = fdk_shuffle::shuffle(&Deck::standard(), &randomness);
        Ok(Shuffled::new(cards, beacon.round, session.to_string()))
    }
}
