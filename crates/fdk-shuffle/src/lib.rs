//! Deterministic beacon-derived shuffle.
//!
//! Two pure functions turn public beacon randomness into a reproducible,
//! unbiased deck permutation:
//!
//! - [`extend`] mixes a per-game session identifier into the beacon bytes so
//!   that knowing the beacon value alone is not enough to predict a shuffle.
//! - [`shuffle`] runs Fisher-Yates over the extended bytes, byte-identical
//!   across calls and machines for identical input.
//!
//! Nothing here touches shared state, the clock, or a local entropy source;
//! both functions are safe to call from any thread without synchronization.
use fdk_cards::Card;
use sha2::Digest;
use sha2::Sha256;

/// Extends beacon randomness with a session identifier.
///
/// The canonical extension is `beacon ‖ SHA-256(beacon ‖ session)`: the
/// digest covers the beacon bytes first and the session bytes second, and is
/// appended to the original (unhashed) beacon bytes. Distinct sessions over
/// one beacon round diverge in the digest half; the same `(beacon, session)`
/// pair always reproduces the same bytes.
pub fn extend(randomness: &[u8], session: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(randomness);
    hasher.update(session);
    let digest = hasher.finalize();
    let mut extended = randomness.to_vec();
    extended.extend_from_slice(&digest);
    extended
}

/// Produces a deterministic Fisher-Yates permutation of `deck`.
///
/// Iterates `i` from `len-1` down to `1`, reading the big-endian u64 at
/// offset `i % max(1, len(r) - 8)` of the randomness and reducing it modulo
/// `i + 1` to pick the swap partner. Randomness shorter than 8 bytes is
/// first widened to its own SHA-256, so no input length can index out of
/// bounds. The input slice is never mutated.
pub fn shuffle(deck: &[Card], randomness: &[u8]) -> Vec<Card> {
    let mut cards = deck.to_vec();
    let randomness = match randomness.len() < 8 {
        true => Sha256::digest(randomness).to_vec(),
        false => randomness.to_vec(),
    };
    let window = usize::max(1, randomness.len() - 8);
    for i in (1..cards.len()).rev() {
        let pos = i % window;
        let draw = u64::from_be_bytes(
            randomness[pos..pos + 8]
                .try_into()
                .expect("8-byte window"),
        );
        let j = (draw % (i as u64 + 1)) as usize;
        cards.swap(i, j);
    }
    cards
}
