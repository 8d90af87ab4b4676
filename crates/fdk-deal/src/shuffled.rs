use super::error::DealError;
use fdk_cards::Card;
use fdk_core::BOARD_CARDS;
use fdk_core::HOLE_CARDS;
use fdk_core::Round;

/// A beacon-derived permutation of the deck, tagged with what determined it.
///
/// Equal `(round, session)` pairs always carry equal card orders; this is
/// the verifiability contract, not a defect. Hands sliced off a `Shuffled`
/// are copies out of the immutable permutation, so no seat ever holds a
/// mutable alias into another's cards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Shuffled {
    cards: Vec<Card>,
    round: Round,
    session: String,
}

impl Shuffled {
    pub fn new(cards: Vec<Card>, round: Round, session: String) -> Self {
        Self {
            cards,
            round,
            session,
        }
    }
    /// The permuted deck, top of the deck first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    /// The beacon round that determined this permutation.
    pub fn round(&self) -> Round {
        self.round
    }
    /// The session identifier mixed into the derivation.
    pub fn session(&self) -> &str {
        &self.session
    }

    /// Cards required to seat `players`: two hole cards each plus the board.
    pub const fn requires(players: usize) -> usize {
        players * HOLE_CARDS + BOARD_CARDS
    }

    /// Two hole cards per seat, dealt in consecutive slots from the top of
    /// the deck, seat 0 first.
    pub fn holes(&self, players: usize) -> Result<Vec<[Card; HOLE_CARDS]>, DealError> {
        self.sufficient(players)?;
        Ok((0..players)
            .map(|seat| [self.cards[seat * 2], self.cards[seat * 2 + 1]])
            .collect())
    }

    /// The five community cards following the hole cards: flop, turn, river.
    pub fn board(&self, players: usize) -> Result<[Card; BOARD_CARDS], DealError> {
        self.sufficient(players)?;
        let next = players * HOLE_CARDS;
        self.cards[next..next + BOARD_CARDS]
            .try_into()
            .map_err(|_| DealError::InsufficientCards {
                required: Self::requires(players),
                available: self.cards.len(),
            })
    }

    fn sufficient(&self, players: usize) -> Result<(), DealError> {
        let required = Self::requires(players);
        match required <= self.cards.len() {
            true => Ok(()),
            false => Err(DealError::InsufficientCards {
                required,
                available: self.cards.len(),
            }),
        }
    }
}
