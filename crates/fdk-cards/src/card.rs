use super::error::CardError;
use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `suit * 13 + rank`. This is exactly the card's position in the canonical
/// pre-shuffle deck (suit-major, rank-minor), so the encoding doubles as the
/// identity permutation that cross-verifying implementations agree on.
///
/// # Text codec
///
/// The string form is the full suit name directly followed by the rank
/// token, no separator: `"SpadeA"`, `"Heart10"`, `"ClubK"`. Parsing is
/// case-sensitive and reports [`CardError::InvalidSuit`] or
/// [`CardError::InvalidRank`] on malformed input.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

impl Card {
    /// Extracts the suit component.
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 / 13)
    }
    /// Extracts the rank component.
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 % 13)
    }
}

/// (Suit, Rank) isomorphism
impl From<(Suit, Rank)> for Card {
    fn from((s, r): (Suit, Rank)) -> Self {
        Self(u8::from(s) * 13 + u8::from(r))
    }
}

/// u8 isomorphism
/// each card is mapped to its position in the canonical deck 0-51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!((n as usize) < fdk_core::DECK_SIZE);
        Self(n)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.suit(), self.rank())
    }
}

/// str isomorphism
/// suit-name prefix match, then the remainder must be a rank token
impl TryFrom<&str> for Card {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let suit = Suit::all()
            .into_iter()
            .find(|suit| s.starts_with(suit.name()))
            .ok_or_else(|| CardError::InvalidSuit(s.to_string()))?;
        let rank = Rank::try_from(&s[suit.name().len()..])?;
        Ok(Card::from((suit, rank)))
    }
}
