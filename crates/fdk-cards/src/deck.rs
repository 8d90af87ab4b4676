use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// The ordered 52-card deck.
///
/// [`Deck::standard`] builds the canonical pre-shuffle baseline: the
/// Cartesian product of suits and ranks in suit-major, rank-minor order.
/// The order itself carries no fairness meaning, but it must be fixed so
/// that independent implementations derive identical permutations from
/// identical randomness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl Deck {
    /// Creates the canonical 52-card deck: SpadeA..SpadeK, HeartA.., ..ClubK.
    pub fn standard() -> Self {
        Self(
            Suit::all()
                .into_iter()
                .flat_map(|suit| Rank::all().into_iter().map(move |rank| (suit, rank)))
                .map(Card::from)
                .collect(),
        )
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }
}

impl std::ops::Deref for Deck {
    type Target = [Card];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
