use crate::cards::{Card, Rank, Suit, DECK_SIZE, NUM_RANKS};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck needs 52 cards, got {0}")]
    TooFewCards(usize),
    #[error("card value out of range: {0}")]
    InvalidCard(u8),
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
    #[error("deck exhausted")]
    Exhausted,
}

/// An ordered 52-card deck dealt front-to-back.
///
/// The deal position only moves forward; building a new deck is the only way
/// to start over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    position: usize,
}

impl Deck {
    /// Cards in compact order `0..52`.
    ///
    /// ```
    /// use limit_holdem::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.remaining(), 52);
    /// assert_eq!(deck.as_slice()[0].index(), 0);
    /// ```
    pub fn standard() -> Self {
        let cards =
            std::array::from_fn(|i| Card::new(Rank::ALL[i % NUM_RANKS], Suit::ALL[i / NUM_RANKS]));
        Self { cards, position: 0 }
    }

    /// A reproducible permutation of the standard deck derived from `seed`.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        deck.cards.shuffle(&mut rng);
        deck
    }

    /// Build a deck from an explicit ordering. The first 52 cards are used and
    /// must be a permutation of the full deck; anything after them is ignored.
    pub fn from_cards(cards: &[Card]) -> Result<Self, DeckError> {
        if cards.len() < DECK_SIZE {
            return Err(DeckError::TooFewCards(cards.len()));
        }
        let mut seen = [false; DECK_SIZE];
        let mut ordered = [cards[0]; DECK_SIZE];
        for (slot, &card) in ordered.iter_mut().zip(cards.iter()) {
            let idx = card.index() as usize;
            if seen[idx] {
                return Err(DeckError::DuplicateCard(card));
            }
            seen[idx] = true;
            *slot = card;
        }
        Ok(Self { cards: ordered, position: 0 })
    }

    /// Same as [`Deck::from_cards`] for raw compact values.
    pub fn from_indices(values: &[u8]) -> Result<Self, DeckError> {
        if values.len() < DECK_SIZE {
            return Err(DeckError::TooFewCards(values.len()));
        }
        let cards = values[..DECK_SIZE]
            .iter()
            .map(|&v| Card::try_from(v).map_err(|_| DeckError::InvalidCard(v)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cards(&cards)
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// The full ordering, regardless of the deal position.
    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    /// Mark the next `count` cards as dealt, stopping at the bottom card.
    pub fn mark_dealt(&mut self, count: usize) {
        self.position = self.position.saturating_add(count).min(DECK_SIZE);
    }

    /// Number of cards already dealt.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        DECK_SIZE - self.position
    }

    /// Deal the next card.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        let card = *self.cards.get(self.position).ok_or(DeckError::Exhausted)?;
        self.position += 1;
        Ok(card)
    }

    /// Move the deal position back to the top card for a fresh deal.
    pub fn rewind(&mut self) {
        self.position = 0;
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_is_in_compact_order() {
        let d = Deck::standard();
        let values: Vec<u8> = d.as_slice().iter().map(|c| c.index()).collect();
        assert_eq!(values, (0u8..52).collect::<Vec<_>>());
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let d1 = Deck::shuffled(42);
        let d2 = Deck::shuffled(42);
        let d3 = Deck::shuffled(43);
        assert_eq!(d1, d2);
        assert_ne!(d1.as_slice(), d3.as_slice());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let d = Deck::shuffled(7);
        let set: HashSet<Card> = d.as_slice().iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn deal_advances_monotonically_until_exhausted() {
        let mut d = Deck::shuffled(7);
        let c1 = d.deal().unwrap();
        let c2 = d.deal().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.position(), 2);
        assert_eq!(d.remaining(), 50);
        for _ in 0..50 {
            d.deal().unwrap();
        }
        assert_eq!(d.deal(), Err(DeckError::Exhausted));
    }

    #[test]
    fn mark_dealt_skips_the_top_cards() {
        let mut d = Deck::shuffled(3);
        let tenth = d.cards()[9];
        d.mark_dealt(9);
        assert_eq!(d.remaining(), 43);
        assert_eq!(d.deal(), Ok(tenth));
        d.mark_dealt(100);
        assert_eq!(d.remaining(), 0);
    }

    #[test]
    fn explicit_decks_are_validated() {
        assert_eq!(Deck::from_indices(&[0, 1, 2]), Err(DeckError::TooFewCards(3)));

        let mut values: Vec<u8> = (0..52).collect();
        values[51] = 60;
        assert_eq!(Deck::from_indices(&values), Err(DeckError::InvalidCard(60)));

        values[51] = 0;
        assert!(matches!(Deck::from_indices(&values), Err(DeckError::DuplicateCard(_))));

        let mut long: Vec<u8> = (0..52).rev().collect();
        long.push(99);
        let d = Deck::from_indices(&long).unwrap();
        assert_eq!(d.as_slice()[0].index(), 51);
    }
}
