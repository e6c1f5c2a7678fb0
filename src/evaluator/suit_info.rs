use crate::cards::{Card, Suit, NUM_SUITS};

/// Per-suit tally of a 5-card hand and the flush suit, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub suit_counts: [u8; NUM_SUITS],
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let mut suit_counts = [0u8; NUM_SUITS];
        for card in cards {
            suit_counts[card.suit().index() as usize] += 1;
        }
        let flush_suit = Suit::ALL.iter().copied().find(|s| suit_counts[s.index() as usize] == 5);
        Self { suit_counts, flush_suit }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}
