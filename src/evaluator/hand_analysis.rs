use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank, NUM_RANKS};
use crate::evaluator::{Category, Evaluation, HandStrength};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; 5],
    /// Ranks of `sorted_cards`, descending.
    pub ranks: [Rank; 5],
    pub rank_counts: [u8; NUM_RANKS],
    /// Bit `i` set when rank index `i` is present.
    pub rank_mask: u16,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        // Sort cards by rank descending, then by suit descending
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let ranks = sorted_cards.map(Card::rank);

        let mut rank_counts = [0u8; NUM_RANKS];
        let mut rank_mask = 0u16;
        for rank in ranks {
            rank_counts[rank.index() as usize] += 1;
            rank_mask |= 1 << rank.index();
        }

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight_info = StraightInfo::from_mask(rank_mask);

        Self { sorted_cards, ranks, rank_counts, rank_mask, rank_groups, suit_info, straight_info }
    }

    /// Build an Evaluation from a category and its ordered tie-break ranks.
    pub fn build_evaluation(&self, category: Category, tiebreak: &[Rank]) -> Evaluation {
        Evaluation {
            category,
            best_five: self.sorted_cards,
            strength: HandStrength::from_parts(category, tiebreak),
        }
    }
}
