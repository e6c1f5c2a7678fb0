use super::hand_analysis::HandAnalysis;
use crate::evaluator::{Category, Evaluation};

/// Each category detector recognises its category and builds the evaluation
/// with that category's tie-break fields. Returns `None` when the hand does
/// not qualify.
pub trait CategoryDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: five consecutive ranks, all same suit. Tie-break: top rank.
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        analysis.suit_info.flush_suit?;
        let top = analysis.straight_info.top_rank?;
        Some(analysis.build_evaluation(Category::StraightFlush, &[top]))
    }
}

/// Four of a Kind. Tie-break: quad rank, kicker.
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let quad = analysis.rank_groups.quad()?;
        let mut tiebreak = vec![quad];
        tiebreak.extend(analysis.rank_groups.kickers().first());
        Some(analysis.build_evaluation(Category::FourOfAKind, &tiebreak))
    }
}

/// Full House. Tie-break: trip rank, pair rank.
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let trips = analysis.rank_groups.trips()?;
        let pair = *analysis.rank_groups.pairs().first()?;
        Some(analysis.build_evaluation(Category::FullHouse, &[trips, pair]))
    }
}

/// Flush. Tie-break: all five ranks, descending.
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        analysis.suit_info.flush_suit?;
        Some(analysis.build_evaluation(Category::Flush, &analysis.ranks))
    }
}

/// Straight. Tie-break: top rank (five for the wheel).
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let top = analysis.straight_info.top_rank?;
        Some(analysis.build_evaluation(Category::Straight, &[top]))
    }
}

/// Three of a Kind. Tie-break: trip rank, up to two kickers.
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let trips = analysis.rank_groups.trips()?;
        let mut tiebreak = vec![trips];
        tiebreak.extend(analysis.rank_groups.kickers().into_iter().take(2));
        Some(analysis.build_evaluation(Category::ThreeOfAKind, &tiebreak))
    }
}

/// Two Pair. Tie-break: higher pair, lower pair, best kicker.
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let pairs = analysis.rank_groups.pairs();
        if pairs.len() < 2 {
            return None;
        }
        let mut tiebreak = vec![pairs[0], pairs[1]];
        tiebreak.extend(analysis.rank_groups.kickers().first());
        Some(analysis.build_evaluation(Category::TwoPair, &tiebreak))
    }
}

/// One Pair. Tie-break: pair rank, up to three kickers.
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let pair = *analysis.rank_groups.pairs().first()?;
        let mut tiebreak = vec![pair];
        tiebreak.extend(analysis.rank_groups.kickers().into_iter().take(3));
        Some(analysis.build_evaluation(Category::Pair, &tiebreak))
    }
}

/// High Card: fallback, always matches. Tie-break: all five ranks, descending.
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        Some(analysis.build_evaluation(Category::HighCard, &analysis.ranks))
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
