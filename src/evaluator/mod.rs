pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use core::fmt;

/// Compact, comparable hand strength. Higher is better.
///
/// Layout (most significant to least):
/// `[ category | r0 (4) | r1 (4) | r2 (4) | r3 (4) | r4 (4) ]`.
/// Missing tie-break fields are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandStrength(u32);

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn from_ordinal(ordinal: u8) -> Option<Category> {
        if (ordinal as usize) < Category::ALL.len() {
            Some(Category::ALL[ordinal as usize])
        } else {
            None
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::Pair => "pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const RANK_BITS: u32 = 4;
const CATEGORY_SHIFT: u32 = RANK_BITS * 5;

impl HandStrength {
    /// Pack a category and up to five tie-break ranks, most significant first.
    /// Ranks beyond the fifth are ignored.
    pub fn from_parts(category: Category, tiebreak: &[Rank]) -> Self {
        let mut v = (category.ordinal() as u32) << CATEGORY_SHIFT;
        for (i, rank) in tiebreak.iter().take(5).enumerate() {
            let offset = CATEGORY_SHIFT - RANK_BITS * (i as u32 + 1);
            v |= (rank.index() as u32) << offset;
        }
        HandStrength(v)
    }

    /// Return the packed comparable value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub fn category(self) -> Category {
        // Only `from_parts` constructs values, so the high bits are always a valid ordinal.
        Category::from_ordinal((self.0 >> CATEGORY_SHIFT) as u8).unwrap_or(Category::HighCard)
    }
}

/// Detailed evaluation result. `strength` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub best_five: [Card; 5],
    strength: HandStrength,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength.cmp(&other.strength)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.strength == other.strength
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    pub const fn strength(&self) -> HandStrength {
        self.strength
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("expected 5 to 7 cards, got {0}")]
    InvalidCardCount(usize),
}

/// Evaluate exactly five cards; detects category and encodes tie-breakers.
///
/// ```
/// use limit_holdem::cards::parse_cards;
/// use limit_holdem::evaluator::{evaluate_five, Category};
///
/// let cards: [_; 5] = parse_cards("Ac 2d 3h 4s 5c").unwrap().try_into().unwrap();
/// assert_eq!(evaluate_five(&cards).category, Category::Straight);
/// ```
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    DETECTORS
        .iter()
        .find_map(|detector| detector.evaluate(&analysis))
        .unwrap_or_else(|| analysis.build_evaluation(Category::HighCard, &analysis.ranks))
}

/// Best five-card evaluation of a seven-card set (2 hole + 5 board).
pub fn evaluate_seven(cards: &[Card; 7]) -> Evaluation {
    best_of(cards)
}

/// Best five-card evaluation over all subsets of 5 to 7 cards.
///
/// ```
/// use limit_holdem::cards::parse_cards;
/// use limit_holdem::evaluator::{evaluate_best, Category, EvalError};
///
/// let seven = parse_cards("As Ah Kd Kc 7s 7h 2c").unwrap();
/// assert_eq!(evaluate_best(&seven).unwrap().category, Category::TwoPair);
///
/// let four = parse_cards("As Ah Kd Kc").unwrap();
/// assert_eq!(evaluate_best(&four), Err(EvalError::InvalidCardCount(4)));
/// ```
pub fn evaluate_best(cards: &[Card]) -> Result<Evaluation, EvalError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::InvalidCardCount(cards.len()));
    }
    Ok(best_of(cards))
}

// Caller guarantees at least five cards.
fn best_of(cards: &[Card]) -> Evaluation {
    use combinations::FiveOf;

    let mut best: Option<Evaluation> = None;
    for idx in FiveOf::new(cards.len()) {
        let hand = idx.map(|i| cards[i]);
        let eval = evaluate_five(&hand);
        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }

    best.unwrap_or_else(|| evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]))
}

/// Compare two hands of 5 to 7 cards each by their best five-card strength.
///
/// ```
/// use limit_holdem::cards::parse_cards;
/// use limit_holdem::evaluator::compare_hands;
/// use std::cmp::Ordering;
///
/// let a = parse_cards("As Ah Qc Jd 9h 3s 2c").unwrap();
/// let b = parse_cards("Ks Kh Qc Jd 9h 3s 2c").unwrap();
/// assert_eq!(compare_hands(&a, &b).unwrap(), Ordering::Greater);
/// ```
pub fn compare_hands(a: &[Card], b: &[Card]) -> Result<Ordering, EvalError> {
    let va = evaluate_best(a)?;
    let vb = evaluate_best(b)?;
    Ok(va.cmp(&vb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn five(s: &str) -> Evaluation {
        let cards: [Card; 5] = parse_cards(s).unwrap().try_into().unwrap();
        evaluate_five(&cards)
    }

    #[test]
    fn evaluate_five_categories() {
        let cases = [
            ("As Ks Qs Js Ts", Category::StraightFlush),
            ("Kc Kd Kh Ks 2s", Category::FourOfAKind),
            ("Tc Td Th 2s 2h", Category::FullHouse),
            ("Ah 9h 7h 3h 2h", Category::Flush),
            ("Ac 2d 3h 4s 5c", Category::Straight),
            ("Qc Qd Qh 9s 2c", Category::ThreeOfAKind),
            ("Jc Jd 9c 9h 2s", Category::TwoPair),
            ("Ah Ad Ts 9c 2d", Category::Pair),
            ("Ah Kd 7s 5c 2d", Category::HighCard),
        ];
        for (hand, category) in cases {
            assert_eq!(five(hand).category, category, "{hand}");
        }
    }

    #[test]
    fn strength_packs_category_above_ranks() {
        let s = HandStrength::from_parts(Category::Pair, &[Rank::Ace, Rank::King]);
        assert_eq!(s.raw(), (1 << 20) | (12 << 16) | (11 << 12));
        assert_eq!(s.category(), Category::Pair);

        let weakest_pair = HandStrength::from_parts(Category::Pair, &[]);
        let best_high = HandStrength::from_parts(Category::HighCard, &[Rank::Ace; 5]);
        assert!(weakest_pair > best_high);
    }

    #[test]
    fn wheel_is_lowest_straight() {
        let wheel = five("Ac 2d 3h 4s 5c");
        let six_high = five("2c 3d 4h 5s 6c");
        assert!(six_high > wheel);
        assert_eq!(wheel.strength().raw() >> 16 & 0xF, Rank::Five.index() as u32);
    }

    #[test]
    fn steel_wheel_is_straight_flush() {
        assert_eq!(five("Ah 2h 3h 4h 5h").category, Category::StraightFlush);
    }

    #[test]
    fn kickers_break_ties() {
        assert!(five("Ah Ad Ks 9c 2d") > five("Ah Ad Qs Jc Td"));
        assert!(five("Jc Jd 9c 9h As") > five("Jc Jd 9c 9h Ks"));
        assert!(five("Qc Qd Qh As 3c") > five("Qc Qd Qh Ks Jc"));
        assert_eq!(five("Ah Kd 7s 5c 2d"), five("Ad Kh 7c 5s 2h"));
    }

    #[test]
    fn full_house_ranks_trips_before_pair() {
        assert!(five("3c 3d 3h 2s 2h") > five("2c 2d 2h As Ah"));
    }

    #[test]
    fn best_of_seven_finds_flush() {
        let seven = parse_cards("Ah 9h 7h 3h 2h Ac Ad").unwrap();
        let e = evaluate_best(&seven).unwrap();
        assert_eq!(e.category, Category::Flush);
    }

    #[test]
    fn invalid_counts_are_rejected() {
        let cards = parse_cards("As Ks Qs Js Ts 9s 8s 7s").unwrap();
        assert_eq!(evaluate_best(&cards), Err(EvalError::InvalidCardCount(8)));
        assert_eq!(evaluate_best(&[]), Err(EvalError::InvalidCardCount(0)));
        assert!(compare_hands(&cards[..4], &cards[..5]).is_err());
    }

    #[test]
    fn category_ordinals_round_trip() {
        for c in Category::ALL {
            assert_eq!(Category::from_ordinal(c.ordinal()), Some(c));
        }
        assert_eq!(Category::from_ordinal(9), None);
    }
}
