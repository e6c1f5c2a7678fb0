use crate::cards::Rank;

const WHEEL_MASK: u16 = (1 << Rank::Ace.index()) | 0b1111;
const FIVE_IN_A_ROW: u16 = 0b1_1111;

/// Whether a rank-presence mask contains a straight, and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Scan a 13-bit rank mask (bit `i` set when rank index `i` is present)
    /// from ace-high down to six-high, then check the wheel (A-2-3-4-5), which
    /// ranks as a five-high straight. No other wrap-around counts.
    pub fn from_mask(rank_mask: u16) -> Self {
        let top_rank = (Rank::Six.index()..=Rank::Ace.index())
            .rev()
            .find(|&high| {
                let run = FIVE_IN_A_ROW << (high - 4);
                rank_mask & run == run
            })
            .and_then(Rank::from_index)
            .or_else(|| (rank_mask & WHEEL_MASK == WHEEL_MASK).then_some(Rank::Five));
        Self { top_rank }
    }

    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}
