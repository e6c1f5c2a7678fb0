use crate::cards::{Rank, NUM_RANKS};

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array indexed by rank index (0-12).
    pub fn from_counts(rank_counts: &[u8; NUM_RANKS]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .zip(rank_counts.iter().copied())
            .filter(|&(_, count)| count > 0)
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.ranks_with(4).next()
    }

    /// Highest rank appearing exactly three times, if any.
    pub fn trips(&self) -> Option<Rank> {
        self.ranks_with(3).next()
    }

    /// All pair ranks, descending.
    pub fn pairs(&self) -> Vec<Rank> {
        self.ranks_with(2).collect()
    }

    /// All singleton (kicker) ranks, descending.
    pub fn kickers(&self) -> Vec<Rank> {
        self.ranks_with(1).collect()
    }

    fn ranks_with(&self, count: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, c)| *c == count).map(|(rank, _)| *rank)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
