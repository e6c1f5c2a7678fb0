/// Stakes and raise cap for a fixed-limit hand. Immutable for the life of a
/// [`GameState`](crate::game::GameState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    pub small_blind: u64,
    pub big_blind: u64,
    /// Bet and raise size on preflop and flop.
    pub small_bet: u64,
    /// Bet and raise size on turn and river.
    pub big_bet: u64,
    pub max_raises_per_round: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { small_blind: 1, big_blind: 2, small_bet: 2, big_bet: 4, max_raises_per_round: 3 }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{0} must be positive")]
    NotPositive(&'static str),
    #[error("big blind {big} must exceed small blind {small}")]
    BlindsInverted { small: u64, big: u64 },
    #[error("big bet {big} is smaller than small bet {small}")]
    BetsInverted { small: u64, big: u64 },
    #[error("stakes too large: a capped-out hand would overflow the pot")]
    StakesTooLarge,
}

impl GameConfig {
    /// Check the stakes are usable.
    ///
    /// ```
    /// use limit_holdem::config::{ConfigError, GameConfig};
    ///
    /// assert!(GameConfig::default().validate().is_ok());
    /// let bad = GameConfig { small_blind: 0, ..GameConfig::default() };
    /// assert_eq!(bad.validate(), Err(ConfigError::NotPositive("small blind")));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("small blind", self.small_blind),
            ("big blind", self.big_blind),
            ("small bet", self.small_bet),
            ("big bet", self.big_bet),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, v)| *v == 0) {
            return Err(ConfigError::NotPositive(name));
        }
        if self.big_blind <= self.small_blind {
            return Err(ConfigError::BlindsInverted { small: self.small_blind, big: self.big_blind });
        }
        if self.big_bet < self.small_bet {
            return Err(ConfigError::BetsInverted { small: self.small_bet, big: self.big_bet });
        }
        match self.max_pot() {
            Some(pot) if i64::try_from(pot).is_ok() => Ok(()),
            _ => Err(ConfigError::StakesTooLarge),
        }
    }

    /// Upper bound on the pot: both players matching the big blind, then
    /// capping every street at big-bet size. `None` if it overflows a `u64`.
    pub fn max_pot(&self) -> Option<u64> {
        let bets_per_street = u64::from(self.max_raises_per_round).checked_add(1)?;
        bets_per_street
            .checked_mul(self.big_bet)?
            .checked_mul(4)?
            .checked_add(self.big_blind)?
            .checked_mul(2)
    }

    /// Fixed bet/raise increment for a betting round (0 preflop .. 3 river).
    pub fn bet_size(&self, round: usize) -> u64 {
        if round < 2 {
            self.small_bet
        } else {
            self.big_bet
        }
    }
}
