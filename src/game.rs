use crate::cards::Card;
use crate::config::{ConfigError, GameConfig};
use crate::deck::{Deck, DeckError};
use crate::evaluator::{evaluate_seven, Category, Evaluation};
use std::fmt;
use std::str::FromStr;

/// Seats at the table. Player 0 posts the small blind, player 1 the big blind.
pub const NUM_PLAYERS: usize = 2;

/// Hole cards for both seats plus the full board.
const CARDS_PER_HAND: usize = 2 * NUM_PLAYERS + 5;

/// Action kinds. The discriminants are the integer codes used at the C boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ActionType {
    Fold = 0,
    Check = 1,
    Call = 2,
    Bet = 3,
    Raise = 4,
}

impl ActionType {
    pub const ALL: [ActionType; 5] =
        [ActionType::Fold, ActionType::Check, ActionType::Call, ActionType::Bet, ActionType::Raise];

    pub const fn code(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            ActionType::Fold => "Fold",
            ActionType::Check => "Check",
            ActionType::Call => "Call",
            ActionType::Bet => "Bet",
            ActionType::Raise => "Raise",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<i32> for ActionType {
    type Error = ActionError;
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        ActionType::ALL
            .iter()
            .copied()
            .find(|a| a.code() == code)
            .ok_or(ActionError::UnknownCode(code))
    }
}

impl FromStr for ActionType {
    type Err = ActionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ActionType::ALL
            .iter()
            .copied()
            .find(|a| a.label().eq_ignore_ascii_case(t))
            .ok_or_else(|| ActionError::UnknownName(t.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Street for a betting round index (0 preflop .. 3 river).
    pub fn from_round(round: usize) -> Option<Street> {
        match round {
            0 => Some(Street::Preflop),
            1 => Some(Street::Flop),
            2 => Some(Street::Turn),
            3 => Some(Street::River),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        }
    }
}

/// Why a hand ended. The discriminants are the C boundary codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i32)]
pub enum TerminalReason {
    #[default]
    None = 0,
    Fold = 1,
    Showdown = 2,
}

impl TerminalReason {
    pub const fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player(usize),
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionLogEntry {
    pub player: usize,
    pub round: usize,
    pub action: ActionType,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("hand is complete")]
    HandComplete,
    #[error("{0} is not legal here")]
    Illegal(ActionType),
    #[error("unknown action code: {0}")]
    UnknownCode(i32),
    #[error("unknown action: '{0}'")]
    UnknownName(String),
    #[error("action {index} ({action}) was rejected: {reason}")]
    ReplayRejected { index: usize, action: ActionType, reason: Box<ActionError> },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid player index: {0}")]
    InvalidPlayer(usize),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid deck: {0}")]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Action(#[from] ActionError),
}

/// One heads-up fixed-limit hand: dealt cards, betting state and outcome.
///
/// Created with a validated [`GameConfig`], reset with a seed or an explicit
/// deck, then driven to a terminal state with [`GameState::apply_action`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    config: GameConfig,
    deck: Deck,
    hole: [[Card; 2]; NUM_PLAYERS],
    board: [Card; 5],
    board_count: usize,

    round: usize,
    current_player: Option<usize>,
    round_first_player: usize,

    total_contribution: [u64; NUM_PLAYERS],
    round_contribution: [u64; NUM_PLAYERS],
    pot: u64,
    current_bet: u64,
    raises_in_round: u32,
    bet_made_in_round: bool,

    terminal_reason: TerminalReason,
    winner: Option<Winner>,
    payoffs: [i64; NUM_PLAYERS],
    showdown: Option<[Evaluation; NUM_PLAYERS]>,
    history: Vec<ActionLogEntry>,
}

impl GameState {
    /// Validate `config` and deal a first hand from seed 0.
    ///
    /// ```
    /// use limit_holdem::config::GameConfig;
    /// use limit_holdem::game::{ActionType, GameState};
    ///
    /// let mut game = GameState::new(GameConfig::default()).unwrap();
    /// assert_eq!(game.pot(), 3);
    /// assert_eq!(game.legal_actions(), vec![ActionType::Fold, ActionType::Call, ActionType::Raise]);
    /// game.apply_action(ActionType::Fold).unwrap();
    /// assert_eq!(game.payoffs(), [-1, 1]);
    /// ```
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let deck = Deck::standard();
        let filler = deck.as_slice()[0];
        let mut game = Self {
            config,
            deck,
            hole: [[filler; 2]; NUM_PLAYERS],
            board: [filler; 5],
            board_count: 0,
            round: 0,
            current_player: Some(0),
            round_first_player: 0,
            total_contribution: [0; NUM_PLAYERS],
            round_contribution: [0; NUM_PLAYERS],
            pot: 0,
            current_bet: 0,
            raises_in_round: 0,
            bet_made_in_round: false,
            terminal_reason: TerminalReason::None,
            winner: None,
            payoffs: [0; NUM_PLAYERS],
            showdown: None,
            history: Vec::new(),
        };
        game.reset(0);
        Ok(game)
    }

    /// Shuffle a fresh deck from `seed` and deal a new hand.
    pub fn reset(&mut self, seed: u64) {
        log::debug!("reset hand from seed {seed}");
        self.start_hand(Deck::shuffled(seed));
    }

    /// Deal a new hand from an explicit deck ordering, starting at its top card.
    pub fn reset_with_deck(&mut self, deck: Deck) {
        log::debug!("reset hand from explicit deck");
        self.start_hand(deck);
    }

    /// Reset with `deck` and re-apply `actions` in order.
    ///
    /// Fails with the index of the first rejected action.
    pub fn replay(
        config: GameConfig,
        deck: Deck,
        actions: &[ActionType],
    ) -> Result<Self, GameError> {
        let mut game = Self::new(config)?;
        game.reset_with_deck(deck);
        for (index, &action) in actions.iter().enumerate() {
            game.apply_action(action).map_err(|reason| ActionError::ReplayRejected {
                index,
                action,
                reason: Box::new(reason),
            })?;
        }
        Ok(game)
    }

    fn start_hand(&mut self, mut deck: Deck) {
        deck.rewind();
        self.deck = deck;
        self.deal_cards();
        self.board_count = 0;

        self.round = 0;
        self.current_player = Some(0);
        self.round_first_player = 0;

        self.total_contribution = [self.config.small_blind, self.config.big_blind];
        self.round_contribution = self.total_contribution;
        self.pot = self.config.small_blind + self.config.big_blind;
        // Blinds open the preflop betting.
        self.current_bet = self.config.big_blind;
        self.raises_in_round = 0;
        self.bet_made_in_round = true;

        self.terminal_reason = TerminalReason::None;
        self.winner = None;
        self.payoffs = [0; NUM_PLAYERS];
        self.showdown = None;
        self.history.clear();
    }

    // First card to each seat, then the second, then five board cards.
    fn deal_cards(&mut self) {
        let c = self.deck.cards();
        self.hole = [[c[0], c[2]], [c[1], c[3]]];
        self.board = [c[4], c[5], c[6], c[7], c[8]];
        self.deck.mark_dealt(CARDS_PER_HAND);
    }

    /// Returns the configuration this hand is played under
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the deck the hand was dealt from
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Seat to act, `None` once the hand is terminal.
    pub fn current_player(&self) -> Option<usize> {
        self.current_player
    }

    /// Betting round index, 0 preflop through 3 river.
    pub fn betting_round(&self) -> usize {
        self.round
    }

    pub fn street(&self) -> Street {
        Street::from_round(self.round).unwrap_or(Street::River)
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal_reason != TerminalReason::None
    }

    pub fn terminal_reason(&self) -> TerminalReason {
        self.terminal_reason
    }

    /// Outcome of a terminal hand; `None` while the hand is in progress.
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Returns the current pot size
    pub fn pot(&self) -> u64 {
        self.pot
    }

    /// Returns the bet level of the current round
    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }

    pub fn raises_in_round(&self) -> u32 {
        self.raises_in_round
    }

    pub fn bet_made_in_round(&self) -> bool {
        self.bet_made_in_round
    }

    /// Chips `player` must add to match the current bet.
    pub fn to_call(&self, player: usize) -> Result<u64, GameError> {
        let contributed = self.round_contribution(player)?;
        Ok(self.current_bet.saturating_sub(contributed))
    }

    pub fn total_contribution(&self, player: usize) -> Result<u64, GameError> {
        self.total_contribution.get(player).copied().ok_or(GameError::InvalidPlayer(player))
    }

    pub fn round_contribution(&self, player: usize) -> Result<u64, GameError> {
        self.round_contribution.get(player).copied().ok_or(GameError::InvalidPlayer(player))
    }

    pub fn hole_cards(&self, player: usize) -> Result<[Card; 2], GameError> {
        self.hole.get(player).copied().ok_or(GameError::InvalidPlayer(player))
    }

    /// Revealed board cards: 0, 3, 4 or 5 of them.
    pub fn board_cards(&self) -> &[Card] {
        &self.board[..self.board_count]
    }

    pub fn board_count(&self) -> usize {
        self.board_count
    }

    /// Per-player net result. All zero until the hand is terminal.
    pub fn payoffs(&self) -> [i64; NUM_PLAYERS] {
        self.payoffs
    }

    /// Both players' best hands, available after a showdown.
    pub fn showdown_evaluations(&self) -> Option<&[Evaluation; NUM_PLAYERS]> {
        self.showdown.as_ref()
    }

    pub fn showdown_categories(&self) -> Option<[Category; NUM_PLAYERS]> {
        self.showdown.map(|evals| evals.map(|e| e.category))
    }

    pub fn action_history(&self) -> &[ActionLogEntry] {
        &self.history
    }

    /// Actions the current player may take; empty once terminal.
    pub fn legal_actions(&self) -> Vec<ActionType> {
        let Some(player) = self.current_player else {
            return Vec::new();
        };
        if self.is_terminal() {
            return Vec::new();
        }

        let to_call = self.current_bet.saturating_sub(self.round_contribution[player]);
        let raise_available =
            self.bet_made_in_round && self.raises_in_round < self.config.max_raises_per_round;

        let mut actions = Vec::with_capacity(3);
        if to_call > 0 {
            actions.push(ActionType::Fold);
            actions.push(ActionType::Call);
            if raise_available {
                actions.push(ActionType::Raise);
            }
        } else {
            actions.push(ActionType::Check);
            if !self.bet_made_in_round {
                actions.push(ActionType::Bet);
            } else if raise_available {
                actions.push(ActionType::Raise);
            }
        }
        actions
    }

    /// Apply `action` for the current player.
    ///
    /// An illegal action returns an error and leaves the state untouched.
    pub fn apply_action(&mut self, action: ActionType) -> Result<(), ActionError> {
        let result = self.try_apply(action);
        if let Err(err) = &result {
            log::debug!("rejected {action}: {err}");
        }
        result
    }

    fn try_apply(&mut self, action: ActionType) -> Result<(), ActionError> {
        let player = match self.current_player {
            Some(p) if !self.is_terminal() => p,
            _ => return Err(ActionError::HandComplete),
        };
        if !self.legal_actions().contains(&action) {
            return Err(ActionError::Illegal(action));
        }
        if action == ActionType::Check && self.current_bet != 0 {
            return Err(ActionError::Illegal(action));
        }

        let opponent = 1 - player;
        let mut round_complete = false;
        match action {
            ActionType::Fold => self.resolve_fold(player),
            ActionType::Check => {
                round_complete = opponent == self.round_first_player;
            }
            ActionType::Call => {
                let amount = self.current_bet.saturating_sub(self.round_contribution[player]);
                self.contribute(player, amount);
                round_complete = true;
            }
            ActionType::Bet => {
                let bet = self.config.bet_size(self.round);
                self.current_bet = bet;
                self.contribute(player, bet);
                self.bet_made_in_round = true;
            }
            ActionType::Raise => {
                let new_bet = self.current_bet + self.config.bet_size(self.round);
                let delta = new_bet - self.round_contribution[player];
                self.contribute(player, delta);
                self.current_bet = new_bet;
                self.bet_made_in_round = true;
                self.raises_in_round += 1;
            }
        }

        log::trace!("player {player} {action} in round {}", self.round);
        self.history.push(ActionLogEntry { player, round: self.round, action });

        if self.is_terminal() {
            return Ok(());
        }
        if round_complete {
            self.advance_round();
        } else {
            self.current_player = Some(opponent);
        }
        Ok(())
    }

    fn contribute(&mut self, player: usize, amount: u64) {
        self.round_contribution[player] += amount;
        self.total_contribution[player] += amount;
        self.pot += amount;
    }

    fn advance_round(&mut self) {
        self.round_contribution = [0; NUM_PLAYERS];
        self.current_bet = 0;
        self.raises_in_round = 0;
        self.bet_made_in_round = false;

        self.round += 1;
        self.board_count = match self.round {
            1 => 3,
            2 => 4,
            3 => 5,
            _ => {
                self.resolve_showdown();
                return;
            }
        };
        self.current_player = Some(1);
        self.round_first_player = 1;
    }

    fn resolve_fold(&mut self, folder: usize) {
        let winner = 1 - folder;
        self.terminal_reason = TerminalReason::Fold;
        self.winner = Some(Winner::Player(winner));
        self.payoffs[folder] = -(self.total_contribution[folder] as i64);
        self.payoffs[winner] = self.pot as i64 - self.total_contribution[winner] as i64;
        self.current_player = None;
        self.log_outcome();
    }

    fn resolve_showdown(&mut self) {
        self.terminal_reason = TerminalReason::Showdown;
        self.board_count = 5;

        let evals = self.hole.map(|[a, b]| {
            let [b0, b1, b2, b3, b4] = self.board;
            evaluate_seven(&[b0, b1, b2, b3, b4, a, b])
        });
        // `GameConfig::validate` keeps the pot within i64.
        let pot = self.pot as i64;
        let total = self.total_contribution.map(|t| t as i64);
        match evals[0].cmp(&evals[1]) {
            std::cmp::Ordering::Greater => {
                self.winner = Some(Winner::Player(0));
                self.payoffs = [pot - total[0], -total[1]];
            }
            std::cmp::Ordering::Less => {
                self.winner = Some(Winner::Player(1));
                self.payoffs = [-total[0], pot - total[1]];
            }
            std::cmp::Ordering::Equal => {
                // Odd chip goes to player 0.
                self.winner = Some(Winner::Tie);
                let half = pot / 2;
                self.payoffs = [half + pot % 2 - total[0], half - total[1]];
            }
        }

        self.showdown = Some(evals);
        self.current_player = None;
        self.log_outcome();
    }

    fn log_outcome(&self) {
        log::debug!(
            "hand over: {:?}, winner {:?}, payoffs {:?}",
            self.terminal_reason,
            self.winner,
            self.payoffs
        );
    }
}
