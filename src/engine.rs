// Minimal game engine API boundary. This trait exposes the fixed-limit actions
// and queries so front ends (TUI, headless runner, C callers) can drive a hand
// without reaching into `GameState` internals. Per-seat queries return `None`
// for a seat other than 0 or 1.

use crate::cards::Card;
use crate::game::{ActionError, ActionType, GameState, Street, TerminalReason, Winner, NUM_PLAYERS};

pub trait GameEngine {
    // Hand lifecycle
    fn new_hand(&mut self, seed: u64);

    // Player actions
    fn legal_actions(&self) -> Vec<ActionType>;
    fn act(&mut self, action: ActionType) -> Result<(), ActionError>;

    // Queries
    fn current(&self) -> Option<usize>;
    fn street(&self) -> Street;
    fn pot(&self) -> u64;
    fn to_call(&self, seat: usize) -> Option<u64>;
    fn contributed(&self, seat: usize) -> Option<u64>;
    fn hole_cards(&self, seat: usize) -> Option<[Card; 2]>;
    fn board(&self) -> &[Card];
    fn outcome(&self) -> Option<(TerminalReason, Winner, [i64; NUM_PLAYERS])>;
}

impl GameEngine for GameState {
    fn new_hand(&mut self, seed: u64) {
        self.reset(seed);
    }

    fn legal_actions(&self) -> Vec<ActionType> {
        self.legal_actions()
    }
    fn act(&mut self, action: ActionType) -> Result<(), ActionError> {
        self.apply_action(action)
    }

    fn current(&self) -> Option<usize> {
        self.current_player()
    }
    fn street(&self) -> Street {
        self.street()
    }
    fn pot(&self) -> u64 {
        self.pot()
    }
    fn to_call(&self, seat: usize) -> Option<u64> {
        self.to_call(seat).ok()
    }
    fn contributed(&self, seat: usize) -> Option<u64> {
        self.total_contribution(seat).ok()
    }
    fn hole_cards(&self, seat: usize) -> Option<[Card; 2]> {
        self.hole_cards(seat).ok()
    }
    fn board(&self) -> &[Card] {
        self.board_cards()
    }
    fn outcome(&self) -> Option<(TerminalReason, Winner, [i64; NUM_PLAYERS])> {
        self.winner().map(|w| (self.terminal_reason(), w, self.payoffs()))
    }
}

/// Play `actions` in order, stopping at the first rejected one.
///
/// Returns how many actions were applied.
pub fn play_script<E: GameEngine + ?Sized>(
    engine: &mut E,
    actions: &[ActionType],
) -> Result<usize, (usize, ActionError)> {
    for (i, &action) in actions.iter().enumerate() {
        engine.act(action).map_err(|e| (i, e))?;
    }
    Ok(actions.len())
}
