use crate::config::GameConfig;
use crate::game::{ActionType, GameError, GameState};
use std::time::{Duration, Instant};

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    NewHand,
    Act(ActionType),
}

/// Hot-seat table state: one hand in play, both seats driven from the keyboard.
#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub started: Instant,
    // Core game engine instance
    pub game: GameState,
    /// Seed of the hand on the table; the next hand uses `seed + 1`.
    pub seed: u64,
    pub hands_played: u64,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        let mut game = GameState::new(config)?;
        game.reset(seed);
        Ok(Self {
            started: Instant::now(),
            game,
            seed,
            hands_played: 0,
            help_open: false,
            history_open: false,
            history_offset: 0,
            action_error: None,
            action_error_at: None,
        })
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    /// The page of the action log currently scrolled into view, oldest first.
    pub fn history_page(&self) -> &[crate::game::ActionLogEntry] {
        let log = self.game.action_history();
        let end = log.len().saturating_sub(self.history_offset);
        let start = end.saturating_sub(Self::HISTORY_PAGE_SIZE);
        &log[start..end]
    }

    /// Apply an input. Returns true when a game action was applied.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleHelp => {
                self.history_open = false;
                self.help_open = !self.help_open;
                false
            }
            InputAction::ToggleHistory => {
                self.help_open = false;
                if !self.history_open {
                    self.history_offset = 0;
                }
                self.history_open = !self.history_open;
                false
            }
            InputAction::HistoryUp => {
                if self.history_open {
                    let max_offset =
                        self.game.action_history().len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::NewHand => {
                self.new_hand();
                false
            }
            InputAction::Act(action) => self.act(action),
        }
    }

    fn act(&mut self, action: ActionType) -> bool {
        match self.game.apply_action(action) {
            Ok(()) => {
                self.clear_action_error();
                if self.game.is_terminal() {
                    self.hands_played += 1;
                }
                true
            }
            Err(err) => {
                self.action_error = Some(err.to_string());
                self.action_error_at = Some(Instant::now());
                false
            }
        }
    }

    /// Deal the next hand once the current one is over.
    pub fn new_hand(&mut self) {
        if !self.game.is_terminal() {
            self.action_error = Some("finish the hand before dealing".to_string());
            self.action_error_at = Some(Instant::now());
            return;
        }
        self.seed = self.seed.wrapping_add(1);
        self.game.reset(self.seed);
        self.history_offset = 0;
        self.clear_action_error();
    }

    /// Periodic housekeeping from the controller loop.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
    }
}
