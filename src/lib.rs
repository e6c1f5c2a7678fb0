//! limit-holdem: heads-up fixed-limit Texas Hold'em rules engine
//!
//! Goals:
//! - Deterministic betting state machine with seeded or explicit decks
//! - Exact, totally ordered five-to-seven card hand evaluation
//! - No panics for invalid input; use `Result` for recoverable errors
//! - A C ABI (`capi`) so other languages can drive hands
//!
//! ## Quick start: play a hand to showdown
//! ```
//! use limit_holdem::config::GameConfig;
//! use limit_holdem::game::{ActionType, GameState, TerminalReason};
//!
//! let mut game = GameState::new(GameConfig::default()).unwrap();
//! game.reset(42);
//! game.apply_action(ActionType::Call).unwrap();
//! for _ in 0..3 {
//!     game.apply_action(ActionType::Check).unwrap();
//!     game.apply_action(ActionType::Check).unwrap();
//! }
//! assert_eq!(game.terminal_reason(), TerminalReason::Showdown);
//! let [a, b] = game.payoffs();
//! assert_eq!(a + b, 0);
//! ```
//!
//! ## Evaluate hands
//! ```
//! use limit_holdem::cards::parse_cards;
//! use limit_holdem::evaluator::{evaluate_best, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! assert_eq!(evaluate_best(&cards).unwrap().category, Category::StraightFlush);
//! ```
//!
//! ## TUI
//! Run the hot-seat TUI with:
//! ```sh
//! cargo run --bin limit-holdem
//! ```

pub mod capi;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod game;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
