use limit_holdem::config::{ConfigError, GameConfig};
use limit_holdem::deck::Deck;
use limit_holdem::game::{ActionError, ActionType, GameError, GameState, TerminalReason, Winner};
use proptest::prelude::*;

use ActionType::*;

fn stacked(prefix: &[u8]) -> Deck {
    let mut values = prefix.to_vec();
    values.extend((0u8..52).filter(|v| !prefix.contains(v)));
    Deck::from_indices(&values).unwrap()
}

// Player 0: Ac Ad, player 1: Kc Kd, board 2c 5d 9h Js 8d.
const ACES_VS_KINGS: [u8; 9] = [12, 11, 25, 24, 0, 16, 33, 48, 19];

fn new_game() -> GameState {
    GameState::new(GameConfig::default()).unwrap()
}

#[test]
fn aces_beat_kings_after_check_down() {
    let mut g = new_game();
    g.reset_with_deck(stacked(&ACES_VS_KINGS));
    assert_eq!(g.pot(), 3);

    g.apply_action(Call).unwrap();
    assert_eq!(g.current_player(), Some(1));
    assert_eq!(g.board_count(), 3);
    assert_eq!(g.legal_actions(), vec![Check, Bet]);

    for _ in 0..3 {
        g.apply_action(Check).unwrap();
        g.apply_action(Check).unwrap();
    }

    assert!(g.is_terminal());
    assert_eq!(g.terminal_reason(), TerminalReason::Showdown);
    assert_eq!(g.winner(), Some(Winner::Player(0)));
    assert_eq!(g.payoffs(), [2, -2]);
    assert_eq!(g.board_count(), 5);
    let board: Vec<u8> = g.board_cards().iter().map(|c| c.index()).collect();
    assert_eq!(board, vec![0, 16, 33, 48, 19]);
    assert_eq!(g.current_player(), None);
    assert_eq!(g.action_history().len(), 7);
}

#[test]
fn small_blind_fold_loses_one() {
    let mut g = new_game();
    g.reset(9);
    g.apply_action(Fold).unwrap();
    assert_eq!(g.terminal_reason(), TerminalReason::Fold);
    assert_eq!(g.winner(), Some(Winner::Player(1)));
    assert_eq!(g.payoffs(), [-1, 1]);
}

#[test]
fn bet_after_bet_is_rejected_without_change() {
    let mut g = new_game();
    g.apply_action(Call).unwrap();
    g.apply_action(Bet).unwrap();
    assert_eq!(g.legal_actions(), vec![Fold, Call, Raise]);

    let before = g.clone();
    assert_eq!(g.apply_action(Bet), Err(ActionError::Illegal(Bet)));
    assert_eq!(g.apply_action(Check), Err(ActionError::Illegal(Check)));
    assert_eq!(g, before);
}

#[test]
fn raise_cap_removes_raise() {
    let mut g = new_game();
    g.apply_action(Raise).unwrap();
    g.apply_action(Raise).unwrap();
    g.apply_action(Raise).unwrap();
    assert_eq!(g.raises_in_round(), 3);
    assert_eq!(g.current_bet(), 8);
    assert_eq!(g.to_call(1), Ok(2));
    assert_eq!(g.legal_actions(), vec![Fold, Call]);
    assert_eq!(g.apply_action(Raise), Err(ActionError::Illegal(Raise)));

    g.apply_action(Call).unwrap();
    assert_eq!(g.betting_round(), 1);
    assert_eq!(g.pot(), 16);
    assert_eq!(g.raises_in_round(), 0);
}

#[test]
fn zero_raise_cap_allows_only_bets() {
    let config = GameConfig { max_raises_per_round: 0, ..GameConfig::default() };
    let mut g = GameState::new(config).unwrap();
    assert_eq!(g.legal_actions(), vec![Fold, Call]);
    g.apply_action(Call).unwrap();
    g.apply_action(Bet).unwrap();
    assert_eq!(g.legal_actions(), vec![Fold, Call]);
}

#[test]
fn unplayable_stakes_fail_at_construction() {
    let half = u64::MAX / 2 + 1;
    let huge = GameConfig { small_blind: half, big_blind: half + 1, ..GameConfig::default() };
    assert_eq!(GameState::new(huge), Err(GameError::Config(ConfigError::StakesTooLarge)));

    let equal = GameConfig { small_blind: 2, big_blind: 2, ..GameConfig::default() };
    assert!(matches!(
        GameState::new(equal),
        Err(GameError::Config(ConfigError::BlindsInverted { .. }))
    ));
}

#[test]
fn large_valid_stakes_settle_without_overflow() {
    let config = GameConfig {
        small_blind: 1,
        big_blind: 1 << 50,
        small_bet: 1 << 52,
        big_bet: 1 << 55,
        max_raises_per_round: 3,
    };
    assert!(config.validate().is_ok());
    let mut g = GameState::new(config).unwrap();
    g.reset_with_deck(stacked(&ACES_VS_KINGS));
    while !g.is_terminal() {
        let legal = g.legal_actions();
        let action = if legal.contains(&Raise) {
            Raise
        } else if legal.contains(&Bet) {
            Bet
        } else {
            Call
        };
        g.apply_action(action).unwrap();
    }
    assert_eq!(g.winner(), Some(Winner::Player(0)));
    let [a, b] = g.payoffs();
    assert_eq!(a + b, 0);
    assert_eq!(a as u64 * 2, g.pot());
}

#[test]
fn big_bets_on_turn_and_river() {
    let mut g = new_game();
    g.apply_action(Call).unwrap();
    g.apply_action(Bet).unwrap();
    g.apply_action(Call).unwrap();
    assert_eq!(g.pot(), 8);
    g.apply_action(Bet).unwrap();
    assert_eq!(g.current_bet(), 4);
    g.apply_action(Raise).unwrap();
    assert_eq!(g.current_bet(), 8);
    g.apply_action(Call).unwrap();
    assert_eq!(g.pot(), 24);
    assert_eq!(g.total_contribution(0), Ok(12));
    assert_eq!(g.total_contribution(1), Ok(12));
}

#[test]
fn actions_after_terminal_are_rejected() {
    let mut g = new_game();
    g.apply_action(Fold).unwrap();
    for action in ActionType::ALL {
        assert_eq!(g.apply_action(action), Err(ActionError::HandComplete));
    }
    assert_eq!(g.action_history().len(), 1);
}

#[test]
fn reset_clears_previous_hand() {
    let mut g = new_game();
    g.apply_action(Raise).unwrap();
    g.apply_action(Fold).unwrap();
    g.reset(1);
    assert!(!g.is_terminal());
    assert_eq!(g.winner(), None);
    assert_eq!(g.payoffs(), [0, 0]);
    assert!(g.action_history().is_empty());
    assert_eq!(g.pot(), 3);
    assert_eq!(g.current_player(), Some(0));
}

proptest! {
    #[test]
    fn random_playouts_keep_chips_balanced(seed in any::<u64>(), picks in prop::collection::vec(0usize..3, 1..40)) {
        let mut g = new_game();
        g.reset(seed);
        for pick in picks {
            prop_assert_eq!(g.pot(), g.total_contribution(0).unwrap() + g.total_contribution(1).unwrap());
            let legal = g.legal_actions();
            if legal.is_empty() {
                break;
            }
            let action = legal[pick % legal.len()];
            prop_assert!(g.apply_action(action).is_ok());
        }
        if g.is_terminal() {
            let [a, b] = g.payoffs();
            prop_assert_eq!(a + b, 0);
            prop_assert!(g.legal_actions().is_empty());
            prop_assert!(g.winner().is_some());
        } else {
            prop_assert_eq!(g.payoffs(), [0, 0]);
        }
    }

    #[test]
    fn illegal_actions_never_mutate(seed in any::<u64>(), steps in 0usize..6) {
        let mut g = new_game();
        g.reset(seed);
        for _ in 0..steps {
            if let Some(&first) = g.legal_actions().first() {
                if first == Fold {
                    // keep the hand alive
                    g.apply_action(Call).unwrap();
                } else {
                    g.apply_action(first).unwrap();
                }
            }
        }
        let legal = g.legal_actions();
        let before = g.clone();
        for action in ActionType::ALL.into_iter().filter(|a| !legal.contains(a)) {
            prop_assert!(g.apply_action(action).is_err());
            prop_assert_eq!(&g, &before);
        }
    }
}
