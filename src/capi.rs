//! C ABI over [`GameState`].
//!
//! Callers hold an opaque `LimitHoldemState` pointer from
//! [`limit_holdem_state_create`] and release it with
//! [`limit_holdem_state_destroy`]. Every function tolerates a null handle and
//! out-of-range player indices by returning a default (`-1`, `0` or nothing
//! written). Action and terminal-reason codes match [`ActionType::code`] and
//! [`TerminalReason::code`](crate::game::TerminalReason::code).

use crate::cards::Card;
use crate::config::GameConfig;
use crate::deck::Deck;
use crate::evaluator::compare_hands;
use crate::game::{ActionType, GameState, Winner, NUM_PLAYERS};
use std::cmp::Ordering;
use std::slice;

/// Opaque handle type handed across the C boundary.
pub struct LimitHoldemState {
    inner: GameState,
}

unsafe fn game_ref<'a>(ptr: *const LimitHoldemState) -> Option<&'a GameState> {
    unsafe { ptr.as_ref() }.map(|s| &s.inner)
}

unsafe fn game_mut<'a>(ptr: *mut LimitHoldemState) -> Option<&'a mut GameState> {
    unsafe { ptr.as_mut() }.map(|s| &mut s.inner)
}

fn seat(player: i32) -> Option<usize> {
    usize::try_from(player).ok().filter(|&p| p < NUM_PLAYERS)
}

fn chips(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

/// Allocate a state with the default stakes, dealt from seed 0.
/// Returns null if the state cannot be built.
#[no_mangle]
pub extern "C" fn limit_holdem_state_create() -> *mut LimitHoldemState {
    match GameState::new(GameConfig::default()) {
        Ok(inner) => Box::into_raw(Box::new(LimitHoldemState { inner })),
        Err(err) => {
            log::debug!("create failed: {err}");
            std::ptr::null_mut()
        }
    }
}

/// # Safety
/// `state` must be null or a pointer returned by [`limit_holdem_state_create`]
/// that has not already been destroyed.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_destroy(state: *mut LimitHoldemState) {
    if !state.is_null() {
        drop(unsafe { Box::from_raw(state) });
    }
}

/// # Safety
/// `state` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_reset(state: *mut LimitHoldemState, seed: u64) {
    if let Some(game) = unsafe { game_mut(state) } {
        game.reset(seed);
    }
}

/// Deal from an explicit deck of `len` compact card values. Only the first 52
/// are used. Returns 1 on success and 0 if the deck is rejected, leaving the
/// current hand untouched.
///
/// # Safety
/// `state` must be null or a live handle; `deck` must be null or valid for
/// reads of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_reset_with_deck(
    state: *mut LimitHoldemState,
    deck: *const u8,
    len: usize,
) -> i32 {
    let Some(game) = (unsafe { game_mut(state) }) else {
        return 0;
    };
    if deck.is_null() {
        return 0;
    }
    let values = unsafe { slice::from_raw_parts(deck, len) };
    match Deck::from_indices(values) {
        Ok(deck) => {
            game.reset_with_deck(deck);
            1
        }
        Err(err) => {
            log::debug!("reset_with_deck rejected: {err}");
            0
        }
    }
}

/// # Safety
/// `state` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_current_player(state: *const LimitHoldemState) -> i32 {
    unsafe { game_ref(state) }.and_then(GameState::current_player).map_or(-1, |p| p as i32)
}

/// # Safety
/// `state` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_betting_round(state: *const LimitHoldemState) -> i32 {
    unsafe { game_ref(state) }.map_or(-1, |g| g.betting_round() as i32)
}

/// # Safety
/// `state` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_is_terminal(state: *const LimitHoldemState) -> i32 {
    unsafe { game_ref(state) }.map_or(1, |g| i32::from(g.is_terminal()))
}

/// # Safety
/// `state` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_terminal_reason(state: *const LimitHoldemState) -> i32 {
    unsafe { game_ref(state) }.map_or(0, |g| g.terminal_reason().code())
}

/// Winning seat, or -1 for a tie, a hand in progress or a null handle.
///
/// # Safety
/// `state` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_winner(state: *const LimitHoldemState) -> i32 {
    match unsafe { game_ref(state) }.and_then(GameState::winner) {
        Some(Winner::Player(p)) => p as i32,
        _ => -1,
    }
}

/// # Safety
/// `state` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_pot(state: *const LimitHoldemState) -> i64 {
    unsafe { game_ref(state) }.map_or(0, |g| chips(g.pot()))
}

/// # Safety
/// `state` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_current_bet(state: *const LimitHoldemState) -> i64 {
    unsafe { game_ref(state) }.map_or(0, |g| chips(g.current_bet()))
}

/// # Safety
/// `state` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_to_call(
    state: *const LimitHoldemState,
    player: i32,
) -> i64 {
    per_player(unsafe { game_ref(state) }, player, GameState::to_call)
}

/// # Safety
/// `state` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_total_contribution(
    state: *const LimitHoldemState,
    player: i32,
) -> i64 {
    per_player(unsafe { game_ref(state) }, player, GameState::total_contribution)
}

/// # Safety
/// `state` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_round_contribution(
    state: *const LimitHoldemState,
    player: i32,
) -> i64 {
    per_player(unsafe { game_ref(state) }, player, GameState::round_contribution)
}

fn per_player<E>(
    game: Option<&GameState>,
    player: i32,
    query: impl Fn(&GameState, usize) -> Result<u64, E>,
) -> i64 {
    match (game, seat(player)) {
        (Some(g), Some(p)) => query(g, p).map_or(0, chips),
        _ => 0,
    }
}

/// # Safety
/// `state` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_board_count(state: *const LimitHoldemState) -> i32 {
    unsafe { game_ref(state) }.map_or(0, |g| g.board_count() as i32)
}

/// Write up to `cap` revealed board cards to `out`. Returns the number written.
///
/// # Safety
/// `state` must be null or a live handle; `out` must be null or valid for
/// writes of `cap` bytes.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_board_cards(
    state: *const LimitHoldemState,
    out: *mut u8,
    cap: usize,
) -> i32 {
    match unsafe { game_ref(state) } {
        Some(g) => unsafe { write_cards(g.board_cards(), out, cap) },
        None => 0,
    }
}

/// Write the two hole cards of `player` to `out`. Returns the number written.
///
/// # Safety
/// `state` must be null or a live handle; `out` must be null or valid for
/// writes of 2 bytes.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_hole_cards(
    state: *const LimitHoldemState,
    player: i32,
    out: *mut u8,
) -> i32 {
    let hole = match (unsafe { game_ref(state) }, seat(player)) {
        (Some(g), Some(p)) => g.hole_cards(p).ok(),
        _ => None,
    };
    match hole {
        Some(cards) => unsafe { write_cards(&cards, out, 2) },
        None => 0,
    }
}

unsafe fn write_cards(cards: &[Card], out: *mut u8, cap: usize) -> i32 {
    if out.is_null() {
        return 0;
    }
    let n = cards.len().min(cap);
    let dst = unsafe { slice::from_raw_parts_mut(out, n) };
    for (slot, card) in dst.iter_mut().zip(cards) {
        *slot = card.index();
    }
    n as i32
}

/// Write up to `cap` legal action codes to `out`. Returns the number written.
///
/// # Safety
/// `state` must be null or a live handle; `out` must be null or valid for
/// writes of `cap` `i32` values.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_legal_actions(
    state: *const LimitHoldemState,
    out: *mut i32,
    cap: usize,
) -> i32 {
    let Some(g) = (unsafe { game_ref(state) }) else {
        return 0;
    };
    if out.is_null() {
        return 0;
    }
    let legal = g.legal_actions();
    let n = legal.len().min(cap);
    let dst = unsafe { slice::from_raw_parts_mut(out, n) };
    for (slot, action) in dst.iter_mut().zip(&legal) {
        *slot = action.code();
    }
    n as i32
}

/// Apply the action with code `action`. Returns 1 if applied, 0 otherwise.
///
/// # Safety
/// `state` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_apply_action(
    state: *mut LimitHoldemState,
    action: i32,
) -> i32 {
    let Some(game) = (unsafe { game_mut(state) }) else {
        return 0;
    };
    let applied = ActionType::try_from(action).and_then(|a| game.apply_action(a));
    i32::from(applied.is_ok())
}

/// Write both players' payoffs to `out`.
///
/// # Safety
/// `state` must be null or a live handle; `out` must be null or valid for
/// writes of 2 `i64` values.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_state_payoffs(state: *const LimitHoldemState, out: *mut i64) {
    let Some(g) = (unsafe { game_ref(state) }) else {
        return;
    };
    if out.is_null() {
        return;
    }
    let dst = unsafe { slice::from_raw_parts_mut(out, NUM_PLAYERS) };
    dst.copy_from_slice(&g.payoffs());
}

/// Compare two hands of 5 to 7 compact card values.
/// Returns 1 if `a` is stronger, -1 if `b` is, 0 on a tie and -2 for bad input.
///
/// # Safety
/// `a` and `b` must be null or valid for reads of `a_len` and `b_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn limit_holdem_compare_hands(
    a: *const u8,
    a_len: usize,
    b: *const u8,
    b_len: usize,
) -> i32 {
    let (Some(a), Some(b)) = (unsafe { read_cards(a, a_len) }, unsafe { read_cards(b, b_len) }) else {
        return -2;
    };
    match compare_hands(&a, &b) {
        Ok(Ordering::Greater) => 1,
        Ok(Ordering::Equal) => 0,
        Ok(Ordering::Less) => -1,
        Err(_) => -2,
    }
}

unsafe fn read_cards(ptr: *const u8, len: usize) -> Option<Vec<Card>> {
    if ptr.is_null() {
        return None;
    }
    let values = unsafe { slice::from_raw_parts(ptr, len) };
    values.iter().map(|&v| Card::try_from(v).ok()).collect()
}
