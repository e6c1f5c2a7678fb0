use limit_holdem::cards::parse_cards;
use limit_holdem::evaluator::compare_hands;
use std::cmp::Ordering;

fn holdem(hole: &str, board: &str) -> Vec<limit_holdem::cards::Card> {
    let mut cards = parse_cards(hole).unwrap();
    cards.extend(parse_cards(board).unwrap());
    cards
}

#[test]
fn pair_beats_lower_pair() {
    let board = "Ac 9d 4s 2h 6c";
    let a = holdem("Ks Kh", board);
    let b = holdem("Qc Qh", board);
    assert_eq!(compare_hands(&a, &b).unwrap(), Ordering::Greater, "higher pair should win");
}

#[test]
fn pair_kicker_breaks_ties() {
    let board = "Kc 9d 4s 2h 6c";
    let a = holdem("Ks Ad", board);
    let b = holdem("Kh Qd", board);
    assert_eq!(compare_hands(&a, &b).unwrap(), Ordering::Greater, "ace kicker beats queen");
}

#[test]
fn board_straight_splits() {
    let board = "Tc Jd Qh Ks Ac";
    let a = holdem("2c 3d", board);
    let b = holdem("4h 5s", board);
    assert_eq!(compare_hands(&a, &b).unwrap(), Ordering::Equal);
}

#[test]
fn counterfeited_two_pair_plays_the_board() {
    // Both players' small pairs are overtaken by the board's two higher pairs.
    let board = "Kc Kd Qh Qs 9c";
    let a = holdem("3c 3d", board);
    let b = holdem("2h 4s", board);
    assert_eq!(compare_hands(&a, &b).unwrap(), Ordering::Equal);
}

#[test]
fn two_pair_third_pair_is_ignored_for_kicker() {
    // A: KK QQ with 9 kicker from the board; B: KK QQ with J kicker.
    let board = "Kc Kd Qh Qs 9c";
    let a = holdem("9d 2h", board);
    let b = holdem("Jh 2s", board);
    assert_eq!(compare_hands(&a, &b).unwrap(), Ordering::Less);
}

#[test]
fn flush_beats_straight() {
    let board = "9h 8h 7c 6h 2d";
    let a = holdem("Ah 3h", board);
    let b = holdem("Tc 5s", board);
    assert_eq!(compare_hands(&a, &b).unwrap(), Ordering::Greater);
}

#[test]
fn full_house_trips_rank_decides() {
    let board = "8c 8d 5h 5s Kc";
    let a = holdem("8h 2c", board);
    let b = holdem("5c Kd", board);
    // A: eights full of fives; B: fives full of kings
    assert_eq!(compare_hands(&a, &b).unwrap(), Ordering::Greater);
}

#[test]
fn steel_wheel_is_the_lowest_straight_flush() {
    let board = "3h 4h 5h Kc Qd";
    let a = holdem("Ah 2h", board);
    let b = holdem("6h 7h", board);
    assert_eq!(compare_hands(&a, &b).unwrap(), Ordering::Less);
}
