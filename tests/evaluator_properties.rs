use limit_holdem::cards::{Card, Rank, Suit};
use limit_holdem::evaluator::{compare_hands, evaluate_best, evaluate_five, Category};
use proptest::prelude::*;
use std::cmp::Ordering;

/// `n` distinct cards in random order.
fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    let all: Vec<u8> = (0..52).collect();
    prop::sample::subsequence(all, n)
        .prop_shuffle()
        .prop_map(|vals| vals.into_iter().map(|v| Card::try_from(v).unwrap()).collect())
}

fn five_of(cards: &[Card]) -> [Card; 5] {
    [cards[0], cards[1], cards[2], cards[3], cards[4]]
}

fn straight_cards(top: u8) -> [Card; 5] {
    // `top` is a rank index; 3 (five-high) means the wheel
    let ranks: Vec<Rank> = if top == Rank::Five.index() {
        vec![Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]
    } else {
        (top - 4..=top).filter_map(Rank::from_index).collect()
    };
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    [
        Card::new(ranks[0], suits[0]),
        Card::new(ranks[1], suits[1]),
        Card::new(ranks[2], suits[2]),
        Card::new(ranks[3], suits[3]),
        Card::new(ranks[4], suits[4]),
    ]
}

fn flush_rank_set() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::btree_set(0u8..13u8, 5)
        .prop_filter("non-straight ranks", |set| {
            let vals: Vec<u8> = set.iter().copied().collect();
            let is_wheel = vals == vec![0, 1, 2, 3, 12];
            let is_straight = vals.windows(2).all(|w| w[1] == w[0] + 1);
            !(is_straight || is_wheel)
        })
        .prop_map(|set| set.into_iter().rev().filter_map(Rank::from_index).collect())
}

proptest! {
    #[test]
    fn evaluation_ignores_card_order(cards in distinct_cards(5), rotate in 0usize..5) {
        let original = five_of(&cards);
        let mut moved = original;
        moved.rotate_left(rotate);
        moved.swap(0, 4);
        prop_assert_eq!(evaluate_five(&original).strength(), evaluate_five(&moved).strength());
    }

    #[test]
    fn higher_category_always_wins(a in distinct_cards(5), b in distinct_cards(5)) {
        let ea = evaluate_five(&five_of(&a));
        let eb = evaluate_five(&five_of(&b));
        if ea.category > eb.category {
            prop_assert!(ea > eb);
        }
        prop_assert_eq!(ea.strength().category(), ea.category);
    }

    #[test]
    fn five_card_ordering_is_antisymmetric_and_transitive(
        a in distinct_cards(5),
        b in distinct_cards(5),
        c in distinct_cards(5),
    ) {
        let ea = evaluate_five(&five_of(&a));
        let eb = evaluate_five(&five_of(&b));
        let ec = evaluate_five(&five_of(&c));

        if ea >= eb && eb >= ea { prop_assert_eq!(ea, eb); }
        if ea >= eb && eb >= ec { prop_assert!(ea >= ec); }
    }

    #[test]
    fn best_of_seven_matches_its_strongest_subset(cards in distinct_cards(7)) {
        let best = evaluate_best(&cards).unwrap();
        let mut matched = false;
        for i in 0..3 { for j in (i+1)..4 { for k in (j+1)..5 { for l in (k+1)..6 { for m in (l+1)..7 {
            let e5 = evaluate_five(&[cards[i], cards[j], cards[k], cards[l], cards[m]]);
            prop_assert!(best >= e5);
            matched |= best == e5;
        }}}}}
        prop_assert!(matched);
    }

    #[test]
    fn compare_hands_is_antisymmetric(cards in distinct_cards(9)) {
        let board = &cards[4..9];
        let a: Vec<Card> = cards[0..2].iter().chain(board).copied().collect();
        let b: Vec<Card> = cards[2..4].iter().chain(board).copied().collect();
        let ab = compare_hands(&a, &b).unwrap();
        let ba = compare_hands(&b, &a).unwrap();
        prop_assert_eq!(ab, ba.reverse());
    }

    #[test]
    fn straight_ordering_respects_top_card(top_hi in 4u8..=12u8, top_lo in 3u8..=11u8) {
        prop_assume!(top_hi > top_lo);
        let e_hi = evaluate_five(&straight_cards(top_hi));
        let e_lo = evaluate_five(&straight_cards(top_lo));
        prop_assert_eq!(e_hi.category, Category::Straight);
        prop_assert_eq!(e_lo.category, Category::Straight);
        prop_assert!(e_hi > e_lo);
    }

    #[test]
    fn flush_kicker_ordering(a in flush_rank_set(), b in flush_rank_set()) {
        let hand_a: Vec<Card> = a.iter().map(|&r| Card::new(r, Suit::Hearts)).collect();
        let hand_b: Vec<Card> = b.iter().map(|&r| Card::new(r, Suit::Spades)).collect();
        let e_a = evaluate_five(&five_of(&hand_a));
        let e_b = evaluate_five(&five_of(&hand_b));
        prop_assert_eq!(e_a.category, Category::Flush);
        prop_assert_eq!(e_b.category, Category::Flush);

        // rank lists are already descending
        match a.cmp(&b) {
            Ordering::Greater => prop_assert!(e_a > e_b),
            Ordering::Less => prop_assert!(e_a < e_b),
            Ordering::Equal => prop_assert_eq!(e_a, e_b),
        }
    }
}
