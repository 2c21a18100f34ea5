//! AI strategy tests.

use oldmaid::strategy::{choose_draw_index, optimal_draw_index};
use oldmaid::{Card, Difficulty, Hand, JokerColor, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::suited(suit, rank)
}

const RED: Card = Card::joker(JokerColor::Red);

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[test]
fn heuristic_targets_the_first_joker() {
    let ai = Hand::from_cards(vec![card(Suit::Clubs, 2)]);
    let opponent = Hand::from_cards(vec![
        card(Suit::Spades, 5),
        card(Suit::Hearts, 13),
        RED,
        card(Suit::Diamonds, 5),
    ]);

    assert_eq!(optimal_draw_index(&mut rng(0), &ai, &opponent), 2);
}

#[test]
fn heuristic_targets_the_joker_when_it_already_holds_one() {
    // The rank-match rule can only fire when the AI itself holds a joker,
    // and it lands on the same card the joker rule would.
    let ai = Hand::from_cards(vec![RED, card(Suit::Clubs, 2)]);
    let opponent = Hand::from_cards(vec![
        card(Suit::Spades, 2),
        Card::joker(JokerColor::Black),
        card(Suit::Hearts, 7),
    ]);

    assert_eq!(optimal_draw_index(&mut rng(0), &ai, &opponent), 1);
}

#[test]
fn heuristic_targets_the_opponents_most_frequent_rank() {
    let ai = Hand::from_cards(vec![card(Suit::Clubs, 2)]);
    let opponent = Hand::from_cards(vec![
        card(Suit::Spades, 3),
        card(Suit::Hearts, 7),
        card(Suit::Diamonds, 7),
        card(Suit::Clubs, 2),
    ]);

    assert_eq!(optimal_draw_index(&mut rng(0), &ai, &opponent), 1);
}

#[test]
fn heuristic_frequency_ties_go_to_the_rank_seen_first() {
    let ai = Hand::new();
    let opponent = Hand::from_cards(vec![
        card(Suit::Spades, 4),
        card(Suit::Hearts, 9),
        card(Suit::Diamonds, 4),
        card(Suit::Diamonds, 9),
    ]);

    assert_eq!(optimal_draw_index(&mut rng(0), &ai, &opponent), 0);
}

#[test]
#[expect(
    clippy::cast_precision_loss,
    reason = "trial counts are far below f64 precision limits"
)]
fn hard_draws_uniformly_even_past_a_juicy_joker() {
    // A joker up front would be the heuristic's first pick; Hard must show
    // no preference for it.
    let mut cards = vec![RED];
    cards.extend((1..=8).map(|rank| card(Suit::Spades, rank)));
    let opponent = Hand::from_cards(cards);
    let ai = Hand::from_cards(vec![card(Suit::Hearts, 13)]);

    const TRIALS: usize = 9_000;
    let mut rng = rng(1234);
    let mut counts = [0usize; 9];
    for _ in 0..TRIALS {
        counts[choose_draw_index(Difficulty::Hard, &mut rng, &ai, &opponent)] += 1;
    }

    let expected = TRIALS as f64 / 9.0;
    let chi_square: f64 = counts
        .iter()
        .map(|&observed| {
            let delta = observed as f64 - expected;
            delta * delta / expected
        })
        .sum();

    // 99.99% critical value for 8 degrees of freedom.
    assert!(chi_square < 31.8, "chi-square {chi_square} suggests a biased draw: {counts:?}");
}

#[test]
#[expect(
    clippy::cast_precision_loss,
    reason = "trial counts are far below f64 precision limits"
)]
fn easy_plays_the_heuristic_about_four_times_in_five() {
    let ai = Hand::from_cards(vec![card(Suit::Diamonds, 13)]);
    let opponent = Hand::from_cards(vec![card(Suit::Spades, 2), RED, card(Suit::Hearts, 9)]);

    const TRIALS: usize = 3_000;
    let mut rng = rng(99);
    let mut joker_draws = 0usize;
    for _ in 0..TRIALS {
        if choose_draw_index(Difficulty::Easy, &mut rng, &ai, &opponent) == 1 {
            joker_draws += 1;
        }
    }

    // Heuristic 80% of the time plus 1-in-3 random hits: about 0.867.
    let rate = joker_draws as f64 / TRIALS as f64;
    assert!((0.83..0.90).contains(&rate), "easy joker-draw rate {rate}");
}

#[test]
#[expect(
    clippy::cast_precision_loss,
    reason = "trial counts are far below f64 precision limits"
)]
fn medium_plays_the_heuristic_about_half_the_time() {
    let ai = Hand::from_cards(vec![card(Suit::Diamonds, 13)]);
    let opponent = Hand::from_cards(vec![card(Suit::Spades, 2), RED, card(Suit::Hearts, 9)]);

    const TRIALS: usize = 3_000;
    let mut rng = rng(100);
    let mut joker_draws = 0usize;
    for _ in 0..TRIALS {
        if choose_draw_index(Difficulty::Medium, &mut rng, &ai, &opponent) == 1 {
            joker_draws += 1;
        }
    }

    // Heuristic half the time plus 1-in-3 random hits: about 0.667.
    let rate = joker_draws as f64 / TRIALS as f64;
    assert!((0.62..0.71).contains(&rate), "medium joker-draw rate {rate}");
}

#[test]
fn single_card_hands_leave_no_choice() {
    let ai = Hand::from_cards(vec![card(Suit::Clubs, 2)]);
    let opponent = Hand::from_cards(vec![card(Suit::Spades, 8)]);

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mut rng = rng(7);
        for _ in 0..32 {
            assert_eq!(choose_draw_index(difficulty, &mut rng, &ai, &opponent), 0);
        }
    }
}
