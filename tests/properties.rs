//! Statistical and property-based checks for the deck and round engine.

use bjround::hand::evaluate;
use bjround::{Card, DECK_SIZE, Deck, Phase, RoundState, Suit};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn index_of(card: &Card) -> usize {
    let suit = Suit::ALL
        .iter()
        .position(|&s| s == card.suit)
        .unwrap_or_default();
    suit * 13 + usize::from(card.rank - 1)
}

fn assert_full_deck(round: &RoundState) -> Result<(), TestCaseError> {
    let mut seen = [0_u8; DECK_SIZE];
    let cards = round
        .deck()
        .cards()
        .iter()
        .chain(round.player().hand().cards())
        .chain(round.dealer().hand().cards());
    for card in cards {
        seen[index_of(card)] += 1;
    }
    prop_assert!(seen.iter().all(|&count| count == 1), "cards: {seen:?}");
    Ok(())
}

#[test]
fn shuffle_places_every_card_evenly() {
    const SAMPLES: usize = 20_000;

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut counts = vec![[0_u32; DECK_SIZE]; DECK_SIZE];

    for _ in 0..SAMPLES {
        let deck = Deck::shuffled(&mut rng);
        for (position, card) in deck.cards().iter().enumerate() {
            counts[index_of(card)][position] += 1;
        }
    }

    // Expected count per cell is ~385 with a standard deviation of ~19.
    let expected = (SAMPLES / DECK_SIZE) as u32;
    for (card, positions) in counts.iter().enumerate() {
        for (position, &count) in positions.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < 150,
                "card {card} at position {position}: {count} (expected ~{expected})"
            );
        }
    }
}

#[test]
fn shuffled_deck_has_no_duplicates() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let deck = Deck::shuffled(&mut rng);
    let mut seen: Vec<_> = deck.cards().iter().map(Card::identity).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), DECK_SIZE);
}

proptest! {
    #[test]
    fn rounds_conserve_cards_and_chips(
        seed in any::<u64>(),
        bet in 1_i64..=100,
        hits in 0_usize..6,
    ) {
        let mut round = RoundState::new_round(100, seed);
        assert_full_deck(&round)?;

        round = round.place_bet(bet).unwrap().deal().unwrap();
        assert_full_deck(&round)?;

        for _ in 0..hits {
            match round.hit() {
                Ok(next) => round = next,
                Err(_) => break,
            }
            assert_full_deck(&round)?;
        }

        let settled = round.stand().unwrap();
        assert_full_deck(&settled)?;
        prop_assert_eq!(settled.phase(), Phase::Settled);

        let dealer = settled.dealer().hand();
        prop_assert!(dealer.total() >= 17);
        if dealer.len() > 2 {
            let before_last = evaluate(&dealer.cards()[..dealer.len() - 1]);
            prop_assert!(before_last.total < 17);
        }

        let settlement = settled.settlement().unwrap();
        let bet = usize::try_from(bet).unwrap();
        prop_assert_eq!(settled.player().bankroll(), 100 - bet + settlement.payout);
        prop_assert!(settlement.payout == 0 || settlement.payout == bet * 2);

        let next = settled.reset();
        assert_full_deck(&next)?;
        prop_assert_eq!(next.player().bankroll(), settled.player().bankroll());
    }
}
