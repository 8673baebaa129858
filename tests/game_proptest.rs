/// Property-based tests for dealing and flipping using proptest
///
/// These check the pairing invariant of every deal and the bookkeeping
/// invariants of a game under arbitrary sequences of player and clock input.
use proptest::prelude::*;
use tui_memory::core::{ClockScheduler, Deck, GameConfig, GameState, Shuffler};
use tui_memory::types::{CardState, GameStatus, Symbol};

#[derive(Debug, Clone)]
enum Op {
    Flip(usize),
    Advance(u64),
    NewGame,
    Reset,
}

fn alphabet_strategy() -> impl Strategy<Value = Vec<Symbol>> {
    prop::sample::subsequence(Symbol::ALL.to_vec(), 1..=Symbol::ALL.len())
}

fn op_strategy(card_count: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0..card_count).prop_map(Op::Flip),
        3 => (0u64..2_500).prop_map(Op::Advance),
        1 => Just(Op::NewGame),
        1 => Just(Op::Reset),
    ]
}

fn count(cards: &[CardState], state: CardState) -> usize {
    cards.iter().filter(|c| **c == state).count()
}

proptest! {
    #[test]
    fn test_deal_holds_every_symbol_exactly_twice(alphabet in alphabet_strategy(), seed in any::<u64>()) {
        let deck = Deck::from_alphabet(&alphabet, &mut Shuffler::seeded(seed)).unwrap();

        prop_assert_eq!(deck.len(), alphabet.len() * 2);
        for symbol in &alphabet {
            let n = deck.symbols().iter().filter(|s| *s == symbol).count();
            prop_assert_eq!(n, 2, "{:?} appears {} times", symbol, n);
        }
        for position in 0..deck.len() {
            let partner = deck.partner_of(position).unwrap();
            prop_assert_ne!(partner, position);
            prop_assert_eq!(deck.symbol_at(partner), deck.symbol_at(position));
        }
    }

    #[test]
    fn test_bookkeeping_survives_any_input(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(16), 0..200),
    ) {
        let config = GameConfig::default().with_seed(seed);
        let mut game = GameState::new(config, ClockScheduler::new(), ()).unwrap();
        game.new_game();

        for op in ops {
            match op {
                Op::Flip(position) => {
                    game.flip_card(position).unwrap();
                }
                Op::Advance(ms) => game.advance(ms),
                Op::NewGame => game.new_game(),
                Op::Reset => game.reset(),
            }

            let cards = game.cards();
            prop_assert!(game.selection().len() <= 2);
            prop_assert_eq!(count(cards, CardState::Flipped), game.selection().len());
            prop_assert_eq!(count(cards, CardState::Matched), game.matched_count());
            prop_assert_eq!(game.matched_count() % 2, 0);
            for pair in game.matched().chunks(2) {
                prop_assert_eq!(game.symbol_at(pair[0]), game.symbol_at(pair[1]));
            }
            if game.status().is_terminal() || game.status() == GameStatus::Idle {
                prop_assert!(!game.timer_running());
            }
            if game.status() == GameStatus::Won {
                prop_assert_eq!(game.matched_count(), game.card_count());
            }
        }
    }
}
