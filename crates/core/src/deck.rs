//! Deck - one game's arrangement of symbol pairs across grid positions.

use crate::config::validate_alphabet;
use crate::error::ConfigError;
use crate::rng::Shuffler;
use crate::types::Symbol;

/// Symbols laid out by position; every symbol appears exactly twice.
///
/// A deck is immutable once built. A new game builds a new deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Symbol>,
}

impl Deck {
    /// Double `alphabet` and shuffle it into a new deck.
    pub fn from_alphabet(alphabet: &[Symbol], shuffler: &mut Shuffler) -> Result<Self, ConfigError> {
        validate_alphabet(alphabet)?;
        Ok(Self::shuffled(alphabet, shuffler))
    }

    /// Use a prepared arrangement as-is.
    ///
    /// Fails unless every symbol present appears exactly twice.
    pub fn from_cards(cards: Vec<Symbol>) -> Result<Self, ConfigError> {
        if cards.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        for symbol in &cards {
            let count = cards.iter().filter(|s| *s == symbol).count();
            if count != 2 {
                return Err(ConfigError::UnpairedSymbol {
                    symbol: *symbol,
                    count,
                });
            }
        }
        Ok(Self { cards })
    }

    /// Alphabet must already be validated.
    pub(crate) fn shuffled(alphabet: &[Symbol], shuffler: &mut Shuffler) -> Self {
        let doubled: Vec<Symbol> = alphabet.iter().chain(alphabet.iter()).copied().collect();
        Self {
            cards: shuffler.shuffle(&doubled),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn symbol_at(&self, position: usize) -> Option<Symbol> {
        self.cards.get(position).copied()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.cards
    }

    /// `(position, symbol)` entries in position order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, Symbol)> + '_ {
        self.cards.iter().copied().enumerate()
    }

    /// The other position holding the same symbol.
    pub fn partner_of(&self, position: usize) -> Option<usize> {
        let symbol = self.symbol_at(position)?;
        self.cards
            .iter()
            .enumerate()
            .position(|(i, s)| i != position && *s == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_alphabet_pairs_every_symbol() {
        let mut shuffler = Shuffler::seeded(12345);
        let deck = Deck::from_alphabet(&Symbol::ALL, &mut shuffler).unwrap();

        assert_eq!(deck.len(), 16);
        for symbol in Symbol::ALL {
            let count = deck.symbols().iter().filter(|s| **s == symbol).count();
            assert_eq!(count, 2, "{symbol:?} should appear twice");
        }
    }

    #[test]
    fn test_from_alphabet_rejects_duplicates() {
        let mut shuffler = Shuffler::seeded(1);
        let err = Deck::from_alphabet(&[Symbol::Ghost, Symbol::Ghost], &mut shuffler).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateSymbol(Symbol::Ghost));
    }

    #[test]
    fn test_from_cards_keeps_order() {
        let deck = Deck::from_cards(vec![Symbol::Ghost, Symbol::Skull, Symbol::Ghost, Symbol::Skull]).unwrap();
        assert_eq!(deck.symbol_at(0), Some(Symbol::Ghost));
        assert_eq!(deck.symbol_at(1), Some(Symbol::Skull));
        assert_eq!(deck.symbol_at(4), None);
    }

    #[test]
    fn test_from_cards_rejects_unpaired() {
        let err = Deck::from_cards(vec![Symbol::Ghost, Symbol::Skull, Symbol::Ghost]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnpairedSymbol {
                symbol: Symbol::Skull,
                count: 1
            }
        );
        assert_eq!(Deck::from_cards(Vec::new()), Err(ConfigError::EmptyAlphabet));
    }

    #[test]
    fn test_partner_of() {
        let deck = Deck::from_cards(vec![Symbol::Alien, Symbol::Robot, Symbol::Robot, Symbol::Alien]).unwrap();
        assert_eq!(deck.partner_of(0), Some(3));
        assert_eq!(deck.partner_of(1), Some(2));
        assert_eq!(deck.partner_of(9), None);
    }

    #[test]
    fn test_entries_are_position_indexed() {
        let deck = Deck::from_cards(vec![Symbol::Ogre, Symbol::Ogre]).unwrap();
        let entries: Vec<_> = deck.entries().collect();
        assert_eq!(entries, vec![(0, Symbol::Ogre), (1, Symbol::Ogre)]);
    }
}
