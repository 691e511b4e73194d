use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::card::{Card, Suit, Value};

/// A deck of cards that deals from the top.
/// Shuffle it before dealing anything real.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
}

impl Default for Deck {
    /// Create the full 52 card deck in a fixed order.
    fn default() -> Self {
        let mut cards = Vec::with_capacity(52);
        for v in &Value::values() {
            for s in &Suit::suits() {
                cards.push(Card::new(*v, *s));
            }
        }
        Self { cards }
    }
}

impl Deck {
    /// Randomize the order of the remaining cards.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deal the top card, if there is one.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// How many cards are there left in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get an iterator over the remaining cards.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_full_deck_is_unique() {
        let d = Deck::default();
        assert_eq!(52, d.len());
        let unique: HashSet<Card> = d.iter().copied().collect();
        assert_eq!(52, unique.len());
    }

    #[test]
    fn test_deal_empties_the_deck() {
        let mut d = Deck::default();
        for _ in 0..52 {
            assert!(d.deal().is_some());
        }
        assert!(d.is_empty());
        assert_eq!(None, d.deal());
    }

    #[test]
    fn test_shuffle_keeps_every_card() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut d = Deck::default();
        d.shuffle(&mut rng);
        assert_eq!(52, d.len());
        let unique: HashSet<Card> = d.iter().copied().collect();
        assert_eq!(52, unique.len());
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let mut a = Deck::default();
        let mut b = Deck::default();
        a.shuffle(&mut StdRng::seed_from_u64(7));
        b.shuffle(&mut StdRng::seed_from_u64(7));
        while let Some(card) = a.deal() {
            assert_eq!(Some(card), b.deal());
        }
    }
}
