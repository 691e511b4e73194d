use std::fmt;
use std::ops::Index;
use std::slice::Iter;

use crate::core::card::{Card, Suit, Value};
use crate::core::error::{CardParseError, HandError};

/// A hand of cards: hole cards, a board, or the combined
/// cards taken to showdown. Order of insertion is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create a new empty hand.
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Create a hand from cards that are already known to be unique.
    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Parse a hand from concatenated two character tokens,
    /// e.g. `"adkd"` for ace and king of diamonds.
    /// Duplicate cards are rejected.
    pub fn new_from_str(hand_string: &str) -> Result<Self, HandError> {
        let mut chars = hand_string.chars();
        let mut hand = Hand::new();

        while let Some(value_char) = chars.next() {
            let suit_char = chars.next().ok_or(CardParseError::TooFewChars)?;
            let value = Value::from_char(value_char)
                .ok_or(CardParseError::UnexpectedValueChar(value_char))?;
            let suit =
                Suit::from_char(suit_char).ok_or(CardParseError::UnexpectedSuitChar(suit_char))?;

            let card = Card { value, suit };
            if hand.contains(&card) {
                return Err(HandError::DuplicateCard(card));
            }
            hand.push(card);
        }

        Ok(hand)
    }

    /// Given a card, is it in the current hand?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Add a card to the hand.
    pub fn push(&mut self, c: Card) {
        self.cards.push(c);
    }

    /// The cards as a slice, in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// How many cards are there in the hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
