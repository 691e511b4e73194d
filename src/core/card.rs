use std::fmt;
use std::str::FromStr;

use crate::core::error::CardParseError;

/// Card value or rank.
/// This is the face value with the ace high, so
/// `Value::Two as u8 == 2` and `Value::Ace as u8 == 14`.
#[derive(
    PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Value {
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// T
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
    /// A
    Ace = 14,
}

/// Constant of all the values.
/// This is what `Value::values()` returns.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// Parse a value character. Both cases are accepted.
    pub fn from_char(c: char) -> Option<Value> {
        match c.to_ascii_lowercase() {
            'a' => Some(Value::Ace),
            'k' => Some(Value::King),
            'q' => Some(Value::Queen),
            'j' => Some(Value::Jack),
            't' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// The canonical (lowercase) character for this value.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'a',
            Value::King => 'k',
            Value::Queen => 'q',
            Value::Jack => 'j',
            Value::Ten => 't',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }

    /// The numeric face value (2 through 14).
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Enum for the four different suits.
/// The ordering is only there to allow sorting cards;
/// suits never decide hand comparisons.
#[derive(
    PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Diamonds
    Diamond = 1,
    /// Clubs
    Club = 2,
    /// Hearts
    Heart = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Parse a suit character. Both cases are accepted.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            's' => Some(Suit::Spade),
            'd' => Some(Suit::Diamond),
            'c' => Some(Suit::Club),
            'h' => Some(Suit::Heart),
            _ => None,
        }
    }

    /// The canonical (lowercase) character for this suit.
    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Diamond => 'd',
            Suit::Club => 'c',
            Suit::Heart => 'h',
        }
    }
}

/// The core card type. A card is a value and a suit,
/// written as a two character token like `as` or `td`.
#[derive(
    PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl TryFrom<&str> for Card {
    type Error = CardParseError;

    /// Parse a single two character token, case-insensitive.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        let value_char = chars.next().ok_or(CardParseError::TooFewChars)?;
        let suit_char = chars.next().ok_or(CardParseError::TooFewChars)?;
        if chars.next().is_some() {
            return Err(CardParseError::UnparsedCharsRemaining);
        }
        let value =
            Value::from_char(value_char).ok_or(CardParseError::UnexpectedValueChar(value_char))?;
        let suit =
            Suit::from_char(suit_char).ok_or(CardParseError::UnexpectedSuitChar(suit_char))?;
        Ok(Card { value, suit })
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::try_from(s)
    }
}
