//! This is the core module. It has the cards, the deck,
//! and the hand ranking code that everything else builds on.

/// card.rs has value, suit, and the card itself.
mod card;
/// Re-export Card, Value, and Suit.
pub use self::card::{Card, Suit, Value};

/// Errors for parsing and ranking.
mod error;
/// Export the error types.
pub use self::error::{CardParseError, HandError};

/// Code related to cards held together.
mod hand;
/// Export `Hand`.
pub use self::hand::Hand;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`.
pub use self::deck::Deck;

/// Five card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{Rank, Rankable, Ranking};
