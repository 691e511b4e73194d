use std::cmp::Ordering;
use std::fmt;

use crate::core::card::{Card, Suit, Value};
use crate::core::error::HandError;
use crate::core::hand::Hand;

/// All the different possible hand ranks.
/// Ranks are ordered from weakest to strongest.
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Rank {
    /// The lowest rank. No matches.
    HighCard,
    /// One card matches another.
    OnePair,
    /// Two different pairs of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five values in a sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of one value and two of another value.
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five values in a sequence, all of the same suit.
    StraightFlush,
}

impl Rank {
    /// The human readable name of this rank.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::HighCard => "High Card",
            Rank::OnePair => "Pair",
            Rank::TwoPair => "Two Pair",
            Rank::ThreeOfAKind => "Three of a Kind",
            Rank::Straight => "Straight",
            Rank::Flush => "Flush",
            Rank::FullHouse => "Full House",
            Rank::FourOfAKind => "Four of a Kind",
            Rank::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The result of ranking five or more cards: the rank and
/// the exact five cards that made it. The five are ordered
/// for tie breaking, combination cards first and kickers
/// after, each group descending by value. For the wheel
/// straight the ace sits last and the five leads.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Ranking {
    /// The rank of the best five cards.
    pub rank: Rank,
    /// The five cards, in tie break order.
    pub cards: [Card; 5],
}

impl Ranking {
    /// The five card values in tie break order.
    pub fn values(&self) -> [Value; 5] {
        self.cards.map(|c| c.value)
    }
}

/// Rankings compare by rank and then card values element
/// wise. Suits never decide a comparison, so two rankings
/// that differ only in suits are equal.
impl Ord for Ranking {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.values().cmp(&other.values()))
    }
}

impl PartialOrd for Ranking {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranking {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranking {}

/// Can this turn into a hand ranking?
pub trait Rankable {
    /// The cards to rank.
    fn cards(&self) -> &[Card];

    /// Rank the cards into the best five card poker hand.
    /// Input order does not matter. Fails when fewer than
    /// five cards are given or any card repeats, since both
    /// point at a broken caller rather than a bad deal.
    fn rank(&self) -> Result<Ranking, HandError> {
        rank_cards(self.cards())
    }
}

impl Rankable for Hand {
    fn cards(&self) -> &[Card] {
        self.cards()
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> &[Card] {
        self
    }
}

fn rank_cards(cards: &[Card]) -> Result<Ranking, HandError> {
    if cards.len() < 5 {
        return Err(HandError::TooFewCards(cards.len()));
    }

    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    if let Some(pair) = sorted.windows(2).find(|w| w[0] == w[1]) {
        return Err(HandError::DuplicateCard(pair[0]));
    }

    let mut counts = [0u8; 15];
    for card in &sorted {
        counts[card.value.as_u8() as usize] += 1;
    }

    // Check each rank from strongest to weakest, first match
    // wins. Every finder gets the cards descending by value.
    let ranking = straight_flush(&sorted)
        .or_else(|| four_of_a_kind(&sorted, &counts))
        .or_else(|| full_house(&sorted, &counts))
        .or_else(|| flush(&sorted))
        .or_else(|| straight(&sorted))
        .or_else(|| three_of_a_kind(&sorted, &counts))
        .or_else(|| two_pair(&sorted, &counts))
        .or_else(|| one_pair(&sorted, &counts))
        .unwrap_or_else(|| high_card(&sorted));
    Ok(ranking)
}

/// The cards of the suit holding five or more of them,
/// still descending. At most one suit can qualify.
fn flush_cards(sorted: &[Card]) -> Option<Vec<Card>> {
    let mut suit_counts = [0u8; 4];
    for card in sorted {
        suit_counts[card.suit as usize] += 1;
    }
    let flush_suit = Suit::suits()
        .into_iter()
        .find(|s| suit_counts[*s as usize] >= 5)?;
    Some(
        sorted
            .iter()
            .copied()
            .filter(|c| c.suit == flush_suit)
            .collect(),
    )
}

/// The best run of five consecutive distinct values. The
/// wheel counts, with the ace playing below the two.
fn straight_run(sorted: &[Card]) -> Option<[Card; 5]> {
    // One card per value, still descending.
    let mut distinct: Vec<Card> = Vec::with_capacity(sorted.len());
    for &card in sorted {
        if distinct.last().map(|c| c.value) != Some(card.value) {
            distinct.push(card);
        }
    }

    // Five strictly descending values span exactly four
    // when and only when they are consecutive.
    for w in distinct.windows(5) {
        if w[0].value.as_u8() - w[4].value.as_u8() == 4 {
            return Some([w[0], w[1], w[2], w[3], w[4]]);
        }
    }

    // The wheel: ace first in the sort, five through two at
    // the very end.
    if distinct.first().map(|c| c.value) == Some(Value::Ace) {
        let tail = &distinct[distinct.len().saturating_sub(4)..];
        if tail.len() == 4 && tail[0].value == Value::Five && tail[3].value == Value::Two {
            return Some([tail[0], tail[1], tail[2], tail[3], distinct[0]]);
        }
    }

    None
}

/// The values occurring exactly `n` times, descending.
fn values_with_count(counts: &[u8; 15], n: u8) -> Vec<Value> {
    Value::values()
        .into_iter()
        .rev()
        .filter(|v| counts[v.as_u8() as usize] == n)
        .collect()
}

fn straight_flush(sorted: &[Card]) -> Option<Ranking> {
    let suited = flush_cards(sorted)?;
    let cards = straight_run(&suited)?;
    Some(Ranking {
        rank: Rank::StraightFlush,
        cards,
    })
}

fn four_of_a_kind(sorted: &[Card], counts: &[u8; 15]) -> Option<Ranking> {
    let quad = values_with_count(counts, 4).first().copied()?;
    let mut quads = sorted.iter().copied().filter(|c| c.value == quad);
    let (a, b, c, d) = (quads.next()?, quads.next()?, quads.next()?, quads.next()?);
    let kicker = sorted.iter().copied().find(|c| c.value != quad)?;
    Some(Ranking {
        rank: Rank::FourOfAKind,
        cards: [a, b, c, d, kicker],
    })
}

fn full_house(sorted: &[Card], counts: &[u8; 15]) -> Option<Ranking> {
    let triples = values_with_count(counts, 3);
    let trip = triples.first().copied()?;
    // The pair half can come from a real pair or from a
    // second triple, whichever value is higher.
    let best_pair = values_with_count(counts, 2).first().copied();
    let second_trip = triples.get(1).copied();
    let pair = match (best_pair, second_trip) {
        (Some(p), Some(t)) => Some(p.max(t)),
        (p, t) => p.or(t),
    }?;

    let mut trips = sorted.iter().copied().filter(|c| c.value == trip);
    let (a, b, c) = (trips.next()?, trips.next()?, trips.next()?);
    let mut pairs = sorted.iter().copied().filter(|c| c.value == pair);
    let (d, e) = (pairs.next()?, pairs.next()?);
    Some(Ranking {
        rank: Rank::FullHouse,
        cards: [a, b, c, d, e],
    })
}

fn flush(sorted: &[Card]) -> Option<Ranking> {
    let suited = flush_cards(sorted)?;
    Some(Ranking {
        rank: Rank::Flush,
        cards: [suited[0], suited[1], suited[2], suited[3], suited[4]],
    })
}

fn straight(sorted: &[Card]) -> Option<Ranking> {
    let cards = straight_run(sorted)?;
    Some(Ranking {
        rank: Rank::Straight,
        cards,
    })
}

fn three_of_a_kind(sorted: &[Card], counts: &[u8; 15]) -> Option<Ranking> {
    let trip = values_with_count(counts, 3).first().copied()?;
    let mut trips = sorted.iter().copied().filter(|c| c.value == trip);
    let (a, b, c) = (trips.next()?, trips.next()?, trips.next()?);
    let mut kickers = sorted.iter().copied().filter(|c| c.value != trip);
    let (d, e) = (kickers.next()?, kickers.next()?);
    Some(Ranking {
        rank: Rank::ThreeOfAKind,
        cards: [a, b, c, d, e],
    })
}

fn two_pair(sorted: &[Card], counts: &[u8; 15]) -> Option<Ranking> {
    let pairs = values_with_count(counts, 2);
    let (high, low) = (pairs.first().copied()?, pairs.get(1).copied()?);
    let mut highs = sorted.iter().copied().filter(|c| c.value == high);
    let (a, b) = (highs.next()?, highs.next()?);
    let mut lows = sorted.iter().copied().filter(|c| c.value == low);
    let (c, d) = (lows.next()?, lows.next()?);
    let kicker = sorted
        .iter()
        .copied()
        .find(|c| c.value != high && c.value != low)?;
    Some(Ranking {
        rank: Rank::TwoPair,
        cards: [a, b, c, d, kicker],
    })
}

fn one_pair(sorted: &[Card], counts: &[u8; 15]) -> Option<Ranking> {
    let pair = values_with_count(counts, 2).first().copied()?;
    let mut pairs = sorted.iter().copied().filter(|c| c.value == pair);
    let (a, b) = (pairs.next()?, pairs.next()?);
    let mut kickers = sorted.iter().copied().filter(|c| c.value != pair);
    let (c, d, e) = (kickers.next()?, kickers.next()?, kickers.next()?);
    Some(Ranking {
        rank: Rank::OnePair,
        cards: [a, b, c, d, e],
    })
}

fn high_card(sorted: &[Card]) -> Ranking {
    Ranking {
        rank: Rank::HighCard,
        cards: [sorted[0], sorted[1], sorted[2], sorted[3], sorted[4]],
    }
}
