//! The bots that play at the table. Every bot sees only a
//! [`PlayerView`] when it acts, so none of them can peek at
//! the opponent's cards or the deck. A registry builds bots
//! from their names so match ups can be described as plain
//! strings.

use crate::core::Value;
use crate::table::{Action, PlayerView};

/// This is the trait the table prompts for a decision.
/// Bots are stateful, so taking a mutable self lets them
/// keep rngs or counters between turns.
pub trait Bot {
    /// Decide what to do with the turn described by `view`.
    /// Whatever comes back is checked by the game, and an
    /// illegal action simply folds the hand.
    fn act(&mut self, view: &PlayerView) -> Action;
}

/// Builds fresh bots, one per match, so nothing leaks from
/// one match into the next.
pub trait BotGenerator {
    fn generate(&self) -> Box<dyn Bot>;
}

/// The viewer's hole cards as high value, low value, and
/// whether they are paired.
pub(crate) fn hole_high_low(view: &PlayerView) -> (Value, Value, bool) {
    let [a, b] = view.hole_cards;
    let (high, low) = if a.value >= b.value {
        (a.value, b.value)
    } else {
        (b.value, a.value)
    };
    (high, low, a.value == b.value)
}

/// Pocket tens or better, or ace queen or better.
pub(crate) fn premium_hole(high: Value, low: Value, paired: bool) -> bool {
    (paired && high >= Value::Ten) || (high == Value::Ace && low >= Value::Queen)
}

/// Pocket eights or better, or ace ten or better.
pub(crate) fn strong_hole(high: Value, low: Value, paired: bool) -> bool {
    (paired && high >= Value::Eight) || (high == Value::Ace && low >= Value::Ten)
}

mod registry;
pub use self::registry::{BotRegistry, RegistryError};

mod folding;
pub use self::folding::{FoldingBot, FoldingBotGenerator};

mod calling;
pub use self::calling::{CallingBot, CallingBotGenerator};

mod random;
pub use self::random::{RandomBot, RandomBotGenerator};

mod tight;
pub use self::tight::{TightBot, TightBotGenerator};

mod aggro;
pub use self::aggro::{AggroBot, AggroBotGenerator};

mod rule;
pub use self::rule::{RuleBot, RuleBotGenerator};

#[cfg(test)]
pub(crate) mod testing {
    use crate::core::Hand;
    use crate::table::{PlayerView, Pot};

    /// A view for seat zero with everything explicit, for
    /// driving bots straight into a decision point.
    pub fn view(
        hole: &str,
        board: &str,
        stacks: [i32; 2],
        round_bets: [i32; 2],
        pot: i32,
    ) -> PlayerView {
        let hole = Hand::new_from_str(hole).unwrap();
        let board = Hand::new_from_str(board).unwrap();
        PlayerView {
            seat: 0,
            to_act_idx: 0,
            small_blind_idx: 0,
            names: ["hero".to_string(), "villain".to_string()],
            hole_cards: [hole[0], hole[1]],
            stacks,
            round_bets,
            board: board.cards().to_vec(),
            pots: vec![Pot {
                value: pot,
                eligible: vec![0, 1],
            }],
            small_blind: 50,
            big_blind: 100,
        }
    }
}
