use std::cmp::Ordering;

use tracing::{Level, event};

use crate::bots::Bot;
use crate::table::game::Game;

/// Matches stop after this many hands unless told otherwise.
/// Two seats that can only trade blinds back and forth would
/// otherwise never finish.
pub const DEFAULT_HAND_CAP: u32 = 500;

/// How a finished match came out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchResult {
    /// The winning seat. `None` only when the hand cap hit
    /// with the stacks dead even.
    pub winner: Option<usize>,
    /// Stacks as the last completed hand left them.
    pub final_stacks: [i32; 2],
    pub hands_played: u32,
}

/// Drives one heads-up match: asks the bot in turn for an
/// action, feeds it to the game, and repeats until a stack
/// is gone or the hand cap is reached.
pub struct MatchSimulation {
    pub game: Game,
    bots: [Box<dyn Bot>; 2],
    max_hands: u32,
}

impl MatchSimulation {
    pub fn new(game: Game, bots: [Box<dyn Bot>; 2]) -> Self {
        MatchSimulation {
            game,
            bots,
            max_hands: DEFAULT_HAND_CAP,
        }
    }

    /// Cap the match at `max_hands`. At the cap the bigger
    /// stack wins.
    pub fn with_hand_cap(mut self, max_hands: u32) -> Self {
        self.max_hands = max_hands;
        self
    }

    /// Is there anything left to play?
    pub fn more_hands(&self) -> bool {
        !self.game.is_over() && self.game.hands_played() < self.max_hands
    }

    /// Let the seat in turn take exactly one action.
    pub fn step(&mut self) {
        let seat = self.game.to_act();
        let view = self.game.player_view(seat);
        let action = self.bots[seat].act(&view);
        let outcome = self.game.apply_action(action);
        event!(Level::TRACE, seat, %outcome, "step");
    }

    /// Play the match out and report how it went.
    pub fn run(&mut self) -> MatchResult {
        while self.more_hands() {
            self.step();
        }
        // At the cap the game has already posted the next
        // hand's blinds, so read the stacks as the last
        // completed hand settled them.
        let final_stacks = self.game.settled_stacks();
        // A capped match goes to the bigger stack.
        let winner = self
            .game
            .winner()
            .or_else(|| match final_stacks[0].cmp(&final_stacks[1]) {
                Ordering::Greater => Some(0),
                Ordering::Less => Some(1),
                Ordering::Equal => None,
            });
        event!(
            Level::DEBUG,
            ?winner,
            hands = self.game.hands_played(),
            ?final_stacks,
            "match_finished"
        );
        MatchResult {
            winner,
            final_stacks,
            hands_played: self.game.hands_played(),
        }
    }
}
