use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bots::{Bot, BotGenerator};
use crate::table::{Action, PlayerView, Street};

/// Chance of folding to a bet.
const DEFAULT_FOLD: f64 = 0.15;
/// Chance of flat calling rather than raising.
const DEFAULT_CALL: f64 = 0.5;

/// A chaos agent. Preflop it flat calls everything, after
/// that it folds, calls, or min raises on dice rolls. Useful
/// for shaking out betting engine edge cases and as a noisy
/// opponent in fitness rosters.
#[derive(Debug, Clone)]
pub struct RandomBot {
    percent_fold: f64,
    percent_call: f64,
    rng: StdRng,
}

impl RandomBot {
    pub fn new(percent_fold: f64, percent_call: f64) -> Self {
        Self::with_rng(percent_fold, percent_call, StdRng::from_os_rng())
    }

    /// Fix the rng so a match can be replayed.
    pub fn with_rng(percent_fold: f64, percent_call: f64, rng: StdRng) -> Self {
        RandomBot {
            percent_fold: percent_fold.clamp(0.0, 1.0),
            percent_call: percent_call.clamp(0.0, 1.0),
            rng,
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new(DEFAULT_FOLD, DEFAULT_CALL)
    }
}

impl Bot for RandomBot {
    fn act(&mut self, view: &PlayerView) -> Action {
        // Preflop it always flat calls and leaves the chaos
        // to the later streets.
        if view.street() == Street::Preflop {
            return Action::Bet(view.to_call().min(view.my_stack()));
        }

        let to_call = view.to_call();
        // Never fold when checking is free.
        if to_call > 0 && self.rng.random_bool(self.percent_fold) {
            return Action::Fold;
        }
        if self.rng.random_bool(self.percent_call) {
            return Action::Bet(to_call.min(view.my_stack()));
        }

        // Otherwise put in a min raise, shoving when the
        // stack cannot cover it.
        let target_total = (view.max_bet() * 2).max(view.big_blind);
        let extra = (target_total - view.my_bet()).min(view.my_stack());
        Action::Bet(extra.max(0))
    }
}

/// Generator for [`RandomBot`]. Every generated bot gets its
/// own OS seeded rng.
#[derive(Debug, Clone, Copy)]
pub struct RandomBotGenerator {
    pub percent_fold: f64,
    pub percent_call: f64,
}

impl Default for RandomBotGenerator {
    fn default() -> Self {
        RandomBotGenerator {
            percent_fold: DEFAULT_FOLD,
            percent_call: DEFAULT_CALL,
        }
    }
}

impl BotGenerator for RandomBotGenerator {
    fn generate(&self) -> Box<dyn Bot> {
        Box::new(RandomBot::new(self.percent_fold, self.percent_call))
    }
}
