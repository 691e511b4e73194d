use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bots::{Bot, BotGenerator, hole_high_low};
use crate::core::Value;
use crate::table::{Action, PlayerView};

/// Loose and aggressive. Almost any two connected or high
/// cards are playable to it: it stabs at half the pot when
/// checked to, occasionally min raises a cheap bet, and
/// pays off nearly everything else.
#[derive(Debug, Clone)]
pub struct AggroBot {
    rng: StdRng,
}

impl AggroBot {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        AggroBot { rng }
    }
}

impl Default for AggroBot {
    fn default() -> Self {
        Self::new()
    }
}

/// An eight high, a six low, or at most a three value gap.
fn playable_hole(high: Value, low: Value) -> bool {
    high >= Value::Eight || low >= Value::Six || high.as_u8() - low.as_u8() <= 3
}

impl Bot for AggroBot {
    fn act(&mut self, view: &PlayerView) -> Action {
        let (high, low, _paired) = hole_high_low(view);
        let playable = playable_hole(high, low);
        let stack = view.my_stack();

        if view.can_check() {
            if playable && self.rng.random_bool(0.7) {
                // Stab at half the pot, at least a big blind.
                let stab = (view.pot_total() / 2).max(view.big_blind).min(stack);
                return Action::Bet(stab);
            }
            return Action::Bet(0);
        }

        let to_call = view.to_call();
        if playable {
            if self.rng.random_bool(0.3) && f64::from(to_call) <= f64::from(stack) * 0.3 {
                // Min raise: double the max bet in total.
                let extra = (view.max_bet() * 2 - view.my_bet()).min(stack);
                return Action::Bet(extra);
            }
            return Action::Bet(to_call.min(stack));
        }
        if to_call <= view.big_blind {
            return Action::Bet(to_call.min(stack));
        }
        Action::Fold
    }
}

/// Generator for [`AggroBot`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AggroBotGenerator;

impl BotGenerator for AggroBotGenerator {
    fn generate(&self) -> Box<dyn Bot> {
        Box::new(AggroBot::new())
    }
}
