use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bots::{Bot, BotGenerator, hole_high_low, premium_hole, strong_hole};
use crate::table::{Action, PlayerView};

/// A rock. It opens three big blinds with a premium hand,
/// sometimes two with a strong one, and otherwise checks or
/// folds. Facing a bet it continues only with real cards,
/// and it judges those cards the same way on every street.
#[derive(Debug, Clone)]
pub struct TightBot {
    rng: StdRng,
}

impl TightBot {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        TightBot { rng }
    }
}

impl Default for TightBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for TightBot {
    fn act(&mut self, view: &PlayerView) -> Action {
        let (high, low, paired) = hole_high_low(view);
        let premium = premium_hole(high, low, paired);
        let strong = strong_hole(high, low, paired);
        let stack = view.my_stack();

        if view.can_check() {
            if premium {
                return Action::Bet((view.big_blind * 3).min(stack));
            }
            if strong && self.rng.random_bool(0.3) {
                return Action::Bet((view.big_blind * 2).min(stack));
            }
            return Action::Bet(0);
        }

        let to_call = view.to_call();
        if premium {
            return Action::Bet(to_call.min(stack));
        }
        if strong && to_call <= view.big_blind * 2 {
            return Action::Bet(to_call.min(stack));
        }
        Action::Fold
    }
}

/// Generator for [`TightBot`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TightBotGenerator;

impl BotGenerator for TightBotGenerator {
    fn generate(&self) -> Box<dyn Bot> {
        Box::new(TightBot::new())
    }
}
