use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bots::{Bot, BotGenerator, hole_high_low, premium_hole, strong_hole};
use crate::core::{Rankable, Value};
use crate::evo::Strategy;
use crate::table::{Action, PlayerView, Street};

/// The evolvable bot. All of its decisions run through the
/// numbers in a [`Strategy`]: how big to open each preflop
/// tier, how often to fire, and what price it will pay to
/// continue after the flop. The genetic search breeds those
/// numbers, this bot just obeys them.
#[derive(Debug, Clone)]
pub struct RuleBot {
    strategy: Strategy,
    rng: StdRng,
}

impl RuleBot {
    /// The strategy is clamped into its gene bounds first,
    /// so every probability it carries is a real one.
    pub fn new(strategy: Strategy) -> Self {
        Self::with_rng(strategy, StdRng::from_os_rng())
    }

    pub fn with_rng(strategy: Strategy, rng: StdRng) -> Self {
        RuleBot {
            strategy: strategy.clamped(),
            rng,
        }
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// An open sized as a multiple of the big blind, capped
    /// at the stack.
    fn open_amount(&self, view: &PlayerView, mult: f64) -> i32 {
        let sized = (mult * f64::from(view.big_blind)).round() as i32;
        sized.min(view.my_stack())
    }

    /// Made hand strength over the board, scaled into zero
    /// to one: the rank category refined by the top card of
    /// the best five.
    fn hand_strength(&self, view: &PlayerView) -> f64 {
        let mut cards = view.board.clone();
        cards.extend(view.hole_cards);
        match cards.rank() {
            Ok(ranking) => {
                let category = f64::from(ranking.rank as u8);
                let top = f64::from(ranking.cards[0].value.as_u8() - 2) / 12.0;
                (category + top) / 9.0
            }
            Err(_) => 0.0,
        }
    }

    fn preflop(&mut self, view: &PlayerView) -> Action {
        let (high, low, paired) = hole_high_low(view);
        let premium = premium_hole(high, low, paired);
        let strong = strong_hole(high, low, paired);
        let medium = medium_hole(high, low, paired);
        let stack = view.my_stack();

        if view.can_check() {
            if premium {
                return Action::Bet(self.open_amount(view, self.strategy.prem_open_mult));
            }
            if strong {
                return Action::Bet(self.open_amount(view, self.strategy.strong_open_mult));
            }
            if medium && self.rng.random_bool(self.strategy.medium_open_freq) {
                return Action::Bet(self.open_amount(view, self.strategy.medium_open_mult));
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
        if medium
            && f64::from(to_call) <= self.strategy.medium_call_cheap_frac * f64::from(stack)
        {
            return Action::Bet(to_call.min(stack));
        }
        Action::Fold
    }

    fn postflop(&mut self, view: &PlayerView) -> Action {
        let strength = self.hand_strength(view);
        let stack = view.my_stack();

        if view.can_check() {
            if strength >= self.strategy.postflop_bet_threshold
                && self.rng.random_bool(self.strategy.postflop_bet_freq)
            {
                let stab = (view.pot_total() / 2).max(view.big_blind).min(stack);
                return Action::Bet(stab);
            }
            return Action::Bet(0);
        }

        let to_call = view.to_call();
        let priced_in = f64::from(to_call)
            <= self.strategy.postflop_call_pot_ratio * f64::from(view.pot_total());
        if strength >= self.strategy.postflop_call_threshold && priced_in {
            return Action::Bet(to_call.min(stack));
        }
        Action::Fold
    }
}

/// Any pair, any ace, or jack high with an eight behind it.
/// Worth a flop at the right price.
fn medium_hole(high: Value, low: Value, paired: bool) -> bool {
    paired || high == Value::Ace || (high >= Value::Jack && low >= Value::Eight)
}

impl Bot for RuleBot {
    fn act(&mut self, view: &PlayerView) -> Action {
        if view.street() == Street::Preflop {
            self.preflop(view)
        } else {
            self.postflop(view)
        }
    }
}

/// Generator for [`RuleBot`], carrying the strategy every
/// generated bot will play.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBotGenerator {
    pub strategy: Strategy,
}

impl RuleBotGenerator {
    pub fn new(strategy: Strategy) -> Self {
        RuleBotGenerator { strategy }
    }
}

impl BotGenerator for RuleBotGenerator {
    fn generate(&self) -> Box<dyn Bot> {
        Box::new(RuleBot::new(self.strategy))
    }
}
