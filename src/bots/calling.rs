use crate::bots::{Bot, BotGenerator};
use crate::table::{Action, PlayerView};

/// Calls cost at most this share of the stack.
const CALL_STACK_FRAC: f64 = 0.4;

/// The classic calling station. It checks whenever it can,
/// calls anything costing up to forty percent of its stack,
/// and folds to the rest. It never bets first.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingBot;

impl Bot for CallingBot {
    fn act(&mut self, view: &PlayerView) -> Action {
        if view.can_check() {
            return Action::Bet(0);
        }
        let to_call = view.to_call();
        if f64::from(to_call) <= f64::from(view.my_stack()) * CALL_STACK_FRAC {
            Action::Bet(to_call)
        } else {
            Action::Fold
        }
    }
}

/// Generator for [`CallingBot`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingBotGenerator;

impl BotGenerator for CallingBotGenerator {
    fn generate(&self) -> Box<dyn Bot> {
        Box::new(CallingBot)
    }
}
