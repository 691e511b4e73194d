use crate::bots::{Bot, BotGenerator};
use crate::table::{Action, PlayerView};

/// A bot that folds the moment it is asked anything, even
/// when checking would be free. Any strategy worth keeping
/// should beat it, which makes it the baseline of choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldingBot;

impl Bot for FoldingBot {
    fn act(&mut self, _view: &PlayerView) -> Action {
        Action::Fold
    }
}

/// Generator for [`FoldingBot`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldingBotGenerator;

impl BotGenerator for FoldingBotGenerator {
    fn generate(&self) -> Box<dyn Bot> {
        Box::new(FoldingBot)
    }
}
