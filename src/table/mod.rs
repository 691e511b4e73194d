//! Everything needed to run a heads-up match: the typed
//! actions with their single integer wire form, the betting
//! state machine that referees them, and the loop that sits
//! two bots down and plays until one of them is felted.

/// Bot intents, outcomes, and the ways a bet can be illegal.
mod action;
pub use self::action::{Action, ActionOutcome, IllegalAction};

/// The authoritative game state.
mod game;
pub use self::game::{FOLDED, Game, GameConfig, PlayerView, Pot, Street};

/// Bot versus bot match driving.
mod simulation;
pub use self::simulation::{DEFAULT_HAND_CAP, MatchResult, MatchSimulation};
