//! Grinder is a library for heads-up no limit hold'em.
//! It is not the fastest hand ranking. However it is clean
//! well tested code, with a betting engine that a misbehaving
//! bot cannot wedge and a genetic search for bot strategies.
//!
//! Rank a hand:
//!
//! ```
//! use grinder::core::{Hand, Rank, Rankable};
//!
//! let hand = Hand::new_from_str("adkdqdjdtd").unwrap();
//! let ranking = hand.rank().unwrap();
//! assert_eq!(Rank::StraightFlush, ranking.rank);
//! ```
//!
//! Play a match between two named bots:
//!
//! ```
//! use grinder::bots::BotRegistry;
//! use grinder::table::{Game, GameConfig, MatchSimulation};
//!
//! let registry = BotRegistry::with_default_roster();
//! let bots = [
//!     registry.create("tight").unwrap(),
//!     registry.create("calling").unwrap(),
//! ];
//! let game = Game::new(["tight".into(), "calling".into()], GameConfig::default());
//! let mut sim = MatchSimulation::new(game, bots);
//! let result = sim.run();
//! assert_eq!(15_000, result.final_stacks.iter().sum::<i32>());
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core is agnostic to how the
/// game is driven.
pub mod core;

/// The bots that can sit at a table, and the registry that
/// builds them by name.
pub mod bots;

/// The heads-up table: actions, the betting state machine,
/// and the match loop.
pub mod table;

/// Genetic search for rule bot strategies.
pub mod evo;
