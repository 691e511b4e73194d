//! Genetic search over [`RuleBot`](crate::bots::RuleBot)
//! strategies. A strategy is nine bounded floats, fitness is
//! the fraction of whole matches won against a fixed roster,
//! and the search is a plain generational loop with
//! tournament selection, biased crossover, and one elite.

/// The strategy genome and its operators.
mod genome;
pub use self::genome::{GENE_BOUNDS, Strategy};

/// Match based fitness scoring.
mod fitness;
pub use self::fitness::{FitnessConfig, evaluate_strategy};

/// The generational search loop.
mod evolution;
pub use self::evolution::{EvolutionConfig, EvolutionReport, run_evolution};
