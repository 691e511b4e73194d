use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, event};

use crate::bots::{Bot, BotRegistry, RegistryError, RuleBot};
use crate::evo::genome::Strategy;
use crate::table::{Game, GameConfig, MatchSimulation};

/// How strategies get scored: whole matches against a named
/// roster, seats alternating so neither side keeps the
/// button edge, fitness the fraction of matches won.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FitnessConfig {
    /// Registry names of the opponents to face.
    pub opponents: Vec<String>,
    pub matches_per_opponent: u32,
    pub max_hands_per_match: u32,
    pub game: GameConfig,
}

impl Default for FitnessConfig {
    fn default() -> Self {
        FitnessConfig {
            opponents: ["folding", "calling", "random", "tight", "aggro"]
                .map(String::from)
                .to_vec(),
            matches_per_opponent: 2,
            max_hands_per_match: 500,
            game: GameConfig::default(),
        }
    }
}

/// Play the candidate strategy through the whole roster and
/// answer its match win rate in zero to one. Only an unknown
/// opponent name can fail this.
pub fn evaluate_strategy(
    strategy: &Strategy,
    config: &FitnessConfig,
    registry: &BotRegistry,
    rng: &mut StdRng,
) -> Result<f64, RegistryError> {
    let mut wins = 0u32;
    let mut played = 0u32;
    for name in &config.opponents {
        for round in 0..config.matches_per_opponent {
            // Odd rounds seat the candidate second.
            let candidate_seat = (round % 2) as usize;
            let opponent = registry.create(name)?;
            let candidate: Box<dyn Bot> =
                Box::new(RuleBot::with_rng(*strategy, StdRng::from_rng(rng)));

            let mut names = [String::from("candidate"), String::from("candidate")];
            names[1 - candidate_seat] = name.clone();
            let bots = if candidate_seat == 0 {
                [candidate, opponent]
            } else {
                [opponent, candidate]
            };

            let game = Game::with_rng(names, config.game.clone(), StdRng::from_rng(rng));
            let mut sim =
                MatchSimulation::new(game, bots).with_hand_cap(config.max_hands_per_match);
            let result = sim.run();
            played += 1;
            if result.winner == Some(candidate_seat) {
                wins += 1;
            }
            event!(
                Level::DEBUG,
                opponent = %name,
                round,
                candidate_seat,
                won = (result.winner == Some(candidate_seat)),
                hands = result.hands_played,
                "fitness_match"
            );
        }
    }
    if played == 0 {
        return Ok(0.0);
    }
    Ok(f64::from(wins) / f64::from(played))
}
