use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::index;
use tracing::{Level, event};

use crate::bots::{BotRegistry, RegistryError};
use crate::evo::fitness::{FitnessConfig, evaluate_strategy};
use crate::evo::genome::Strategy;

/// Knobs of the genetic search itself. The fitness side
/// rides along in [`FitnessConfig`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: u32,
    /// Chance a child comes from crossover rather than a
    /// straight mutation of one parent.
    pub crossover_rate: f64,
    /// Chance each crossed gene comes from the fitter parent.
    pub crossover_bias: f64,
    /// Per gene mutation chance applied to every child.
    pub mutation_rate: f64,
    /// Entrants drawn per tournament selection.
    pub tournament_size: usize,
    pub fitness: FitnessConfig,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        EvolutionConfig {
            population_size: 20,
            generations: 50,
            crossover_rate: 0.8,
            crossover_bias: 0.7,
            mutation_rate: 0.3,
            tournament_size: 3,
            fitness: FitnessConfig::default(),
        }
    }
}

/// What a finished search hands back.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EvolutionReport {
    pub best: Strategy,
    pub best_fitness: f64,
    pub generations: u32,
}

/// Run the whole search: seed a random population, then
/// breed generation after generation with tournament
/// selection, crossover, mutation, and a single elite seat
/// the champion keeps without being rescored.
pub fn run_evolution(
    config: &EvolutionConfig,
    registry: &BotRegistry,
    rng: &mut StdRng,
) -> Result<EvolutionReport, RegistryError> {
    let mut population: Vec<(Strategy, f64)> = Vec::with_capacity(config.population_size);
    for member in 0..config.population_size {
        let strategy = Strategy::random(rng);
        let fitness = evaluate_strategy(&strategy, &config.fitness, registry, rng)?;
        event!(Level::DEBUG, member, fitness, "seeded");
        population.push((strategy, fitness));
    }
    sort_by_fitness(&mut population);
    let (mut best, mut best_fitness) = population[0];

    for generation in 0..config.generations {
        // Elitism: the champion survives untouched.
        let mut next = vec![population[0]];
        while next.len() < config.population_size {
            let (fitter, other) = select_parents(&population, config.tournament_size, rng);
            let child = if rng.random_bool(config.crossover_rate.clamp(0.0, 1.0)) {
                fitter.crossover(&other, rng, config.crossover_bias)
            } else {
                fitter.mutate(rng, config.mutation_rate)
            };
            // Every child takes a final mutation pass.
            let child = child.mutate(rng, config.mutation_rate);
            let fitness = evaluate_strategy(&child, &config.fitness, registry, rng)?;
            next.push((child, fitness));
        }
        population = next;
        sort_by_fitness(&mut population);

        let (generation_best, generation_fitness) = population[0];
        if generation_fitness > best_fitness {
            best = generation_best;
            best_fitness = generation_fitness;
            event!(Level::INFO, generation, best_fitness, "new_best");
        }
        event!(
            Level::INFO,
            generation,
            generation_fitness,
            mean_fitness = mean_fitness(&population),
            "generation_done"
        );
    }

    Ok(EvolutionReport {
        best,
        best_fitness,
        generations: config.generations,
    })
}

fn mean_fitness(population: &[(Strategy, f64)]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    population.iter().map(|(_, f)| f).sum::<f64>() / population.len() as f64
}

fn sort_by_fitness(population: &mut [(Strategy, f64)]) {
    population.sort_by(|a, b| b.1.total_cmp(&a.1));
}

/// Tournament selection: sample entrants without
/// replacement and breed the top two of them.
fn select_parents(
    population: &[(Strategy, f64)],
    tournament_size: usize,
    rng: &mut StdRng,
) -> (Strategy, Strategy) {
    let size = tournament_size.clamp(1, population.len());
    let mut entrants: Vec<&(Strategy, f64)> = index::sample(rng, population.len(), size)
        .iter()
        .map(|i| &population[i])
        .collect();
    entrants.sort_by(|a, b| b.1.total_cmp(&a.1));
    let fitter = entrants[0].0;
    let other = entrants.get(1).map_or(fitter, |e| e.0);
    (fitter, other)
}
