use std::env;
use std::process::ExitCode;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use grinder::bots::BotRegistry;
use grinder::evo::{EvolutionConfig, run_evolution};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = EvolutionConfig::default();
    let mut args = env::args().skip(1);
    if let Some(generations) = args.next() {
        match generations.parse() {
            Ok(g) => config.generations = g,
            Err(_) => return usage(),
        }
    }
    if let Some(population) = args.next() {
        match population.parse() {
            Ok(p) if p > 0 => config.population_size = p,
            _ => return usage(),
        }
    }

    let registry = BotRegistry::with_default_roster();
    let mut rng = StdRng::from_os_rng();
    match run_evolution(&config, &registry, &mut rng) {
        Ok(report) => {
            let json = serde_json::to_string_pretty(&report).expect("report serializes");
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn usage() -> ExitCode {
    eprintln!("usage: evolve [GENERATIONS] [POPULATION]");
    ExitCode::FAILURE
}
