use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use grinder::bots::BotRegistry;
use grinder::table::{Game, GameConfig, MatchSimulation};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let left = args.next().unwrap_or_else(|| "tight".to_string());
    let right = args.next().unwrap_or_else(|| "calling".to_string());

    let registry = BotRegistry::with_default_roster();
    let bots = match registry
        .create(&left)
        .and_then(|l| registry.create(&right).map(|r| [l, r]))
    {
        Ok(bots) => bots,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("known bots: {}", registry.names().join(", "));
            return ExitCode::FAILURE;
        }
    };

    let game = Game::new([left.clone(), right.clone()], GameConfig::default());
    let mut simulation = MatchSimulation::new(game, bots);
    let result = simulation.run();

    println!("{left} vs {right} over {} hands", result.hands_played);
    println!(
        "final stacks: {left} {}, {right} {}",
        result.final_stacks[0], result.final_stacks[1]
    );
    match result.winner {
        Some(seat) => println!("winner: {}", simulation.game.names()[seat]),
        None => println!("winner: none, the match was a draw"),
    }
    ExitCode::SUCCESS
}
