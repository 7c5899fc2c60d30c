//! Plays one game of Snakes and Ladders and logs every turn.
//!
//! Usage:
//!   cargo run --features cli --bin snakes-ladders
//!   cargo run --features cli --bin snakes-ladders -- --seed 7 --demo
//!   cargo run --features cli --bin snakes-ladders -- --config board.json

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use snakes_ladders_core::naming::{FullyNamed, Person, StarShip};
use snakes_ladders_core::text::{Hamster, PrettyTextRepresentable, TextRepresentable};
use snakes_ladders_core::toggle::{OnOffSwitch, Togglable};
use snakes_ladders_core::{
    Dice, DiceGame, DiceGameTracker, GameConfig, LinearCongruentialGenerator, RandomNumberGenerator,
    Result, SnakesAndLadders,
};

#[derive(Parser, Debug)]
#[command(name = "snakes-ladders", about = "Play a deterministic game of Snakes and Ladders")]
struct Args {
    /// JSON game config; the classic 25-square board is used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the dice seed from the config
    #[arg(long)]
    seed: Option<f64>,

    /// Also print the capability walkthrough (names, dice, switches, descriptions)
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let mut game = SnakesAndLadders::from_config(&config)?;
    let mut tracker = DiceGameTracker::new();
    info!("{}", game.textual_description());
    info!("The game is using a {}-sided dice", game.dice().sides());
    let summary = game.play(Some(&mut tracker));
    info!("Finished on square {} after {} turns", summary.final_square, summary.turns);

    if args.demo {
        run_demo(&game)?;
    }

    Ok(())
}

fn run_demo(game: &SnakesAndLadders) -> Result<()> {
    let john = Person {
        full_name: "John Appleseed".to_string(),
    };
    info!("{}", john.full_name());
    info!("{}", StarShip::new("Enterprise", Some("USS")).full_name());

    let mut generator = LinearCongruentialGenerator::new();
    info!("Here's a random number: {}", generator.random());
    info!("And another one: {}", generator.random());

    let mut light = OnOffSwitch::Off;
    light.toggle();
    info!("Light switch is now {light:?}");

    let mut d6 = Dice::d6();
    for _ in 0..5 {
        info!("Random dice roll is {}", d6.roll());
    }

    let d12 = Dice::new(12, Box::new(LinearCongruentialGenerator::new()))?;
    info!("{}", d12.textual_description());
    info!("{}", vec![d6, d12].textual_description());

    let simon = Hamster::new("Simon");
    let things: [&dyn TextRepresentable; 2] = [game, &simon];
    for thing in things {
        info!("thing: {}", thing.textual_description());
    }

    info!("{}", game.pretty_textual_description());
    Ok(())
}
