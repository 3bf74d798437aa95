mod config;
mod repl;

use std::path::PathBuf;

use clap::Parser;

use crosses_engine::game::Session;
use crosses_engine::logger::init_logger;
use crosses_engine::{log, SessionRng};

use config::{default_config_path, CliConfig};

/// N-in-a-row board game: two-player local play or a computer
/// opponent with random and optimal strategies.
#[derive(Parser)]
#[command(name = "crosses")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for the random bot, overrides the config value
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();
    init_logger(None);

    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = CliConfig::load(&config_path)?;

    let rng = match cli.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("session seed: {}", rng.seed());

    let mut session = Session::with_rng(rng);

    if let Some(mode) = config.mode
        && session.select_mode(mode)
    {
        log!("mode preselected: {:?}", mode);
    }
    if let Some(difficulty) = config.difficulty
        && session.select_difficulty(difficulty)
    {
        log!("difficulty preselected: {:?}", difficulty);
    }

    repl::run(&mut session, config.show_board_every_tick)
}
