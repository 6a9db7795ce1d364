use std::fs::File;

use anyhow::Context;
use log::info;
use simplelog::{Config, WriteLogger};

use snek::config::GameConfig;
use snek::term::TermManager;
use snek::SnakeGame;

fn main() -> anyhow::Result<()> {
    let config = GameConfig::from_env().context("invalid configuration")?;

    // stdout belongs to the game, so logs only go to a file, and only if asked
    if let Some(path) = &config.log_file {
        let file = File::create(path).with_context(|| format!("could not create log file {}", path.display()))?;
        WriteLogger::init(config.log_level, Config::default(), file).context("could not set up logging")?;
    }

    info!("starting snek");
    TermManager::check_size(config.required_terminal_size())?;

    let mut term = TermManager::setup().context("could not set up the terminal")?;
    let mut game = SnakeGame::new(config, rand::thread_rng())?;
    let outcome = game.run(&mut term);
    term.restore().context("could not restore the terminal")?;

    let state = outcome.context("game session failed")?;
    info!("exiting after {:?}", state);
    Ok(())
}
