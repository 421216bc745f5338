use std::fs::File;
use std::sync::Arc;

use anyhow::Result;
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};

use snaketerm::config::GameConfig;
use snaketerm::game::Phase;
use snaketerm::input::{listen, PendingDirection};
use snaketerm::session::{Ending, Session};
use snaketerm::term::TermManager;

const LOG_FILE: &str = "snaketerm.log";

#[tokio::main]
async fn main() -> Result<()> {
    // stdout belongs to the board, so logs go to a file
    if let Err(err) = init_logging() {
        eprintln!("Logging disabled: {:#}", err);
    }

    let config = GameConfig::default();
    info!("starting on a {}x{} board", config.width, config.height);

    let mut term = TermManager::new();
    if let Err(err) = term.setup(config.grid()) {
        let _ = term.restore();
        error!("terminal setup failed: {:#}", err);
        return Err(err);
    }

    let ending = play(&config, &mut term).await;

    // The terminal has to come back before anything is printed
    if let Err(err) = term.restore() {
        error!("terminal restore failed: {:#}", err);
    }

    match ending? {
        Ending::Quit => info!("player quit"),
        Ending::Finished(state) => {
            let headline = if state.phase() == Phase::Won { "You won!" } else { "Game Over!" };
            info!("{} final score {}", headline, state.score());
            println!("{} Final Score: {}", headline, state.score());
        }
    }

    Ok(())
}

async fn play(config: &GameConfig, term: &mut TermManager) -> Result<Ending> {
    let pending = Arc::new(PendingDirection::new());
    let session = Session::new(config, Arc::clone(&pending), term, rand::thread_rng())?;

    let input = tokio::spawn(listen(pending));
    session.run(input).await
}

fn init_logging() -> Result<()> {
    let path = std::env::temp_dir().join(LOG_FILE);
    WriteLogger::init(LevelFilter::Info, Config::default(), File::create(path)?)?;
    Ok(())
}
