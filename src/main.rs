mod app;
mod config;
mod food;
mod game;
mod grid;
mod render;
mod snake;
mod term;

use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};
use simplelog::WriteLogger;

use crate::app::App;
use crate::config::{Args, Config};
use crate::term::TermManager;

pub type TermInt = u16;
pub type TermCoords = (TermInt, TermInt);
/// Board position in pixels. Signed, since the head can step one tile off the board.
pub type Coords = (i32, i32);

fn main() -> Result<()> {
    let config = Config::from_args(Args::parse())?;

    // stdout belongs to the game screen, so logs go to a file
    let log_file = File::create(&config.log_file)
        .with_context(|| format!("creating log file {}", config.log_file.display()))?;
    WriteLogger::init(config.log_level, simplelog::Config::default(), log_file)
        .context("initializing logger")?;
    info!("Starting with {:?}", config);

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let term = TermManager::new().context("checking terminal")?;
    let mut app = App::new(config, rng, term);
    let res = app.term_mut().setup()
        .context("setting up terminal")
        .and_then(|()| play(&mut app));

    // Restore the terminal even if setup or the game loop failed
    let restored = app.term_mut().restore().context("restoring terminal");
    info!("Shutting down");
    finish(res, restored)
}

/// A game error wins over a restore error, which is only logged then.
fn finish(res: Result<()>, restored: Result<()>) -> Result<()> {
    match (res, restored) {
        (Err(err), Err(restore_err)) => {
            error!("{:#}", restore_err);
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), restored) => restored,
    }
}

fn play(app: &mut App<StdRng>) -> Result<()> {
    if !app.show_intro()? {
        return Ok(());
    }
    app.run()?;
    Ok(())
}
