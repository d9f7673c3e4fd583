use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::{error, info};

mod config;
mod input;
mod player;
mod policy;
mod render;

use crate::config::{Config, Mode};
use crate::player::Player;
use crate::policy::RandomPolicy;
use crate::render::{Renderer, TerminalShare};

fn main() -> Result<()> {
    // Parse configuration
    let config = Config::parse();

    // Validate configuration
    config.validate()?;

    // Initialize tracing on stderr so the board owns stdout
    tracing_subscriber::fmt()
        .with_max_level(config.log_level()?)
        .with_writer(io::stderr)
        .init();

    info!("Starting 2048 in {:?} mode", config.mode);

    let renderer = Renderer::new(TerminalShare::new(io::stdout()), config.share_url.clone());
    let mut player = Player::new(config.seed, renderer);
    let mut out = io::stdout();

    let run_result = match config.mode {
        Mode::Interactive => player.run_interactive(io::stdin().lock(), &mut out),
        Mode::Auto => {
            let capabilities = player.capabilities();
            let mut policy = match config.seed {
                Some(seed) => RandomPolicy::with_seed(&capabilities, seed)?,
                None => RandomPolicy::new(&capabilities)?,
            };
            player.run_auto(&mut policy, config.max_moves, &mut out)
        }
    };

    match run_result {
        Ok(summary) => {
            info!(
                "Finished: seed {}, {} moves, score {}, highest tile {}, won {}, over {}",
                summary.seed, summary.moves, summary.score, summary.highest_tile, summary.won, summary.over
            );
            Ok(())
        }
        Err(e) => {
            error!("Game failed: {}", e);
            Err(e)
        }
    }
}
