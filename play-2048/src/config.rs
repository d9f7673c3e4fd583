use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// How moves are chosen
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Read moves from standard input
    Interactive,
    /// Let a random policy play
    Auto,
}

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(name = "play-2048")]
#[command(about = "Play 2048 in the terminal")]
#[command(long_about = "Play the 2048 sliding-tile puzzle in the terminal.

Slide with the arrow keys, w/a/s/d or h/j/k/l followed by Enter, or type
the direction name. Equal tiles merge; reach 2048 to win. Quit with q.")]
pub struct Config {
    /// Seed for tile spawns (drawn from entropy when omitted)
    #[arg(long, env = "PLAY_SEED")]
    pub seed: Option<u64>,

    /// Interactive play or unattended random play
    #[arg(long, env = "PLAY_MODE", value_enum, default_value = "interactive")]
    pub mode: Mode,

    /// Maximum moves in auto mode (0 for unlimited)
    #[arg(long, env = "PLAY_MAX_MOVES", default_value = "0")]
    pub max_moves: u64,

    /// Link appended to the shared result
    #[arg(long, env = "PLAY_SHARE_URL", default_value = "https://play2048.co")]
    pub share_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "PLAY_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.share_url.trim().is_empty() {
            return Err(anyhow!("share_url cannot be empty"));
        }

        self.log_level()?;

        Ok(())
    }

    pub fn log_level(&self) -> Result<tracing::Level> {
        self.log_level
            .parse()
            .map_err(|_| anyhow!("invalid log_level: {}", self.log_level))
    }
}
