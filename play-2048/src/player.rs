use anyhow::{Context, Result};
use engine_core::{Capabilities, Session};
use game_2048::{Direction, GameState, Twenty48};
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::input::{parse_line, Command};
use crate::policy::Policy;
use crate::render::{Renderer, Share};

/// How a game session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub seed: u64,
    pub moves: u64,
    pub score: u64,
    pub highest_tile: u32,
    pub won: bool,
    pub over: bool,
}

/// Drives one game: feeds moves into the session and renders every snapshot
pub struct Player<S: Share> {
    session: Session<Twenty48>,
    renderer: Renderer<S>,
}

impl<S: Share> Player<S> {
    pub fn new(seed: Option<u64>, renderer: Renderer<S>) -> Self {
        let game = Twenty48::new();
        let session = match seed {
            Some(seed) => Session::new(game, seed),
            None => Session::from_entropy(game),
        };
        info!("Starting game with seed {}", session.seed());

        Self { session, renderer }
    }

    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.session.capabilities()
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &Renderer<S> {
        &self.renderer
    }

    pub fn summary(&self) -> Summary {
        let state = self.session.state();
        Summary {
            seed: self.session.seed(),
            moves: self.session.steps(),
            score: state.score(),
            highest_tile: state.grid().highest_tile(),
            won: state.has_won(),
            over: state.is_over(),
        }
    }

    /// Play moves read line by line until quit, end of input, or game over
    pub fn run_interactive<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<Summary> {
        self.render(out)?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            for command in parse_line(&line) {
                match command {
                    Command::Quit => {
                        info!("Player quit after {} moves", self.session.steps());
                        return Ok(self.summary());
                    }
                    Command::Move(direction) => {
                        self.apply(direction);
                        self.render(out)?;
                        if self.state().is_over() {
                            return Ok(self.summary());
                        }
                    }
                }
            }
        }

        debug!("Input closed");
        Ok(self.summary())
    }

    /// Let `policy` play until game over or `max_moves` attempts (0 for no limit)
    pub fn run_auto<P: Policy, W: Write>(&mut self, policy: &mut P, max_moves: u64, out: &mut W) -> Result<Summary> {
        while !self.state().is_over() {
            if max_moves > 0 && self.session.steps() >= max_moves {
                info!("Reached maximum moves ({}), stopping", max_moves);
                break;
            }
            let direction = policy.select_action(self.state())?;
            self.apply(direction);

            let steps = self.session.steps();
            if steps % 100 == 0 {
                debug!("{} moves played, score {}", steps, self.state().score());
            }
        }

        self.render(out)?;
        Ok(self.summary())
    }

    fn apply(&mut self, direction: Direction) {
        let before = *self.session.state();
        let outcome = self.session.apply(direction);
        let after = self.session.state();

        if *after == before {
            debug!("Move {} changed nothing", direction);
            return;
        }
        debug!("Move {}: +{} (score {})", direction, outcome.reward, after.score());

        if after.has_won() && !before.has_won() {
            info!("Reached {} after {} moves", game_2048::WIN_TILE, self.session.steps());
        }
        if outcome.done {
            info!(
                "Game over after {} moves, final score {}",
                self.session.steps(),
                after.score()
            );
        }
    }

    fn render<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.renderer
            .render(self.session.state(), out)
            .context("Failed to render board")
    }
}
