//! 2048 game implementation
//!
//! The grid engine for the sliding-tile merge puzzle: a 4x4 grid of
//! power-of-two tiles, moves that slide and merge them, random spawns after
//! each successful move, score tracking and win/loss detection.
//!
//! All transitions are pure functions returning new values. Randomness is
//! always supplied by the caller, so a seeded or scripted generator gives
//! reproducible games.

pub mod direction;
pub mod grid;
pub mod state;

pub use direction::{Direction, ParseDirectionError};
pub use grid::{slide_line, Grid, Line, EMPTY, SIZE};
pub use state::{GameState, Status, WIN_TILE};

use engine_core::typed::{ActionSpace, Capabilities, EngineId, Game};
use rand::Rng;

/// 2048 game implementation
#[derive(Debug, Default)]
pub struct Twenty48;

impl Twenty48 {
    /// Create a new 2048 game
    pub fn new() -> Self {
        Self
    }
}

impl Game for Twenty48 {
    type State = GameState;
    type Action = Direction;

    fn engine_id(&self) -> EngineId {
        EngineId {
            env_id: "2048".to_string(),
            build_id: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            id: self.engine_id(),
            action_space: ActionSpace::Discrete(Direction::ALL.len() as u32),
        }
    }

    fn reset<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::State {
        GameState::initialize(rng)
    }

    fn step<R: Rng + ?Sized>(&self, state: &Self::State, action: Self::Action, rng: &mut R) -> (Self::State, f32, bool) {
        let next = state.apply_move(action, rng);
        // Score only grows, reward is the gain of this move
        let reward = (next.score() - state.score()) as f32;
        (next, reward, next.is_over())
    }
}
