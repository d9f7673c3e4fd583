use anyhow::{anyhow, Result};
use engine_core::{ActionSpace, Capabilities};
use game_2048::{Direction, GameState};
use rand::prelude::*;
use rand_chacha::ChaCha20Rng;

/// Trait for move selection policies
pub trait Policy {
    /// Select a direction given the current state
    fn select_action(&mut self, state: &GameState) -> Result<Direction>;
}

/// Random policy that selects directions uniformly at random
///
/// It does not look at the board, so it happily picks moves that change
/// nothing; the engine ignores those.
pub struct RandomPolicy {
    rng: ChaCha20Rng,
    actions: u32,
}

impl RandomPolicy {
    pub fn new(capabilities: &Capabilities) -> Result<Self> {
        Self::with_rng(capabilities, ChaCha20Rng::from_entropy())
    }

    pub fn with_seed(capabilities: &Capabilities, seed: u64) -> Result<Self> {
        Self::with_rng(capabilities, ChaCha20Rng::seed_from_u64(seed))
    }

    fn with_rng(capabilities: &Capabilities, rng: ChaCha20Rng) -> Result<Self> {
        let actions = match capabilities.action_space {
            ActionSpace::Discrete(n) => n,
        };
        if actions == 0 {
            return Err(anyhow!("Discrete action space must have n > 0"));
        }

        Ok(Self { rng, actions })
    }
}

impl Policy for RandomPolicy {
    fn select_action(&mut self, _state: &GameState) -> Result<Direction> {
        let index = self.rng.gen_range(0..self.actions);
        Direction::from_index(index)
            .ok_or_else(|| anyhow!("Action {} has no direction", index))
    }
}
