//! Typed Game trait providing the contract every game implements
//!
//! Games work with strongly-typed state and action types. State transitions
//! are pure: `step` borrows the current state and returns the next one, so a
//! caller can hold on to the previous value for as long as it likes.

use rand::Rng;

/// Engine identification information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineId {
    pub env_id: String,
    pub build_id: String,
}

/// Action space variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionSpace {
    /// Actions are the integers `0..n`
    Discrete(u32),
}

impl ActionSpace {
    /// Number of distinct actions in the space
    pub fn len(&self) -> u32 {
        match self {
            ActionSpace::Discrete(n) => *n,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Game capabilities and configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    pub id: EngineId,
    pub action_space: ActionSpace,
}

/// Main trait for game implementations
///
/// Games implement this trait with their specific `State` and `Action` types.
/// Every source of randomness is handed in by the caller, which keeps the
/// game itself free of ambient generators: a seeded `ChaCha20Rng` gives
/// reproducible play, a mock generator gives scripted play in tests.
///
/// # Example
///
/// ```rust
/// # use engine_core::typed::*;
/// # use rand::Rng;
///
/// struct Counter;
///
/// impl Game for Counter {
///     type State = u32;
///     type Action = u32;
///
///     fn engine_id(&self) -> EngineId {
///         EngineId { env_id: "counter".to_string(), build_id: "0.1.0".to_string() }
///     }
///
///     fn capabilities(&self) -> Capabilities {
///         Capabilities { id: self.engine_id(), action_space: ActionSpace::Discrete(3) }
///     }
///
///     fn reset<R: Rng + ?Sized>(&self, _rng: &mut R) -> Self::State {
///         0
///     }
///
///     fn step<R: Rng + ?Sized>(&self, state: &Self::State, action: Self::Action, _rng: &mut R) -> (Self::State, f32, bool) {
///         let next = state + action;
///         (next, action as f32, next >= 10)
///     }
/// }
/// ```
pub trait Game {
    /// Game state type, replaced whole on every step
    type State: Clone;

    /// Action type, should be small and Copy
    type Action: Copy;

    /// Get engine identification information
    fn engine_id(&self) -> EngineId;

    /// Get game capabilities and configuration
    fn capabilities(&self) -> Capabilities;

    /// Produce a fresh initial state
    ///
    /// # Arguments
    ///
    /// * `rng` - Random source for the stochastic parts of the setup
    fn reset<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::State;

    /// Perform one simulation step
    ///
    /// # Arguments
    ///
    /// * `state` - Current game state, left untouched
    /// * `action` - Action to take
    /// * `rng` - Random number generator for stochastic elements
    ///
    /// # Returns
    ///
    /// A tuple of (next_state, reward, done)
    fn step<R: Rng + ?Sized>(
        &self,
        state: &Self::State,
        action: Self::Action,
        rng: &mut R,
    ) -> (Self::State, f32, bool);
}
