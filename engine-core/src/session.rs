//! Session layer owning a running game
//!
//! A `Session` pairs a typed `Game` with its current state and a seeded
//! `ChaCha20Rng`. It is the single owner of the state: every accepted action
//! produces a new state value that replaces the previous one whole, so a
//! reader borrowing `state()` never sees a half-applied step.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::typed::{Capabilities, Game};

/// Result of applying one action to a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub reward: f32,
    pub done: bool,
}

/// State holder driving a typed game
///
/// The random source is re-seeded from the stored seed on every `reset`,
/// so a seed plus the sequence of applied actions fully determines the game.
///
/// # Example
///
/// ```rust
/// # use engine_core::typed::*;
/// # use engine_core::session::Session;
/// # use rand::Rng;
/// # struct Counter;
/// # impl Game for Counter {
/// #     type State = u32;
/// #     type Action = u32;
/// #     fn engine_id(&self) -> EngineId { EngineId { env_id: "counter".into(), build_id: "0".into() } }
/// #     fn capabilities(&self) -> Capabilities { Capabilities { id: self.engine_id(), action_space: ActionSpace::Discrete(3) } }
/// #     fn reset<R: Rng + ?Sized>(&self, _rng: &mut R) -> u32 { 0 }
/// #     fn step<R: Rng + ?Sized>(&self, s: &u32, a: u32, _rng: &mut R) -> (u32, f32, bool) { (s + a, a as f32, s + a >= 10) }
/// # }
/// let mut session = Session::new(Counter, 42);
/// let outcome = session.apply(2);
/// assert_eq!(*session.state(), 2);
/// assert!(!outcome.done);
/// ```
pub struct Session<G: Game> {
    game: G,
    state: G::State,
    rng: ChaCha20Rng,
    seed: u64,
    steps: u64,
}

impl<G: Game> Session<G> {
    /// Start a session with a deterministic seed
    pub fn new(game: G, seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let state = game.reset(&mut rng);
        debug!(env_id = %game.engine_id().env_id, seed, "session started");
        Self {
            game,
            state,
            rng,
            seed,
            steps: 0,
        }
    }

    /// Start a session seeded from OS entropy
    ///
    /// The drawn seed is kept so the game can be replayed with `new`.
    pub fn from_entropy(game: G) -> Self {
        let seed = rand::random::<u64>();
        Self::new(game, seed)
    }

    /// Current state snapshot
    pub fn state(&self) -> &G::State {
        &self.state
    }

    /// Seed this session was started from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of actions applied since the last reset
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Get a reference to the underlying game
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Capabilities of the underlying game
    pub fn capabilities(&self) -> Capabilities {
        self.game.capabilities()
    }

    /// Apply one action, replacing the current state with its successor
    pub fn apply(&mut self, action: G::Action) -> StepOutcome {
        let (next, reward, done) = self.game.step(&self.state, action, &mut self.rng);
        self.state = next;
        self.steps += 1;
        StepOutcome { reward, done }
    }

    /// Start over from the stored seed
    pub fn reset(&mut self) {
        self.rng = ChaCha20Rng::seed_from_u64(self.seed);
        self.state = self.game.reset(&mut self.rng);
        self.steps = 0;
        debug!(seed = self.seed, "session reset");
    }

    /// Consume the session and return the underlying game
    pub fn into_inner(self) -> G {
        self.game
    }
}
