//! Core traits and types for the 2048 workspace
//! 
//! This crate provides the abstractions the game and the player build on:
//! - `Game`: Typed trait every game implements, with the random source passed in
//! - `Session`: State holder that owns a running game and its seeded generator

pub mod typed;
pub mod session;

// Re-export main types for convenience
pub use typed::{ActionSpace, Capabilities, EngineId, Game};
pub use session::{Session, StepOutcome};
