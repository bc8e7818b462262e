//! Systems that operate on the simulation state each tick.
//!
//! Systems are free functions over the world, grid and registry. They do not
//! own state. All state lives in components, towers, and the engine.
//! The engine runs them in a fixed order: movement, targeting, homing, cleanup.

pub mod cleanup;
pub mod homing;
pub mod movement;
pub mod snapshot;
pub mod targeting;
