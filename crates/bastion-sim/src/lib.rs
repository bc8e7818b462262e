//! Simulation engine for BASTION.
//!
//! Owns the map grid, towers and their projectiles, and the enemy registry
//! (a hecs ECS world). Runs the per-tick systems in a fixed order and
//! produces GameStateSnapshots for presentation.

pub mod clock;
pub mod engine;
pub mod grid;
pub mod health;
pub mod projectile;
pub mod registry;
pub mod systems;
pub mod tower;
pub mod waypoint;
pub mod world_setup;

pub use bastion_core as core;
pub use engine::SimulationEngine;
