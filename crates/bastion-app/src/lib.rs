//! BASTION headless host.
//!
//! Runs the simulation engine on a game-loop thread, forwards player
//! commands to it over a channel, and publishes the latest snapshot for
//! polling.

pub mod control;
pub mod game_loop;
pub mod state;

pub use bastion_core as core;
