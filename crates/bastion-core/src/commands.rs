//! Player commands sent from the input/UI layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::{TileCoord, TowerId};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Entities ---
    /// Spawn one enemy at the first waypoint of the route.
    SpawnEnemy,
    /// Build a tower on a Land tile. No-op if the tile already has one.
    PlaceTower { tile: TileCoord },
    /// Extend a tower's range by the configured increment.
    UpgradeTower { tower: TowerId },

    // --- Simulation control ---
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = frozen).
    SetTimeScale { scale: f64 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
