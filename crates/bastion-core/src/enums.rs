//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Terrain kind of a map tile, as seen by presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Enemy route. Carries no gameplay state.
    Road,
    /// Buildable ground. Hosts at most one tower.
    #[default]
    Land,
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Systems run every tick.
    #[default]
    Active,
    /// Commands are processed but no system runs and time does not advance.
    Paused,
}

/// Why the engine declined a player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Coordinate lies outside the grid.
    OutOfBounds,
    /// Towers can only be placed on Land.
    NotLand,
    /// No tower with that id exists.
    UnknownTower,
    /// Time scale was NaN or infinite.
    InvalidTimeScale,
}

impl TileKind {
    /// Map a layout glyph to a tile kind.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(TileKind::Land),
            '#' => Some(TileKind::Road),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            TileKind::Land => '.',
            TileKind::Road => '#',
        }
    }
}
