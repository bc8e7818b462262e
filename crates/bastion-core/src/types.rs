//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in map space (map units, screen-style axes).
/// x grows to the right, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Grid coordinate of a tile. `col` indexes x, `row` indexes y.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub col: u32,
    pub row: u32,
}

/// Stable identity of an enemy for the lifetime of a session.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EnemyId(pub u32);

/// Stable identity of a placed tower.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TowerId(pub u32);

/// Identity of a projectile, unique across all towers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProjectileId(pub u32);

/// Simulation time tracking.
///
/// `elapsed` accumulates the (scaled) logical deltas handed to the systems.
/// It is unrelated to the real-time clock that gates tower cooldowns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each simulated tick).
    pub tick: u64,
    /// Sum of logical deltas applied so far.
    pub elapsed: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle of the vector from `self` to `other`, in radians (atan2(dy, dx)).
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl TileCoord {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Top-left corner of the tile in map space.
    pub fn origin(&self, tile_size: f64) -> Position {
        Position::new(self.col as f64 * tile_size, self.row as f64 * tile_size)
    }

    /// Center of the tile in map space. Towers are placed here.
    pub fn center(&self, tile_size: f64) -> Position {
        let origin = self.origin(tile_size);
        Position::new(origin.x + tile_size / 2.0, origin.y + tile_size / 2.0)
    }
}

impl SimTime {
    /// Advance by one tick carrying the given logical delta.
    pub fn advance(&mut self, delta: f64) {
        self.tick += 1;
        self.elapsed += delta;
    }
}
