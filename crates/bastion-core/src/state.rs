//! Game state snapshot: the complete visible state handed to presentation each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{EnemyId, Position, ProjectileId, SimTime, TileCoord, TowerId};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub time_scale: f64,
    pub tiles: Vec<TileView>,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events produced since the previous snapshot, in emission order.
    pub events: Vec<SimEvent>,
    pub score: ScoreView,
}

/// One map tile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileView {
    pub coord: TileCoord,
    pub kind: TileKind,
    /// Tower standing on this tile, if any.
    pub tower: Option<TowerId>,
}

/// An active enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub position: Position,
    pub radius: f64,
    pub health: u32,
    pub max_health: u32,
    /// Health bar fill (0.0 - 1.0).
    pub health_ratio: f64,
    pub waypoint_index: usize,
    pub alive: bool,
}

/// A placed tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub id: TowerId,
    pub tile: TileCoord,
    pub position: Position,
    /// Radius of the tower body.
    pub radius: f64,
    /// Current effective range (drawn as the range circle).
    pub range: f64,
    pub shots_per_minute: f64,
    /// An enemy was inside the range circle during the last targeting pass.
    pub hostile_in_range: bool,
    pub projectiles_in_flight: u32,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub tower: TowerId,
    pub target: EnemyId,
    pub position: Position,
    pub radius: f64,
}

/// Running score for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_spawned: u32,
    pub enemies_killed: u32,
    pub enemies_escaped: u32,
    pub shots_fired: u32,
    pub hits: u32,
    pub stale_projectiles: u32,
}
