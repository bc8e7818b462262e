//! ECS components for enemy entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in the sim crate, not in components.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::{EnemyId, Position};

/// Marks an entity as an enemy and carries its stable id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
}

/// Progress along a fixed, pre-authored route.
#[derive(Debug, Clone)]
pub struct PathFollower {
    /// Ordered waypoints, shared by every enemy on the same route.
    pub route: Arc<[Position]>,
    /// Index of the waypoint currently being approached.
    /// Equals `route.len()` once the route is completed.
    pub index: usize,
    /// Per-axis distance covered per delta unit.
    pub speed: f64,
}

/// Hit points of an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    /// Always within `0..=max`.
    pub current: u32,
    pub max: u32,
    /// `current / max`, refreshed whenever damage lands.
    pub ratio: f64,
    /// Cleared exactly once, when `current` reaches zero.
    pub alive: bool,
}
