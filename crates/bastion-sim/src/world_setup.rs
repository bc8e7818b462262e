//! Entity spawn factories for setting up the simulation world.
//!
//! Creates enemy entities with their component bundles.

use std::sync::Arc;

use hecs::World;

use bastion_core::components::{Enemy, PathFollower};
use bastion_core::config::SimConfig;
use bastion_core::types::{EnemyId, Position};

use crate::health;

/// Enemy blueprint shared by every spawn of a session.
#[derive(Debug, Clone)]
pub struct EnemyTemplate {
    pub route: Arc<[Position]>,
    pub speed: f64,
    pub max_health: u32,
}

impl EnemyTemplate {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            route: config.route.iter().copied().collect(),
            speed: config.enemy_speed,
            max_health: config.enemy_max_health,
        }
    }

    /// Where new enemies appear: the first waypoint of the route.
    pub fn spawn_point(&self) -> Position {
        self.route.first().copied().unwrap_or_default()
    }
}

/// Spawn one enemy at the start of the route with full health.
pub fn spawn_enemy(world: &mut World, id: EnemyId, template: &EnemyTemplate) -> hecs::Entity {
    world.spawn((
        Enemy { id },
        template.spawn_point(),
        PathFollower {
            route: Arc::clone(&template.route),
            index: 0,
            speed: template.speed,
        },
        health::full(template.max_health),
    ))
}
