//! Tower data model: placement, range, fire-rate cooldown, and the
//! projectiles the tower owns.
//!
//! Stored on its Land tile inside `GridModel`, NOT as an ECS entity.

use bastion_core::config::SimConfig;
use bastion_core::constants::SECONDS_PER_MINUTE;
use bastion_core::types::{EnemyId, Position, ProjectileId, TileCoord, TowerId};

use crate::projectile::{HomingOutcome, Projectile};

#[derive(Debug, Clone)]
pub struct Tower {
    pub id: TowerId,
    pub tile: TileCoord,
    /// Center of the tile the tower stands on.
    pub position: Position,
    /// Effective range. Only ever grows.
    range: f64,
    shots_per_minute: f64,
    /// Real-clock time of the last shot, `None` until the first.
    last_shot_at: Option<f64>,
    /// An enemy was in range during the last targeting pass.
    pub hostile_in_range: bool,
    projectiles: Vec<Projectile>,
    projectile_speed: f64,
    projectile_damage: u32,
}

impl Tower {
    pub fn new(id: TowerId, tile: TileCoord, config: &SimConfig) -> Self {
        Self {
            id,
            tile,
            position: tile.center(config.tile_size),
            range: config.tower_base_range,
            shots_per_minute: config.tower_shots_per_minute,
            last_shot_at: None,
            hostile_in_range: false,
            projectiles: Vec::new(),
            projectile_speed: config.projectile_speed,
            projectile_damage: config.projectile_damage,
        }
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn shots_per_minute(&self) -> f64 {
        self.shots_per_minute
    }

    pub fn last_shot_at(&self) -> Option<f64> {
        self.last_shot_at
    }

    /// Minimum real-time interval between two shots, in seconds.
    pub fn cooldown_secs(&self) -> f64 {
        SECONDS_PER_MINUTE / self.shots_per_minute
    }

    /// Grow the range by `increment`, rounded to a whole unit.
    /// Returns the new range.
    pub fn upgrade(&mut self, increment: f64) -> f64 {
        self.range = (self.range + increment).round().max(self.range);
        self.range
    }

    /// True once the cooldown since the last shot has fully elapsed.
    pub fn can_fire(&self, now_secs: f64) -> bool {
        match self.last_shot_at {
            Some(last) => now_secs - last >= self.cooldown_secs(),
            None => true,
        }
    }

    /// In range when the target's center lies within range plus its radius.
    pub fn is_in_range(&self, target: &Position, target_radius: f64) -> bool {
        self.position.distance_to(target) <= self.range + target_radius
    }

    /// Launch a projectile from the tower's position at `target`.
    /// Stamps the shot time so the cooldown restarts immediately.
    pub fn fire(
        &mut self,
        id: ProjectileId,
        target: hecs::Entity,
        target_id: EnemyId,
        now_secs: f64,
    ) {
        self.last_shot_at = Some(now_secs);
        self.projectiles.push(Projectile {
            id,
            target,
            target_id,
            position: self.position,
            speed: self.projectile_speed,
            damage: self.projectile_damage,
        });
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Step every projectile through `step`, dropping those that report a
    /// terminal outcome.
    pub fn resolve_projectiles(&mut self, mut step: impl FnMut(&mut Projectile) -> HomingOutcome) {
        self.projectiles
            .retain_mut(|projectile| step(projectile) == HomingOutcome::InFlight);
    }
}
