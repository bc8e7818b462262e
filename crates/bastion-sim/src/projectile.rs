//! Homing projectiles fired by towers.
//!
//! A projectile re-aims at its target's current position every tick (true
//! pursuit, not a trajectory fixed at launch). It holds the target's ECS
//! handle but never owns it; the handle must be checked against the registry
//! before use because the enemy may have died or escaped since launch.

use glam::DVec2;

use bastion_core::types::{EnemyId, Position, ProjectileId};

/// Terminal or non-terminal result of one homing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomingOutcome {
    /// Still travelling.
    InFlight,
    /// Reached the target and applied damage. The projectile is removed.
    HitTarget,
    /// Target was no longer alive. The projectile is removed without damage.
    StaleTarget,
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: ProjectileId,
    /// Non-owning handle to the target enemy.
    pub target: hecs::Entity,
    pub target_id: EnemyId,
    pub position: Position,
    pub speed: f64,
    pub damage: u32,
}

impl Projectile {
    /// Move toward `target` by `speed * delta`.
    ///
    /// Returns `true` when the proposed position lies within `hit_threshold`
    /// of the target; the move is then not committed and the caller resolves
    /// the hit. Otherwise the new position is committed and `false` returned.
    pub fn home_toward(&mut self, target: Position, delta: f64, hit_threshold: f64) -> bool {
        let heading = DVec2::from_angle(self.position.angle_to(&target));
        let proposed = self.position.to_dvec2() + heading * (self.speed * delta);

        if proposed.distance(target.to_dvec2()) <= hit_threshold {
            return true;
        }
        self.position = Position::from(proposed);
        false
    }
}
