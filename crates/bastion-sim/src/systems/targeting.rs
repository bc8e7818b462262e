//! Targeting system: decides which towers fire this tick, and at whom.
//!
//! Evaluation is tower-major, enemy-minor. A tower fires at the first
//! enemy (in spawn order) that is inside its range while its cooldown has
//! elapsed. Firing stamps the cooldown, so a tower fires at most once per tick.

use hecs::Entity;
use tracing::debug;

use bastion_core::components::{Enemy, Health, PathFollower};
use bastion_core::events::SimEvent;
use bastion_core::state::ScoreView;
use bastion_core::types::{EnemyId, Position, ProjectileId};

use crate::grid::GridModel;
use crate::registry::EnemyRegistry;

/// An enemy eligible to be shot at, with its post-movement position.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    pub entity: Entity,
    pub id: EnemyId,
    pub position: Position,
}

/// Collect every active enemy, ordered by spawn.
pub fn active_targets(registry: &EnemyRegistry) -> Vec<Target> {
    let mut targets: Vec<Target> = registry
        .world()
        .query::<(&Enemy, &Position, &PathFollower, &Health)>()
        .iter()
        .filter(|(_, (_, _, follower, health))| {
            health.alive && follower.index < follower.route.len()
        })
        .map(|(entity, (enemy, pos, _, _))| Target {
            entity,
            id: enemy.id,
            position: *pos,
        })
        .collect();

    targets.sort_by_key(|t| t.id);
    targets
}

/// Run targeting for one tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    grid: &mut GridModel,
    registry: &EnemyRegistry,
    now_secs: f64,
    enemy_radius: f64,
    next_projectile_id: &mut u32,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreView,
) {
    let targets = active_targets(registry);

    for tower in grid.towers_mut() {
        let in_range = targets
            .iter()
            .find(|t| tower.is_in_range(&t.position, enemy_radius));

        tower.hostile_in_range = in_range.is_some();

        let Some(target) = in_range else {
            continue;
        };
        if !tower.can_fire(now_secs) {
            continue;
        }

        let projectile = ProjectileId(*next_projectile_id);
        *next_projectile_id += 1;
        tower.fire(projectile, target.entity, target.id, now_secs);

        debug!(
            tower = tower.id.0,
            enemy = target.id.0,
            projectile = projectile.0,
            "shot fired"
        );
        events.push(SimEvent::ShotFired {
            tower: tower.id,
            projectile,
            enemy: target.id,
        });
        score.shots_fired += 1;
    }
}
