//! Homing system. Advances every tower's projectiles and resolves hits.

use tracing::{debug, info};

use bastion_core::events::SimEvent;
use bastion_core::state::ScoreView;

use crate::grid::GridModel;
use crate::health::DamageOutcome;
use crate::projectile::HomingOutcome;
use crate::registry::EnemyRegistry;

/// Run the homing system: stale check, re-aim, move, hit test.
///
/// Liveness is read per projectile rather than once at the start of the
/// tick: a death caused by one projectile is visible to the projectiles
/// processed after it, so a later projectile aimed at the same enemy
/// resolves as stale instead of damaging a dead target.
pub fn run(
    grid: &mut GridModel,
    registry: &mut EnemyRegistry,
    delta: f64,
    hit_threshold: f64,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreView,
) {
    for tower in grid.towers_mut() {
        let tower_id = tower.id;

        tower.resolve_projectiles(|projectile| {
            let target_pos = match registry.position(projectile.target) {
                Some(pos) if registry.is_active(projectile.target) => pos,
                _ => {
                    debug!(
                        tower = tower_id.0,
                        projectile = projectile.id.0,
                        enemy = projectile.target_id.0,
                        "stale target"
                    );
                    events.push(SimEvent::StaleTarget {
                        tower: tower_id,
                        projectile: projectile.id,
                        enemy: projectile.target_id,
                    });
                    score.stale_projectiles += 1;
                    return HomingOutcome::StaleTarget;
                }
            };

            if !projectile.home_toward(target_pos, delta, hit_threshold) {
                return HomingOutcome::InFlight;
            }

            let outcome = registry.apply_damage(projectile.target, projectile.damage);
            events.push(SimEvent::HitTarget {
                tower: tower_id,
                projectile: projectile.id,
                enemy: projectile.target_id,
                damage: projectile.damage,
            });
            score.hits += 1;

            if outcome == DamageOutcome::Killed {
                info!(enemy = projectile.target_id.0, tower = tower_id.0, "enemy killed");
                events.push(SimEvent::Killed {
                    enemy: projectile.target_id,
                });
                score.enemies_killed += 1;
            }
            HomingOutcome::HitTarget
        });
    }
}
