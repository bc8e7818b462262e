//! Cleanup system: removes enemies that died or escaped this tick.

use hecs::Entity;

use bastion_core::components::{Health, PathFollower};

use crate::registry::EnemyRegistry;

/// Remove every dead or route-completed enemy from the registry.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(registry: &mut EnemyRegistry, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (health, follower)) in registry
        .world_mut()
        .query_mut::<(&Health, &PathFollower)>()
    {
        if !health.alive || follower.index >= follower.route.len() {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        registry.remove(entity);
    }
}
