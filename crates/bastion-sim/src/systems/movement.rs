//! Movement system: advances every live enemy along its route.

use hecs::World;
use tracing::debug;

use bastion_core::components::{Enemy, Health, PathFollower};
use bastion_core::events::SimEvent;
use bastion_core::state::ScoreView;
use bastion_core::types::Position;

use crate::waypoint::{self, MoveOutcome};

/// Run waypoint movement for all living enemies.
///
/// Enemies that finish their route stay in the world with a completed
/// follower until the cleanup system removes them; nothing targets them in
/// the meantime.
pub fn run(world: &mut World, delta: f64, events: &mut Vec<SimEvent>, score: &mut ScoreView) {
    for (_entity, (enemy, pos, follower, health)) in
        world.query_mut::<(&Enemy, &mut Position, &mut PathFollower, &Health)>()
    {
        if !health.alive {
            continue;
        }

        if waypoint::advance(pos, follower, delta) == MoveOutcome::RouteCompleted {
            debug!(enemy = enemy.id.0, "route completed");
            events.push(SimEvent::RouteCompleted { enemy: enemy.id });
            score.enemies_escaped += 1;
        }
    }
}
