//! Waypoint following for enemies.
//!
//! Each axis is driven independently by the sign of its rounded offset to the
//! current waypoint. A diagonal leg therefore moves `speed * delta` on both
//! axes at once and covers more ground per tick than a straight one; that
//! gait is part of the game's feel and is kept as is.

use bastion_core::components::PathFollower;
use bastion_core::types::Position;

/// Result of advancing a follower by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Still en route.
    Moved,
    /// The final waypoint was reached this tick. Emitted once per follower.
    RouteCompleted,
    /// The route was already completed on an earlier tick; nothing changed.
    Finished,
}

/// Advance `position` toward the follower's current waypoint.
///
/// When the current waypoint is reached (both rounded offsets are zero) the
/// index advances and, if a waypoint remains, the same tick's movement heads
/// for the new one. Per-axis steps never overshoot the waypoint, so large
/// deltas cannot make an enemy oscillate around it.
pub fn advance(position: &mut Position, follower: &mut PathFollower, delta: f64) -> MoveOutcome {
    let Some(mut target) = follower.route.get(follower.index).copied() else {
        return MoveOutcome::Finished;
    };

    if rounded_offset(position, &target) == (0.0, 0.0) {
        follower.index += 1;
        match follower.route.get(follower.index) {
            Some(next) => target = *next,
            None => return MoveOutcome::RouteCompleted,
        }
    }

    let step = follower.speed * delta;
    let (round_x, round_y) = rounded_offset(position, &target);
    position.x += axis_step(round_x, target.x - position.x, step);
    position.y += axis_step(round_y, target.y - position.y, step);

    MoveOutcome::Moved
}

/// Offsets to the waypoint, rounded to whole map units.
fn rounded_offset(from: &Position, to: &Position) -> (f64, f64) {
    ((to.x - from.x).round(), (to.y - from.y).round())
}

/// Signed movement along one axis. Zero when the rounded offset is zero.
fn axis_step(rounded: f64, exact: f64, step: f64) -> f64 {
    if rounded == 0.0 {
        0.0
    } else {
        rounded.signum() * step.min(exact.abs())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn follower(route: &[(f64, f64)], speed: f64) -> (Position, PathFollower) {
        let route: Arc<[Position]> = route.iter().copied().map(Position::from).collect();
        let start = route[0];
        (
            start,
            PathFollower {
                route,
                index: 0,
                speed,
            },
        )
    }

    /// Straight leg of 256 units at 0.8 per tick takes 320 ticks, then the
    /// next tick completes the route.
    #[test]
    fn test_straight_leg_then_route_completed() {
        let (mut pos, mut f) = follower(&[(-32.0, 160.0), (224.0, 160.0)], 0.8);

        for _ in 0..320 {
            assert_eq!(advance(&mut pos, &mut f, 1.0), MoveOutcome::Moved);
        }
        assert!((pos.x - 224.0).abs() < 1e-6, "x should be ~224, got {}", pos.x);
        assert!((pos.y - 160.0).abs() < 1e-9, "y must not drift, got {}", pos.y);
        assert_eq!(f.index, 1);

        assert_eq!(advance(&mut pos, &mut f, 1.0), MoveOutcome::RouteCompleted);
        assert_eq!(f.index, 2);
        assert_eq!(advance(&mut pos, &mut f, 1.0), MoveOutcome::Finished);
        assert_eq!(f.index, 2, "index never exceeds route length");
    }

    #[test]
    fn test_first_tick_advances_past_spawn_waypoint() {
        let (mut pos, mut f) = follower(&[(0.0, 0.0), (10.0, 0.0)], 1.0);
        assert_eq!(advance(&mut pos, &mut f, 1.0), MoveOutcome::Moved);
        assert_eq!(f.index, 1);
        assert!((pos.x - 1.0).abs() < 1e-12);
    }

    /// Diagonal legs move on both axes at full speed until one axis arrives.
    #[test]
    fn test_diagonal_moves_each_axis_independently() {
        let (mut pos, mut f) = follower(&[(0.0, 0.0), (10.0, 4.0)], 1.0);
        advance(&mut pos, &mut f, 1.0);
        assert_eq!(pos, Position::new(1.0, 1.0));

        for _ in 0..3 {
            advance(&mut pos, &mut f, 1.0);
        }
        assert_eq!(pos, Position::new(4.0, 4.0));

        advance(&mut pos, &mut f, 1.0);
        assert_eq!(pos, Position::new(5.0, 4.0), "y has arrived and holds");
    }

    #[test]
    fn test_large_delta_does_not_overshoot() {
        let (mut pos, mut f) = follower(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)], 1.0);
        advance(&mut pos, &mut f, 50.0);
        assert_eq!(pos, Position::new(10.0, 0.0));

        advance(&mut pos, &mut f, 50.0);
        assert_eq!(f.index, 2);
        assert_eq!(pos, Position::new(10.0, 10.0));

        assert_eq!(advance(&mut pos, &mut f, 50.0), MoveOutcome::RouteCompleted);
    }

    #[test]
    fn test_zero_delta_holds_position() {
        let (mut pos, mut f) = follower(&[(0.0, 0.0), (10.0, 0.0)], 1.0);
        advance(&mut pos, &mut f, 0.0);
        assert_eq!(pos, Position::new(0.0, 0.0));
        assert_eq!(f.index, 1);
        advance(&mut pos, &mut f, 0.0);
        assert_eq!(f.index, 1);
    }

    #[test]
    fn test_single_waypoint_route_completes_immediately() {
        let (mut pos, mut f) = follower(&[(5.0, 5.0)], 1.0);
        assert_eq!(advance(&mut pos, &mut f, 1.0), MoveOutcome::RouteCompleted);
        assert_eq!(pos, Position::new(5.0, 5.0));
    }
}
