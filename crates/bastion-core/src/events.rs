//! Events emitted by the simulation for presentation and audio feedback.
//!
//! Each event is scoped to the tick that produced it; the engine drains
//! them into the snapshot returned from that tick.

use serde::{Deserialize, Serialize};

use crate::enums::RejectReason;
use crate::types::{EnemyId, Position, ProjectileId, TileCoord, TowerId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Enemy registered as active and added to the scene.
    EnemySpawned { enemy: EnemyId, position: Position },
    /// Enemy walked off the end of its route and escaped.
    RouteCompleted { enemy: EnemyId },
    /// Enemy health reached zero.
    Killed { enemy: EnemyId },
    /// Tower launched a projectile.
    ShotFired {
        tower: TowerId,
        projectile: ProjectileId,
        enemy: EnemyId,
    },
    /// Projectile reached its target and applied damage.
    HitTarget {
        tower: TowerId,
        projectile: ProjectileId,
        enemy: EnemyId,
        damage: u32,
    },
    /// Projectile discarded because its target was already dead or gone.
    StaleTarget {
        tower: TowerId,
        projectile: ProjectileId,
        enemy: EnemyId,
    },
    /// Tower built on a Land tile.
    TowerPlaced { tower: TowerId, tile: TileCoord },
    /// Tower range extended.
    TowerUpgraded { tower: TowerId, range: f64 },
    /// A player command was ignored.
    CommandRejected { reason: RejectReason },
}
