//! Snapshot system: reads the grid and registry and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only and never modifies simulation state.

use bastion_core::components::{Enemy, Health, PathFollower};
use bastion_core::config::SimConfig;
use bastion_core::enums::GamePhase;
use bastion_core::events::SimEvent;
use bastion_core::state::*;
use bastion_core::types::{Position, SimTime};

use crate::grid::GridModel;
use crate::registry::EnemyRegistry;

/// Build a complete GameStateSnapshot from the current state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    grid: &GridModel,
    registry: &EnemyRegistry,
    config: &SimConfig,
    time: &SimTime,
    phase: GamePhase,
    time_scale: f64,
    events: Vec<SimEvent>,
    score: &ScoreView,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        time_scale,
        tiles: build_tiles(grid),
        enemies: build_enemies(registry, config),
        towers: build_towers(grid, config),
        projectiles: build_projectiles(grid, config),
        events,
        score: score.clone(),
    }
}

fn build_tiles(grid: &GridModel) -> Vec<TileView> {
    grid.tiles()
        .map(|(coord, tile)| TileView {
            coord,
            kind: tile.kind(),
            tower: tile.tower().map(|t| t.id),
        })
        .collect()
}

/// Build EnemyView list, sorted by id for stable output.
fn build_enemies(registry: &EnemyRegistry, config: &SimConfig) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = registry
        .world()
        .query::<(&Enemy, &Position, &PathFollower, &Health)>()
        .iter()
        .map(|(_, (enemy, pos, follower, health))| EnemyView {
            id: enemy.id,
            position: *pos,
            radius: config.enemy_radius,
            health: health.current,
            max_health: health.max,
            health_ratio: health.ratio,
            waypoint_index: follower.index,
            alive: health.alive,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_towers(grid: &GridModel, config: &SimConfig) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = grid
        .towers()
        .map(|tower| TowerView {
            id: tower.id,
            tile: tower.tile,
            position: tower.position,
            radius: config.tower_radius,
            range: tower.range(),
            shots_per_minute: tower.shots_per_minute(),
            hostile_in_range: tower.hostile_in_range,
            projectiles_in_flight: tower.projectiles().len() as u32,
        })
        .collect();

    towers.sort_by_key(|t| t.id);
    towers
}

fn build_projectiles(grid: &GridModel, config: &SimConfig) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = grid
        .towers()
        .flat_map(|tower| {
            tower.projectiles().iter().map(move |p| ProjectileView {
                id: p.id,
                tower: tower.id,
                target: p.target_id,
                position: p.position,
                radius: config.projectile_radius,
            })
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
