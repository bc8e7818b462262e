//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the session state (grid with towers, enemy
//! registry, clocks), processes player commands, runs all systems, and
//! produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use bastion_core::commands::PlayerCommand;
use bastion_core::config::SimConfig;
use bastion_core::constants::MAX_TIME_SCALE;
use bastion_core::enums::{GamePhase, RejectReason};
use bastion_core::events::SimEvent;
use bastion_core::state::{GameStateSnapshot, ScoreView};
use bastion_core::types::{SimTime, TileCoord, TowerId};

use crate::clock::{Clock, SystemClock};
use crate::grid::{GridModel, Placement};
use crate::registry::EnemyRegistry;
use crate::systems;
use crate::world_setup::EnemyTemplate;

/// The simulation engine. Owns the grid, the enemy registry and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    grid: GridModel,
    enemies: EnemyRegistry,
    clock: Box<dyn Clock>,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
    next_projectile_id: u32,
    score: ScoreView,
}

impl SimulationEngine {
    /// Create a new session driven by the wall clock.
    pub fn new(config: SimConfig) -> Result<Self, String> {
        Self::with_clock(config, SystemClock::new())
    }

    /// Create a new session whose tower cooldowns read `clock`.
    pub fn with_clock(config: SimConfig, clock: impl Clock + 'static) -> Result<Self, String> {
        config.validate()?;
        let grid = GridModel::from_config(&config)?;
        let enemies = EnemyRegistry::new(EnemyTemplate::from_config(&config));

        info!(
            cols = grid.cols(),
            rows = grid.rows(),
            waypoints = config.route.len(),
            "simulation session created"
        );

        Ok(Self {
            time_scale: config.time_scale.min(MAX_TIME_SCALE),
            config,
            grid,
            enemies,
            clock: Box::new(clock),
            time: SimTime::default(),
            phase: GamePhase::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            next_projectile_id: 0,
            score: ScoreView::default(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `delta` host time units and
    /// return the resulting snapshot.
    ///
    /// Negative or non-finite deltas are treated as zero.
    pub fn tick(&mut self, delta: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
            let scaled = delta * self.time_scale;
            self.run_systems(scaled);
            self.time.advance(scaled);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.grid,
            &self.enemies,
            &self.config,
            &self.time,
            self.phase,
            self.time_scale,
            events,
            &self.score,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read-only view of the map and its towers.
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    /// Read-only view of the active enemies.
    pub fn enemies(&self) -> &EnemyRegistry {
        &self.enemies
    }

    pub fn score(&self) -> &ScoreView {
        &self.score
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SpawnEnemy => {
                let (entity, id) = self.enemies.spawn();
                let position = self.enemies.position(entity).unwrap_or_default();
                debug!(enemy = id.0, x = position.x, y = position.y, "enemy spawned");
                self.events.push(SimEvent::EnemySpawned {
                    enemy: id,
                    position,
                });
                self.score.enemies_spawned += 1;
            }
            PlayerCommand::PlaceTower { tile } => self.place_tower(tile),
            PlayerCommand::UpgradeTower { tower } => self.upgrade_tower(tower),
            PlayerCommand::SetTimeScale { scale } => {
                if scale.is_finite() {
                    self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
                } else {
                    self.reject(RejectReason::InvalidTimeScale);
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    fn place_tower(&mut self, tile: TileCoord) {
        match self.grid.place_tower(tile, &self.config) {
            Ok(Placement::Placed(tower)) => {
                info!(tower = tower.0, col = tile.col, row = tile.row, "tower placed");
                self.events.push(SimEvent::TowerPlaced { tower, tile });
            }
            Ok(Placement::Occupied(tower)) => {
                debug!(tower = tower.0, col = tile.col, row = tile.row, "tile already has a tower");
            }
            Err(reason) => self.reject(reason),
        }
    }

    fn upgrade_tower(&mut self, id: TowerId) {
        let increment = self.config.tower_range_increment;
        match self.grid.tower_mut(id) {
            Some(tower) => {
                let range = tower.upgrade(increment);
                info!(tower = id.0, range, "tower upgraded");
                self.events.push(SimEvent::TowerUpgraded { tower: id, range });
            }
            None => self.reject(RejectReason::UnknownTower),
        }
    }

    fn reject(&mut self, reason: RejectReason) {
        warn!(?reason, "command rejected");
        self.events.push(SimEvent::CommandRejected { reason });
    }

    /// Run all systems in order. Each phase sees the results of the
    /// previous one: targeting uses post-movement positions, homing chases
    /// those same positions.
    fn run_systems(&mut self, delta: f64) {
        // 1. Enemy movement along the route
        systems::movement::run(
            self.enemies.world_mut(),
            delta,
            &mut self.events,
            &mut self.score,
        );
        // 2. Tower targeting and firing
        systems::targeting::run(
            &mut self.grid,
            &self.enemies,
            self.clock.now_secs(),
            self.config.enemy_radius,
            &mut self.next_projectile_id,
            &mut self.events,
            &mut self.score,
        );
        // 3. Projectile homing, hits and stale targets
        systems::homing::run(
            &mut self.grid,
            &mut self.enemies,
            delta,
            self.config.hit_threshold,
            &mut self.events,
            &mut self.score,
        );
        // 4. Cleanup (killed and escaped enemies)
        systems::cleanup::run(&mut self.enemies, &mut self.despawn_buffer);
    }
}
