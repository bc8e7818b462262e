//! Session configuration. Every tunable of the simulation lives here.
//!
//! Missing JSON fields fall back to the defaults in `constants`, so a config
//! file only needs to name what it changes.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::TileKind;
use crate::types::Position;

/// Configuration for starting a new simulation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Edge length of a tile in map units.
    pub tile_size: f64,
    /// Map rows, top to bottom. `.` is Land, `#` is Road.
    pub layout: Vec<String>,
    /// Enemy route in map units. Enemies spawn on the first waypoint.
    pub route: Vec<Position>,

    pub enemy_speed: f64,
    pub enemy_max_health: u32,
    pub enemy_radius: f64,

    pub tower_base_range: f64,
    pub tower_range_increment: f64,
    pub tower_shots_per_minute: f64,
    pub tower_radius: f64,

    pub projectile_speed: f64,
    pub projectile_damage: u32,
    pub projectile_radius: f64,
    pub hit_threshold: f64,

    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            layout: DEFAULT_LAYOUT.iter().map(|row| row.to_string()).collect(),
            route: DEFAULT_ROUTE.iter().copied().map(Position::from).collect(),
            enemy_speed: ENEMY_SPEED,
            enemy_max_health: ENEMY_MAX_HEALTH,
            enemy_radius: ENEMY_RADIUS,
            tower_base_range: TOWER_BASE_RANGE,
            tower_range_increment: TOWER_RANGE_INCREMENT,
            tower_shots_per_minute: TOWER_SHOTS_PER_MINUTE,
            tower_radius: TOWER_RADIUS,
            projectile_speed: PROJECTILE_SPEED,
            projectile_damage: PROJECTILE_DAMAGE,
            projectile_radius: PROJECTILE_RADIUS,
            hit_threshold: HIT_THRESHOLD,
            time_scale: 1.0,
        }
    }
}

impl SimConfig {
    /// Parse a JSON document. Unknown fields are ignored, missing ones defaulted.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimConfig =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field describes a playable session.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(format!("tile_size must be positive, got {}", self.tile_size));
        }
        self.validate_layout()?;

        if self.route.is_empty() {
            return Err("route must contain at least one waypoint".into());
        }
        if let Some(bad) = self
            .route
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(format!("route waypoint {bad} is not finite"));
        }

        positive("enemy_speed", self.enemy_speed)?;
        positive("projectile_speed", self.projectile_speed)?;
        positive("tower_shots_per_minute", self.tower_shots_per_minute)?;
        non_negative("enemy_radius", self.enemy_radius)?;
        non_negative("tower_base_range", self.tower_base_range)?;
        if !(self.tower_range_increment.is_finite()
            && self.tower_range_increment >= MIN_RANGE_INCREMENT)
        {
            return Err(format!(
                "tower_range_increment must be at least {MIN_RANGE_INCREMENT}, got {}",
                self.tower_range_increment
            ));
        }
        non_negative("tower_radius", self.tower_radius)?;
        non_negative("projectile_radius", self.projectile_radius)?;
        non_negative("hit_threshold", self.hit_threshold)?;
        non_negative("time_scale", self.time_scale)?;

        if self.enemy_max_health == 0 {
            return Err("enemy_max_health must be at least 1".into());
        }
        Ok(())
    }

    fn validate_layout(&self) -> Result<(), String> {
        let width = match self.layout.first() {
            Some(row) if !row.is_empty() => row.chars().count(),
            _ => return Err("layout must have at least one non-empty row".into()),
        };

        for (row_idx, row) in self.layout.iter().enumerate() {
            if row.chars().count() != width {
                return Err(format!(
                    "layout row {row_idx} has {} tiles, expected {width}",
                    row.chars().count()
                ));
            }
            if let Some(glyph) = row.chars().find(|c| TileKind::from_glyph(*c).is_none()) {
                return Err(format!("layout row {row_idx} has unknown tile '{glyph}'"));
            }
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(format!("{name} must be positive, got {value}"))
    }
}

fn non_negative(name: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{name} must be non-negative, got {value}"))
    }
}
