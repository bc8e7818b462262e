//! Simulation constants and tuning defaults.
//!
//! Every value here is the default for the matching `SimConfig` field.
//! Distances are map units (one tile is `TILE_SIZE` units), speeds are map
//! units per unit of host delta (one delta unit is one 60 Hz frame).

/// Nominal host frame rate. One unit of `delta` is one frame at this rate.
pub const FRAME_RATE: u32 = 60;

/// Edge length of a square tile.
pub const TILE_SIZE: f64 = 64.0;

/// Default map, one string per row. `.` is Land, `#` is Road.
pub const DEFAULT_LAYOUT: [&str; 6] = [
    "......", //
    "......", //
    "####..", //
    "...#..", //
    "...###", //
    "......", //
];

/// Default enemy route. Starts half a tile off-map and leaves on the far side.
pub const DEFAULT_ROUTE: [(f64, f64); 4] = [
    (-32.0, 160.0),
    (224.0, 160.0),
    (224.0, 288.0),
    (416.0, 288.0),
];

// --- Enemy ---

/// Per-axis movement per delta unit.
pub const ENEMY_SPEED: f64 = 0.8;

/// Starting (and maximum) health.
pub const ENEMY_MAX_HEALTH: u32 = 100;

/// Visual hit radius. Added to tower range for the in-range test.
pub const ENEMY_RADIUS: f64 = 20.0;

// --- Tower ---

/// Range of a freshly placed tower.
pub const TOWER_BASE_RANGE: f64 = 160.0;

/// Range gained per upgrade.
/// Smallest upgrade increment that always grows a rounded range.
pub const MIN_RANGE_INCREMENT: f64 = 0.5;
pub const TOWER_RANGE_INCREMENT: f64 = 32.0;

/// Fire-rate limit.
pub const TOWER_SHOTS_PER_MINUTE: f64 = 480.0;

/// Drawn radius of the tower body.
pub const TOWER_RADIUS: f64 = 20.0;

/// Real seconds per cooldown unit (`SECONDS_PER_MINUTE / shots_per_minute`).
pub const SECONDS_PER_MINUTE: f64 = 60.0;

// --- Projectile ---

/// Distance travelled per delta unit.
pub const PROJECTILE_SPEED: f64 = 5.0;

/// Damage applied on hit.
pub const PROJECTILE_DAMAGE: u32 = 20;

/// Drawn radius of a projectile.
pub const PROJECTILE_RADIUS: f64 = 3.0;

/// A projectile whose next position lands within this distance of its
/// target's center hits. Approximates projectile + enemy radii.
pub const HIT_THRESHOLD: f64 = 23.0;

// --- Time scale ---

/// Upper clamp for `SetTimeScale`.
pub const MAX_TIME_SCALE: f64 = 4.0;
