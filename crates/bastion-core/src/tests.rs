#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::config::SimConfig;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{EnemyId, Position, SimTime, TileCoord, TowerId};

    /// Commands use an internally tagged representation on the wire.
    #[test]
    fn test_player_command_tagged_json() {
        let json = serde_json::to_string(&PlayerCommand::PlaceTower {
            tile: TileCoord::new(1, 3),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"PlaceTower","tile":{"col":1,"row":3}}"#);

        let back: PlayerCommand =
            serde_json::from_str(r#"{"type":"UpgradeTower","tower":7}"#).unwrap();
        assert_eq!(back, PlayerCommand::UpgradeTower { tower: TowerId(7) });

        let spawn: PlayerCommand = serde_json::from_str(r#"{"type":"SpawnEnemy"}"#).unwrap();
        assert_eq!(spawn, PlayerCommand::SpawnEnemy);
    }

    #[test]
    fn test_sim_event_tagged_json() {
        let event = SimEvent::Killed { enemy: EnemyId(4) };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"Killed","enemy":4}"#);
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_position_angle() {
        let origin = Position::new(0.0, 0.0);
        assert!(origin.angle_to(&Position::new(10.0, 0.0)).abs() < 1e-10);

        // y grows downward, so "below" is +PI/2.
        let below = Position::new(0.0, 10.0);
        assert!((origin.angle_to(&below) - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    }

    #[test]
    fn test_tile_center() {
        let tile = TileCoord::new(3, 2);
        let center = tile.center(TILE_SIZE);
        assert_eq!(center, Position::new(224.0, 160.0));
        assert_eq!(tile.origin(TILE_SIZE), Position::new(192.0, 128.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..4 {
            time.advance(0.5);
        }
        assert_eq!(time.tick, 4);
        assert!((time.elapsed - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_tile_glyphs() {
        assert_eq!(TileKind::from_glyph('.'), Some(TileKind::Land));
        assert_eq!(TileKind::from_glyph('#'), Some(TileKind::Road));
        assert_eq!(TileKind::from_glyph('x'), None);
        assert_eq!(TileKind::Road.glyph(), '#');
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.layout.len(), 6);
        assert_eq!(config.route.len(), 4);
        assert_eq!(config.route[0], Position::new(-32.0, 160.0));
    }

    /// The default route runs along the centers of the default road tiles.
    #[test]
    fn test_default_route_follows_road() {
        let config = SimConfig::default();
        let corner = TileCoord::new(3, 2).center(config.tile_size);
        assert_eq!(config.route[1], corner);
        assert_eq!(config.layout[2].chars().nth(3), Some('#'));

        let bend = TileCoord::new(3, 4).center(config.tile_size);
        assert_eq!(config.route[2], bend);
        assert_eq!(config.layout[4].chars().nth(3), Some('#'));
    }

    #[test]
    fn test_partial_json_config_uses_defaults() {
        let config = SimConfig::from_json(r#"{ "enemy_speed": 2.0, "projectile_damage": 5 }"#)
            .unwrap();
        assert_eq!(config.enemy_speed, 2.0);
        assert_eq!(config.projectile_damage, 5);
        assert_eq!(config.tower_base_range, TOWER_BASE_RANGE);
        assert_eq!(config.hit_threshold, HIT_THRESHOLD);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let mut empty_route = SimConfig::default();
        empty_route.route.clear();
        assert!(empty_route.validate().is_err());

        let mut ragged = SimConfig::default();
        ragged.layout[1] = "...".into();
        let err = ragged.validate().unwrap_err();
        assert!(err.contains("row 1"), "unexpected error: {err}");

        let mut glyph = SimConfig::default();
        glyph.layout[0] = "..x...".into();
        assert!(glyph.validate().is_err());

        let zero_rate = SimConfig {
            tower_shots_per_minute: 0.0,
            ..Default::default()
        };
        assert!(zero_rate.validate().is_err());

        let dead_on_arrival = SimConfig {
            enemy_max_health: 0,
            ..Default::default()
        };
        assert!(dead_on_arrival.validate().is_err());

        let nan_speed = SimConfig {
            projectile_speed: f64::NAN,
            ..Default::default()
        };
        assert!(nan_speed.validate().is_err());

        for increment in [0.0, 0.4, -32.0, f64::INFINITY] {
            let stalled_upgrade = SimConfig {
                tower_range_increment: increment,
                ..Default::default()
            };
            let err = stalled_upgrade.validate().unwrap_err();
            assert!(err.contains("tower_range_increment"), "unexpected error: {err}");
        }

        let half_unit = SimConfig {
            tower_range_increment: 0.5,
            ..Default::default()
        };
        assert!(half_unit.validate().is_ok());
    }

    #[test]
    fn test_malformed_json_config() {
        let err = SimConfig::from_json("{ not json").unwrap_err();
        assert!(err.starts_with("Failed to parse config"));

        let err = SimConfig::from_json(r#"{ "route": [] }"#).unwrap_err();
        assert!(err.contains("route"));
    }
}
