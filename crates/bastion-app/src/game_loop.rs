//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is built on the caller's thread so a bad config is reported
//! before anything is spawned, then moved into the loop thread. Commands
//! arrive via `mpsc` channel. Snapshots are stored in shared state for
//! synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use bastion_core::config::SimConfig;
use bastion_core::constants::FRAME_RATE;
use bastion_core::state::GameStateSnapshot;
use bastion_sim::SimulationEngine;

use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Largest delta handed to the engine in one tick, in frames. A stalled
/// host resumes with at most this much movement instead of teleporting
/// enemies along the route.
pub const MAX_FRAME_DELTA: f64 = 4.0;

/// Convert measured wall time into the engine's delta unit (60Hz frames).
pub fn frame_delta(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * FRAME_RATE as f64).min(MAX_FRAME_DELTA)
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the control layer to use.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<mpsc::Sender<GameLoopCommand>, String> {
    let engine = SimulationEngine::new(config)?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("bastion-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })
        .map_err(|e| format!("Failed to spawn game loop thread: {e}"))?;

    Ok(cmd_tx)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    info!("game loop started");
    let mut last_tick = Instant::now();
    let mut next_tick_time = last_tick;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!(ticks = engine.time().tick, "game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick by the real time since the last one
        let now = Instant::now();
        let delta = frame_delta(now - last_tick);
        last_tick = now;
        let snapshot = engine.tick(delta);

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            debug!("game loop behind schedule, resetting");
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bastion_core::commands::PlayerCommand;
    use bastion_core::types::TileCoord;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::SpawnEnemy))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::SpawnEnemy)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_frame_delta_units_and_cap() {
        assert!((frame_delta(TICK_DURATION) - 1.0).abs() < 1e-6);
        assert!((frame_delta(Duration::from_millis(50)) - 3.0).abs() < 1e-9);
        assert_eq!(frame_delta(Duration::from_secs(2)), MAX_FRAME_DELTA);
        assert_eq!(frame_delta(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let config = SimConfig {
            route: Vec::new(),
            ..Default::default()
        };
        let latest = Arc::new(Mutex::new(None));
        assert!(spawn_game_loop(config, latest).is_err());
    }

    #[test]
    fn test_loop_publishes_snapshots_and_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(SimConfig::default(), latest.clone()).unwrap();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::PlaceTower {
            tile: TileCoord::new(1, 1),
        }))
        .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut placed = false;
        while Instant::now() < deadline && !placed {
            std::thread::sleep(Duration::from_millis(20));
            placed = latest
                .lock()
                .unwrap()
                .as_ref()
                .is_some_and(|snap| snap.towers.len() == 1);
        }
        assert!(placed, "tower should appear in a published snapshot");

        tx.send(GameLoopCommand::Shutdown).unwrap();
    }
}
