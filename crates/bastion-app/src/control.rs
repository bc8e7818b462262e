//! Control surface over `AppState`.
//!
//! These functions bridge a host (CLI driver, scripted demo) to the game
//! loop thread via channels.

use bastion_core::commands::PlayerCommand;
use bastion_core::config::SimConfig;
use bastion_core::state::GameStateSnapshot;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Simulation already running".into());
    }

    let cmd_tx = game_loop::spawn_game_loop(config, state.latest_snapshot.clone())?;

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Simulation not started".into()),
    }
}

/// Get the latest snapshot synchronously.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the game loop thread. Stopping a stopped simulation is a no-op.
pub fn stop_simulation(state: &AppState) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;
    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    if let Some(tx) = tx_lock.take() {
        // A disconnected loop has already stopped.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    *running = false;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        let err = send_command(&state, PlayerCommand::SpawnEnemy).unwrap_err();
        assert!(err.contains("not started"));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_start_twice_fails() {
        let state = AppState::new();
        start_simulation(&state, SimConfig::default()).unwrap();
        let err = start_simulation(&state, SimConfig::default()).unwrap_err();
        assert!(err.contains("already running"));

        stop_simulation(&state).unwrap();
        assert!(!*state.running.lock().unwrap());
        assert!(send_command(&state, PlayerCommand::Pause).is_err());
    }

    #[test]
    fn test_bad_config_leaves_state_stopped() {
        let state = AppState::new();
        let config = SimConfig {
            enemy_speed: 0.0,
            ..Default::default()
        };
        assert!(start_simulation(&state, config).is_err());
        assert!(!*state.running.lock().unwrap());
        assert!(state.command_tx.lock().unwrap().is_none());
    }
}
