//! Session handle for the headless host: command channel and last snapshot.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use bastion_core::commands::PlayerCommand;
use bastion_core::state::GameStateSnapshot;

/// Messages accepted by the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Queued on the engine for the next tick.
    PlayerCommand(PlayerCommand),
    Shutdown,
}

/// Handle the host keeps on a running session.
pub struct AppState {
    /// Set by `start_simulation`, taken by `stop_simulation`.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Most recent tick's snapshot; `None` until the loop's first tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_snapshot_slot_is_shared() {
        let state = AppState::new();
        let writer = Arc::clone(&state.latest_snapshot);
        *writer.lock().unwrap() = Some(GameStateSnapshot::default());
        assert!(state.latest_snapshot.lock().unwrap().is_some());
    }
}
