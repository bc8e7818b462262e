use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use tracing::info;

use bastion_app::control;
use bastion_app::state::AppState;
use bastion_core::commands::PlayerCommand;
use bastion_core::config::SimConfig;
use bastion_core::state::GameStateSnapshot;
use bastion_core::types::TileCoord;

/// Enemies sent down the road by the demo.
const DEMO_WAVE: u32 = 10;
/// Real time between demo spawns.
const SPAWN_INTERVAL: Duration = Duration::from_millis(900);
const POLL_INTERVAL: Duration = Duration::from_millis(50);
/// Give up on the demo after this long.
const DEMO_TIMEOUT: Duration = Duration::from_secs(90);

/// Land tiles flanking the default road.
const DEMO_TOWERS: [TileCoord; 3] = [
    TileCoord { col: 1, row: 1 },
    TileCoord { col: 2, row: 3 },
    TileCoord { col: 4, row: 3 },
];

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Config path from argv[1], then `BASTION_CONFIG`.
fn config_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os("BASTION_CONFIG"))
        .map(PathBuf::from)
}

fn load_config() -> anyhow::Result<SimConfig> {
    let Some(path) = config_path() else {
        info!("no config file given, using defaults");
        return Ok(SimConfig::default());
    };

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let config = SimConfig::from_json(&text)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("load config: {}", path.display()))?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

fn send(state: &AppState, command: PlayerCommand) -> anyhow::Result<()> {
    control::send_command(state, command).map_err(|e| anyhow!(e))
}

fn snapshot(state: &AppState) -> anyhow::Result<Option<GameStateSnapshot>> {
    control::get_snapshot(state).map_err(|e| anyhow!(e))
}

fn run_demo(state: &AppState) -> anyhow::Result<GameStateSnapshot> {
    for tile in DEMO_TOWERS {
        send(state, PlayerCommand::PlaceTower { tile })?;
    }

    let started = Instant::now();
    let mut spawned = 0;
    let mut last_spawn: Option<Instant> = None;
    let mut upgraded = false;

    loop {
        if started.elapsed() > DEMO_TIMEOUT {
            return Err(anyhow!("demo did not finish within {:?}", DEMO_TIMEOUT));
        }

        if spawned < DEMO_WAVE && last_spawn.is_none_or(|t| t.elapsed() >= SPAWN_INTERVAL) {
            send(state, PlayerCommand::SpawnEnemy)?;
            spawned += 1;
            last_spawn = Some(Instant::now());
        }

        thread::sleep(POLL_INTERVAL);
        let Some(snap) = snapshot(state)? else {
            continue;
        };

        if !upgraded {
            if let Some(tower) = snap.towers.first() {
                send(state, PlayerCommand::UpgradeTower { tower: tower.id })?;
                upgraded = true;
            }
        }

        let all_resolved = snap.score.enemies_killed + snap.score.enemies_escaped == DEMO_WAVE;
        if all_resolved && snap.projectiles.is_empty() {
            return Ok(snap);
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_config()?;
    let state = AppState::new();
    control::start_simulation(&state, config).map_err(|e| anyhow!(e))?;

    let result = run_demo(&state);
    control::stop_simulation(&state).map_err(|e| anyhow!(e))?;
    let snap = result?;

    let score = &snap.score;
    info!(
        ticks = snap.time.tick,
        spawned = score.enemies_spawned,
        killed = score.enemies_killed,
        escaped = score.enemies_escaped,
        shots = score.shots_fired,
        hits = score.hits,
        stale = score.stale_projectiles,
        "demo finished"
    );
    Ok(())
}
