//! Game loop thread: runs the round controller at 60Hz and publishes snapshots.
//!
//! The controller is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state for
//! polling, audio cues go to the logging sink, HUD text to the text display.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use glam::DVec2;

use mousesmack_core::commands::PlayerCommand;
use mousesmack_core::config::RoundConfig;
use mousesmack_core::constants::{DT, TICK_RATE};
use mousesmack_sim::{AudioDispatcher, RoundController, TapResolver};

use crate::display::TextDisplay;
use crate::projection::{OrthographicProjection, DEFAULT_VIEWPORT};
use crate::sink::LoggingAudioSink;
use crate::state::{GameLoopCommand, GameLoopHandle, SharedSnapshot};

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// `time_scale` speeds up wall-clock pacing; each tick still advances the round by `DT`.
pub fn spawn_game_loop(config: RoundConfig, time_scale: f64) -> std::io::Result<GameLoopHandle> {
    let (command_tx, command_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = latest_snapshot.clone();

    let thread = std::thread::Builder::new()
        .name("mousesmack-game-loop".into())
        .spawn(move || {
            run_game_loop(config, time_scale, command_rx, &shared);
        })?;

    Ok(GameLoopHandle {
        command_tx,
        latest_snapshot,
        thread,
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: RoundConfig,
    time_scale: f64,
    command_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<mousesmack_core::state::RoundSnapshot>>,
) {
    let resolver = TapResolver::new(OrthographicProjection::new(
        DEFAULT_VIEWPORT,
        config.playfield,
    ));
    let auto_start = config.auto_start;
    let mut round = RoundController::new(config);
    let mut audio = AudioDispatcher::new();
    let mut sink = LoggingAudioSink::new();
    let mut display = TextDisplay::new();

    if auto_start {
        round.queue_command(PlayerCommand::StartRound);
    }

    let effective_tick_duration = if time_scale > 0.001 {
        TICK_DURATION.div_f64(time_scale)
    } else {
        TICK_DURATION
    };
    let mut next_tick_time = Instant::now();

    'game: loop {
        // 1. Drain all pending commands
        loop {
            match command_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(command)) => round.queue_command(command),
                Ok(GameLoopCommand::ScreenTap { x, y }) => {
                    let result = resolver.resolve_screen(&mut round, DVec2::new(x, y));
                    tracing::trace!(hit = result.hit, x, y, "screen tap");
                }
                Ok(GameLoopCommand::ToggleMusic) => audio.toggle_music(&mut sink),
                Ok(GameLoopCommand::ToggleSfx) => audio.toggle_sfx(),
                Ok(GameLoopCommand::Shutdown) => break 'game,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'game,
            }
        }

        // 2. Advance one tick (controller handles state semantics internally)
        let snapshot = round.tick(DT);

        // 3. Audio cues and HUD
        audio.dispatch_all(&snapshot.events, &mut sink);
        display.render(&snapshot);

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind: reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }

    tracing::debug!(
        ticks = round.time().tick,
        cues_played = sink.cues_played(),
        "game loop stopped"
    );
}
