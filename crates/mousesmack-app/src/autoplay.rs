//! Autoplay bot: watches snapshots and taps visible targets through the screen.

use std::time::Duration;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use mousesmack_core::commands::PlayerCommand;
use mousesmack_core::config::RoundConfig;
use mousesmack_core::enums::RoundState;
use mousesmack_core::state::{RoundSnapshot, TargetView};
use mousesmack_core::types::Playfield;

use crate::game_loop;
use crate::projection::{OrthographicProjection, DEFAULT_VIEWPORT};
use crate::state::{GameLoopCommand, GameLoopHandle};

/// How the bot plays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotSettings {
    /// Probability that a tap is deliberately aimed off target.
    pub miss_chance: f64,
    /// Time between taps at 1x speed.
    pub reaction: Duration,
    pub seed: u64,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            miss_chance: 0.2,
            reaction: Duration::from_millis(250),
            seed: 7,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AutoplayError {
    #[error("failed to spawn game loop: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("game loop exited before the round ended")]
    LoopExited,
}

/// Picks taps from snapshots.
pub struct AutoPlayer {
    settings: BotSettings,
    rng: ChaCha8Rng,
    playfield: Playfield,
    projection: OrthographicProjection,
}

impl AutoPlayer {
    pub fn new(settings: BotSettings, playfield: Playfield) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(settings.seed),
            projection: OrthographicProjection::new(DEFAULT_VIEWPORT, playfield),
            settings,
            playfield,
        }
    }

    /// The command to send for this snapshot, if any.
    pub fn decide(&mut self, snapshot: &RoundSnapshot) -> Option<GameLoopCommand> {
        match snapshot.state {
            RoundState::NotStarted => Some(GameLoopCommand::PlayerCommand(
                PlayerCommand::StartRound,
            )),
            RoundState::Ended => None,
            RoundState::Running => {
                let target = self.first_visible(&snapshot.targets)?;
                let mut aim = target.position;
                if self.rng.gen_bool(self.settings.miss_chance.clamp(0.0, 1.0)) {
                    aim += DVec2::new(self.off_target_offset(aim.x), 0.0);
                }
                let screen = self.projection.world_to_screen(aim);
                Some(GameLoopCommand::ScreenTap {
                    x: screen.x,
                    y: screen.y,
                })
            }
        }
    }

    fn first_visible<'a>(&self, targets: &'a [TargetView]) -> Option<&'a TargetView> {
        targets.iter().find(|t| self.playfield.contains(t.position))
    }

    /// Sideways nudge toward the playfield centre, wide enough to clear a hitbox.
    fn off_target_offset(&self, x: f64) -> f64 {
        if x > self.playfield.center().x {
            -3.0
        } else {
            3.0
        }
    }
}

/// Play one round on a game loop thread and return the final score.
pub fn run(
    config: RoundConfig,
    settings: BotSettings,
    time_scale: f64,
) -> Result<RoundSnapshot, AutoplayError> {
    let mut bot = AutoPlayer::new(settings, config.playfield);
    let handle = game_loop::spawn_game_loop(config, time_scale)?;
    let pause = if time_scale > 0.001 {
        settings.reaction.div_f64(time_scale)
    } else {
        settings.reaction
    };

    let result = drive(&handle, &mut bot, pause);

    let _ = handle.send(GameLoopCommand::Shutdown);
    if handle.thread.join().is_err() {
        tracing::error!("game loop thread panicked");
    }
    result
}

fn drive(
    handle: &GameLoopHandle,
    bot: &mut AutoPlayer,
    pause: Duration,
) -> Result<RoundSnapshot, AutoplayError> {
    loop {
        std::thread::sleep(pause);

        let Some(snapshot) = handle.latest() else {
            if handle.thread.is_finished() {
                return Err(AutoplayError::LoopExited);
            }
            continue;
        };
        if snapshot.state == RoundState::Ended {
            return Ok(snapshot);
        }
        if let Some(command) = bot.decide(&snapshot) {
            if !handle.send(command) {
                return Err(AutoplayError::LoopExited);
            }
        }
    }
}
