//! Round controller: the core of the game.
//!
//! `RoundController` owns the hecs world of live targets, the round clock and
//! score, processes player commands, runs the systems each tick and produces
//! `RoundSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use mousesmack_core::commands::PlayerCommand;
use mousesmack_core::components::Target;
use mousesmack_core::config::RoundConfig;
use mousesmack_core::enums::{MissPenalty, RoundState};
use mousesmack_core::error::RoundError;
use mousesmack_core::events::GameEvent;
use mousesmack_core::state::{RoundSnapshot, TargetView};
use mousesmack_core::types::SimTime;

use crate::clock::RoundClock;
use crate::resolver;
use crate::score::ScoreKeeper;
use crate::systems;

/// One play session: NotStarted → Running → Ended, with restart back to Running.
pub struct RoundController {
    config: RoundConfig,
    world: World,
    state: RoundState,
    clock: RoundClock,
    score: ScoreKeeper,
    time: SimTime,
    rng: ChaCha8Rng,
    next_target_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    final_score: Option<i64>,
}

impl RoundController {
    /// Create a controller. The config is validated when the round starts.
    pub fn new(config: RoundConfig) -> Self {
        Self {
            world: World::new(),
            state: RoundState::default(),
            clock: RoundClock::new(),
            score: ScoreKeeper::new(config.allow_negative_score),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_target_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            final_score: None,
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Begin the round: score 0, full clock, one live target.
    ///
    /// Does nothing unless the round is NotStarted. A config error leaves the
    /// round NotStarted.
    pub fn start(&mut self) -> Result<(), RoundError> {
        if self.state != RoundState::NotStarted {
            return Ok(());
        }
        if let Err(error) = self.config.validate() {
            tracing::warn!(%error, "cannot start round");
            return Err(error);
        }

        systems::cleanup::clear_targets(&mut self.world, &mut self.despawn_buffer);
        self.score = ScoreKeeper::new(self.config.allow_negative_score);
        self.clock.reset(self.config.starting_time_secs);
        self.time = SimTime::default();
        self.final_score = None;
        self.state = RoundState::Running;

        tracing::info!(
            starting_time_secs = self.config.starting_time_secs,
            "round started"
        );
        self.events.push(GameEvent::RoundStarted {
            starting_time_secs: self.config.starting_time_secs,
        });
        self.spawn_next();
        Ok(())
    }

    /// Advance the round by `dt` seconds and return the resulting snapshot.
    ///
    /// Queued commands are applied first. Nothing moves unless Running.
    pub fn tick(&mut self, dt: f64) -> RoundSnapshot {
        self.process_commands();

        if self.state == RoundState::Running {
            self.run_systems(dt);
        }

        self.snapshot()
    }

    /// A target left the world. Hits score; every removal spawns a replacement.
    pub fn on_target_resolved(&mut self, target: &Target, was_hit: bool) {
        if self.state != RoundState::Running {
            return;
        }
        if was_hit {
            self.score.add(target.point_value);
        }
        self.spawn_next();
    }

    /// A tap hit nothing. Costs time or points, never both.
    pub fn register_miss(&mut self) {
        if self.state != RoundState::Running {
            return;
        }

        let penalty = self.config.miss_penalty();
        self.events.push(GameEvent::Miss { penalty });
        match penalty {
            MissPenalty::Time(secs) => {
                if self.clock.penalize(secs) {
                    self.end();
                }
            }
            MissPenalty::Score(points) => self.score.penalize(points),
            MissPenalty::None => {}
        }
        tracing::debug!(
            ?penalty,
            remaining_secs = self.clock.remaining(),
            score = self.score.score(),
            "missed tap"
        );
    }

    /// Game over. Freezes the clock at zero and records the final score. One-shot.
    pub fn end(&mut self) {
        if self.state != RoundState::Running {
            return;
        }

        self.state = RoundState::Ended;
        self.clock.freeze();
        systems::cleanup::clear_targets(&mut self.world, &mut self.despawn_buffer);

        let final_score = self.score.score();
        self.final_score = Some(final_score);
        tracing::info!(final_score, "game over");
        self.events.push(GameEvent::RoundEnded { final_score });
    }

    /// Throw the current round away and start a new one.
    ///
    /// Undelivered events from the old round stay queued ahead of `RoundStarted`.
    pub fn restart(&mut self) -> Result<(), RoundError> {
        systems::cleanup::clear_targets(&mut self.world, &mut self.despawn_buffer);
        self.state = RoundState::NotStarted;
        self.clock = RoundClock::new();
        self.score.reset();
        self.time = SimTime::default();
        self.final_score = None;
        self.start()
    }

    /// Current snapshot. Drains pending events.
    pub fn snapshot(&mut self) -> RoundSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.state,
            self.score.score(),
            self.clock.remaining(),
            events,
            self.final_score,
        )
    }

    /// Drain pending events without building a snapshot.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RoundState::Running
    }

    pub fn score(&self) -> i64 {
        self.score.score()
    }

    pub fn remaining_secs(&self) -> f64 {
        self.clock.remaining()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Set once the round has ended.
    pub fn final_score(&self) -> Option<i64> {
        self.final_score
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Live targets ordered by id.
    pub fn targets(&self) -> Vec<TargetView> {
        systems::snapshot::build_targets(&self.world)
    }

    /// Remove a tapped target and score it. Returns None if the entity is gone.
    pub(crate) fn smack(&mut self, entity: Entity) -> Option<Target> {
        if self.state != RoundState::Running {
            return None;
        }

        let mut target = systems::cleanup::remove_target(&mut self.world, entity)?;
        target.alive = false;

        tracing::debug!(target_id = target.id, points = target.point_value, "target hit");
        self.events.push(GameEvent::Hit {
            target_id: target.id,
            points: target.point_value,
        });
        self.on_target_resolved(&target, true);
        Some(target)
    }

    /// Spawn a pre-pathed target (for tests needing a known position).
    #[cfg(test)]
    pub fn spawn_test_target(
        &mut self,
        point_value: u32,
        shape: mousesmack_core::types::HitShape,
        start: DVec2,
        end: DVec2,
        speed: f64,
    ) -> u32 {
        let id = self.next_target_id;
        systems::spawner::spawn_target_on_path(
            &mut self.world,
            &mut self.next_target_id,
            &mut self.events,
            "test",
            point_value,
            mousesmack_core::components::Hitbox(shape),
            mousesmack_core::components::Mover { start, end, speed },
        );
        id
    }

    /// Remove every live target without resolving it (for tests).
    #[cfg(test)]
    pub fn clear_test_targets(&mut self) {
        systems::cleanup::clear_targets(&mut self.world, &mut self.despawn_buffer);
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
            PlayerCommand::StartRound => {
                let _ = self.start();
            }
            PlayerCommand::Tap { x, y } => {
                resolver::resolve_tap(self, DVec2::new(x, y));
            }
            PlayerCommand::RegisterMiss => self.register_miss(),
            PlayerCommand::EndRound => self.end(),
            PlayerCommand::Restart => {
                let _ = self.restart();
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.time.advance(dt);

        // 1. Clock
        if self.clock.tick(dt) {
            self.end();
            return;
        }
        // 2. Movement
        systems::movement::run(
            &mut self.world,
            dt,
            self.config.arrival_epsilon,
            &mut self.despawn_buffer,
        );
        // 3. Despawn arrivals, spawn replacements
        let arrived = std::mem::take(&mut self.despawn_buffer);
        for &entity in &arrived {
            if let Some(mut target) = systems::cleanup::remove_target(&mut self.world, entity) {
                target.alive = false;
                tracing::debug!(target_id = target.id, "target despawned");
                self.events.push(GameEvent::TargetDespawned {
                    target_id: target.id,
                });
                self.on_target_resolved(&target, false);
            }
        }
        self.despawn_buffer = arrived;
    }

    fn spawn_next(&mut self) {
        systems::spawner::spawn_target(
            &mut self.world,
            &mut self.rng,
            &self.config,
            &mut self.next_target_id,
            &mut self.events,
        );
    }
}
