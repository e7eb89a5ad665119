//! Tests for the round controller, tap resolution, systems, and audio dispatch.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use mousesmack_core::commands::PlayerCommand;
use mousesmack_core::components::{Hitbox, Mover, Position, Target};
use mousesmack_core::config::{RoundConfig, TargetArchetype};
use mousesmack_core::constants::DT;
use mousesmack_core::enums::*;
use mousesmack_core::error::RoundError;
use mousesmack_core::events::{AudioCue, GameEvent};
use mousesmack_core::types::{HitShape, Playfield};

use crate::audio::AudioDispatcher;
use crate::clock::RoundClock;
use crate::engine::RoundController;
use crate::resolver::{resolve_tap, ScreenProjection, TapResolver};
use crate::score::ScoreKeeper;
use crate::systems::{hit_test, movement, spawner};

const FAR_AWAY: DVec2 = DVec2::new(1_000.0, 1_000.0);

fn started(config: RoundConfig) -> RoundController {
    let mut round = RoundController::new(config);
    round.start().unwrap();
    round
}

/// A round with its random target removed and one parked target at `at`.
fn round_with_parked_target(
    config: RoundConfig,
    at: DVec2,
    points: u32,
) -> (RoundController, u32) {
    let mut round = started(config);
    round.clear_test_targets();
    let id = round.spawn_test_target(
        points,
        HitShape::Circle { radius: 0.5 },
        at,
        at + DVec2::new(0.0, 100.0),
        0.001,
    );
    round.take_events();
    (round, id)
}

fn count_round_ended(events: &[GameEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, GameEvent::RoundEnded { .. }))
        .count()
}

// ---- Start ----

#[test]
fn test_start_resets_round() {
    let mut round = started(RoundConfig::default());

    assert_eq!(round.state(), RoundState::Running);
    assert_eq!(round.score(), 0);
    assert_eq!(round.remaining_secs(), 60.0);
    assert_eq!(round.targets().len(), 1);
    assert_eq!(round.final_score(), None);

    let events = round.take_events();
    assert_eq!(
        events[0],
        GameEvent::RoundStarted {
            starting_time_secs: 60.0
        }
    );
    assert!(matches!(events[1], GameEvent::TargetSpawned { target_id: 0, .. }));
}

#[test]
fn test_start_while_running_is_noop() {
    let mut round = started(RoundConfig::default());
    let first = round.targets()[0].clone();
    round.tick(1.0);

    assert_eq!(round.start(), Ok(()));
    assert_eq!(round.targets().len(), 1);
    assert_eq!(round.targets()[0].id, first.id);
    assert!((round.remaining_secs() - 59.0).abs() < 1e-9);
}

#[test]
fn test_start_with_empty_archetypes_fails() {
    let mut round = RoundController::new(RoundConfig {
        archetypes: Vec::new(),
        ..Default::default()
    });

    assert_eq!(round.start(), Err(RoundError::NoArchetypes));
    assert_eq!(round.state(), RoundState::NotStarted);
    assert!(round.targets().is_empty());
    assert!(round.take_events().is_empty());
}

#[test]
fn test_start_with_bad_speed_range_fails() {
    let mut round = RoundController::new(RoundConfig {
        min_speed: 0.0,
        max_speed: 0.0,
        ..Default::default()
    });

    assert!(matches!(
        round.start(),
        Err(RoundError::InvalidSpeedRange { .. })
    ));
    assert_eq!(round.state(), RoundState::NotStarted);
}

#[test]
fn test_tick_before_start_is_noop() {
    let mut round = RoundController::new(RoundConfig::default());
    let snap = round.tick(1.0);

    assert_eq!(snap.state, RoundState::NotStarted);
    assert_eq!(snap.time.tick, 0);
    assert_eq!(snap.remaining_secs, 0.0);
    assert!(snap.targets.is_empty());
}

// ---- Clock ----

#[test]
fn test_remaining_time_monotonic_and_non_negative() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut round = started(RoundConfig {
        starting_time_secs: 20.0,
        ..Default::default()
    });

    let mut previous = round.remaining_secs();
    for _ in 0..500 {
        let dt: f64 = rng.gen_range(0.0..0.2);
        let snap = round.tick(dt);
        assert!(snap.remaining_secs >= 0.0);
        assert!(snap.remaining_secs <= previous);
        previous = snap.remaining_secs;
    }
    assert_eq!(round.state(), RoundState::Ended);
    assert_eq!(round.remaining_secs(), 0.0);
}

#[test]
fn test_round_ends_after_61_seconds_without_taps() {
    let mut round = started(RoundConfig {
        starting_time_secs: 60.0,
        min_speed: 2.0,
        max_speed: 4.0,
        ..Default::default()
    });

    let mut events = round.take_events();
    for _ in 0..(61 * 60) {
        let snap = round.tick(DT);
        events.extend(snap.events);
    }

    assert_eq!(round.state(), RoundState::Ended);
    assert_eq!(round.score(), 0);
    assert_eq!(round.final_score(), Some(0));
    assert_eq!(round.remaining_secs(), 0.0);
    assert_eq!(count_round_ended(&events), 1);
    assert!(!events.iter().any(|e| matches!(e, GameEvent::Miss { .. })));
    assert!(
        events
            .iter()
            .any(|e| matches!(e, GameEvent::TargetDespawned { .. })),
        "targets should have crossed the playfield during a minute"
    );
}

#[test]
fn test_negative_and_nan_dt_do_not_advance() {
    let mut round = started(RoundConfig::default());
    round.tick(-5.0);
    round.tick(f64::NAN);
    assert_eq!(round.remaining_secs(), 60.0);
}

#[test]
fn test_clock_reports_expiry_once() {
    let mut clock = RoundClock::new();
    clock.reset(1.0);

    assert!(!clock.tick(0.5));
    assert!(clock.tick(0.75));
    assert_eq!(clock.remaining(), 0.0);
    assert!(!clock.is_running());
    assert!(!clock.tick(1.0));
    assert!(!clock.penalize(2.0));
}

#[test]
fn test_clock_ignores_negative_penalty() {
    let mut clock = RoundClock::new();
    clock.reset(10.0);
    assert!(!clock.penalize(-3.0));
    assert_eq!(clock.remaining(), 10.0);
    assert!(!clock.penalize(2.0));
    assert_eq!(clock.remaining(), 8.0);
}

// ---- Score ----

#[test]
fn test_score_keeper_clamps_at_zero() {
    let mut score = ScoreKeeper::new(false);
    score.add(10);
    score.penalize(4);
    assert_eq!(score.score(), 6);
    score.penalize(50);
    assert_eq!(score.score(), 0);
}

#[test]
fn test_score_keeper_allows_negative() {
    let mut score = ScoreKeeper::new(true);
    score.penalize(5);
    assert_eq!(score.score(), -5);
    score.reset();
    assert_eq!(score.score(), 0);
}

// ---- Tap resolution ----

#[test]
fn test_tap_inside_target_scores_and_replaces() {
    let mut round = started(RoundConfig::default());
    let target = round.targets()[0].clone();

    let result = resolve_tap(&mut round, target.position);

    assert!(result.hit);
    let hit = result.target.unwrap();
    assert_eq!(hit.id, target.id);
    assert_eq!(hit.point_value, 10);
    assert_eq!(round.score(), 10);

    let targets = round.targets();
    assert_eq!(targets.len(), 1);
    assert_ne!(targets[0].id, target.id);

    let events = round.take_events();
    assert!(events.contains(&GameEvent::Hit {
        target_id: target.id,
        points: 10
    }));
}

#[test]
fn test_hit_awards_target_point_value() {
    let (mut round, id) = round_with_parked_target(RoundConfig::default(), DVec2::ZERO, 35);

    let result = resolve_tap(&mut round, DVec2::new(0.2, 0.2));

    assert!(result.hit);
    assert_eq!(result.target.map(|t| t.id), Some(id));
    assert_eq!(round.score(), 35);
    assert_eq!(round.targets().len(), 1);
}

#[test]
fn test_tap_miss_applies_time_penalty() {
    let mut round = started(RoundConfig::default());

    let result = resolve_tap(&mut round, FAR_AWAY);

    assert!(!result.hit);
    assert!(result.target.is_none());
    assert_eq!(round.remaining_secs(), 58.0);
    assert_eq!(round.score(), 0);
    assert_eq!(round.state(), RoundState::Running);
}

#[test]
fn test_miss_penalty_clamps_and_ends_round() {
    let mut round = started(RoundConfig {
        starting_time_secs: 1.5,
        time_penalty_on_miss_secs: 2.0,
        ..Default::default()
    });

    let result = resolve_tap(&mut round, FAR_AWAY);

    assert!(!result.hit);
    assert_eq!(round.remaining_secs(), 0.0);
    assert_eq!(round.state(), RoundState::Ended);
    assert_eq!(round.final_score(), Some(0));
    assert!(round.targets().is_empty());
}

#[test]
fn test_score_penalty_mode() {
    let config = RoundConfig {
        time_penalty_on_miss_secs: 0.0,
        score_penalty_on_miss: 5,
        ..Default::default()
    };
    let (mut round, _) = round_with_parked_target(config.clone(), DVec2::ZERO, 10);
    assert!(resolve_tap(&mut round, DVec2::ZERO).hit);

    resolve_tap(&mut round, FAR_AWAY);
    assert_eq!(round.score(), 5);
    resolve_tap(&mut round, FAR_AWAY);
    resolve_tap(&mut round, FAR_AWAY);
    assert_eq!(round.score(), 0);
    assert_eq!(round.remaining_secs(), 60.0);

    let mut negative = started(RoundConfig {
        allow_negative_score: true,
        ..config
    });
    negative.register_miss();
    assert_eq!(negative.score(), -5);
}

#[test]
fn test_time_penalty_takes_precedence_over_score_penalty() {
    let config = RoundConfig {
        time_penalty_on_miss_secs: 2.0,
        score_penalty_on_miss: 5,
        ..Default::default()
    };
    let (mut round, _) = round_with_parked_target(config, DVec2::ZERO, 10);
    resolve_tap(&mut round, DVec2::ZERO);

    round.register_miss();

    assert_eq!(round.score(), 10);
    assert_eq!(round.remaining_secs(), 58.0);
    let events = round.take_events();
    assert!(events.contains(&GameEvent::Miss {
        penalty: MissPenalty::Time(2.0)
    }));
}

#[test]
fn test_miss_without_penalty_still_signals() {
    let mut round = started(RoundConfig {
        time_penalty_on_miss_secs: 0.0,
        score_penalty_on_miss: 0,
        ..Default::default()
    });
    round.take_events();

    round.register_miss();

    assert_eq!(round.remaining_secs(), 60.0);
    assert_eq!(round.score(), 0);
    assert_eq!(
        round.take_events(),
        vec![GameEvent::Miss {
            penalty: MissPenalty::None
        }]
    );
}

#[test]
fn test_overlapping_targets_pick_smallest_id() {
    let (mut round, first) = round_with_parked_target(RoundConfig::default(), DVec2::ZERO, 10);
    let second = round.spawn_test_target(
        99,
        HitShape::Circle { radius: 2.0 },
        DVec2::ZERO,
        DVec2::new(0.0, -100.0),
        0.001,
    );
    assert!(second > first);

    let result = resolve_tap(&mut round, DVec2::new(0.1, 0.0));

    assert_eq!(result.target.map(|t| t.id), Some(first));
    assert_eq!(round.score(), 10);
    let remaining: Vec<u32> = round.targets().iter().map(|t| t.id).collect();
    assert!(remaining.contains(&second));
    assert!(!remaining.contains(&first));
}

#[test]
fn test_rect_hitbox() {
    let mut round = started(RoundConfig::default());
    round.clear_test_targets();
    round.spawn_test_target(
        10,
        HitShape::Rect {
            half_width: 0.25,
            half_height: 1.0,
        },
        DVec2::ZERO,
        DVec2::new(0.0, 100.0),
        0.001,
    );

    assert!(!resolve_tap(&mut round, DVec2::new(0.5, 0.0)).hit);
    assert!(resolve_tap(&mut round, DVec2::new(0.2, 0.9)).hit);
}

#[test]
fn test_resolve_when_not_running_has_no_side_effects() {
    let mut round = RoundController::new(RoundConfig::default());
    let result = resolve_tap(&mut round, FAR_AWAY);
    assert!(!result.hit);
    assert!(round.take_events().is_empty());
    assert_eq!(round.state(), RoundState::NotStarted);

    let mut round = started(RoundConfig::default());
    let target = round.targets()[0].clone();
    round.end();
    round.take_events();

    let result = resolve_tap(&mut round, target.position);
    assert!(!result.hit);
    assert_eq!(round.score(), 0);
    assert!(round.take_events().is_empty());
}

#[test]
fn test_tap_resolver_projects_screen_points() {
    struct Halve;
    impl ScreenProjection for Halve {
        fn screen_to_world(&self, screen: DVec2) -> DVec2 {
            screen * 0.5
        }
    }

    let (mut round, id) =
        round_with_parked_target(RoundConfig::default(), DVec2::new(3.0, 1.0), 10);
    let resolver = TapResolver::new(Halve);

    assert!(!resolver.resolve(&mut round, DVec2::new(6.0, 2.0)).hit);
    let result = resolver.resolve_screen(&mut round, DVec2::new(6.0, 2.0));
    assert_eq!(result.target.map(|t| t.id), Some(id));
}

#[test]
fn test_hit_test_skips_dead_targets() {
    let mut world = hecs::World::new();
    let target = |id, alive| Target {
        id,
        archetype: "mouse".into(),
        point_value: 10,
        alive,
    };
    world.spawn((target(0, false), Position(DVec2::ZERO), Hitbox(HitShape::default())));
    let live = world.spawn((target(1, true), Position(DVec2::ZERO), Hitbox(HitShape::default())));

    assert_eq!(hit_test::find_target_at(&world, DVec2::ZERO), Some(live));
    assert_eq!(hit_test::find_target_at(&world, FAR_AWAY), None);
}

// ---- Movement and despawn ----

#[test]
fn test_target_arrival_despawns_without_penalty() {
    let mut round = started(RoundConfig::default());
    round.clear_test_targets();
    let id = round.spawn_test_target(
        10,
        HitShape::default(),
        DVec2::ZERO,
        DVec2::new(0.0, 1.0),
        2.0,
    );
    round.take_events();

    let snap = round.tick(0.6);

    assert_eq!(snap.score, 0);
    assert!((snap.remaining_secs - 59.4).abs() < 1e-9);
    assert!(snap
        .events
        .contains(&GameEvent::TargetDespawned { target_id: id }));
    assert!(!snap.events.iter().any(|e| matches!(e, GameEvent::Miss { .. })));
    assert_eq!(snap.targets.len(), 1);
    assert_ne!(snap.targets[0].id, id);
}

#[test]
fn test_advance_moves_at_speed_without_overshoot() {
    let mover = Mover {
        start: DVec2::ZERO,
        end: DVec2::new(0.0, 10.0),
        speed: 4.0,
    };
    let mut position = Position(mover.start);

    let step = movement::advance(&mut position, &mover, 0.5, 1e-3);
    assert!(!step.arrived);
    assert!((position.0.y - 2.0).abs() < 1e-12);
    assert_eq!(position.0.x, 0.0);

    let step = movement::advance(&mut position, &mover, 10.0, 1e-3);
    assert!(step.arrived);
    assert_eq!(position.0, mover.end);
}

#[test]
fn test_advance_arrival_epsilon() {
    let mover = Mover {
        start: DVec2::ZERO,
        end: DVec2::new(0.0, 1.0),
        speed: 1.0,
    };
    let mut position = Position(DVec2::new(0.0, 0.9995));
    assert!(movement::advance(&mut position, &mover, 0.0, 1e-3).arrived);

    let mut position = Position(DVec2::new(0.0, 0.99));
    assert!(!movement::advance(&mut position, &mover, 0.0, 1e-3).arrived);
}

#[test]
fn test_snapshot_reports_facing() {
    let mut round = started(RoundConfig::default());
    round.clear_test_targets();
    round.spawn_test_target(1, HitShape::default(), DVec2::ZERO, DVec2::new(0.0, 50.0), 1.0);
    round.spawn_test_target(1, HitShape::default(), DVec2::ZERO, DVec2::new(0.0, -50.0), 1.0);

    let snap = round.tick(DT);
    assert_eq!(snap.targets[0].facing, Facing::Up);
    assert_eq!(snap.targets[1].facing, Facing::Down);
    assert!(snap.targets[0].position.y > 0.0);
    assert!(snap.targets[1].position.y < 0.0);
}

// ---- Spawn policy ----

#[test]
fn test_spawn_paths_are_vertical_crossings() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let field = Playfield::default();
    let margin = 1.0;
    let (mut up, mut down) = (0, 0);

    for _ in 0..200 {
        let (start, end) = spawner::random_vertical_path(&mut rng, &field, margin);
        assert_eq!(start.x, end.x);
        assert!(start.x >= field.min.x && start.x <= field.max.x);
        assert!(((start.y - end.y).abs() - (field.height() + 2.0 * margin)).abs() < 1e-9);
        if end.y > start.y {
            assert_eq!(start.y, field.min.y - margin);
            up += 1;
        } else {
            assert_eq!(start.y, field.max.y + margin);
            down += 1;
        }
    }
    assert!(up > 50 && down > 50, "both directions expected, got {up}/{down}");
}

#[test]
fn test_spawns_draw_from_all_archetypes_and_speed_range() {
    let mut round = started(RoundConfig {
        archetypes: vec![
            TargetArchetype {
                name: "mouse".into(),
                ..Default::default()
            },
            TargetArchetype {
                name: "rat".into(),
                point_value: 25,
                ..Default::default()
            },
        ],
        min_speed: 2.0,
        max_speed: 4.0,
        ..Default::default()
    });

    let mut seen = std::collections::HashSet::new();
    for _ in 0..100 {
        let target = round.targets()[0].clone();
        seen.insert(target.archetype.clone());
        let entity = crate::systems::hit_test::find_target_at(round.world(), target.position)
            .expect("target under its own position");
        let speed = round.world().get::<&Mover>(entity).unwrap().speed;
        assert!((2.0..=4.0).contains(&speed));
        assert!(resolve_tap(&mut round, target.position).hit);
    }

    assert!(seen.contains("mouse"));
    assert!(seen.contains("rat"));
    assert_eq!(round.targets().len(), 1);
}

// ---- End and restart ----

#[test]
fn test_end_is_one_shot() {
    let (mut round, _) = round_with_parked_target(RoundConfig::default(), DVec2::ZERO, 10);
    resolve_tap(&mut round, DVec2::ZERO);

    round.end();
    round.end();
    let snap = round.tick(1.0);

    assert_eq!(snap.state, RoundState::Ended);
    assert_eq!(snap.final_score, Some(10));
    assert_eq!(snap.remaining_secs, 0.0);
    assert!(snap.targets.is_empty());
    assert_eq!(count_round_ended(&snap.events), 1);

    round.register_miss();
    assert_eq!(round.score(), 10);
    assert!(round.take_events().is_empty());
}

#[test]
fn test_start_after_end_requires_restart() {
    let mut round = started(RoundConfig::default());
    round.end();

    assert_eq!(round.start(), Ok(()));
    assert_eq!(round.state(), RoundState::Ended);
    assert!(round.targets().is_empty());
}

#[test]
fn test_restart_after_end() {
    let (mut round, _) = round_with_parked_target(RoundConfig::default(), DVec2::ZERO, 10);
    resolve_tap(&mut round, DVec2::ZERO);
    round.end();

    round.restart().unwrap();

    assert_eq!(round.state(), RoundState::Running);
    assert_eq!(round.score(), 0);
    assert_eq!(round.remaining_secs(), 60.0);
    assert_eq!(round.final_score(), None);
    assert_eq!(round.targets().len(), 1);
    assert_eq!(round.time().tick, 0);
}

// ---- Commands ----

#[test]
fn test_commands_processed_in_order() {
    let mut round = RoundController::new(RoundConfig::default());
    round.queue_commands([
        PlayerCommand::StartRound,
        PlayerCommand::Tap {
            x: FAR_AWAY.x,
            y: FAR_AWAY.y,
        },
        PlayerCommand::EndRound,
    ]);

    let snap = round.tick(DT);

    assert_eq!(snap.state, RoundState::Ended);
    assert_eq!(snap.remaining_secs, 0.0);
    assert_eq!(snap.time.tick, 0);
    assert_eq!(snap.events.len(), 4);
    assert!(matches!(snap.events[0], GameEvent::RoundStarted { .. }));
    assert!(matches!(snap.events[1], GameEvent::TargetSpawned { .. }));
    assert!(matches!(snap.events[2], GameEvent::Miss { .. }));
    assert_eq!(snap.events[3], GameEvent::RoundEnded { final_score: 0 });
}

#[test]
fn test_restart_command() {
    let mut round = started(RoundConfig::default());
    round.end();
    round.take_events();
    round.queue_command(PlayerCommand::Restart);

    let snap = round.tick(DT);

    assert_eq!(snap.state, RoundState::Running);
    assert_eq!(snap.targets.len(), 1);
    assert!(matches!(snap.events[0], GameEvent::RoundStarted { .. }));
}

#[test]
fn test_end_and_restart_in_one_tick_keeps_game_over() {
    let (mut round, _) = round_with_parked_target(RoundConfig::default(), DVec2::ZERO, 10);
    round.queue_commands([
        PlayerCommand::Tap { x: 0.0, y: 0.0 },
        PlayerCommand::EndRound,
        PlayerCommand::Restart,
    ]);

    let snap = round.tick(DT);

    assert_eq!(snap.state, RoundState::Running);
    assert_eq!(snap.score, 0);
    assert_eq!(count_round_ended(&snap.events), 1);
    let hit = snap
        .events
        .iter()
        .position(|e| matches!(e, GameEvent::Hit { points: 10, .. }));
    let ended = snap
        .events
        .iter()
        .position(|e| *e == GameEvent::RoundEnded { final_score: 10 });
    let started = snap
        .events
        .iter()
        .position(|e| matches!(e, GameEvent::RoundStarted { .. }));
    assert!(hit.is_some());
    assert!(hit < ended);
    assert!(ended < started);
    assert!(matches!(
        snap.events.last(),
        Some(GameEvent::TargetSpawned { .. })
    ));
}

#[test]
fn test_restart_after_fatal_miss_delivers_game_over() {
    let config = RoundConfig {
        starting_time_secs: 1.0,
        time_penalty_on_miss_secs: 5.0,
        ..Default::default()
    };
    let mut round = started(config);
    round.take_events();
    round.queue_commands([PlayerCommand::RegisterMiss, PlayerCommand::Restart]);

    let events = round.tick(DT).events;

    assert!(matches!(events[0], GameEvent::Miss { .. }));
    assert_eq!(events[1], GameEvent::RoundEnded { final_score: 0 });
    assert!(matches!(events[2], GameEvent::RoundStarted { .. }));
}

// ---- Determinism ----

fn play_scripted(seed: u64) -> Vec<String> {
    let mut round = RoundController::new(RoundConfig {
        seed,
        ..Default::default()
    });
    round.queue_command(PlayerCommand::StartRound);

    let mut frames = Vec::new();
    for tick in 0..600 {
        if tick % 30 == 15 {
            if let Some(target) = round.targets().first() {
                let p = target.position;
                round.queue_command(PlayerCommand::Tap { x: p.x, y: p.y });
            }
        }
        let snap = round.tick(DT);
        frames.push(serde_json::to_string(&snap).unwrap());
    }
    frames
}

#[test]
fn test_determinism_same_seed() {
    assert_eq!(play_scripted(12345), play_scripted(12345));
}

#[test]
fn test_determinism_different_seeds() {
    assert_ne!(play_scripted(111), play_scripted(222));
}

// ---- Audio ----

#[test]
fn test_audio_cues_for_round_events() {
    let mut audio = AudioDispatcher::new();
    let mut cues: Vec<AudioCue> = Vec::new();

    audio.dispatch_all(
        &[
            GameEvent::RoundStarted {
                starting_time_secs: 60.0,
            },
            GameEvent::TargetSpawned {
                target_id: 0,
                archetype: "mouse".into(),
                facing: Facing::Up,
            },
            GameEvent::Hit {
                target_id: 0,
                points: 10,
            },
            GameEvent::Miss {
                penalty: MissPenalty::Time(2.0),
            },
            GameEvent::TargetDespawned { target_id: 1 },
            GameEvent::RoundEnded { final_score: 10 },
        ],
        &mut cues,
    );

    assert_eq!(
        cues,
        vec![
            AudioCue::PlayMusic {
                track: MusicTrack::Game
            },
            AudioCue::PlaySfx { sfx: Sfx::Hit },
            AudioCue::PlaySfx { sfx: Sfx::Miss },
        ]
    );
}

#[test]
fn test_audio_does_not_restart_playing_track() {
    let mut audio = AudioDispatcher::new();
    let mut cues: Vec<AudioCue> = Vec::new();

    audio.play_menu_music(&mut cues);
    audio.play_menu_music(&mut cues);
    audio.play_game_music(&mut cues);
    audio.play_game_music(&mut cues);

    assert_eq!(
        cues,
        vec![
            AudioCue::PlayMusic {
                track: MusicTrack::Menu
            },
            AudioCue::PlayMusic {
                track: MusicTrack::Game
            },
        ]
    );
    assert_eq!(audio.playing(), Some(MusicTrack::Game));
}

#[test]
fn test_audio_toggles() {
    let mut audio = AudioDispatcher::new();
    let mut cues: Vec<AudioCue> = Vec::new();

    audio.play_game_music(&mut cues);
    audio.toggle_music(&mut cues);
    assert!(!audio.music_on());
    assert_eq!(audio.playing(), None);

    audio.play_menu_music(&mut cues);
    audio.toggle_sfx();
    audio.play_sfx(Sfx::Hit, &mut cues);
    audio.toggle_music(&mut cues);

    assert_eq!(
        cues,
        vec![
            AudioCue::PlayMusic {
                track: MusicTrack::Game
            },
            AudioCue::StopMusic,
            AudioCue::PlayMusic {
                track: MusicTrack::Menu
            },
        ]
    );
    assert!(!audio.sfx_on());
}

#[test]
fn test_audio_follows_live_round() {
    let mut audio = AudioDispatcher::new();
    let mut cues: Vec<AudioCue> = Vec::new();
    let mut round = started(RoundConfig::default());
    let target = round.targets()[0].clone();

    resolve_tap(&mut round, target.position);
    resolve_tap(&mut round, FAR_AWAY);
    let snap = round.tick(DT);
    audio.dispatch_all(&snap.events, &mut cues);

    assert_eq!(
        cues,
        vec![
            AudioCue::PlayMusic {
                track: MusicTrack::Game
            },
            AudioCue::PlaySfx { sfx: Sfx::Hit },
            AudioCue::PlaySfx { sfx: Sfx::Miss },
        ]
    );
}
