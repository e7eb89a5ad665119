//! Target spawning: picks an archetype, a vertical path, and a speed.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use mousesmack_core::components::{Hitbox, Mover, Position, Target};
use mousesmack_core::config::RoundConfig;
use mousesmack_core::enums::Facing;
use mousesmack_core::events::GameEvent;
use mousesmack_core::types::{Playfield, WorldPoint};

/// Spawn one target. The config must already be validated.
pub fn spawn_target(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &RoundConfig,
    next_target_id: &mut u32,
    events: &mut Vec<GameEvent>,
) -> Entity {
    let archetype = &config.archetypes[rng.gen_range(0..config.archetypes.len())];
    let (start, end) = random_vertical_path(rng, &config.playfield, config.spawn_margin);
    let speed = rng.gen_range(config.min_speed..=config.max_speed);

    spawn_target_on_path(
        world,
        next_target_id,
        events,
        &archetype.name,
        archetype.point_value,
        Hitbox(archetype.shape),
        Mover { start, end, speed },
    )
}

/// Spawn a target on an explicit path.
pub fn spawn_target_on_path(
    world: &mut World,
    next_target_id: &mut u32,
    events: &mut Vec<GameEvent>,
    archetype: &str,
    point_value: u32,
    hitbox: Hitbox,
    mover: Mover,
) -> Entity {
    let id = *next_target_id;
    *next_target_id += 1;

    let facing = facing_of(&mover);
    tracing::debug!(
        target_id = id,
        archetype,
        speed = mover.speed,
        ?facing,
        "spawning target"
    );

    let entity = world.spawn((
        Target {
            id,
            archetype: archetype.to_string(),
            point_value,
            alive: true,
        },
        Position(mover.start),
        mover,
        hitbox,
    ));

    events.push(GameEvent::TargetSpawned {
        target_id: id,
        archetype: archetype.to_string(),
        facing,
    });
    entity
}

/// Bottom-to-top or top-to-bottom at a random x, so x stays constant along the path.
pub fn random_vertical_path(
    rng: &mut ChaCha8Rng,
    playfield: &Playfield,
    margin: f64,
) -> (WorldPoint, WorldPoint) {
    let x = rng.gen_range(playfield.min.x..=playfield.max.x);
    let bottom = DVec2::new(x, playfield.min.y - margin);
    let top = DVec2::new(x, playfield.max.y + margin);

    if rng.gen_bool(0.5) {
        (bottom, top)
    } else {
        (top, bottom)
    }
}

pub fn facing_of(mover: &Mover) -> Facing {
    if mover.end.y >= mover.start.y {
        Facing::Up
    } else {
        Facing::Down
    }
}
