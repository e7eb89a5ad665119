//! Target movement.
//!
//! Moves each live target along its path by `speed * dt`, never past the end.
//! A target within the arrival epsilon of its end has arrived.

use hecs::{Entity, World};

use mousesmack_core::components::{Mover, Position, Target};
use mousesmack_core::types::WorldPoint;

/// Result of advancing one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    pub arrived: bool,
}

/// Advance a single target along its path.
pub fn advance(position: &mut Position, mover: &Mover, dt: f64, arrival_epsilon: f64) -> Advance {
    position.0 = move_towards(position.0, mover.end, mover.speed * dt);
    Advance {
        arrived: position.0.distance(mover.end) < arrival_epsilon,
    }
}

/// Advance every live target; collects the ones that arrived into `arrived`.
pub fn run(world: &mut World, dt: f64, arrival_epsilon: f64, arrived: &mut Vec<Entity>) {
    arrived.clear();

    for (entity, (target, position, mover)) in
        world.query_mut::<(&Target, &mut Position, &Mover)>()
    {
        if !target.alive {
            continue;
        }
        if advance(position, mover, dt, arrival_epsilon).arrived {
            arrived.push(entity);
        }
    }
}

fn move_towards(current: WorldPoint, end: WorldPoint, max_step: f64) -> WorldPoint {
    let delta = end - current;
    let distance = delta.length();
    if distance <= max_step || distance == 0.0 {
        end
    } else {
        current + delta / distance * max_step
    }
}
