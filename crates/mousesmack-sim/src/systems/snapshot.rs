//! Snapshot system: queries the world and builds a complete RoundSnapshot.
//!
//! This system is read-only: it never modifies the world.

use hecs::World;

use mousesmack_core::components::{Mover, Position, Target};
use mousesmack_core::enums::RoundState;
use mousesmack_core::events::GameEvent;
use mousesmack_core::state::{display_seconds, RoundSnapshot, TargetView};
use mousesmack_core::types::SimTime;

use super::spawner::facing_of;

/// Build a RoundSnapshot from the current world and round state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    state: RoundState,
    score: i64,
    remaining_secs: f64,
    events: Vec<GameEvent>,
    final_score: Option<i64>,
) -> RoundSnapshot {
    RoundSnapshot {
        time: *time,
        state,
        score,
        remaining_secs,
        display_seconds: display_seconds(remaining_secs),
        targets: build_targets(world),
        events,
        final_score,
    }
}

/// Live targets ordered by id.
pub fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&Target, &Position, &Mover)>()
        .iter()
        .filter(|(_, (target, _, _))| target.alive)
        .map(|(_, (target, position, mover))| TargetView {
            id: target.id,
            archetype: target.archetype.clone(),
            position: position.0,
            facing: facing_of(mover),
            point_value: target.point_value,
        })
        .collect();

    targets.sort_by_key(|t| t.id);
    targets
}
