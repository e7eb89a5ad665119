//! Cleanup system: removes resolved targets from the world.

use hecs::{Entity, World};

use mousesmack_core::components::Target;

/// Despawn a target, returning its final component state.
pub fn remove_target(world: &mut World, entity: Entity) -> Option<Target> {
    let target = Target::clone(&*world.get::<&Target>(entity).ok()?);
    world.despawn(entity).ok()?;
    Some(target)
}

/// Despawn every target. Uses a pre-allocated buffer to avoid allocation.
pub fn clear_targets(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, _target) in world.query_mut::<&Target>() {
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
