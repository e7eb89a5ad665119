//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::{HitShape, WorldPoint};

/// A smackable target (a mouse).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Round-unique id, assigned in spawn order.
    pub id: u32,
    /// Name of the archetype this target was spawned from.
    pub archetype: String,
    /// Points awarded when smacked.
    pub point_value: u32,
    /// False once the target has been hit or has arrived.
    pub alive: bool,
}

/// Current world position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub WorldPoint);

/// Straight-line path from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    pub start: WorldPoint,
    pub end: WorldPoint,
    /// World units per second.
    pub speed: f64,
}

/// Tap-test shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox(pub HitShape);
