//! Tap resolution: one tap, one hit-or-miss outcome.
//!
//! Every input path (direct calls, queued `Tap` commands, screen taps from the
//! host) goes through [`resolve_tap`].

use serde::{Deserialize, Serialize};

use mousesmack_core::types::WorldPoint;

use crate::engine::RoundController;
use crate::systems::hit_test;

/// Reference to the target a tap smacked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRef {
    pub id: u32,
    pub archetype: String,
    pub point_value: u32,
}

/// Outcome of a tap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitResult {
    pub hit: bool,
    pub target: Option<TargetRef>,
}

impl HitResult {
    pub fn miss() -> Self {
        Self::default()
    }
}

/// Maps host screen coordinates into world space.
pub trait ScreenProjection {
    fn screen_to_world(&self, screen: WorldPoint) -> WorldPoint;
}

/// Resolves taps against a round, projecting screen points when needed.
pub struct TapResolver<P> {
    projection: P,
}

impl<P: ScreenProjection> TapResolver<P> {
    pub fn new(projection: P) -> Self {
        Self { projection }
    }

    /// Resolve a tap given in world space.
    pub fn resolve(&self, round: &mut RoundController, tap: WorldPoint) -> HitResult {
        resolve_tap(round, tap)
    }

    /// Resolve a tap given in screen space.
    pub fn resolve_screen(&self, round: &mut RoundController, screen: WorldPoint) -> HitResult {
        resolve_tap(round, self.projection.screen_to_world(screen))
    }
}

/// Test `tap` against live targets. A hit smacks the target; a miss is
/// registered with the round. Inert when the round is not running.
pub fn resolve_tap(round: &mut RoundController, tap: WorldPoint) -> HitResult {
    if !round.is_running() {
        return HitResult::miss();
    }

    let Some(entity) = hit_test::find_target_at(round.world(), tap) else {
        round.register_miss();
        return HitResult::miss();
    };

    match round.smack(entity) {
        Some(target) => HitResult {
            hit: true,
            target: Some(TargetRef {
                id: target.id,
                archetype: target.archetype,
                point_value: target.point_value,
            }),
        },
        None => HitResult::miss(),
    }
}
