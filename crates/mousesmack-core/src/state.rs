//! Round state snapshot: everything the host needs to draw a frame.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{SimTime, WorldPoint};

/// Complete round state handed to the host after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub time: SimTime,
    pub state: RoundState,
    pub score: i64,
    pub remaining_secs: f64,
    /// Remaining time rounded up to whole seconds, as shown on the HUD.
    pub display_seconds: u32,
    pub targets: Vec<TargetView>,
    /// Events since the previous snapshot, oldest first.
    pub events: Vec<GameEvent>,
    /// Set once the round has ended.
    pub final_score: Option<i64>,
}

/// A live target on the playfield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub id: u32,
    pub archetype: String,
    pub position: WorldPoint,
    pub facing: Facing,
    pub point_value: u32,
}

/// Whole seconds shown for a remaining time.
pub fn display_seconds(remaining_secs: f64) -> u32 {
    remaining_secs.max(0.0).ceil() as u32
}
