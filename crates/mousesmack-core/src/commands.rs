//! Player commands sent from the host to the round controller.
//!
//! Commands are queued and processed in order at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start the round. Ignored unless the round has not started yet.
    StartRound,
    /// A tap at a world-space point.
    Tap { x: f64, y: f64 },
    /// Count a missed tap without a position (e.g. a tap outside the playfield).
    RegisterMiss,
    /// End the round immediately.
    EndRound,
    /// Discard the current round and start a fresh one ("Play Again").
    Restart,
}
