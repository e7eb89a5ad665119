//! Enumeration types used throughout the rules engine.

use serde::{Deserialize, Serialize};

/// Round lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    /// Constructed or reset, waiting for `start`.
    #[default]
    NotStarted,
    /// Clock counting down, targets moving, taps accepted.
    Running,
    /// Clock hit zero or the round was ended. Only a restart leaves this state.
    Ended,
}

/// Which way a target is travelling. Cosmetic, for display only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    /// Bottom edge to top edge.
    #[default]
    Up,
    /// Top edge to bottom edge.
    Down,
}

/// Penalty applied to a missed tap, resolved from the configured amounts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MissPenalty {
    /// Subtract seconds from the clock.
    Time(f64),
    /// Subtract points from the score.
    Score(u32),
    /// Misses cost nothing.
    None,
}

/// Background music tracks the host can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MusicTrack {
    Menu,
    Game,
}

/// One-shot sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sfx {
    Hit,
    Miss,
}
