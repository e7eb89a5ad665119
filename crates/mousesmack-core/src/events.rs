//! Events emitted by the round for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something that happened during a round. Drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The round began with a full clock.
    RoundStarted { starting_time_secs: f64 },
    /// A new target entered the playfield.
    TargetSpawned {
        target_id: u32,
        archetype: String,
        facing: Facing,
    },
    /// A tap smacked a target.
    Hit { target_id: u32, points: u32 },
    /// A tap matched no target.
    Miss { penalty: MissPenalty },
    /// A target reached the far edge without being hit.
    TargetDespawned { target_id: u32 },
    /// Game over.
    RoundEnded { final_score: i64 },
}

/// A playback instruction for the host audio system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioCue {
    PlayMusic { track: MusicTrack },
    StopMusic,
    PlaySfx { sfx: Sfx },
}
