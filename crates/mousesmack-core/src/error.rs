//! Error types.

use std::path::PathBuf;

/// Why a round could not start. The round stays where it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoundError {
    #[error("no target archetypes configured")]
    NoArchetypes,
    #[error("invalid speed range [{min}, {max}]: speeds must be finite, positive and min <= max")]
    InvalidSpeedRange { min: f64, max: f64 },
    #[error("starting time must be positive and finite, got {0}")]
    InvalidStartingTime(f64),
    #[error("time penalty must be non-negative and finite, got {0}")]
    InvalidTimePenalty(f64),
    #[error("playfield has no area")]
    DegeneratePlayfield,
    #[error("spawn margin must be non-negative and finite, got {0}")]
    InvalidSpawnMargin(f64),
    #[error("arrival epsilon must be positive and finite, got {0}")]
    InvalidArrivalEpsilon(f64),
    #[error("archetype '{0}' has an invalid hit shape")]
    InvalidHitShape(String),
}

/// Failure to load a round config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
