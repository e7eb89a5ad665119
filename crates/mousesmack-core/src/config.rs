//! Round configuration: tuning, archetypes, playfield, and validation.
//!
//! Every field has a default, so a config file only needs to name what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::MissPenalty;
use crate::error::{ConfigError, RoundError};
use crate::types::{HitShape, Playfield};

/// A kind of target that can be spawned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetArchetype {
    pub name: String,
    pub point_value: u32,
    pub shape: HitShape,
}

impl Default for TargetArchetype {
    fn default() -> Self {
        Self {
            name: DEFAULT_ARCHETYPE_NAME.to_string(),
            point_value: DEFAULT_POINTS_PER_HIT,
            shape: HitShape::default(),
        }
    }
}

/// Configuration for a play session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Clock value at round start (seconds).
    pub starting_time_secs: f64,
    /// Seconds lost per missed tap. Takes precedence over the score penalty.
    pub time_penalty_on_miss_secs: f64,
    /// Points lost per missed tap, used only when the time penalty is zero.
    pub score_penalty_on_miss: u32,
    /// Whether the score penalty may take the score below zero.
    pub allow_negative_score: bool,
    pub min_speed: f64,
    pub max_speed: f64,
    /// Non-empty set of spawnable target kinds.
    pub archetypes: Vec<TargetArchetype>,
    pub playfield: Playfield,
    /// Distance outside the top/bottom edge where paths begin and end.
    pub spawn_margin: f64,
    pub arrival_epsilon: f64,
    /// Start the round as soon as the host is ready.
    pub auto_start: bool,
    /// RNG seed. Same seed and same inputs give the same round.
    pub seed: u64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            starting_time_secs: DEFAULT_STARTING_TIME_SECS,
            time_penalty_on_miss_secs: DEFAULT_TIME_PENALTY_SECS,
            score_penalty_on_miss: DEFAULT_SCORE_PENALTY,
            allow_negative_score: false,
            min_speed: DEFAULT_MIN_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            archetypes: vec![TargetArchetype::default()],
            playfield: Playfield::default(),
            spawn_margin: SPAWN_EDGE_MARGIN,
            arrival_epsilon: ARRIVAL_EPSILON,
            auto_start: true,
            seed: DEFAULT_SEED,
        }
    }
}

impl RoundConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check everything a round needs before it can start.
    pub fn validate(&self) -> Result<(), RoundError> {
        if self.archetypes.is_empty() {
            return Err(RoundError::NoArchetypes);
        }
        if let Some(bad) = self.archetypes.iter().find(|a| !a.shape.is_valid()) {
            return Err(RoundError::InvalidHitShape(bad.name.clone()));
        }

        let speeds_ok = self.min_speed.is_finite()
            && self.max_speed.is_finite()
            && self.min_speed > 0.0
            && self.min_speed <= self.max_speed;
        if !speeds_ok {
            return Err(RoundError::InvalidSpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }

        if !(self.starting_time_secs.is_finite() && self.starting_time_secs > 0.0) {
            return Err(RoundError::InvalidStartingTime(self.starting_time_secs));
        }
        if !(self.time_penalty_on_miss_secs.is_finite() && self.time_penalty_on_miss_secs >= 0.0)
        {
            return Err(RoundError::InvalidTimePenalty(self.time_penalty_on_miss_secs));
        }

        let field = &self.playfield;
        if !(field.min.is_finite() && field.max.is_finite())
            || field.width() <= 0.0
            || field.height() <= 0.0
        {
            return Err(RoundError::DegeneratePlayfield);
        }
        if !(self.spawn_margin.is_finite() && self.spawn_margin >= 0.0) {
            return Err(RoundError::InvalidSpawnMargin(self.spawn_margin));
        }
        if !(self.arrival_epsilon.is_finite() && self.arrival_epsilon > 0.0) {
            return Err(RoundError::InvalidArrivalEpsilon(self.arrival_epsilon));
        }
        Ok(())
    }

    /// The penalty a missed tap costs. Time wins if both amounts are set.
    pub fn miss_penalty(&self) -> MissPenalty {
        if self.time_penalty_on_miss_secs > 0.0 {
            MissPenalty::Time(self.time_penalty_on_miss_secs)
        } else if self.score_penalty_on_miss != 0 {
            MissPenalty::Score(self.score_penalty_on_miss)
        } else {
            MissPenalty::None
        }
    }
}
